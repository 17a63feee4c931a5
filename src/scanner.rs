//! Source file discovery.
//! Walks the scan root and yields the files whose name matches one of the
//! configured glob patterns and whose path contains none of the exclusion
//! keywords.

use crate::config::ScanConfig;
use crate::error::{Error, Result};
use globset::{Glob, GlobMatcher};
use log::debug;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

/// Finds source files below a root directory.
#[derive(Debug)]
pub struct PathScanner {
    root: PathBuf,
    patterns: Vec<(String, GlobMatcher)>,
    excludes: Vec<String>,
}

impl PathScanner {
    /// Compiles the patterns and creates a scanner rooted at `root`.
    ///
    /// # Errors
    /// * `Error::InvalidPattern` if a pattern is not a valid glob
    pub fn new<P: AsRef<Path>>(root: P, patterns: &[String], excludes: &[String]) -> Result<Self> {
        let patterns = patterns
            .iter()
            .map(|pattern| {
                Glob::new(pattern)
                    .map(|glob| (pattern.clone(), glob.compile_matcher()))
                    .map_err(|source| Error::InvalidPattern { pattern: pattern.clone(), source })
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { root: root.as_ref().to_path_buf(), patterns, excludes: excludes.to_vec() })
    }

    pub fn from_config(config: &ScanConfig) -> Result<Self> {
        Self::new(&config.root, &config.patterns, &config.excludes)
    }

    /// Returns the keyword that excludes `path`, if any.
    pub fn excluded_by(&self, path: &Path) -> Option<&str> {
        let path = path.to_string_lossy();
        self.excludes.iter().find(|keyword| path.contains(keyword.as_str())).map(String::as_str)
    }

    /// Returns the first pattern matching the file name of `path`.
    pub fn matching_pattern(&self, path: &Path) -> Option<&str> {
        let file_name = path.file_name()?;
        self.patterns
            .iter()
            .find(|(_, matcher)| matcher.is_match(file_name))
            .map(|(pattern, _)| pattern.as_str())
    }

    /// Walks the root depth-first, entries in file name order.
    ///
    /// Entries that cannot be read are skipped.
    pub fn scan(&self) -> impl Iterator<Item = PathBuf> + '_ {
        WalkDir::new(&self.root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(e) => {
                    debug!("Skipping unreadable entry: {e}");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter_map(move |entry| {
                let path = entry.into_path();
                if let Some(keyword) = self.excluded_by(&path) {
                    debug!("Excluding '{}' (keyword '{}')", path.display(), keyword);
                    return None;
                }
                let pattern = self.matching_pattern(&path)?;
                debug!("Found '{}' (pattern '{}')", path.display(), pattern);
                Some(path)
            })
    }
}
