//! Run configuration for genproj.
//! Turns the parsed command-line values into a validated [`ScanConfig`].

use crate::builder::normalize_prefix;
use crate::cli::Args;
use crate::error::{Error, Result};
use log::debug;
use std::path::{Path, PathBuf};

/// Immutable configuration for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    /// Absolute scan root.
    pub root: PathBuf,
    /// Glob patterns matched against file names, in order.
    pub patterns: Vec<String>,
    /// Substrings that exclude any path containing them.
    pub excludes: Vec<String>,
    /// Replacement for the root in display paths.
    pub map_root: Option<String>,
    pub name: String,
    pub guid: String,
    pub property_sheets: Vec<String>,
    pub project_file: PathBuf,
    pub filter_file: PathBuf,
}

/// Splits a comma-separated option value.
///
/// Items are trimmed and empty items are dropped, so an empty value
/// yields an empty list.
pub fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

/// Resolves `root` to an absolute directory path.
///
/// # Errors
/// * `Error::RootNotFound` if the path does not exist
/// * `Error::RootNotADirectory` if it exists but is not a directory
pub fn resolve_root<P: AsRef<Path>>(root: P) -> Result<PathBuf> {
    let root = root.as_ref();
    if !root.exists() {
        return Err(Error::RootNotFound { root: root.display().to_string() });
    }
    if !root.is_dir() {
        return Err(Error::RootNotADirectory { root: root.display().to_string() });
    }
    let resolved = std::fs::canonicalize(root)?;
    debug!("Resolved root '{}' to '{}'", root.display(), resolved.display());
    Ok(resolved)
}

impl TryFrom<Args> for ScanConfig {
    type Error = Error;

    fn try_from(args: Args) -> Result<Self> {
        let root = resolve_root(&args.root)?;
        let patterns = split_list(&args.patterns);
        if patterns.is_empty() {
            return Err(Error::ConfigError("at least one file pattern is required".into()));
        }

        // A prefix made only of separators would root every path; treat it as unset.
        let map_root = Some(normalize_prefix(args.map_root.trim())).filter(|m| !m.is_empty());

        Ok(Self {
            root,
            patterns,
            excludes: split_list(&args.exclude),
            map_root,
            name: args.name,
            guid: args.guid,
            property_sheets: split_list(&args.property_sheets),
            project_file: args.project_file,
            filter_file: args.filter_file,
        })
    }
}
