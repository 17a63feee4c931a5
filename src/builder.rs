//! Turns scanned paths into a [`ProjectModel`].
//!
//! Each path is made relative to the scan root, optionally re-rooted under the
//! configured prefix, and converted to backslash separators. The directory part
//! becomes the file's filter, and the filter plus all of its ancestors are
//! recorded so nested filters render correctly.

use crate::config::ScanConfig;
use crate::error::{Error, Result};
use crate::model::{FileEntry, ProjectModel, MANIFEST_SEPARATOR};
use log::debug;
use std::collections::BTreeSet;
use std::path::Path;

/// Converts a root-relative path to a string using the manifest separator.
fn to_manifest_path(relative: &Path) -> String {
    let separator = MANIFEST_SEPARATOR.to_string();
    relative
        .components()
        .map(|component| component.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join(separator.as_str())
}

/// Returns everything before the last separator, or "" if there is none.
pub fn parent_key(path: &str) -> &str {
    path.rsplit_once(MANIFEST_SEPARATOR).map(|(parent, _)| parent).unwrap_or("")
}

/// Normalizes a remap prefix to manifest separators without a trailing one.
pub fn normalize_prefix(prefix: &str) -> String {
    prefix
        .replace('/', &MANIFEST_SEPARATOR.to_string())
        .trim_end_matches(MANIFEST_SEPARATOR)
        .to_string()
}

/// Computes the project entry for one discovered file.
///
/// # Errors
/// * `Error::PathOutsideRoot` if `path` does not start with `root`
pub fn file_entry(root: &Path, map_root: Option<&str>, path: &Path) -> Result<FileEntry> {
    let relative = path.strip_prefix(root).map_err(|_| Error::PathOutsideRoot {
        path: path.display().to_string(),
        root: root.display().to_string(),
    })?;
    let relative = to_manifest_path(relative);

    let prefix = map_root.map(normalize_prefix).filter(|prefix| !prefix.is_empty());
    let path = match prefix {
        Some(prefix) => format!("{prefix}{MANIFEST_SEPARATOR}{relative}"),
        None => relative,
    };
    let filter = parent_key(&path).to_string();

    Ok(FileEntry { path, filter })
}

/// Accumulates files and filters for a single generation run.
#[derive(Debug)]
pub struct ProjectModelBuilder<'a> {
    config: &'a ScanConfig,
    files: Vec<FileEntry>,
    filters: BTreeSet<String>,
}

impl<'a> ProjectModelBuilder<'a> {
    pub fn new(config: &'a ScanConfig) -> Self {
        Self { config, files: Vec::new(), filters: BTreeSet::new() }
    }

    /// Adds a discovered file to the model.
    ///
    /// Files are kept in the order they are added, duplicates included.
    pub fn add_path<P: AsRef<Path>>(&mut self, path: P) -> Result<()> {
        let entry = file_entry(&self.config.root, self.config.map_root.as_deref(), path.as_ref())?;
        debug!("Adding '{}' to filter '{}'", entry.path, entry.filter);
        self.insert_filter(&entry.filter);
        self.files.push(entry);
        Ok(())
    }

    /// Records `filter` and each of its ancestors.
    fn insert_filter(&mut self, filter: &str) {
        let mut key = filter;
        // A key already present implies all of its ancestors are too.
        while !key.is_empty() && self.filters.insert(key.to_string()) {
            key = parent_key(key);
        }
    }

    pub fn build(self) -> ProjectModel {
        ProjectModel {
            name: self.config.name.clone(),
            guid: self.config.guid.clone(),
            files: self.files,
            filters: self.filters,
            property_sheets: self.config.property_sheets.clone(),
        }
    }
}

/// Builds the project model from the scanned `paths`.
pub fn build_model<I, P>(config: &ScanConfig, paths: I) -> Result<ProjectModel>
where
    I: IntoIterator<Item = P>,
    P: AsRef<Path>,
{
    let mut builder = ProjectModelBuilder::new(config);
    for path in paths {
        builder.add_path(path)?;
    }
    Ok(builder.build())
}
