//! Project model handed to the template renderer.

use serde::Serialize;
use std::collections::BTreeSet;

/// Separator used for every path written to the generated files.
pub const MANIFEST_SEPARATOR: char = '\\';

/// A source file as it appears in the generated project.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileEntry {
    /// Path recorded in the project file.
    pub path: String,
    /// Filter the file is assigned to; empty for files directly under the root.
    pub filter: String,
}

/// Everything needed to render the project and filter files.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProjectModel {
    pub name: String,
    pub guid: String,
    /// Files in discovery order.
    pub files: Vec<FileEntry>,
    /// Every filter, including all ancestors of file filters.
    pub filters: BTreeSet<String>,
    pub property_sheets: Vec<String>,
}
