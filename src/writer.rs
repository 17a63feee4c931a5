//! Output file writing for the generated project documents.

use crate::error::{Error, Result};
use log::debug;
use std::path::Path;

/// Writes `content` to `dest_path`, replacing any existing file.
///
/// Missing parent directories are created. Relative paths are relative to
/// the current directory.
pub fn write_output<P: AsRef<Path>>(dest_path: P, content: &str) -> Result<()> {
    let dest_path = dest_path.as_ref();

    if let Some(parent) = dest_path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(Error::IoError)?;
    }
    debug!("Writing file: {}", dest_path.display());
    std::fs::write(dest_path, content).map_err(Error::IoError)
}
