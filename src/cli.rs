//! Command-line interface implementation for genproj.
//! Provides argument parsing and help text formatting using clap.

use clap::Parser;
use std::path::PathBuf;

/// Default inclusion patterns: header files, C++ sources and C sources.
pub const DEFAULT_PATTERNS: &str = "*.h,*.cpp,*.c";

/// Command-line arguments structure for genproj.
#[derive(Parser, Debug)]
#[command(author, version, about = "genproj: generate Visual Studio project files from a source tree", long_about = None)]
pub struct Args {
    /// Root directory to scan for source files
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub root: PathBuf,

    /// Project name, used as the root namespace
    #[arg(long, default_value = "project")]
    pub name: String,

    /// Project GUID, written verbatim
    #[arg(long, default_value = "{00000000-0000-0000-0000-000000000000}")]
    pub guid: String,

    /// Comma-separated keywords; files whose path contains any of them are skipped
    #[arg(long, value_name = "KEYWORDS", default_value = "")]
    pub exclude: String,

    /// Path of the generated project file
    #[arg(long, value_name = "PATH", default_value = "project.vcxproj")]
    pub project_file: PathBuf,

    /// Path of the generated filter file
    #[arg(long, value_name = "PATH", default_value = "project.vcxproj.filters")]
    pub filter_file: PathBuf,

    /// Prefix that replaces the root in the paths written to the project
    #[arg(long, value_name = "PREFIX", default_value = "")]
    pub map_root: String,

    /// Comma-separated property sheets to import
    #[arg(short = 'p', long, value_name = "SHEETS", default_value = "")]
    pub property_sheets: String,

    /// Comma-separated glob patterns matched against file names
    #[arg(long, default_value = DEFAULT_PATTERNS)]
    pub patterns: String,

    /// Enable verbose logging output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Parses command line arguments and returns the Args structure.
///
/// # Exits
/// * With clap's default error handling on invalid arguments
pub fn get_args() -> Args {
    Args::parse()
}
