//! genproj generates Visual Studio project files from a source tree.
//! It scans a directory for source files, groups them into filters that mirror
//! the directory layout and renders a `.vcxproj` and a `.vcxproj.filters` file.

/// Turns scanned paths into the project model
pub mod builder;

/// Command-line interface module for the genproj application
pub mod cli;

/// Validated run configuration
pub mod config;

/// Error types and handling for the genproj application
pub mod error;

/// Files and filters handed to the templates
pub mod model;

/// Template rendering behind the `TemplateRenderer` trait
pub mod renderer;

/// Source file discovery
pub mod scanner;

/// Static template bodies
pub mod templates;

/// Output file writing
pub mod writer;

use crate::builder::build_model;
use crate::cli::Args;
use crate::config::ScanConfig;
use crate::error::Result;
use crate::model::ProjectModel;
use crate::renderer::{render_filters, render_project, TemplateRenderer};
use crate::scanner::PathScanner;
use crate::writer::write_output;

/// Rendered output of one generation run.
#[derive(Debug)]
pub struct GeneratedProject {
    pub model: ProjectModel,
    /// Contents of the `.vcxproj` file.
    pub project: String,
    /// Contents of the `.vcxproj.filters` file.
    pub filters: String,
}

/// Scans the configured root and renders both project documents.
///
/// Nothing is written to disk.
pub fn generate(config: &ScanConfig, renderer: &dyn TemplateRenderer) -> Result<GeneratedProject> {
    let scanner = PathScanner::from_config(config)?;
    let model = build_model(config, scanner.scan())?;
    log::debug!("Found {} files in {} filters", model.files.len(), model.filters.len());

    let project = render_project(renderer, &model)?;
    let filters = render_filters(renderer, &model)?;

    Ok(GeneratedProject { model, project, filters })
}

/// Main application logic execution.
///
/// # Flow
/// 1. Validates the configuration and resolves the root
/// 2. Scans the root and builds the project model
/// 3. Renders the project and filter files
/// 4. Writes both files, overwriting existing ones
///
/// Nothing is written unless steps 1 to 3 succeed.
pub fn run(args: Args, renderer: &dyn TemplateRenderer) -> Result<GeneratedProject> {
    let config = ScanConfig::try_from(args)?;

    log::info!("Scanning '{}'", config.root.display());
    if !config.property_sheets.is_empty() {
        log::info!("Property sheets: {}", config.property_sheets.join(", "));
    }

    let generated = generate(&config, renderer)?;

    write_output(&config.project_file, &generated.project)?;
    write_output(&config.filter_file, &generated.filters)?;

    Ok(generated)
}
