//! genproj's main application entry point.
//! Parses the command line, generates both project documents and writes them.

use genproj::{cli::get_args, error::default_error_handler, renderer::MiniJinjaRenderer, run};

/// Main application entry point.
fn main() {
    let args = get_args();

    // Logger configuration
    env_logger::Builder::new()
        .filter_level(if args.verbose {
            log::LevelFilter::Trace
        } else {
            log::LevelFilter::Off
        })
        .init();

    let project_file = args.project_file.clone();
    let filter_file = args.filter_file.clone();
    let engine = MiniJinjaRenderer::new();

    match run(args, &engine) {
        Ok(generated) => println!(
            "Generated '{}' and '{}' with {} files in {} filters.",
            project_file.display(),
            filter_file.display(),
            generated.model.files.len(),
            generated.model.filters.len()
        ),
        Err(err) => default_error_handler(err),
    }
}
