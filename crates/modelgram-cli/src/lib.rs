//! CLI logic for the Modelgram diagram tool.
//!
//! This module contains the core CLI logic: it loads the configuration,
//! applies command-line overrides, and runs a model snapshot through the
//! Modelgram pipeline. Printing is left to the binary.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::fs;

use log::{debug, info};

use modelgram::{DiagramBuilder, ModelgramError};

/// Run the Modelgram CLI application
///
/// This function processes the input snapshot through the Modelgram pipeline
/// and writes the resulting PlantUML document to the output file.
///
/// # Arguments
///
/// * `args` - Command-line arguments
///
/// # Returns
///
/// The PlantUML server URL of the document when `--share` was given.
///
/// # Errors
///
/// Returns `ModelgramError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Snapshot errors
/// - Encoding errors
pub fn run(args: &Args) -> Result<Option<String>, ModelgramError> {
    info!(
        input_path = args.input,
        output_path = args.output;
        "Processing model snapshot"
    );

    let app_config = config::load_config(args.config.as_ref())?;
    let app_config = args.apply_overrides(app_config);

    let source = fs::read_to_string(&args.input)?;

    let builder = DiagramBuilder::new(app_config);
    let models = builder.parse(&source)?;
    let document = builder.generate(&models);

    fs::write(&args.output, &document)?;

    info!(output_file = args.output; "PlantUML document exported successfully");

    if !args.share {
        return Ok(None);
    }

    let url = builder.share_url(&document)?;
    debug!(url_len = url.len(); "Share URL encoded");
    Ok(Some(url))
}
