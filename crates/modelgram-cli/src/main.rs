//! Modelgram CLI entry point.

use std::{process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use modelgram_cli::{Args, error_adapter::to_reportables};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!(
            "Invalid log level: {}. Using 'warn' instead.",
            args.log_level
        );
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    info!(log_level:?; "Starting Modelgram");
    debug!(args:?; "Parsed arguments");

    match modelgram_cli::run(&args) {
        Ok(share_url) => {
            info!(output_file = args.output, shared = share_url.is_some(); "Completed successfully");

            // Only the URL goes to stdout
            if let Some(url) = share_url {
                println!("{url}");
            }
        }
        Err(err) => {
            let reporter = miette::GraphicalReportHandler::new();

            // Snapshot errors render with their source excerpt
            for reportable in to_reportables(&err) {
                let mut writer = String::new();
                reporter
                    .render_report(&mut writer, &reportable)
                    .expect("Writing to String buffer is infallible");

                error!("{writer}");
            }

            process::exit(1);
        }
    }
}
