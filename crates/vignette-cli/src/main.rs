//! Vignette CLI entry point.

use std::{io, process, str::FromStr};

use clap::Parser;
use log::{LevelFilter, debug, error, info};

use vignette_cli::{Args, error_adapter::render_reports};

fn main() {
    miette::set_panic_hook();

    let args = Args::parse();

    let log_level = LevelFilter::from_str(&args.log_level).unwrap_or_else(|_| {
        eprintln!("Invalid log level `{}`, falling back to `warn`", args.log_level);
        LevelFilter::Warn
    });

    env_logger::Builder::from_env(env_logger::Env::default())
        .filter_level(log_level)
        .init();

    debug!(args:?; "Parsed arguments");

    let mut stdout = io::stdout().lock();
    match vignette_cli::run(&args, &mut stdout) {
        Ok(()) => info!(strict = args.strict; "Scene written"),
        Err(err) => {
            let reports = render_reports(&err);
            for report in &reports {
                error!("{report}");
            }
            info!(reports = reports.len(); "Scene not built");
            process::exit(1);
        }
    }
}
