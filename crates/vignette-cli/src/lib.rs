//! CLI logic for the Vignette scene tool.
//!
//! This module contains the core CLI logic: read a command string, build the
//! scene, print its textual description and optionally export SVG.

pub mod error_adapter;

mod args;
mod config;

pub use args::Args;

use std::{fs, io};

use log::info;

use vignette::{ParseMode, SceneBuilder, VignetteError, scene::Scene};

/// Run the Vignette CLI application
///
/// Builds the scene described by the inline command or the input file,
/// writes its textual description to `out` and, when an output path is
/// given, writes the scene as SVG.
///
/// # Errors
///
/// Returns `VignetteError` for:
/// - File I/O errors
/// - Configuration loading errors
/// - Parse errors in strict mode
/// - Rendering errors
pub fn run(args: &Args, out: &mut dyn io::Write) -> Result<(), VignetteError> {
    let mut app_config = config::load_config(args.config.as_ref())?;
    if args.strict {
        app_config = app_config.with_mode(ParseMode::Strict);
    }

    let source = match (&args.command, &args.file) {
        (Some(command), _) => command.clone(),
        (None, Some(path)) => {
            info!(input_path = path.display().to_string(); "Reading command file");
            fs::read_to_string(path)?
        }
        (None, None) => String::new(),
    };

    let builder = SceneBuilder::new(app_config);
    let mut scene = Scene::default();
    builder.build(&mut scene, &source)?;

    out.write_all(builder.render_text(&scene).as_bytes())?;

    if let Some(output) = &args.output {
        let svg = builder.render_svg(&scene)?;
        fs::write(output, svg)?;
        info!(output_file = output.display().to_string(); "SVG exported successfully");
    }

    Ok(())
}
