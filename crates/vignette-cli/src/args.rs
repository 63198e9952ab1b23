//! Command-line argument definitions for the Vignette CLI.
//!
//! This module defines the [`Args`] structure parsed from the command line
//! using [`clap`]. The command string comes either inline or from a file.

use std::path::PathBuf;

use clap::{ArgGroup, Parser};

/// Command-line arguments for the Vignette scene tool
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(group(ArgGroup::new("input").required(true).args(["command", "file"])))]
pub struct Args {
    /// Inline command string, e.g. "P 10,20; C 50,50,25; T 0,0,100,0,50,80; F"
    pub command: Option<String>,

    /// Read the command string from a file
    #[arg(short, long)]
    pub file: Option<PathBuf>,

    /// Also write the scene as SVG to this path
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Path to configuration file (TOML)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Reject malformed clauses instead of applying defaults
    #[arg(long)]
    pub strict: bool,

    /// Log level (off, error, warn, info, debug, trace)
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inline_command() {
        let args = Args::try_parse_from(["vignette", "P 1,2"]).unwrap();

        assert_eq!(args.command.as_deref(), Some("P 1,2"));
        assert!(args.file.is_none());
        assert!(!args.strict);
        assert_eq!(args.log_level, "warn");
    }

    #[test]
    fn test_file_with_options() {
        let args = Args::try_parse_from([
            "vignette",
            "-f",
            "scene.vig",
            "-o",
            "out.svg",
            "--strict",
            "--log-level",
            "debug",
        ])
        .unwrap();

        assert_eq!(args.file, Some(PathBuf::from("scene.vig")));
        assert_eq!(args.output, Some(PathBuf::from("out.svg")));
        assert!(args.strict);
        assert_eq!(args.log_level, "debug");
    }

    #[test]
    fn test_input_is_required() {
        assert!(Args::try_parse_from(["vignette"]).is_err());
    }

    #[test]
    fn test_command_and_file_conflict() {
        assert!(Args::try_parse_from(["vignette", "P 1,2", "-f", "scene.vig"]).is_err());
    }
}
