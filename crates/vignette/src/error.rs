//! Error types for Vignette operations.
//!
//! This module provides the main error type [`VignetteError`] which wraps
//! the error conditions of building and exporting scenes.

use std::io;

use thiserror::Error;

use vignette_parser::ParseError;

/// The main error type for Vignette operations.
///
/// # Diagnostic Variants
///
/// The `Parse` variant keeps the command source next to the diagnostics so
/// that their spans can be rendered against it.
#[derive(Debug, Error)]
pub enum VignetteError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("{err}")]
    Parse { err: ParseError, src: String },

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Export error: {0}")]
    Export(Box<dyn std::error::Error>),
}

impl From<crate::export::Error> for VignetteError {
    fn from(error: crate::export::Error) -> Self {
        Self::Export(Box::new(error))
    }
}

impl VignetteError {
    /// Create a new `Parse` error with the associated command source.
    pub fn new_parse_error(err: ParseError, src: impl Into<String>) -> Self {
        Self::Parse {
            err,
            src: src.into(),
        }
    }
}
