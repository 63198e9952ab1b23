//! Export of built scenes.
//!
//! This module provides the [`Exporter`] trait for writing a
//! [`Scene`] to an output format. The text format needs no exporter: it is
//! [`Scene::draw_all`].
//!
//! # Available Backends
//!
//! - [`svg`]: SVG output via [`svg::Svg`] and [`svg::SvgExporter`]
//!
//! # Error Handling
//!
//! Export operations return [`Error`], which converts into
//! [`VignetteError::Export`] at the crate boundary.
//!
//! [`VignetteError::Export`]: crate::VignetteError::Export

/// SVG export backend.
pub mod svg;

use vignette_core::scene::Scene;

/// Abstraction for scene export backends.
pub trait Exporter {
    /// Exports every top-level shape of `scene`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Render`] if the scene cannot be converted to the
    /// target format, or [`Error::Io`] if writing the output fails.
    fn export_scene(&mut self, scene: &Scene) -> Result<(), Error>;
}

/// Errors that can occur during scene export.
#[derive(Debug)]
pub enum Error {
    /// A rendering or conversion failure described by `message`.
    Render(String),
    /// An I/O error encountered while writing output.
    Io(std::io::Error),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Render(msg) => write!(f, "Render error: {msg}"),
            Self::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Render(_) => None,
            Self::Io(err) => Some(err),
        }
    }
}
