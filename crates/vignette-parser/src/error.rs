//! Diagnostics reported while reading a command string.
//!
//! This module provides:
//! - Error codes for documentation and searchability
//! - Labeled spans pointing into the command source
//! - Severity levels (strict mode reports errors, lenient mode warnings)
//! - A collector accumulating every diagnostic of a parse
//!
//! # Example
//!
//! ```
//! # use vignette_parser::error::{Diagnostic, ErrorCode};
//! # use vignette_parser::Span;
//!
//! let diag = Diagnostic::error("unknown directive `X`")
//!     .with_code(ErrorCode::E100)
//!     .with_label(Span::new(0..1), "not a shape directive")
//!     .with_help("use one of P, C, T or F");
//!
//! assert_eq!(diag.to_string(), "error[E100]: unknown directive `X`");
//! ```

mod collector;
mod diagnostic;
mod error_code;
mod label;
mod parse_error;
mod severity;

pub(crate) use collector::DiagnosticCollector;

pub use diagnostic::Diagnostic;
pub use error_code::ErrorCode;
pub use label::Label;
pub use parse_error::ParseError;
pub use severity::Severity;
