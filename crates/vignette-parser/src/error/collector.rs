//! Collector for accumulating diagnostics over a whole command string.
//!
//! Strict parsing keeps going after a bad clause so that every problem is
//! reported at once; lenient parsing only ever collects warnings.

use crate::error::{Diagnostic, ParseError};

/// A collector for accumulating diagnostics during parsing.
#[derive(Debug, Default)]
pub(crate) struct DiagnosticCollector {
    diagnostics: Vec<Diagnostic>,
    has_errors: bool,
}

impl DiagnosticCollector {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Emit a diagnostic to this collector.
    pub(crate) fn emit(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity().is_error() {
            self.has_errors = true;
        }
        self.diagnostics.push(diagnostic);
    }

    /// Finish collection.
    ///
    /// Returns every diagnostic as a [`ParseError`] if at least one is an
    /// error, otherwise returns the warnings.
    pub(crate) fn finish(self) -> Result<Vec<Diagnostic>, ParseError> {
        if self.has_errors {
            Err(ParseError::new(self.diagnostics))
        } else {
            Ok(self.diagnostics)
        }
    }
}
