//! Error adapter for converting VignetteError to miette diagnostics.
//!
//! This module provides the bridge between the library's standard error types
//! and miette's rich diagnostic formatting used in the CLI.
//!
//! # Multi-Error Support
//!
//! A strict-mode [`vignette_parser::ParseError`] carries one diagnostic per
//! offending clause; each one is rendered independently.

use std::fmt;

use miette::{
    Diagnostic as MietteDiagnostic, GraphicalReportHandler, LabeledSpan,
    Severity as MietteSeverity, SourceSpan,
};

use vignette::VignetteError;
use vignette_parser::{Diagnostic, Span, error::Severity};

/// Adapter for a single parser diagnostic.
pub struct DiagnosticAdapter<'a> {
    diag: &'a Diagnostic,
    /// Command source the spans point into
    src: &'a str,
}

impl<'a> DiagnosticAdapter<'a> {
    /// Create a new diagnostic adapter.
    pub fn new(diag: &'a Diagnostic, src: &'a str) -> Self {
        Self { diag, src }
    }
}

impl fmt::Debug for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagnosticAdapter")
            .field("diag", &self.diag)
            .finish()
    }
}

impl fmt::Display for DiagnosticAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.diag.message())
    }
}

impl std::error::Error for DiagnosticAdapter<'_> {}

impl MietteDiagnostic for DiagnosticAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .code()
            .map(|c| Box::new(c) as Box<dyn fmt::Display>)
    }

    fn severity(&self) -> Option<MietteSeverity> {
        Some(match self.diag.severity() {
            Severity::Error => MietteSeverity::Error,
            Severity::Warning => MietteSeverity::Warning,
        })
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        self.diag
            .help()
            .map(|h| Box::new(h) as Box<dyn fmt::Display>)
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        Some(&self.src as &dyn miette::SourceCode)
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        let labels = self.diag.labels();
        if labels.is_empty() {
            return None;
        }

        Some(Box::new(labels.iter().map(|label| {
            let span = span_to_miette(label.span());
            let message = Some(label.message().to_string());
            if label.is_primary() {
                LabeledSpan::new_primary_with_span(message, span)
            } else {
                LabeledSpan::new_with_span(message, span)
            }
        })))
    }
}

/// Adapter for [`VignetteError`] variants without source locations.
pub struct ErrorAdapter<'a>(pub &'a VignetteError);

impl fmt::Debug for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl fmt::Display for ErrorAdapter<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

impl std::error::Error for ErrorAdapter<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        self.0.source()
    }
}

impl MietteDiagnostic for ErrorAdapter<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let code = match &self.0 {
            VignetteError::Io(_) => "vignette::io",
            VignetteError::Parse { .. } => return None,
            VignetteError::Config(_) => "vignette::config",
            VignetteError::Export(_) => "vignette::export",
        };
        Some(Box::new(code))
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        let help = match &self.0 {
            VignetteError::Io(_) => "check the paths given with --file and --output",
            VignetteError::Parse { .. } => return None,
            VignetteError::Config(_) => {
                "check the TOML file passed with --config or found in ./vignette/config.toml"
            }
            VignetteError::Export(_) => {
                "colors in the [style] table must be CSS colors such as `orange` or `#ff8800`"
            }
        };
        Some(Box::new(help))
    }
}

/// A reportable error that can be rendered by miette.
#[derive(Debug)]
pub enum Reportable<'a> {
    /// A parser diagnostic with source location information.
    Diagnostic(DiagnosticAdapter<'a>),
    /// A simple error without source location.
    Error(ErrorAdapter<'a>),
}

impl fmt::Display for Reportable<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reportable::Diagnostic(d) => fmt::Display::fmt(d, f),
            Reportable::Error(e) => fmt::Display::fmt(e, f),
        }
    }
}

impl std::error::Error for Reportable<'_> {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Reportable::Diagnostic(_) => None,
            Reportable::Error(e) => e.source(),
        }
    }
}

impl MietteDiagnostic for Reportable<'_> {
    fn code<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.code(),
            Reportable::Error(e) => e.code(),
        }
    }

    fn severity(&self) -> Option<MietteSeverity> {
        match self {
            Reportable::Diagnostic(d) => d.severity(),
            Reportable::Error(e) => e.severity(),
        }
    }

    fn help<'a>(&'a self) -> Option<Box<dyn fmt::Display + 'a>> {
        match self {
            Reportable::Diagnostic(d) => d.help(),
            Reportable::Error(e) => e.help(),
        }
    }

    fn source_code(&self) -> Option<&dyn miette::SourceCode> {
        match self {
            Reportable::Diagnostic(d) => d.source_code(),
            Reportable::Error(e) => e.source_code(),
        }
    }

    fn labels(&self) -> Option<Box<dyn Iterator<Item = LabeledSpan> + '_>> {
        match self {
            Reportable::Diagnostic(d) => d.labels(),
            Reportable::Error(e) => e.labels(),
        }
    }
}

/// Render every reportable of `err` with miette's graphical handler.
///
/// Returns one rendered report per diagnostic, in source order.
pub fn render_reports(err: &VignetteError) -> Vec<String> {
    let reporter = GraphicalReportHandler::new();

    to_reportables(err)
        .iter()
        .map(|reportable| {
            let mut rendered = String::new();
            reporter
                .render_report(&mut rendered, reportable)
                .expect("Writing to String buffer is infallible");
            rendered
        })
        .collect()
}

fn span_to_miette(span: Span) -> SourceSpan {
    SourceSpan::new(span.start().into(), span.len())
}

/// Convert a [`VignetteError`] into a list of reportable errors.
///
/// [`VignetteError::Parse`] yields one [`Reportable`] per diagnostic; every
/// other variant yields a single one.
pub fn to_reportables(err: &VignetteError) -> Vec<Reportable<'_>> {
    match err {
        VignetteError::Parse {
            err: parse_err,
            src,
        } => parse_err
            .diagnostics()
            .iter()
            .map(|d| Reportable::Diagnostic(DiagnosticAdapter::new(d, src)))
            .collect(),
        _ => vec![Reportable::Error(ErrorAdapter(err))],
    }
}

#[cfg(test)]
mod tests {
    use vignette_parser::{ParseError, ParseMode, error::ErrorCode};

    use super::*;

    fn strict_error(src: &str) -> VignetteError {
        let err = vignette_parser::parse(src, ParseMode::Strict).unwrap_err();
        VignetteError::new_parse_error(err, src)
    }

    #[test]
    fn test_one_reportable_per_diagnostic() {
        let err = strict_error("Q; P 1; C 1,2,3");
        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 2);
        assert_eq!(reportables[0].to_string(), "unknown directive `Q`");
        assert_eq!(
            reportables[0].code().map(|c| c.to_string()),
            Some("E100".to_string())
        );
        assert_eq!(reportables[1].severity(), Some(MietteSeverity::Error));
    }

    #[test]
    fn test_warning_severity() {
        let diag = Diagnostic::warning("nothing to fill").with_code(ErrorCode::E200);
        let adapter = DiagnosticAdapter::new(&diag, "F");

        assert_eq!(adapter.severity(), Some(MietteSeverity::Warning));
    }

    #[test]
    fn test_non_parse_error() {
        let err = VignetteError::Config("bad file".to_string());
        let reportables = to_reportables(&err);

        assert_eq!(reportables.len(), 1);
        match &reportables[0] {
            Reportable::Error(e) => {
                assert_eq!(e.to_string(), "Configuration error: bad file");
                assert_eq!(
                    e.code().map(|c| c.to_string()),
                    Some("vignette::config".to_string())
                );
            }
            Reportable::Diagnostic(_) => panic!("Expected Error"),
        }
    }

    #[test]
    fn test_labels_keep_primary_flag() {
        let diag = Diagnostic::error("malformed number `x`")
            .with_code(ErrorCode::E102)
            .with_label(Span::new(2..3), "not a number")
            .with_secondary_label(Span::new(0..5), "in this clause");
        let err = VignetteError::new_parse_error(ParseError::from(diag), "P x,1");

        let reportables = to_reportables(&err);
        let labels: Vec<_> = reportables[0].labels().unwrap().collect();

        assert_eq!(labels.len(), 2);
        assert!(labels[0].primary());
        assert_eq!(labels[0].offset(), 2);
        assert_eq!(labels[0].len(), 1);
        assert_eq!(labels[1].label(), Some("in this clause"));
        assert!(!labels[1].primary());
    }

    #[test]
    fn test_render_reports_one_per_clause() {
        let reports = render_reports(&strict_error("P 1 2; Z"));

        assert_eq!(reports.len(), 2);
        assert!(reports[0].contains("E103"));
        assert!(reports[0].contains("P 1 2"));
        assert!(reports[1].contains("E100"));
    }

    #[test]
    fn test_export_error_suggests_css_colors() {
        let err = VignetteError::Export("invalid color `nope`".into());
        let reports = render_reports(&err);

        assert_eq!(reports.len(), 1);
        assert!(reports[0].contains("vignette::export"));
        assert!(reports[0].contains("[style]"));
    }
}
