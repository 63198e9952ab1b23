//! Labeled source spans for diagnostic messages.

use crate::span::Span;

/// A message attached to a span of the command source.
///
/// A diagnostic normally has one primary label marking the offending text
/// (a directive letter, an operand) and optionally secondary labels giving
/// context, such as the whole clause.
///
/// ```text
/// error[E102]: malformed number `1x0`
///  |
///  | P 1x0,20; C 5,5,1
///  |   ^^^ not a number
///  | -------- in this clause
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Label {
    span: Span,
    message: String,
    is_primary: bool,
}

impl Label {
    /// Create a new primary label.
    pub fn primary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: true,
        }
    }

    /// Create a new secondary label.
    pub fn secondary(span: Span, message: impl Into<String>) -> Self {
        Self {
            span,
            message: message.into(),
            is_primary: false,
        }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn is_primary(&self) -> bool {
        self.is_primary
    }

    pub fn is_secondary(&self) -> bool {
        !self.is_primary
    }
}
