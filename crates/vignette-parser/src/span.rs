//! Source spans and spanned values.

use std::ops::Range;

/// A byte range in the command source.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Span {
    start: usize,
    end: usize,
}

impl Span {
    /// Create a new span from a byte range
    pub fn new(range: Range<usize>) -> Self {
        Self {
            start: range.start,
            end: range.end.max(range.start),
        }
    }

    /// Get the start offset of the span
    pub fn start(&self) -> usize {
        self.start
    }

    /// Get the end offset of the span
    pub fn end(&self) -> usize {
        self.end
    }

    /// Get the length of the span
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

/// A value together with the source span it was parsed from.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Spanned<T> {
    value: T,
    span: Span,
}

impl<T> Spanned<T> {
    /// Create a new spanned value from a value and span information
    pub fn new(value: T, span: Span) -> Self {
        Self { value, span }
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Get a reference to the wrapped value
    pub fn inner(&self) -> &T {
        &self.value
    }

    /// Consume the wrapper and return the value
    pub fn into_inner(self) -> T {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_accessors() {
        let span = Span::new(3..8);

        assert_eq!(span.start(), 3);
        assert_eq!(span.end(), 8);
        assert_eq!(span.len(), 5);
        assert!(!span.is_empty());
        assert!(Span::default().is_empty());
    }

    #[test]
    fn test_span_clamps_reversed_range() {
        #[allow(clippy::reversed_empty_ranges)]
        let span = Span::new(7..3);

        assert_eq!(span.start(), 7);
        assert!(span.is_empty());
    }

    #[test]
    fn test_spanned_accessors() {
        let spanned = Spanned::new(21, Span::new(0..2));

        assert_eq!(*spanned.inner(), 21);
        assert_eq!(spanned.span(), Span::new(0..2));
        assert_eq!(spanned.into_inner(), 21);
    }
}
