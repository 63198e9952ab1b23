//! Splits a command string into clauses.
//!
//! Clauses are separated by `;`. Leading whitespace of a clause is dropped
//! and clauses that are empty afterwards are skipped.

use winnow::{
    Parser as _,
    error::{ContextError, ErrMode},
    token::take_till,
};

use crate::span::Span;

type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// One `;`-separated piece of a command string.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Clause<'src> {
    /// Clause text, starting at the directive letter.
    pub text: &'src str,
    /// Byte offset of `text` in the command string.
    pub offset: usize,
}

impl Clause<'_> {
    /// Span of the clause with trailing whitespace removed.
    pub fn span(&self) -> Span {
        Span::new(self.offset..self.offset + self.text.trim_end().len())
    }
}

fn clause_body<'src>(input: &mut &'src str) -> IResult<&'src str> {
    take_till(0.., ';').parse_next(input)
}

fn clause_separator(input: &mut &str) -> IResult<char> {
    ';'.parse_next(input)
}

/// Split `source` into its non-empty clauses, in order.
pub(crate) fn split_clauses(source: &str) -> Vec<Clause<'_>> {
    let mut input = source;
    let mut clauses = Vec::new();

    loop {
        let start = source.len() - input.len();
        let Ok(body) = clause_body(&mut input) else {
            break;
        };

        let text = body.trim_start();
        if !text.is_empty() {
            clauses.push(Clause {
                text,
                offset: start + (body.len() - text.len()),
            });
        }

        if clause_separator(&mut input).is_err() {
            break;
        }
    }

    clauses
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(source: &str) -> Vec<&str> {
        split_clauses(source).iter().map(|c| c.text).collect()
    }

    #[test]
    fn test_split_simple() {
        assert_eq!(
            texts("P 10,20; C 50,50,25; F"),
            vec!["P 10,20", "C 50,50,25", "F"]
        );
    }

    #[test]
    fn test_empty_clauses_are_skipped() {
        assert!(texts("").is_empty());
        assert!(texts(";;  ; \t").is_empty());
        assert_eq!(texts(";P 1,2;;"), vec!["P 1,2"]);
    }

    #[test]
    fn test_offsets_point_at_directive() {
        let source = "P 1,2;   C 3,4,5 ";
        let clauses = split_clauses(source);

        assert_eq!(clauses[0].offset, 0);
        assert_eq!(clauses[1].offset, 9);
        assert_eq!(&source[clauses[1].offset..][..1], "C");
        assert_eq!(clauses[1].span(), Span::new(9..16));
    }

    #[test]
    fn test_unicode_whitespace() {
        let source = "\u{3000}P 1,2";
        let clauses = split_clauses(source);

        assert_eq!(clauses.len(), 1);
        assert_eq!(&source[clauses[0].offset..], "P 1,2");
    }
}
