//! Reads the operands of each clause and turns clauses into [`Command`]s.
//!
//! Operands are decimal numbers. In lenient mode any single non-whitespace
//! character separates two operands, and the first operand that cannot be
//! read makes it and every later operand of the clause take the directive
//! defaults. Strict mode requires commas, rejects trailing input and reports
//! each offending clause.

use log::{debug, info};
use winnow::{
    Parser as _,
    ascii::{digit0, digit1},
    combinator::{alt, opt},
    error::{ContextError, ErrMode},
    token::{any, one_of},
};

use crate::{
    ParseOutput,
    command::{Command, Directive, ParseMode},
    error::{Diagnostic, DiagnosticCollector, ErrorCode, ParseError},
    lexer::{self, Clause},
    span::{Span, Spanned},
};

type IResult<O> = std::result::Result<O, ErrMode<ContextError>>;

/// Parse a finite decimal number with optional sign, fraction and exponent.
///
/// A dangling exponent is not part of the number: `4e` reads as `4` and leaves
/// `e` in the input.
fn number(input: &mut &str) -> IResult<f64> {
    (
        opt(one_of(['+', '-'])),
        alt(((digit1, opt(('.', digit0))).void(), ('.', digit1).void())),
        opt((one_of(['e', 'E']), opt(one_of(['+', '-'])), digit1)),
    )
        .take()
        .try_map(str::parse::<f64>)
        .verify(|value: &f64| value.is_finite())
        .parse_next(input)
}

/// Parse any single character as an operand separator.
fn any_separator(input: &mut &str) -> IResult<char> {
    any.parse_next(input)
}

/// Parse the comma required between operands in strict mode.
fn comma(input: &mut &str) -> IResult<char> {
    ','.parse_next(input)
}

/// Why an operand could not be read.
#[derive(Debug, Clone, PartialEq)]
enum OperandError {
    /// The clause ended before the operand.
    Missing { at: usize },
    /// Text that does not start a number.
    Malformed { span: Span, text: String },
    /// A separator other than `,` (strict mode).
    Separator { span: Span, found: char },
}

/// Cursor over the operand text of a single clause.
struct ClauseReader<'src> {
    clause: Clause<'src>,
    input: &'src str,
}

impl<'src> ClauseReader<'src> {
    /// Positions the reader just after the directive letter.
    fn new(clause: Clause<'src>, directive_len: usize) -> Self {
        Self {
            clause,
            input: &clause.text[directive_len..],
        }
    }

    fn position(&self) -> usize {
        self.clause.offset + (self.clause.text.len() - self.input.len())
    }

    fn skip_whitespace(&mut self) {
        self.input = self.input.trim_start();
    }

    /// Span of the token starting at the cursor: up to the next whitespace
    /// or comma, and at least one character.
    fn token_span(&self) -> (Span, &'src str) {
        let len = self
            .input
            .char_indices()
            .skip(1)
            .find(|&(_, c)| c.is_whitespace() || c == ',')
            .map_or(self.input.len(), |(i, _)| i);
        let start = self.position();
        (Span::new(start..start + len), &self.input[..len])
    }

    /// Span of whatever is left, without trailing whitespace.
    fn rest_span(&self) -> Span {
        let start = self.position();
        Span::new(start..start + self.input.trim_end().len())
    }

    fn read_operand(&mut self, index: usize, mode: ParseMode) -> Result<f64, OperandError> {
        if index > 0 {
            self.skip_whitespace();
            let at = self.position();
            if self.input.is_empty() {
                return Err(OperandError::Missing { at });
            }

            let checkpoint = self.input;
            let separated = match mode {
                ParseMode::Lenient => any_separator(&mut self.input),
                ParseMode::Strict => comma(&mut self.input),
            };
            if separated.is_err() {
                self.input = checkpoint;
                let found = self.input.chars().next().unwrap_or_default();
                return Err(OperandError::Separator {
                    span: Span::new(at..at + found.len_utf8()),
                    found,
                });
            }
        }

        self.skip_whitespace();
        if self.input.is_empty() {
            return Err(OperandError::Missing {
                at: self.position(),
            });
        }

        let checkpoint = self.input;
        match number(&mut self.input) {
            Ok(value) => Ok(value),
            Err(_) => {
                self.input = checkpoint;
                let (span, text) = self.token_span();
                Err(OperandError::Malformed {
                    span,
                    text: text.to_string(),
                })
            }
        }
    }
}

/// Accumulates commands and diagnostics over a command string.
struct CommandParser {
    mode: ParseMode,
    diagnostics: DiagnosticCollector,
    commands: Vec<Spanned<Command>>,
}

impl CommandParser {
    fn new(mode: ParseMode) -> Self {
        Self {
            mode,
            diagnostics: DiagnosticCollector::new(),
            commands: Vec::new(),
        }
    }

    /// Creates a diagnostic whose severity follows the parse mode.
    fn diagnostic(&self, code: ErrorCode, message: impl Into<String>) -> Diagnostic {
        let diag = match self.mode {
            ParseMode::Lenient => Diagnostic::warning(message),
            ParseMode::Strict => Diagnostic::error(message),
        };
        diag.with_code(code)
    }

    fn parse_clause(&mut self, clause: Clause<'_>) {
        let Some(letter) = clause.text.chars().next() else {
            return;
        };

        let Some(directive) = Directive::from_char(letter) else {
            let span = Span::new(clause.offset..clause.offset + letter.len_utf8());
            let diag = self
                .diagnostic(ErrorCode::E100, format!("unknown directive `{letter}`"))
                .with_label(span, ErrorCode::E100.description())
                .with_secondary_label(clause.span(), "clause skipped")
                .with_help("use one of `P`, `C`, `T` or `F`");
            self.diagnostics.emit(diag);
            return;
        };

        let mut reader = ClauseReader::new(clause, letter.len_utf8());
        let mut operands = Vec::with_capacity(directive.arity());

        for index in 0..directive.arity() {
            match reader.read_operand(index, self.mode) {
                Ok(value) => operands.push(value),
                Err(err) => {
                    let diag = self.operand_diagnostic(directive, index, err, clause);
                    self.diagnostics.emit(diag);
                    if self.mode == ParseMode::Strict {
                        return;
                    }
                    break;
                }
            }
        }

        if self.mode == ParseMode::Strict {
            reader.skip_whitespace();
            if !reader.input.is_empty() {
                let diag = self
                    .diagnostic(ErrorCode::E104, "trailing input after operands")
                    .with_label(reader.rest_span(), ErrorCode::E104.description())
                    .with_secondary_label(clause.span(), "in this clause")
                    .with_help(format!("expected `{}`", directive.usage()));
                self.diagnostics.emit(diag);
                return;
            }
        }

        let command = Command::from_operands(directive, &operands);
        debug!(directive:? = directive, operands = operands.len(); "Parsed clause");
        self.commands.push(Spanned::new(command, clause.span()));
    }

    fn operand_diagnostic(
        &self,
        directive: Directive,
        index: usize,
        err: OperandError,
        clause: Clause<'_>,
    ) -> Diagnostic {
        let name = directive.operand_name(index);
        let diag = match err {
            OperandError::Missing { at } => self
                .diagnostic(
                    ErrorCode::E101,
                    format!("missing operand `{name}` for `{directive}`"),
                )
                .with_label(Span::new(at..at), "expected a number here"),
            OperandError::Malformed { span, text } => self
                .diagnostic(ErrorCode::E102, format!("malformed number `{text}`"))
                .with_label(span, format!("`{name}` is not a number")),
            OperandError::Separator { span, found } => self
                .diagnostic(
                    ErrorCode::E103,
                    format!("unexpected separator `{found}` before `{name}`"),
                )
                .with_label(span, "expected `,`"),
        };

        let help = match self.mode {
            ParseMode::Lenient => format!(
                "`{name}` and the operands after it take their defaults; expected `{}`",
                directive.usage()
            ),
            ParseMode::Strict => format!("expected `{}`", directive.usage()),
        };

        diag.with_secondary_label(clause.span(), "in this clause")
            .with_help(help)
    }

    fn finish(self) -> Result<ParseOutput, ParseError> {
        let warnings = self.diagnostics.finish()?;
        Ok(ParseOutput::new(self.commands, warnings))
    }
}

/// Parse `source` into commands according to `mode`.
pub(crate) fn parse_commands(source: &str, mode: ParseMode) -> Result<ParseOutput, ParseError> {
    let clauses = lexer::split_clauses(source);
    info!(clauses = clauses.len(), mode:? = mode; "Parsing command string");

    let mut parser = CommandParser::new(mode);
    for clause in clauses {
        parser.parse_clause(clause);
    }
    parser.finish()
}

#[cfg(test)]
mod tests {
    use float_cmp::assert_approx_eq;

    use super::*;

    fn read_number(text: &str) -> Option<(f64, &str)> {
        let mut input = text;
        number(&mut input).ok().map(|value| (value, input))
    }

    #[test]
    fn test_number_forms() {
        let cases = [
            ("10", 10.0),
            ("-2.5", -2.5),
            ("+3", 3.0),
            (".5", 0.5),
            ("7.", 7.0),
            ("1e3", 1000.0),
            ("2.5E-1", 0.25),
        ];
        for (text, expected) in cases {
            let (value, rest) = read_number(text).unwrap();
            assert_approx_eq!(f64, value, expected);
            assert!(rest.is_empty(), "`{text}` left `{rest}`");
        }
    }

    #[test]
    fn test_number_stops_at_first_foreign_char() {
        let (value, rest) = read_number("1x0").unwrap();
        assert_approx_eq!(f64, value, 1.0);
        assert_eq!(rest, "x0");

        let (value, rest) = read_number("4e").unwrap();
        assert_approx_eq!(f64, value, 4.0);
        assert_eq!(rest, "e");
    }

    #[test]
    fn test_number_rejects_non_numbers() {
        assert!(read_number("abc").is_none());
        assert!(read_number("-").is_none());
        assert!(read_number(".").is_none());
        assert!(read_number("inf").is_none());
        assert!(read_number("nan").is_none());
        assert!(read_number("1e999").is_none());
    }

    #[test]
    fn test_token_span_stops_at_comma() {
        let clause = Clause {
            text: "P abc,2",
            offset: 10,
        };
        let mut reader = ClauseReader::new(clause, 1);
        reader.skip_whitespace();

        let (span, text) = reader.token_span();
        assert_eq!(text, "abc");
        assert_eq!(span, Span::new(12..15));
    }
}
