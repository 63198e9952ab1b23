//! # Vignette Parser
//!
//! Parser for the Vignette scene command language. A command string is a
//! `;`-separated list of clauses, each introduced by a directive letter:
//!
//! | directive | operands             | meaning                                |
//! |-----------|----------------------|----------------------------------------|
//! | `P`       | `x,y`                | create a point                         |
//! | `C`       | `cx,cy,r`            | create a circle                        |
//! | `T`       | `x1,y1,x2,y2,x3,y3`  | build a triangle, pending until filled |
//! | `F`       |                      | fill the pending triangle              |
//!
//! Directive letters are case-insensitive.
//!
//! ## Usage
//!
//! ```
//! # use vignette_parser::{parse, Command, ParseError, ParseMode};
//!
//! fn main() -> Result<(), ParseError> {
//!     let output = parse("P 10,20; C 50,50,25; T 0,0,100,0,50,80; F", ParseMode::Strict)?;
//!
//!     assert_eq!(output.commands().len(), 4);
//!     assert_eq!(*output.commands()[3].inner(), Command::Fill);
//!     Ok(())
//! }
//! ```

mod command;
pub mod error;
mod lexer;
mod parser;
mod span;

pub use command::{Command, Directive, ParseMode};
pub use error::{Diagnostic, ParseError};
pub use span::{Span, Spanned};

/// Commands parsed from a command string, with the warnings raised on the
/// way.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutput {
    commands: Vec<Spanned<Command>>,
    warnings: Vec<Diagnostic>,
}

impl ParseOutput {
    pub(crate) fn new(commands: Vec<Spanned<Command>>, warnings: Vec<Diagnostic>) -> Self {
        Self { commands, warnings }
    }

    /// Parsed commands in source order.
    pub fn commands(&self) -> &[Spanned<Command>] {
        &self.commands
    }

    /// Warnings reported by lenient parsing.
    pub fn warnings(&self) -> &[Diagnostic] {
        &self.warnings
    }

    /// Split into commands and warnings.
    pub fn into_parts(self) -> (Vec<Spanned<Command>>, Vec<Diagnostic>) {
        (self.commands, self.warnings)
    }
}

/// Parse a command string.
///
/// In [`ParseMode::Lenient`] this never fails: irregular clauses are skipped
/// or completed with default operands and reported as warnings. In
/// [`ParseMode::Strict`] every irregular clause is reported and the whole
/// parse fails with a [`ParseError`] carrying all diagnostics.
///
/// # Example
///
/// ```
/// # use vignette_parser::{parse, ParseMode};
///
/// let lenient = parse("X 1,2; P 5,5", ParseMode::Lenient).unwrap();
/// assert_eq!(lenient.commands().len(), 1);
/// assert_eq!(lenient.warnings().len(), 1);
///
/// let strict = parse("X 1,2; P 5,5", ParseMode::Strict);
/// assert!(strict.is_err());
/// ```
pub fn parse(source: &str, mode: ParseMode) -> Result<ParseOutput, ParseError> {
    parser::parse_commands(source, mode)
}
