//! Error codes for the Vignette diagnostic system.
//!
//! Error codes are organized by phase:
//! - `E1xx` - Clause parsing
//! - `E2xx` - Scene building

use std::fmt;

/// Error codes for categorizing diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Clause Errors (E1xx)
    // =========================================================================
    /// Unknown directive.
    ///
    /// The first character of a clause is not one of `P`, `C`, `T` or `F`.
    E100,

    /// Missing operand.
    ///
    /// The clause ended before every number of the directive was read.
    E101,

    /// Malformed number.
    ///
    /// An operand is present but is not a finite decimal number.
    E102,

    /// Unexpected separator.
    ///
    /// Operands must be separated by commas.
    E103,

    /// Trailing input.
    ///
    /// Characters remain after the last operand of the directive.
    E104,

    // =========================================================================
    // Builder Notices (E2xx)
    // =========================================================================
    /// Fill without a pending triangle.
    ///
    /// An `F` directive appeared while no undecorated triangle was waiting.
    E200,

    /// Pending triangle displaced.
    ///
    /// A `T` directive replaced a triangle that was never filled.
    E201,
}

impl ErrorCode {
    /// Returns the code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "E100",
            ErrorCode::E101 => "E101",
            ErrorCode::E102 => "E102",
            ErrorCode::E103 => "E103",
            ErrorCode::E104 => "E104",
            ErrorCode::E200 => "E200",
            ErrorCode::E201 => "E201",
        }
    }

    /// Returns a short description of what this error code means.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E100 => "unknown directive",
            ErrorCode::E101 => "missing operand",
            ErrorCode::E102 => "malformed number",
            ErrorCode::E103 => "unexpected separator",
            ErrorCode::E104 => "trailing input",
            ErrorCode::E200 => "fill without pending triangle",
            ErrorCode::E201 => "pending triangle displaced",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_display() {
        assert_eq!(ErrorCode::E100.to_string(), "E100");
        assert_eq!(ErrorCode::E104.to_string(), "E104");
        assert_eq!(ErrorCode::E201.to_string(), "E201");
    }

    #[test]
    fn test_error_code_description() {
        assert_eq!(ErrorCode::E100.description(), "unknown directive");
        assert_eq!(ErrorCode::E102.description(), "malformed number");
        assert_eq!(ErrorCode::E200.description(), "fill without pending triangle");
    }
}
