//! Error codes for all diagnostics.
//!
//! Each code is a unique identifier (e.g. `E1001`) whose first digit names
//! the phase.

use std::fmt;

/// Error codes for all diagnostics.
///
/// Format: E#### where first digit indicates phase:
/// - E0xxx: Lexer errors
/// - E1xxx: Parser errors
/// - E6xxx: Runtime / eval errors
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCode {
    // Lexer Errors (E0xxx)
    /// Unterminated string literal
    E0001,
    /// Invalid character in source
    E0002,
    /// Invalid number literal
    E0003,

    // Parser Errors (E1xxx)
    /// Unexpected token
    E1001,
    /// Missing expected token
    E1002,
    /// Constant declared without a value
    E1003,
    /// Conditional statements are not supported
    E1004,
    /// Number token whose text is not a well-formed decimal literal
    E1005,

    // Runtime Errors (E6xxx)
    /// Division by zero
    E6001,
    /// Operator not supported for operand types
    E6010,
    /// Invalid assignment target
    E6011,
    /// Undefined variable
    E6020,
    /// Duplicate declaration in one scope
    E6021,
    /// Assignment to a reserved name
    E6022,
    /// Assignment to a constant
    E6027,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            // Lexer
            ErrorCode::E0001 => "E0001",
            ErrorCode::E0002 => "E0002",
            ErrorCode::E0003 => "E0003",
            // Parser
            ErrorCode::E1001 => "E1001",
            ErrorCode::E1002 => "E1002",
            ErrorCode::E1003 => "E1003",
            ErrorCode::E1004 => "E1004",
            ErrorCode::E1005 => "E1005",
            // Runtime
            ErrorCode::E6001 => "E6001",
            ErrorCode::E6010 => "E6010",
            ErrorCode::E6011 => "E6011",
            ErrorCode::E6020 => "E6020",
            ErrorCode::E6021 => "E6021",
            ErrorCode::E6022 => "E6022",
            ErrorCode::E6027 => "E6027",
        }
    }

    /// One-line summary, as in the variant docs.
    pub fn description(&self) -> &'static str {
        match self {
            ErrorCode::E0001 => "unterminated string literal",
            ErrorCode::E0002 => "invalid character in source",
            ErrorCode::E0003 => "invalid number literal",
            ErrorCode::E1001 => "unexpected token",
            ErrorCode::E1002 => "missing expected token",
            ErrorCode::E1003 => "constant declared without a value",
            ErrorCode::E1004 => "conditional statements are not supported",
            ErrorCode::E1005 => "malformed number literal",
            ErrorCode::E6001 => "division by zero",
            ErrorCode::E6010 => "operator not supported for operand types",
            ErrorCode::E6011 => "invalid assignment target",
            ErrorCode::E6020 => "undefined variable",
            ErrorCode::E6021 => "duplicate declaration",
            ErrorCode::E6022 => "assignment to a reserved name",
            ErrorCode::E6027 => "assignment to a constant",
        }
    }

    pub fn is_lexer_error(&self) -> bool {
        matches!(self, ErrorCode::E0001 | ErrorCode::E0002 | ErrorCode::E0003)
    }

    pub fn is_parser_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E1001
                | ErrorCode::E1002
                | ErrorCode::E1003
                | ErrorCode::E1004
                | ErrorCode::E1005
        )
    }

    pub fn is_eval_error(&self) -> bool {
        matches!(
            self,
            ErrorCode::E6001
                | ErrorCode::E6010
                | ErrorCode::E6011
                | ErrorCode::E6020
                | ErrorCode::E6021
                | ErrorCode::E6022
                | ErrorCode::E6027
        )
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
