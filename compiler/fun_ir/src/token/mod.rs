//! Token types produced by the lexer.
//!
//! A token is a classified lexeme: its kind, its source text and the
//! position of its first character. Tokens are immutable once produced.

use std::fmt;

use crate::Pos;

/// Text carried by the terminal `EndOfFile` token.
pub const EOF_TEXT: &str = "End of file";

/// Closed set of token classes.
///
/// Operators are grouped by role rather than by symbol: the concrete symbol
/// lives in [`Token::value`]. `==` is classified as [`TokenKind::Equals`]
/// alongside `=`, and `!=` as [`TokenKind::NotEquals`].
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TokenKind {
    // Literals
    Number,
    Identifier,
    String,

    // Operators and punctuation
    /// `+ - * / % && || > >= < <=`
    BinaryOperator,
    /// `!`
    UnaryOperator,
    /// `=` and `==`
    Equals,
    /// `!=`
    NotEquals,
    Semicolon,
    OpenParen,
    CloseParen,

    // Keywords
    Let,
    Const,
    If,
    ElseIf,
    Else,

    EndOfFile,
}

impl TokenKind {
    /// Human-readable name used in diagnostics.
    pub const fn display_name(self) -> &'static str {
        match self {
            TokenKind::Number => "number",
            TokenKind::Identifier => "identifier",
            TokenKind::String => "string",
            TokenKind::BinaryOperator => "operator",
            TokenKind::UnaryOperator => "unary operator",
            TokenKind::Equals => "`=`",
            TokenKind::NotEquals => "`!=`",
            TokenKind::Semicolon => "`;`",
            TokenKind::OpenParen => "`(`",
            TokenKind::CloseParen => "`)`",
            TokenKind::Let => "`let`",
            TokenKind::Const => "`const`",
            TokenKind::If => "`if`",
            TokenKind::ElseIf => "`else if`",
            TokenKind::Else => "`else`",
            TokenKind::EndOfFile => "end of file",
        }
    }

    /// Returns `true` for reserved words.
    pub const fn is_keyword(self) -> bool {
        matches!(
            self,
            TokenKind::Let | TokenKind::Const | TokenKind::If | TokenKind::ElseIf | TokenKind::Else
        )
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// A single lexical unit.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Token {
    /// Source text of the token (string literals without their quotes).
    pub value: String,
    pub kind: TokenKind,
    pub pos: Pos,
}

impl Token {
    /// Create a new token.
    pub fn new(value: impl Into<String>, kind: TokenKind, pos: Pos) -> Self {
        Token {
            value: value.into(),
            kind,
            pos,
        }
    }

    /// Create the terminal end-of-file token.
    pub fn eof(pos: Pos) -> Self {
        Token::new(EOF_TEXT, TokenKind::EndOfFile, pos)
    }

    #[inline]
    pub fn line(&self) -> u32 {
        self.pos.line
    }

    #[inline]
    pub fn column(&self) -> u32 {
        self.pos.column
    }

    /// Check the kind and exact text together, e.g. `BinaryOperator` + `"*"`.
    #[inline]
    pub fn is(&self, kind: TokenKind, value: &str) -> bool {
        self.kind == kind && self.value == value
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            TokenKind::EndOfFile => f.write_str(EOF_TEXT),
            TokenKind::String => write!(f, "\"{}\"", self.value),
            _ => write!(f, "`{}`", self.value),
        }
    }
}

#[cfg(test)]
mod tests;
