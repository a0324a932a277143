//! Recursive descent parser for FunLang.
//!
//! Tokenizes a source string with `fun_lexer` and builds a `Program` tree.
//! A parser instance can be reused across inputs; each `produce_ast` call
//! starts from a fresh token stream.

mod cursor;
mod error;
mod grammar;

pub use cursor::Cursor;
pub use error::{ParseError, ParseErrorKind};

use fun_ir::{Pos, Program, Token, TokenKind};
use tracing::debug;

/// Parser state.
pub struct Parser {
    cursor: Cursor,
}

impl Default for Parser {
    fn default() -> Self {
        Self::new()
    }
}

impl Parser {
    /// Create a parser with an empty token stream.
    pub fn new() -> Self {
        Parser {
            cursor: Cursor::new(Vec::new()),
        }
    }

    /// Tokenize and parse `source` into a program.
    ///
    /// Lexical errors surface as [`ParseError::Lex`].
    pub fn produce_ast(&mut self, source: &str) -> Result<Program, ParseError> {
        let tokens = fun_lexer::tokenize(source)?;
        self.parse_tokens(tokens)
    }

    /// Parse an already tokenized stream.
    pub fn parse_tokens(&mut self, tokens: Vec<Token>) -> Result<Program, ParseError> {
        self.cursor = Cursor::new(tokens);
        debug!(tokens = self.cursor.token_count(), "parsing program");

        let mut body = Vec::new();
        while !self.is_at_end() {
            if let Some(stmt) = self.parse_statement()? {
                body.push(stmt);
            }
        }

        debug!(statements = body.len(), "parsed program");
        Ok(Program::new(body))
    }

    // Cursor delegation.

    #[inline]
    fn current(&self) -> &Token {
        self.cursor.current()
    }

    #[inline]
    fn current_kind(&self) -> TokenKind {
        self.cursor.current_kind()
    }

    #[inline]
    fn current_pos(&self) -> Pos {
        self.cursor.current_pos()
    }

    #[inline]
    fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    #[inline]
    fn check(&self, kind: TokenKind) -> bool {
        self.cursor.check(kind)
    }

    #[inline]
    fn check_op(&self, kind: TokenKind, value: &str) -> bool {
        self.cursor.check_op(kind, value)
    }

    #[inline]
    fn advance(&mut self) -> Token {
        self.cursor.advance()
    }

    #[inline]
    fn expect(&mut self, kind: TokenKind, what: &'static str) -> Result<Token, ParseError> {
        self.cursor.expect(kind, what)
    }
}
