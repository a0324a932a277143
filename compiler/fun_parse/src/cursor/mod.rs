//! Token cursor for navigating the token stream.
//!
//! Invariant: the stream is never empty and its last token is `EndOfFile`.
//! `advance` refuses to step past that token, so `current` is always valid.

use fun_ir::{Pos, Token, TokenKind};
use tracing::trace;

use crate::ParseError;

pub struct Cursor {
    tokens: Vec<Token>,
    pos: usize,
}

impl Cursor {
    /// Create a cursor over `tokens`.
    ///
    /// An `EndOfFile` token is appended if the list does not already end
    /// with one.
    pub fn new(mut tokens: Vec<Token>) -> Self {
        if tokens.last().map(|t| t.kind) != Some(TokenKind::EndOfFile) {
            let pos = tokens.last().map_or(Pos::DUMMY, |t| t.pos);
            tokens.push(Token::eof(pos));
        }
        Cursor { tokens, pos: 0 }
    }

    /// Number of tokens, including the terminal `EndOfFile`.
    #[inline]
    pub fn token_count(&self) -> usize {
        self.tokens.len()
    }

    #[inline]
    pub fn position(&self) -> usize {
        self.pos
    }

    #[inline]
    pub fn current(&self) -> &Token {
        &self.tokens[self.pos]
    }

    #[inline]
    pub fn current_kind(&self) -> TokenKind {
        self.current().kind
    }

    #[inline]
    pub fn current_pos(&self) -> Pos {
        self.current().pos
    }

    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current_kind() == TokenKind::EndOfFile
    }

    #[inline]
    pub fn check(&self, kind: TokenKind) -> bool {
        self.current_kind() == kind
    }

    /// Check kind and exact text, e.g. `Equals` + `"="` (not `"=="`).
    #[inline]
    pub fn check_op(&self, kind: TokenKind, value: &str) -> bool {
        self.current().is(kind, value)
    }

    /// Consume the current token and return it.
    ///
    /// At `EndOfFile` the cursor stays put and keeps returning it.
    pub fn advance(&mut self) -> Token {
        let token = self.tokens[self.pos].clone();
        trace!(
            pos = self.pos,
            kind = %token.kind,
            line = token.pos.line,
            column = token.pos.column,
            "advance"
        );
        if token.kind != TokenKind::EndOfFile {
            self.pos += 1;
        }
        token
    }

    /// Consume a token of `kind`, or fail with "expected `what`".
    pub fn expect(&mut self, kind: TokenKind, what: &'static str) -> Result<Token, ParseError> {
        if self.check(kind) {
            Ok(self.advance())
        } else {
            Err(ParseError::expected(what, self.current()))
        }
    }
}
