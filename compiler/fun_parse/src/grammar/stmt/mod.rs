//! Statement parsing.
//!
//! ```text
//! statement   = declaration | conditional | ';' | expression [ ';' ]
//! declaration = ( 'let' | 'const' ) IDENT ( ';' | '=' expression ';' )
//! ```
//!
//! Expression statements need no separator: `1 2` is two statements.
//! Conditionals have no surface grammar yet; their keywords are rejected.

use fun_ir::{Stmt, TokenKind};
use tracing::trace;

use crate::{ParseError, Parser};

impl Parser {
    /// Parse one statement.
    ///
    /// Returns `None` for an empty statement (a lone `;`).
    pub(crate) fn parse_statement(&mut self) -> Result<Option<Stmt>, ParseError> {
        match self.current_kind() {
            TokenKind::Let | TokenKind::Const => self.parse_var_declaration().map(Some),
            TokenKind::If | TokenKind::ElseIf | TokenKind::Else => {
                Err(ParseError::unsupported_conditional(self.current()))
            }
            TokenKind::Semicolon => {
                self.advance();
                Ok(None)
            }
            _ => {
                let expr = self.parse_expression()?;
                if self.check(TokenKind::Semicolon) {
                    self.advance();
                }
                Ok(Some(Stmt::expr(expr)))
            }
        }
    }

    fn parse_var_declaration(&mut self) -> Result<Stmt, ParseError> {
        let keyword = self.advance();
        let constant = keyword.kind == TokenKind::Const;
        let name = self.expect(TokenKind::Identifier, "identifier after `let`/`const`")?;
        trace!(name = %name.value, constant, "declaration");

        if self.check(TokenKind::Semicolon) {
            self.advance();
            if constant {
                return Err(ParseError::const_without_value(name.value, name.pos));
            }
            return Ok(Stmt::declaration(name.value, false, None, keyword.pos));
        }

        if !self.check_op(TokenKind::Equals, "=") {
            return Err(ParseError::expected("`=` or `;` after identifier", self.current()));
        }
        self.advance();

        let value = self.parse_expression()?;
        self.expect(TokenKind::Semicolon, "`;` after variable declaration")?;
        Ok(Stmt::declaration(name.value, constant, Some(value), keyword.pos))
    }
}

#[cfg(test)]
mod tests;
