//! Primary Expression Parsing
//!
//! Identifiers, numeric and string literals, and parenthesized expressions.

use fun_ir::{Expr, TokenKind};
use tracing::{debug, trace};

use crate::{ParseError, Parser};

impl Parser {
    pub(crate) fn parse_primary(&mut self) -> Result<Expr, ParseError> {
        debug!(
            kind = %self.current_kind(),
            pos = %self.current_pos(),
            "parse_primary"
        );

        match self.current_kind() {
            TokenKind::Identifier => {
                let token = self.advance();
                Ok(Expr::identifier(token.value, token.pos))
            }
            TokenKind::Number => {
                let token = self.advance();
                let value = token
                    .value
                    .parse::<f64>()
                    .map_err(|_| ParseError::invalid_number(&token))?;
                Ok(Expr::number(value, token.pos))
            }
            TokenKind::String => {
                let token = self.advance();
                Ok(Expr::string(token.value, token.pos))
            }
            TokenKind::OpenParen => {
                self.advance();
                trace!("parse_primary -> Group");
                let inner = self.parse_expression()?;
                self.expect(TokenKind::CloseParen, "`)` to close `(`")?;
                Ok(inner)
            }
            TokenKind::If | TokenKind::ElseIf | TokenKind::Else => {
                Err(ParseError::unsupported_conditional(self.current()))
            }
            _ => Err(ParseError::unexpected_token(self.current())),
        }
    }
}
