//! Expression parsing.
//!
//! Precedence, loosest first:
//!
//! ```text
//! assignment     = logical_or [ '=' assignment ]
//! logical_or     = logical_and { '||' logical_and }
//! logical_and    = equality { '&&' equality }
//! equality       = comparative { ( '==' | '!=' ) comparative }
//! comparative    = additive { ( '>' | '<' | '>=' | '<=' ) additive }
//! additive       = multiplicative { ( '+' | '-' ) multiplicative }
//! multiplicative = unary { ( '*' | '/' | '%' ) unary }
//! unary          = ( '-' | '!' ) unary | primary
//! ```
//!
//! Binary levels are left-associative; assignment is right-associative.
//!
//! - `operators.rs`: operator matching helpers
//! - `primary.rs`: literals, identifiers, parenthesized expressions

mod operators;
mod primary;

use fun_ir::Expr;
use fun_stack::ensure_sufficient_stack;
use tracing::trace;

use crate::{ParseError, Parser};

impl Parser {
    /// Parse an expression.
    ///
    /// Uses `ensure_sufficient_stack` to prevent stack overflow
    /// on deeply nested expressions.
    pub(crate) fn parse_expression(&mut self) -> Result<Expr, ParseError> {
        ensure_sufficient_stack(|| self.parse_assignment())
    }

    /// Parse `target = value`.
    ///
    /// The target is kept as parsed; the evaluator checks that it is an
    /// identifier.
    fn parse_assignment(&mut self) -> Result<Expr, ParseError> {
        let left = self.parse_logical_or()?;

        if self.match_assign_op() {
            self.advance();
            let value = self.parse_expression()?;
            trace!(target = left.kind_name(), "assignment");
            return Ok(Expr::assignment(left, value));
        }

        Ok(left)
    }

    /// Parse `||` (lowest precedence binary).
    fn parse_logical_or(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_logical_and()?;

        while let Some(op) = self.match_or_op() {
            self.advance();
            let right = self.parse_logical_and()?;
            left = Expr::logical(op, left, right);
        }

        Ok(left)
    }

    /// Parse `&&`.
    fn parse_logical_and(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_equality()?;

        while let Some(op) = self.match_and_op() {
            self.advance();
            let right = self.parse_equality()?;
            left = Expr::logical(op, left, right);
        }

        Ok(left)
    }

    /// Parse `==` and `!=`.
    fn parse_equality(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_comparative()?;

        while let Some(op) = self.match_equality_op() {
            self.advance();
            let right = self.parse_comparative()?;
            left = Expr::logical(op, left, right);
        }

        Ok(left)
    }

    /// Parse `<`, `>`, `<=`, `>=`.
    fn parse_comparative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_additive()?;

        while let Some(op) = self.match_comparison_op() {
            self.advance();
            let right = self.parse_additive()?;
            left = Expr::logical(op, left, right);
        }

        Ok(left)
    }

    /// Parse `+` and `-`.
    fn parse_additive(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_multiplicative()?;

        while let Some(op) = self.match_additive_op() {
            self.advance();
            let right = self.parse_multiplicative()?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse `*`, `/`, `%`.
    fn parse_multiplicative(&mut self) -> Result<Expr, ParseError> {
        let mut left = self.parse_unary()?;

        while let Some(op) = self.match_multiplicative_op() {
            self.advance();
            let right = self.parse_unary()?;
            left = Expr::binary(op, left, right);
        }

        Ok(left)
    }

    /// Parse prefix `-` and `!`.
    fn parse_unary(&mut self) -> Result<Expr, ParseError> {
        if let Some(op) = self.match_unary_op() {
            let pos = self.current_pos();
            self.advance();
            let operand = ensure_sufficient_stack(|| self.parse_unary())?;
            return Ok(Expr::unary(op, operand, pos));
        }

        self.parse_primary()
    }
}

#[cfg(test)]
mod tests;
