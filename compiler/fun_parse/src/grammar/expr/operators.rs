//! Operator Matching Helpers
//!
//! Every operator except `==`, `!=`, `!` and `=` arrives as a
//! `BinaryOperator` token, so matching looks at the token text.

use fun_ir::{BinaryOp, LogicalOp, TokenKind, UnaryOp};

use crate::Parser;

impl Parser {
    fn binary_operator_text(&self) -> Option<&str> {
        let token = self.current();
        (token.kind == TokenKind::BinaryOperator).then_some(token.value.as_str())
    }

    pub(crate) fn match_assign_op(&self) -> bool {
        self.check_op(TokenKind::Equals, "=")
    }

    pub(crate) fn match_or_op(&self) -> Option<LogicalOp> {
        match self.binary_operator_text() {
            Some("||") => Some(LogicalOp::Or),
            _ => None,
        }
    }

    pub(crate) fn match_and_op(&self) -> Option<LogicalOp> {
        match self.binary_operator_text() {
            Some("&&") => Some(LogicalOp::And),
            _ => None,
        }
    }

    pub(crate) fn match_equality_op(&self) -> Option<LogicalOp> {
        match self.current_kind() {
            TokenKind::Equals if self.check_op(TokenKind::Equals, "==") => Some(LogicalOp::Eq),
            TokenKind::NotEquals => Some(LogicalOp::NotEq),
            _ => None,
        }
    }

    pub(crate) fn match_comparison_op(&self) -> Option<LogicalOp> {
        match self.binary_operator_text() {
            Some(">") => Some(LogicalOp::Gt),
            Some("<") => Some(LogicalOp::Lt),
            Some(">=") => Some(LogicalOp::GtEq),
            Some("<=") => Some(LogicalOp::LtEq),
            _ => None,
        }
    }

    pub(crate) fn match_additive_op(&self) -> Option<BinaryOp> {
        match self.binary_operator_text() {
            Some("+") => Some(BinaryOp::Add),
            Some("-") => Some(BinaryOp::Sub),
            _ => None,
        }
    }

    pub(crate) fn match_multiplicative_op(&self) -> Option<BinaryOp> {
        match self.binary_operator_text() {
            Some("*") => Some(BinaryOp::Mul),
            Some("/") => Some(BinaryOp::Div),
            Some("%") => Some(BinaryOp::Mod),
            _ => None,
        }
    }

    pub(crate) fn match_unary_op(&self) -> Option<UnaryOp> {
        match (self.current_kind(), self.current().value.as_str()) {
            (TokenKind::BinaryOperator, "-") => Some(UnaryOp::Neg),
            (TokenKind::UnaryOperator, "!") => Some(UnaryOp::Not),
            _ => None,
        }
    }
}
