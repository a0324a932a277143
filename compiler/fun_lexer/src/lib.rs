//! Lexer for FunLang.
//!
//! Converts source text into a `Vec<Token>` terminated by an `EndOfFile`
//! token. Tokenization is total and deterministic: it either produces the
//! complete list or fails with the first [`LexError`].
//!
//! # Recognized input
//!
//! - punctuation: `(` `)` `;`
//! - operators: `+ - * / %`, `= ==`, `&& ||`, `! !=`, `> >=`, `< <=`
//! - double-quoted strings, copied verbatim (no escape processing)
//! - numbers: digits with at most one `.`
//! - identifiers `[A-Za-z_]+`, checked against the keyword table
//! - whitespace (space, tab, newline, carriage return) is skipped
//!
//! `-` is always an operator token. Negative literals such as `-5` are
//! parsed as a unary minus applied to `5`.

mod cursor;
mod keywords;
mod lex_error;

pub use lex_error::{LexError, LexErrorKind};

use cursor::Cursor;
use fun_ir::{Pos, Token, TokenKind};

/// Tokenize `source`.
///
/// The returned list always ends with exactly one `EndOfFile` token whose
/// text is `"End of file"`.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    Lexer::new(source).run()
}

struct Lexer<'a> {
    cursor: Cursor<'a>,
    tokens: Vec<Token>,
}

#[inline]
fn is_ident_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

#[inline]
fn is_number_char(c: char) -> bool {
    c.is_ascii_digit() || c == '.'
}

#[inline]
fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

impl<'a> Lexer<'a> {
    fn new(source: &'a str) -> Self {
        Lexer {
            cursor: Cursor::new(source),
            tokens: Vec::new(),
        }
    }

    fn run(mut self) -> Result<Vec<Token>, LexError> {
        while let Some(c) = self.cursor.current() {
            let pos = self.cursor.pos();
            match c {
                c if is_whitespace(c) => {
                    self.cursor.bump();
                }
                '(' => self.single(TokenKind::OpenParen, pos),
                ')' => self.single(TokenKind::CloseParen, pos),
                ';' => self.single(TokenKind::Semicolon, pos),
                '+' | '-' | '*' | '/' | '%' => self.single(TokenKind::BinaryOperator, pos),
                '=' => self.one_or_two('=', TokenKind::Equals, TokenKind::Equals, pos),
                '!' => self.one_or_two('=', TokenKind::UnaryOperator, TokenKind::NotEquals, pos),
                '>' | '<' => {
                    self.one_or_two('=', TokenKind::BinaryOperator, TokenKind::BinaryOperator, pos);
                }
                '&' | '|' => self.doubled(c, pos)?,
                '"' => self.lex_string(pos)?,
                c if is_number_char(c) => self.lex_number(pos)?,
                c if is_ident_char(c) => self.lex_word(pos),
                c => return Err(LexError::unexpected_character(pos, c)),
            }
        }

        let eof = Token::eof(self.cursor.pos());
        self.tokens.push(eof);
        Ok(self.tokens)
    }

    fn push(&mut self, value: &str, kind: TokenKind, pos: Pos) {
        self.tokens.push(Token::new(value, kind, pos));
    }

    /// Consume one character as a token of `kind`.
    fn single(&mut self, kind: TokenKind, pos: Pos) {
        let start = self.cursor.offset();
        self.cursor.bump();
        let text = self.cursor.slice_from(start);
        self.push(text, kind, pos);
    }

    /// `x` or `x<second>`, e.g. `>` / `>=`.
    fn one_or_two(&mut self, second: char, one: TokenKind, two: TokenKind, pos: Pos) {
        let start = self.cursor.offset();
        self.cursor.bump();
        let kind = if self.cursor.current() == Some(second) {
            self.cursor.bump();
            two
        } else {
            one
        };
        let text = self.cursor.slice_from(start);
        self.push(text, kind, pos);
    }

    /// `&&` / `||`; a single `&` or `|` is not a token.
    fn doubled(&mut self, c: char, pos: Pos) -> Result<(), LexError> {
        if self.cursor.peek() != Some(c) {
            return Err(LexError::unexpected_character(pos, c));
        }
        let start = self.cursor.offset();
        self.cursor.bump();
        self.cursor.bump();
        let text = self.cursor.slice_from(start);
        self.push(text, TokenKind::BinaryOperator, pos);
        Ok(())
    }

    /// String literal; the token text excludes the quotes.
    fn lex_string(&mut self, pos: Pos) -> Result<(), LexError> {
        self.cursor.bump();
        let start = self.cursor.offset();
        self.cursor.eat_while(|c| c != '"');
        if self.cursor.is_eof() {
            return Err(LexError::unterminated_string(pos));
        }
        let text = self.cursor.slice_from(start);
        self.cursor.bump();
        self.push(text, TokenKind::String, pos);
        Ok(())
    }

    /// Digits with at most one decimal point.
    fn lex_number(&mut self, pos: Pos) -> Result<(), LexError> {
        let start = self.cursor.offset();
        let mut seen_dot = false;
        while let Some(c) = self.cursor.current() {
            if c == '.' {
                if seen_dot {
                    return Err(LexError::too_many_decimal_points(pos));
                }
                seen_dot = true;
            } else if !c.is_ascii_digit() {
                break;
            }
            self.cursor.bump();
        }
        let text = self.cursor.slice_from(start);
        if !text.bytes().any(|b| b.is_ascii_digit()) {
            return Err(LexError::missing_digits(pos, text));
        }
        self.push(text, TokenKind::Number, pos);
        Ok(())
    }

    /// Identifier or keyword.
    fn lex_word(&mut self, pos: Pos) {
        let start = self.cursor.offset();
        self.cursor.eat_while(is_ident_char);
        let word = self.cursor.slice_from(start);

        match keywords::lookup(word) {
            Some(TokenKind::Else) => {
                if self.try_fuse_else_if() {
                    self.push("else if", TokenKind::ElseIf, pos);
                } else {
                    self.push(word, TokenKind::Else, pos);
                }
            }
            Some(kind) => self.push(word, kind, pos),
            None => self.push(word, TokenKind::Identifier, pos),
        }
    }

    /// After `else`, consume whitespace + `if` when they form `else if`.
    ///
    /// Leaves the cursor untouched when the next word is anything else.
    fn try_fuse_else_if(&mut self) -> bool {
        let mut ahead = self.cursor;
        let gap_start = ahead.offset();
        ahead.eat_while(is_whitespace);
        if ahead.offset() == gap_start || !ahead.starts_with("if") {
            return false;
        }
        let word_start = ahead.offset();
        ahead.eat_while(is_ident_char);
        if ahead.slice_from(word_start) != "if" {
            return false;
        }
        self.cursor = ahead;
        true
    }
}
