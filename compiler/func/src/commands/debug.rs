//! Debug commands: `lex` and `parse` for inspecting the front end.

use std::process::ExitCode;

use fun_parse::ParseError;

use super::{read_file, report, stderr_is_tty};
use crate::cli::Options;
use crate::{Error, Session};

/// Tokenize a file and display the token stream.
pub fn lex_file(path: &str, options: Options) -> ExitCode {
    let Some(source) = read_file(path) else {
        return ExitCode::FAILURE;
    };

    match fun_lexer::tokenize(&source) {
        Ok(tokens) => {
            println!("Tokens for '{path}' ({} tokens):", tokens.len());
            for tok in &tokens {
                println!("  {:?} {} @ {}", tok.kind, tok, tok.pos);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            let error = Error::Parse(ParseError::Lex(e));
            report(std::io::stderr(), &error, &source, options.color, stderr_is_tty());
            ExitCode::FAILURE
        }
    }
}

/// Parse a file and display its AST, one statement per line.
pub fn parse_file(path: &str, options: Options) -> ExitCode {
    let Some(source) = read_file(path) else {
        return ExitCode::FAILURE;
    };

    match Session::new().parse(&source) {
        Ok(program) => {
            println!("Parse result for '{path}':");
            println!("  Statements: {}", program.body.len());
            for stmt in &program.body {
                println!("  {}: {stmt}", stmt.pos);
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            report(std::io::stderr(), &e, &source, options.color, stderr_is_tty());
            ExitCode::FAILURE
        }
    }
}
