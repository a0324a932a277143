//! FunLang command-line interface.

use std::process::ExitCode;

use func::cli::{self, Command};
use func::commands::{lex_file, parse_file, repl, run_file};

fn main() -> ExitCode {
    func::init_tracing();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (command, options) = match cli::parse_args(&args[..]) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("error: {e}");
            eprintln!();
            eprintln!("{}", cli::usage());
            return ExitCode::from(2);
        }
    };

    match command {
        Command::Repl => {
            repl(options);
            ExitCode::SUCCESS
        }
        Command::Run(path) => run_file(&path, options),
        Command::Lex(path) => lex_file(&path, options),
        Command::Parse(path) => parse_file(&path, options),
        Command::Help => {
            println!("{}", cli::usage());
            ExitCode::SUCCESS
        }
        Command::Version => {
            println!("FunLang {}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
    }
}
