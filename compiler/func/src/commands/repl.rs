//! The interactive read-eval-print loop.
//!
//! Every line is evaluated against the same [`Session`], so bindings
//! survive from one line to the next. Errors are reported on the error
//! stream and the loop continues.

use std::io::{self, BufRead, Write};

use tracing::debug;

use super::{report, stderr_is_tty};
use crate::cli::Options;
use crate::Session;

const HELP: &str = "\
Commands:
  exit, :quit, :q   Exit the REPL
  :help, :h         Show this help
  :ast <source>     Show the parsed AST instead of evaluating";

/// One line of REPL input, classified.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ReplCommand<'a> {
    Exit,
    Help,
    Ast(&'a str),
    Blank,
    Unknown(&'a str),
    Eval(&'a str),
}

impl<'a> ReplCommand<'a> {
    pub fn parse(line: &'a str) -> Self {
        let input = line.trim();
        match input {
            "" => ReplCommand::Blank,
            "exit" | ":quit" | ":q" => ReplCommand::Exit,
            ":help" | ":h" => ReplCommand::Help,
            ":ast" => ReplCommand::Ast(""),
            _ => {
                if let Some(source) = input.strip_prefix(":ast ") {
                    ReplCommand::Ast(source.trim_start())
                } else if input.starts_with(':') {
                    ReplCommand::Unknown(input)
                } else {
                    ReplCommand::Eval(input)
                }
            }
        }
    }
}

/// Run the REPL on stdin/stdout/stderr.
pub fn repl(options: Options) {
    let mut session = Session::new();
    let stdin = io::stdin();
    let result = run_repl(
        &mut session,
        stdin.lock(),
        &mut io::stdout(),
        &mut io::stderr(),
        options,
        stderr_is_tty(),
    );
    if let Err(e) = result {
        eprintln!("error: {e}");
    }
}

/// Drive a REPL over arbitrary streams until `exit` or end of input.
pub fn run_repl<R, W, E>(
    session: &mut Session,
    mut input: R,
    out: &mut W,
    err: &mut E,
    options: Options,
    is_tty: bool,
) -> io::Result<()>
where
    R: BufRead,
    W: Write,
    E: Write,
{
    if !options.quiet {
        writeln!(out)?;
        writeln!(out, "Welcome to FunLang REPL v{}", env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "Type 'exit' to exit the REPL, ':help' for commands")?;
        writeln!(out)?;
    }

    let mut line = String::new();
    loop {
        write!(out, "> ")?;
        out.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            writeln!(out)?;
            break;
        }

        match ReplCommand::parse(&line) {
            ReplCommand::Exit => break,
            ReplCommand::Blank => {}
            ReplCommand::Help => writeln!(out, "{HELP}")?,
            ReplCommand::Unknown(command) => {
                writeln!(err, "unknown command `{command}`; type :help for a list")?;
            }
            ReplCommand::Ast(source) => match session.parse(source) {
                Ok(program) => writeln!(out, "{program}")?,
                Err(e) => report(&mut *err, &e, source, options.color, is_tty),
            },
            ReplCommand::Eval(source) => {
                debug!(source, "repl input");
                match session.eval(source) {
                    Ok(value) => writeln!(out, "{value}")?,
                    Err(e) => report(&mut *err, &e, source, options.color, is_tty),
                }
            }
        }
    }

    writeln!(out, "Goodbye!")?;
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn classify_lines() {
        assert_eq!(ReplCommand::parse("exit\n"), ReplCommand::Exit);
        assert_eq!(ReplCommand::parse(" :q "), ReplCommand::Exit);
        assert_eq!(ReplCommand::parse(":quit"), ReplCommand::Exit);
        assert_eq!(ReplCommand::parse(":help"), ReplCommand::Help);
        assert_eq!(ReplCommand::parse("   \n"), ReplCommand::Blank);
        assert_eq!(ReplCommand::parse(":ast 1 + 2"), ReplCommand::Ast("1 + 2"));
        assert_eq!(ReplCommand::parse(":ast"), ReplCommand::Ast(""));
        assert_eq!(ReplCommand::parse(":type x"), ReplCommand::Unknown(":type x"));
        assert_eq!(ReplCommand::parse("let a = 1;\n"), ReplCommand::Eval("let a = 1;"));
    }

    #[test]
    fn exit_is_a_whole_line_command() {
        assert_eq!(ReplCommand::parse("exit = 1"), ReplCommand::Eval("exit = 1"));
    }
}
