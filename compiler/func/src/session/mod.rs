//! Interpreter session.

use fun_eval::{evaluate, Environment, Value};
use fun_ir::Program;
use fun_parse::Parser;
use tracing::{debug, warn};

use crate::Error;

/// Global constants every session starts with.
pub const GLOBALS: [&str; 6] = ["pi", "e", "version", "true", "false", "null"];

fn global_value(name: &str) -> Value {
    match name {
        "pi" => Value::number(std::f64::consts::PI),
        "e" => Value::number(std::f64::consts::E),
        "version" => Value::string(env!("CARGO_PKG_VERSION")),
        "true" => Value::boolean(true),
        "false" => Value::boolean(false),
        _ => Value::Null,
    }
}

/// One parser and one environment, reused for every input.
pub struct Session {
    parser: Parser,
    env: Environment,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// A session with the global constants installed.
    pub fn new() -> Self {
        let mut env = Environment::new();
        for name in GLOBALS {
            if let Err(err) = env.declare(name, global_value(name), true) {
                warn!(%err, "failed to install global");
            }
        }
        debug!(globals = GLOBALS.len(), "session ready");
        Session {
            parser: Parser::new(),
            env,
        }
    }

    /// Parse `source` without evaluating it.
    pub fn parse(&mut self, source: &str) -> Result<Program, Error> {
        Ok(self.parser.produce_ast(source)?)
    }

    /// Parse and evaluate `source`, returning the last statement's value.
    pub fn eval(&mut self, source: &str) -> Result<Value, Error> {
        let program = self.parse(source)?;
        Ok(evaluate(&program, &mut self.env)?)
    }

    pub fn env(&self) -> &Environment {
        &self.env
    }

    pub fn env_mut(&mut self) -> &mut Environment {
        &mut self.env
    }
}
