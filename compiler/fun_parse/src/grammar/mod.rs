//! Grammar rules, split into statement and expression levels.

mod expr;
mod stmt;
