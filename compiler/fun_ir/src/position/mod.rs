//! Source positions.
//!
//! FunLang reports locations as 1-based line and column pairs. A position of
//! `(0, 0)` means "no source token", used for the program root and for nodes
//! built directly rather than parsed.

use std::fmt;

/// Line/column location of a token or AST node.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Default, PartialOrd, Ord)]
pub struct Pos {
    pub line: u32,
    pub column: u32,
}

impl Pos {
    /// Position for synthesized nodes.
    pub const DUMMY: Pos = Pos { line: 0, column: 0 };

    /// Create a new position.
    #[inline]
    pub const fn new(line: u32, column: u32) -> Self {
        Pos { line, column }
    }

    /// Check whether this is the dummy position.
    #[inline]
    pub const fn is_dummy(self) -> bool {
        self.line == 0 && self.column == 0
    }
}

impl fmt::Debug for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::Pos;
    crate::static_assert_size!(Pos, 8);
}
