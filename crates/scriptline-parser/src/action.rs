//! Parsed action records.

use scriptline_lexer::Token;
use std::fmt;

/// One parsed line: an action name followed by its positional arguments.
#[derive(Debug, Clone)]
pub struct Action {
    name: String,
    args: Vec<Token>,
    line: usize,
}

impl Action {
    pub(crate) fn new(name: impl Into<String>, args: Vec<Token>, line: usize) -> Self {
        Self {
            name: name.into(),
            args,
            line,
        }
    }

    /// The action name, i.e. the first word of the line.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The argument tokens in source order.
    pub fn args(&self) -> &[Token] {
        &self.args
    }

    /// Returns the 1-indexed source line this action was parsed from.
    pub fn line(&self) -> usize {
        self.line
    }

    pub fn into_args(self) -> Vec<Token> {
        self.args
    }
}

// Source line is diagnostic only.
impl PartialEq for Action {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.args == other.args
    }
}

/// Renders `NAME ARG ARG ...` with single-space separators and no trailing
/// space.
impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
