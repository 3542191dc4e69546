// src/npda/error.rs
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NpdaError {
    /// Malformed automaton definition. `line` is 1-based; 0 means "no line"
    /// (end of input, or a JSON definition).
    Definition { line: usize, message: String },
    WordTooLong { len: usize, max: usize },
    EmptyStack,
}

impl NpdaError {
    pub(crate) fn definition(line: usize, message: impl Into<String>) -> Self {
        NpdaError::Definition {
            line,
            message: message.into(),
        }
    }
}

impl fmt::Display for NpdaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NpdaError::Definition { line: 0, message } => {
                write!(f, "malformed automaton definition: {message}")
            }
            NpdaError::Definition { line, message } => {
                write!(f, "malformed automaton definition at line {line}: {message}")
            }
            NpdaError::WordTooLong { len, max } => {
                write!(f, "word has {len} symbols, limit is {max}")
            }
            NpdaError::EmptyStack => f.write_str("pop on an empty stack"),
        }
    }
}

impl std::error::Error for NpdaError {}
