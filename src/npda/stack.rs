// src/npda/stack.rs
// Value-semantics pushdown stack. Every branch of the search owns its own copy.

use std::fmt;

use super::{
    error::NpdaError,
    symbols::{StackGuard, StackPush},
};

/// Top of stack is the last element of `items`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Stack {
    items: Vec<char>,
}

impl Stack {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_bottom(bottom: Option<char>) -> Self {
        Self {
            items: bottom.into_iter().collect(),
        }
    }

    #[inline]
    pub fn top(&self) -> Option<char> {
        self.items.last().copied()
    }

    #[inline]
    pub fn depth(&self) -> usize {
        self.items.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn pop(mut self) -> Result<Stack, NpdaError> {
        self.items.pop().ok_or(NpdaError::EmptyStack)?;
        Ok(self)
    }

    /// Pushes `seq` so that `seq[0]` becomes the new top.
    pub fn push_seq(mut self, seq: &[char]) -> Stack {
        self.items.extend(seq.iter().rev());
        self
    }

    /// Applies a transition's stack effect: pop for a concrete guard, then push.
    /// Callers are expected to have checked the guard against `top()`.
    pub fn apply(self, guard: StackGuard, push: &StackPush) -> Result<Stack, NpdaError> {
        let popped = match guard {
            StackGuard::Any => self,
            StackGuard::Top(_) => self.pop()?,
        };
        Ok(popped.push_seq(push.as_slice()))
    }

    /// Bottom-to-top view.
    pub fn as_slice(&self) -> &[char] {
        &self.items
    }
}

impl fmt::Display for Stack {
    // Top first, like the usual textbook notation.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.items.is_empty() {
            return f.write_str("ε");
        }
        for c in self.items.iter().rev() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
