// src/npda/symbols.rs
// The three things the definition format spells with one wildcard character,
// kept apart once parsed.

pub type State = u32;

/// What a transition reads from the word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputSymbol {
    Epsilon,
    Char(char),
}

/// What a transition requires on top of the stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StackGuard {
    /// Matches anything (including an empty stack) and never pops.
    Any,
    Top(char),
}

/// What a transition pushes after the guard was handled.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum StackPush {
    Nothing,
    /// Never empty; `seq[0]` ends on top.
    Seq(Vec<char>),
}

impl InputSymbol {
    #[inline]
    pub fn is_epsilon(self) -> bool {
        matches!(self, InputSymbol::Epsilon)
    }

    /// `None` is an exhausted word: only epsilon moves match it.
    #[inline]
    pub fn matches(self, next: Option<char>) -> bool {
        match self {
            InputSymbol::Epsilon => true,
            InputSymbol::Char(c) => next == Some(c),
        }
    }
}

impl StackGuard {
    #[inline]
    pub fn matches(self, top: Option<char>) -> bool {
        match self {
            StackGuard::Any => true,
            StackGuard::Top(c) => top == Some(c),
        }
    }
}

impl StackPush {
    pub fn from_chars(seq: impl IntoIterator<Item = char>) -> Self {
        let seq: Vec<char> = seq.into_iter().collect();
        if seq.is_empty() {
            StackPush::Nothing
        } else {
            StackPush::Seq(seq)
        }
    }

    pub fn as_slice(&self) -> &[char] {
        match self {
            StackPush::Nothing => &[],
            StackPush::Seq(seq) => seq,
        }
    }
}

/// Renders symbols back into definition notation with a chosen wildcard.
pub struct Notation {
    pub wildcard: char,
}

impl Notation {
    pub fn input(&self, s: InputSymbol) -> String {
        match s {
            InputSymbol::Epsilon => self.wildcard.to_string(),
            InputSymbol::Char(c) => c.to_string(),
        }
    }

    pub fn guard(&self, g: StackGuard) -> String {
        match g {
            StackGuard::Any => self.wildcard.to_string(),
            StackGuard::Top(c) => c.to_string(),
        }
    }

    pub fn push(&self, p: &StackPush) -> String {
        match p {
            StackPush::Nothing => self.wildcard.to_string(),
            StackPush::Seq(seq) => seq.iter().collect(),
        }
    }
}
