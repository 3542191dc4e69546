// src/npda/automaton.rs
use hashbrown::HashSet;

use super::{
    symbols::State,
    table::{Transition, TransitionTable},
};

/// A loaded automaton. Immutable for the duration of a run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Automaton {
    pub start: State,
    pub finals: HashSet<State>,
    pub transitions: Vec<Transition>,
    /// Initial stack content. `None` starts the search on an empty stack.
    pub bottom: Option<char>,
}

impl Automaton {
    pub fn new(
        start: State,
        finals: impl IntoIterator<Item = State>,
        transitions: Vec<Transition>,
    ) -> Self {
        Self {
            start,
            finals: finals.into_iter().collect(),
            transitions,
            bottom: None,
        }
    }

    pub fn with_bottom(mut self, bottom: Option<char>) -> Self {
        self.bottom = bottom;
        self
    }

    #[inline]
    pub fn table(&self) -> TransitionTable<'_> {
        TransitionTable::new(&self.transitions)
    }

    /// Every state mentioned anywhere in the definition, sorted.
    pub fn states(&self) -> Vec<State> {
        let mut seen: HashSet<State> = HashSet::new();
        seen.insert(self.start);
        seen.extend(self.finals.iter().copied());
        for t in &self.transitions {
            seen.insert(t.from);
            seen.insert(t.to);
        }
        let mut out: Vec<State> = seen.into_iter().collect();
        out.sort_unstable();
        out
    }

    /// Finals in ascending order (for stable output).
    pub fn sorted_finals(&self) -> Vec<State> {
        let mut out: Vec<State> = self.finals.iter().copied().collect();
        out.sort_unstable();
        out
    }
}
