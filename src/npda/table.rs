// src/npda/table.rs
use hashbrown::HashMap;

use super::symbols::{InputSymbol, StackGuard, StackPush, State};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Transition {
    pub from: State,
    pub to: State,
    pub input: InputSymbol,
    pub guard: StackGuard,
    pub push: StackPush,
}

/// Transitions grouped by source state. Each group keeps declaration order.
#[derive(Debug, Clone)]
pub struct TransitionTable<'a> {
    by_state: HashMap<State, Vec<&'a Transition>>,
}

impl<'a> TransitionTable<'a> {
    pub fn new(transitions: &'a [Transition]) -> Self {
        let mut by_state: HashMap<State, Vec<&'a Transition>> = HashMap::new();
        for t in transitions {
            by_state.entry(t.from).or_default().push(t);
        }
        Self { by_state }
    }

    fn from_state(&self, state: State) -> &[&'a Transition] {
        self.by_state.get(&state).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Every transition out of `from` whose input is `next` or epsilon and whose
    /// guard is `top` or `Any`. `next = None` means the word is exhausted, so
    /// only epsilon moves qualify; `top = None` is an empty stack, so only
    /// `Any` guards qualify.
    pub fn matching(
        &self,
        from: State,
        next: Option<char>,
        top: Option<char>,
    ) -> impl DoubleEndedIterator<Item = &'a Transition> + '_ {
        self.from_state(from)
            .iter()
            .copied()
            .filter(move |t| t.input.matches(next) && t.guard.matches(top))
    }

    pub fn has_epsilon_input(&self, state: State) -> bool {
        self.from_state(state).iter().any(|t| t.input.is_epsilon())
    }

    pub fn len(&self) -> usize {
        self.by_state.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.by_state.is_empty()
    }
}
