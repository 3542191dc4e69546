// src/dev/oracle.rs
// Breadth-first enumeration of configurations straight off the transition list.
// Shares no code with the explorer and is only used to cross-check it.

use std::collections::{BTreeSet, VecDeque};

use hashbrown::HashSet;

use crate::npda::{Automaton, InputSymbol, StackGuard, State, Word};

/// Terminal states reachable on `word`. The stack here keeps its top at index
/// 0. A configuration also carries the stack depth at its last input move;
/// epsilon moves growing past that by more than `max_epsilon_growth` are
/// dropped like in the explorer.
pub fn terminal_states(a: &Automaton, word: &Word, max_epsilon_growth: usize) -> BTreeSet<State> {
    let w = word.as_slice();
    let mut out = BTreeSet::new();
    let mut seen: HashSet<(State, usize, Vec<char>, usize)> = HashSet::new();
    let mut queue: VecDeque<(State, usize, Vec<char>, usize)> = VecDeque::new();
    let initial: Vec<char> = a.bottom.into_iter().collect();
    let initial_len = initial.len();
    queue.push_back((a.start, 0, initial, initial_len));

    while let Some(cfg) = queue.pop_front() {
        if !seen.insert(cfg.clone()) {
            continue;
        }
        let (q, pos, stack, base) = cfg;
        let next = w.get(pos).copied();
        let has_eps = a
            .transitions
            .iter()
            .any(|t| t.from == q && t.input == InputSymbol::Epsilon);
        if next.is_none() && !has_eps {
            out.insert(q);
            continue;
        }
        for t in a.transitions.iter().filter(|t| t.from == q) {
            let advance = match t.input {
                InputSymbol::Epsilon => 0,
                InputSymbol::Char(c) if Some(c) == next => 1,
                InputSymbol::Char(_) => continue,
            };
            let rest = match t.guard {
                StackGuard::Any => &stack[..],
                StackGuard::Top(c) if stack.first() == Some(&c) => &stack[1..],
                StackGuard::Top(_) => continue,
            };
            let mut s: Vec<char> = t.push.as_slice().to_vec();
            s.extend_from_slice(rest);
            let base = if advance == 0 { base } else { s.len() };
            if s.len() > base + max_epsilon_growth {
                continue;
            }
            queue.push_back((t.to, pos + advance, s, base));
        }
    }
    out
}
