// src/npda/explore.rs
// Exhaustive depth-first search over every nondeterministic choice.
//
// The search runs on an explicit worklist instead of the call stack. Each entry
// owns its stack, so sibling candidates never see each other's pops and pushes.
// Nothing short-circuits: the full tree is explored and acceptance is decided
// afterwards from the collected terminal states.

use hashbrown::HashSet;

use super::{
    automaton::Automaton,
    stack::Stack,
    symbols::State,
    table::TransitionTable,
    word::Word,
};

pub const DEFAULT_MAX_EPSILON_GROWTH: usize = 4096;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExploreLimits {
    /// How far a run of epsilon moves may grow the stack above its depth at
    /// the last input-consuming move. Moves that consume input are never cut.
    pub max_epsilon_growth: usize,
}

impl Default for ExploreLimits {
    fn default() -> Self {
        Self {
            max_epsilon_growth: DEFAULT_MAX_EPSILON_GROWTH,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Configurations expanded.
    pub expanded: usize,
    /// Configurations skipped because an identical one was already expanded.
    pub duplicates: usize,
    /// Epsilon moves dropped by `ExploreLimits::max_epsilon_growth`.
    pub pruned: usize,
}

/// States reached with the word consumed and no epsilon move left to take.
#[derive(Debug, Clone, Default)]
pub struct ResultSet {
    states: HashSet<State>,
    stats: SearchStats,
}

impl ResultSet {
    pub fn contains(&self, s: State) -> bool {
        self.states.contains(&s)
    }

    pub fn iter(&self) -> impl Iterator<Item = State> + '_ {
        self.states.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn sorted(&self) -> Vec<State> {
        let mut v: Vec<State> = self.iter().collect();
        v.sort_unstable();
        v
    }

    pub fn stats(&self) -> SearchStats {
        self.stats
    }

    /// False when the epsilon growth limit cut at least one branch.
    pub fn is_exhaustive(&self) -> bool {
        self.stats.pruned == 0
    }
}

/// One branch of the search: where we are, how much of the word is left,
/// and the stack this branch alone owns. `base` is the stack depth right after
/// the last input-consuming move (or at the start).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct SearchState {
    state: State,
    pos: usize,
    stack: Stack,
    base: usize,
}

pub struct Explorer<'a> {
    automaton: &'a Automaton,
    table: TransitionTable<'a>,
    limits: ExploreLimits,
}

impl<'a> Explorer<'a> {
    pub fn new(automaton: &'a Automaton) -> Self {
        Self::with_limits(automaton, ExploreLimits::default())
    }

    pub fn with_limits(automaton: &'a Automaton, limits: ExploreLimits) -> Self {
        Self {
            automaton,
            table: automaton.table(),
            limits,
        }
    }

    pub fn run(&self, word: &Word) -> ResultSet {
        let mut result = ResultSet::default();
        let mut seen: HashSet<SearchState> = HashSet::new();
        let stack = Stack::with_bottom(self.automaton.bottom);
        let mut work = vec![SearchState {
            state: self.automaton.start,
            pos: 0,
            base: stack.depth(),
            stack,
        }];

        while let Some(branch) = work.pop() {
            if seen.contains(&branch) {
                result.stats.duplicates += 1;
                continue;
            }
            result.stats.expanded += 1;

            let next = word.get(branch.pos);
            if next.is_none() && !self.table.has_epsilon_input(branch.state) {
                result.states.insert(branch.state);
                seen.insert(branch);
                continue;
            }

            // Reversed so the first declared candidate is popped (explored) first.
            let candidates = self.table.matching(branch.state, next, branch.stack.top());
            for t in candidates.rev() {
                // The guard already matched, so the pop cannot fail.
                let Ok(stack) = branch.stack.clone().apply(t.guard, &t.push) else {
                    continue;
                };
                let (pos, base) = if t.input.is_epsilon() {
                    (branch.pos, branch.base)
                } else {
                    (branch.pos + 1, stack.depth())
                };
                if stack.depth() > base + self.limits.max_epsilon_growth {
                    if result.stats.pruned == 0 {
                        log::warn!(
                            "epsilon moves grew the stack past {} in state {} at word \
                             position {}; search is no longer exhaustive",
                            base + self.limits.max_epsilon_growth,
                            t.to,
                            pos
                        );
                    }
                    result.stats.pruned += 1;
                    continue;
                }
                work.push(SearchState {
                    state: t.to,
                    pos,
                    stack,
                    base,
                });
            }
            seen.insert(branch);
        }

        log::debug!(
            "explored {:?} ({} symbols): expanded={} duplicates={} pruned={} terminal={:?}",
            word.to_string(),
            word.len(),
            result.stats.expanded,
            result.stats.duplicates,
            result.stats.pruned,
            result.sorted()
        );
        result
    }
}

pub fn explore(automaton: &Automaton, word: &Word) -> ResultSet {
    Explorer::new(automaton).run(word)
}
