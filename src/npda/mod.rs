// src/npda/mod.rs
pub mod accept;
pub mod automaton;
pub mod config;
pub mod error;
pub mod explore;
pub mod loader;
pub mod stack;
pub mod symbols;
pub mod table;
pub mod word;

pub use accept::{Outcome, Verdict, accepts};
pub use automaton::Automaton;
pub use config::RunConfig;
pub use error::NpdaError;
pub use explore::{ExploreLimits, Explorer, ResultSet, SearchStats, explore};
pub use stack::Stack;
pub use symbols::{InputSymbol, StackGuard, StackPush, State};
pub use table::{Transition, TransitionTable};
pub use word::Word;

/// Runs the full search and decides acceptance.
pub fn run(automaton: &Automaton, word: &Word, limits: ExploreLimits) -> Outcome {
    let result = Explorer::with_limits(automaton, limits).run(word);
    Outcome::new(result, &automaton.finals)
}
