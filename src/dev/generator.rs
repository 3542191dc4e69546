// src/dev/generator.rs
// Seeded random automata and words for sweeps and the fuzzer.

use rand::Rng;

use crate::npda::{Automaton, InputSymbol, StackGuard, StackPush, State, Transition};

#[derive(Debug, Clone)]
pub struct GenParams {
    pub n_states: u32,
    pub n_transitions: usize,
    pub alphabet: Vec<char>,
    pub stack_alphabet: Vec<char>,
    pub epsilon_p: f64,
    pub any_guard_p: f64,
    pub no_push_p: f64,
    pub max_push_len: usize,
    pub bottom_p: f64,
}

impl Default for GenParams {
    fn default() -> Self {
        Self {
            n_states: 4,
            n_transitions: 8,
            alphabet: vec!['a', 'b'],
            stack_alphabet: vec!['A', 'B', 'Z'],
            epsilon_p: 0.25,
            any_guard_p: 0.3,
            no_push_p: 0.4,
            max_push_len: 3,
            bottom_p: 0.5,
        }
    }
}

fn pick<R: Rng>(rng: &mut R, xs: &[char]) -> char {
    xs[rng.random_range(0..xs.len())]
}

pub fn gen_transition<R: Rng>(rng: &mut R, p: &GenParams) -> Transition {
    let from: State = rng.random_range(0..p.n_states);
    let to: State = rng.random_range(0..p.n_states);
    let input = if rng.random_bool(p.epsilon_p) {
        InputSymbol::Epsilon
    } else {
        InputSymbol::Char(pick(rng, &p.alphabet))
    };
    let guard = if rng.random_bool(p.any_guard_p) {
        StackGuard::Any
    } else {
        StackGuard::Top(pick(rng, &p.stack_alphabet))
    };
    let push = if rng.random_bool(p.no_push_p) {
        StackPush::Nothing
    } else {
        let len = rng.random_range(1..=p.max_push_len.max(1));
        StackPush::from_chars((0..len).map(|_| pick(rng, &p.stack_alphabet)))
    };
    Transition {
        from,
        to,
        input,
        guard,
        push,
    }
}

pub fn gen_automaton<R: Rng>(rng: &mut R, p: &GenParams) -> Automaton {
    let start = rng.random_range(0..p.n_states);
    let finals: Vec<State> = (0..p.n_states).filter(|_| rng.random_bool(0.4)).collect();
    let transitions = (0..p.n_transitions)
        .map(|_| gen_transition(rng, p))
        .collect();
    let bottom = rng
        .random_bool(p.bottom_p)
        .then(|| *p.stack_alphabet.last().unwrap_or(&'Z'));
    Automaton::new(start, finals, transitions).with_bottom(bottom)
}

pub fn gen_word<R: Rng>(rng: &mut R, alphabet: &[char], max_len: usize) -> String {
    let len = rng.random_range(0..=max_len);
    (0..len).map(|_| pick(rng, alphabet)).collect()
}
