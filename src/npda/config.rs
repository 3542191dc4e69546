// src/npda/config.rs
// Run options. Environment first, command-line flags on top (see src/cli.rs).
//
//   PDACC_WILDCARD       wildcard character in definitions   (default '*')
//   PDACC_BOTTOM         initial stack marker                (default: empty stack)
//   PDACC_MAX_WORD_LEN   longest accepted word, 0 = no limit (default 100)
//   PDACC_MAX_EPSILON_GROWTH  stack growth allowed within one run of epsilon
//                             moves (default 4096)

use super::{
    explore::{DEFAULT_MAX_EPSILON_GROWTH, ExploreLimits},
    loader::DEFAULT_WILDCARD,
    word::DEFAULT_MAX_WORD_LEN,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    pub wildcard: char,
    /// Overrides the definition's own bottom marker when set.
    pub bottom: Option<char>,
    pub max_word_len: Option<usize>,
    pub limits: ExploreLimits,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            wildcard: DEFAULT_WILDCARD,
            bottom: None,
            max_word_len: Some(DEFAULT_MAX_WORD_LEN),
            limits: ExploreLimits::default(),
        }
    }
}

pub fn env_usize(name: &str, default: usize) -> usize {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(default)
}

pub fn env_u64(name: &str, default: u64) -> u64 {
    std::env::var(name)
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(default)
}

pub fn env_char(name: &str) -> Option<char> {
    let v = std::env::var(name).ok()?;
    let mut it = v.chars();
    match (it.next(), it.next()) {
        (Some(c), None) => Some(c),
        _ => {
            log::warn!("{name}={v:?} is not a single character; ignored");
            None
        }
    }
}

/// `0` lifts the word length limit.
pub fn word_limit(n: usize) -> Option<usize> {
    (n != 0).then_some(n)
}

impl RunConfig {
    pub fn from_env() -> Self {
        Self {
            wildcard: env_char("PDACC_WILDCARD").unwrap_or(DEFAULT_WILDCARD),
            bottom: env_char("PDACC_BOTTOM"),
            max_word_len: word_limit(env_usize("PDACC_MAX_WORD_LEN", DEFAULT_MAX_WORD_LEN)),
            limits: ExploreLimits {
                max_epsilon_growth: env_usize("PDACC_MAX_EPSILON_GROWTH", DEFAULT_MAX_EPSILON_GROWTH),
            },
        }
    }
}
