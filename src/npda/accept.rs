// src/npda/accept.rs
use std::fmt;

use hashbrown::HashSet;

use super::{explore::ResultSet, symbols::State};

/// True iff some terminal state is final.
pub fn accepts(result: &ResultSet, finals: &HashSet<State>) -> bool {
    result.iter().any(|s| finals.contains(&s))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Accepted,
    Unaccepted,
}

impl Verdict {
    pub fn from_result(result: &ResultSet, finals: &HashSet<State>) -> Self {
        if accepts(result, finals) {
            Verdict::Accepted
        } else {
            Verdict::Unaccepted
        }
    }

    pub fn is_accepted(self) -> bool {
        matches!(self, Verdict::Accepted)
    }
}

/// A verdict together with the search that produced it. A cut search may have
/// missed terminal states, so an `Unaccepted` verdict from it is not final.
#[derive(Debug, Clone)]
pub struct Outcome {
    pub verdict: Verdict,
    pub result: ResultSet,
}

impl Outcome {
    pub fn new(result: ResultSet, finals: &HashSet<State>) -> Self {
        Self {
            verdict: Verdict::from_result(&result, finals),
            result,
        }
    }

    pub fn is_exhaustive(&self) -> bool {
        self.result.is_exhaustive()
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verdict::Accepted => "Word accepted",
            Verdict::Unaccepted => "Word unaccepted",
        })
    }
}
