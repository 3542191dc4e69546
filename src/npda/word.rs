// src/npda/word.rs
use std::fmt;

use super::error::NpdaError;

/// Longest word the interactive prompt used to take.
pub const DEFAULT_MAX_WORD_LEN: usize = 100;

/// The input word, one symbol per `char`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Word {
    symbols: Vec<char>,
}

impl Word {
    /// `max_len = None` lifts the limit. Words over the limit are rejected,
    /// never truncated.
    pub fn new(text: &str, max_len: Option<usize>) -> Result<Word, NpdaError> {
        let symbols: Vec<char> = text.chars().collect();
        if let Some(max) = max_len {
            if symbols.len() > max {
                return Err(NpdaError::WordTooLong {
                    len: symbols.len(),
                    max,
                });
            }
        }
        Ok(Word { symbols })
    }

    pub fn unbounded(text: &str) -> Word {
        Word {
            symbols: text.chars().collect(),
        }
    }

    /// Reads one line as a word; the line terminator is the end marker.
    pub fn from_line(line: &str, max_len: Option<usize>) -> Result<Word, NpdaError> {
        let line = line.strip_suffix('\n').unwrap_or(line);
        let line = line.strip_suffix('\r').unwrap_or(line);
        Word::new(line, max_len)
    }

    #[inline]
    pub fn get(&self, pos: usize) -> Option<char> {
        self.symbols.get(pos).copied()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn as_slice(&self) -> &[char] {
        &self.symbols
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.symbols {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
