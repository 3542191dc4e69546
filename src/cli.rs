// src/cli.rs
// The `pdacc` reporter: argument handling, definition loading and the word
// source, kept out of main.rs so they can be driven with any reader/writer.

use std::{
    fs,
    io::{BufRead, Write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, anyhow, bail};

use crate::npda::{
    self, Automaton, Outcome, RunConfig, Word,
    config::word_limit,
    loader::{load_json_bytes, parse_definition},
};

pub const DEFAULT_DEFINITION: &str = "automaton.pda";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Args {
    pub config: RunConfig,
    pub definition: PathBuf,
    pub word: Option<String>,
}

fn flag_char(name: &str, v: Option<String>) -> Result<char> {
    let v = v.ok_or_else(|| anyhow!("{name} needs a value"))?;
    let mut it = v.chars();
    match (it.next(), it.next()) {
        (Some(c), None) => Ok(c),
        _ => bail!("{name} takes a single character, got {v:?}"),
    }
}

/// Flags override `base` (normally `RunConfig::from_env()`).
pub fn parse_args(base: RunConfig, mut it: impl Iterator<Item = String>) -> Result<Args> {
    let mut config = base;
    let mut positional = Vec::new();
    while let Some(a) = it.next() {
        match a.as_str() {
            "--bottom" => config.bottom = Some(flag_char("--bottom", it.next())?),
            "--wildcard" => config.wildcard = flag_char("--wildcard", it.next())?,
            "--max-word-len" => {
                let v = it.next().ok_or_else(|| anyhow!("--max-word-len needs a value"))?;
                let n: usize = v
                    .parse()
                    .with_context(|| format!("--max-word-len: not a number: {v:?}"))?;
                config.max_word_len = word_limit(n);
            }
            s if s.starts_with("--") => bail!("unknown flag {s}"),
            _ => positional.push(a),
        }
    }
    if positional.len() > 2 {
        bail!("expected at most a definition path and a word, got {positional:?}");
    }
    let mut positional = positional.into_iter();
    Ok(Args {
        config,
        definition: PathBuf::from(
            positional
                .next()
                .unwrap_or_else(|| DEFAULT_DEFINITION.to_string()),
        ),
        word: positional.next(),
    })
}

/// A `.json` extension selects the JSON form. A bottom marker in `config`
/// replaces the one stored in the definition.
pub fn load_automaton(path: &Path, config: &RunConfig) -> Result<Automaton> {
    let bytes = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let automaton = if path.extension().and_then(|e| e.to_str()) == Some("json") {
        load_json_bytes(&bytes)?
    } else {
        let src = String::from_utf8(bytes)
            .with_context(|| format!("{} is not valid UTF-8", path.display()))?;
        parse_definition(&src, config.wildcard)?
    };
    Ok(match config.bottom {
        Some(b) => automaton.with_bottom(Some(b)),
        None => automaton,
    })
}

/// Uses `given` when present, otherwise prompts on `out` and reads one line.
pub fn read_word(
    given: Option<String>,
    config: &RunConfig,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<Word> {
    let word = match given {
        Some(w) => Word::new(&w, config.max_word_len)?,
        None => {
            write!(out, "Word = ").context("write prompt")?;
            out.flush().context("flush prompt")?;
            let mut line = String::new();
            input.read_line(&mut line).context("read word")?;
            Word::from_line(&line, config.max_word_len)?
        }
    };
    Ok(word)
}

/// Loads and validates the definition, then reads the word, searches and
/// prints the verdict on `out`. Nothing is read from `input` when the
/// definition is rejected.
pub fn execute(args: Args, input: &mut impl BufRead, out: &mut impl Write) -> Result<Outcome> {
    let automaton = load_automaton(&args.definition, &args.config)?;
    let word = read_word(args.word, &args.config, input, out)?;

    let outcome = npda::run(&automaton, &word, args.config.limits);
    writeln!(out, "{}", outcome.verdict).context("write verdict")?;
    Ok(outcome)
}
