// src/npda/loader.rs
// Automaton definitions: the line-oriented text format and a JSON form.
//
// Text layout:
//   <start>
//   <finalCount> <final_1> ... <final_n>
//   <transitionCount>
//   <from> <to> a,Z->AB        (or: <from> <to> a Z AB)
//
// The wildcard character stands for epsilon input in the first rule field,
// "any top, don't pop" in the second and "push nothing" in the third.

use std::{
    io::{BufWriter, Write},
    path::Path,
};

use serde::{Deserialize, Serialize};

use super::{
    automaton::Automaton,
    error::NpdaError,
    symbols::{InputSymbol, Notation, StackGuard, StackPush, State},
    table::Transition,
};

pub const DEFAULT_WILDCARD: char = '*';

// -------------------- text --------------------

struct Tokens<'s> {
    toks: Vec<(usize, &'s str)>, // (1-based line, token)
    at: usize,
}

impl<'s> Tokens<'s> {
    fn new(src: &'s str) -> Self {
        let toks = src
            .lines()
            .enumerate()
            .filter(|(_, l)| {
                let l = l.trim();
                !l.is_empty() && !l.starts_with('#')
            })
            .flat_map(|(i, l)| l.split_whitespace().map(move |t| (i + 1, t)))
            .collect();
        Self { toks, at: 0 }
    }

    fn next_number(&mut self, what: &str) -> Result<(usize, u32), NpdaError> {
        let Some(&(line, tok)) = self.toks.get(self.at) else {
            return Err(NpdaError::definition(
                0,
                format!("unexpected end of definition, expected {what}"),
            ));
        };
        self.at += 1;
        let v = parse_number(line, tok, what)?;
        Ok((line, v))
    }

    /// Whatever is left, grouped by source line.
    fn remaining_lines(&self) -> Vec<(usize, Vec<&'s str>)> {
        let mut out: Vec<(usize, Vec<&'s str>)> = Vec::new();
        for &(line, tok) in &self.toks[self.at..] {
            match out.last_mut() {
                Some((l, v)) if *l == line => v.push(tok),
                _ => out.push((line, vec![tok])),
            }
        }
        out
    }
}

fn parse_number(line: usize, tok: &str, what: &str) -> Result<u32, NpdaError> {
    tok.parse::<u32>().map_err(|_| {
        NpdaError::definition(
            line,
            format!("expected {what} (a non-negative integer), found `{tok}`"),
        )
    })
}

fn single_char(line: usize, field: &str, what: &str) -> Result<char, NpdaError> {
    let mut it = field.chars();
    match (it.next(), it.next()) {
        (Some(c), None) => Ok(c),
        _ => Err(NpdaError::definition(
            line,
            format!("{what} must be a single character, found `{field}`"),
        )),
    }
}

fn input_symbol(c: char, wildcard: char) -> InputSymbol {
    if c == wildcard {
        InputSymbol::Epsilon
    } else {
        InputSymbol::Char(c)
    }
}

fn stack_guard(c: char, wildcard: char) -> StackGuard {
    if c == wildcard {
        StackGuard::Any
    } else {
        StackGuard::Top(c)
    }
}

fn stack_push(line: usize, field: &str, wildcard: char) -> Result<StackPush, NpdaError> {
    if field.is_empty() {
        return Err(NpdaError::definition(line, "missing pushed sequence"));
    }
    if field.chars().eq(std::iter::once(wildcard)) {
        return Ok(StackPush::Nothing);
    }
    if field.contains(wildcard) {
        return Err(NpdaError::definition(
            line,
            format!("wildcard `{wildcard}` inside pushed sequence `{field}`"),
        ));
    }
    Ok(StackPush::from_chars(field.chars()))
}

/// Reads `<input>,<top>-><push>` by position, so `,` and `-` can themselves be
/// rule symbols (`,,*->*` reads a comma).
fn split_arrow(rule: &str) -> Option<(char, char, &str)> {
    let mut it = rule.char_indices();
    let (_, input) = it.next()?;
    let (_, comma) = it.next()?;
    let (_, top) = it.next()?;
    let (rest, _) = it.next()?;
    let push = rule[rest..].strip_prefix("->")?;
    (comma == ',').then_some((input, top, push))
}

/// Explains why an arrow rule did not fit `<input>,<top>-><push>`.
fn arrow_error(line: usize, rule: &str) -> NpdaError {
    let Some((lhs, _)) = rule.split_once("->") else {
        return NpdaError::definition(line, format!("cannot read rule `{rule}`"));
    };
    let message = match lhs.split_once(',') {
        Some((input, _)) if input.chars().count() != 1 => {
            format!("input symbol must be a single character, found `{input}`")
        }
        Some((_, top)) => {
            format!("required stack top must be a single character, found `{top}`")
        }
        None => format!("expected `<input>,<top>` before `->`, found `{lhs}`"),
    };
    NpdaError::definition(line, message)
}

fn parse_transition(line: usize, toks: &[&str], wildcard: char) -> Result<Transition, NpdaError> {
    if toks.len() < 3 {
        return Err(NpdaError::definition(
            line,
            "expected `<from> <to> <input>,<top>-><push>`",
        ));
    }
    let from = parse_number(line, toks[0], "source state")?;
    let to = parse_number(line, toks[1], "destination state")?;

    let rule = &toks[2..];
    let joined = rule.concat();
    let (input, top, push) = if let Some(parts) = split_arrow(&joined) {
        parts
    } else if rule.len() == 3 {
        (
            single_char(line, rule[0], "input symbol")?,
            single_char(line, rule[1], "required stack top")?,
            rule[2],
        )
    } else {
        return Err(arrow_error(line, &rule.join(" ")));
    };

    Ok(Transition {
        from,
        to,
        input: input_symbol(input, wildcard),
        guard: stack_guard(top, wildcard),
        push: stack_push(line, push, wildcard)?,
    })
}

/// Parses the text format. Any structural problem aborts the whole load.
pub fn parse_definition(src: &str, wildcard: char) -> Result<Automaton, NpdaError> {
    let mut toks = Tokens::new(src);

    let (_, start) = toks.next_number("start state")?;
    let (_, n_finals) = toks.next_number("final state count")?;
    let mut finals = Vec::new();
    for i in 0..n_finals {
        let (_, f) = toks.next_number(&format!("final state #{}", i + 1))?;
        finals.push(f);
    }
    let (count_line, n_transitions) = toks.next_number("transition count")?;
    let n_transitions = n_transitions as usize;

    let records = toks.remaining_lines();
    if records.len() < n_transitions {
        return Err(NpdaError::definition(
            count_line,
            format!(
                "declared {n_transitions} transitions, found {}",
                records.len()
            ),
        ));
    }
    if let Some((line, _)) = records.get(n_transitions) {
        return Err(NpdaError::definition(
            *line,
            format!("unexpected content after the {n_transitions} declared transitions"),
        ));
    }

    let transitions = records
        .iter()
        .map(|(line, toks)| parse_transition(*line, toks, wildcard))
        .collect::<Result<Vec<_>, _>>()?;

    log::debug!(
        "loaded automaton: start={start} finals={finals:?} transitions={}",
        transitions.len()
    );
    Ok(Automaton::new(start, finals, transitions))
}

/// Writes `a` back in the text format (arrow notation). The bottom marker is
/// not part of the text format and is dropped.
pub fn to_text(a: &Automaton, wildcard: char) -> String {
    let n = Notation { wildcard };
    let finals = a.sorted_finals();
    let mut out = format!("{}\n{}", a.start, finals.len());
    for f in &finals {
        out.push_str(&format!(" {f}"));
    }
    out.push_str(&format!("\n{}\n", a.transitions.len()));
    for t in &a.transitions {
        out.push_str(&format!(
            "{} {} {},{}->{}\n",
            t.from,
            t.to,
            n.input(t.input),
            n.guard(t.guard),
            n.push(&t.push)
        ));
    }
    out
}

// -------------------- JSON --------------------

fn default_wildcard() -> char {
    DEFAULT_WILDCARD
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransitionDoc {
    pub from: State,
    pub to: State,
    pub input: char,
    pub top: char,
    pub push: String,
}

/// On-disk JSON shape. Uses the same wildcard convention as the text format.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AutomatonDoc {
    pub start: State,
    pub finals: Vec<State>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bottom: Option<char>,
    #[serde(default = "default_wildcard")]
    pub wildcard: char,
    pub transitions: Vec<TransitionDoc>,
}

impl AutomatonDoc {
    pub fn from_automaton(a: &Automaton, wildcard: char) -> Self {
        let n = Notation { wildcard };
        let first = |s: String| s.chars().next().unwrap_or(wildcard);
        Self {
            start: a.start,
            finals: a.sorted_finals(),
            bottom: a.bottom,
            wildcard,
            transitions: a
                .transitions
                .iter()
                .map(|t| TransitionDoc {
                    from: t.from,
                    to: t.to,
                    input: first(n.input(t.input)),
                    top: first(n.guard(t.guard)),
                    push: n.push(&t.push),
                })
                .collect(),
        }
    }

    pub fn into_automaton(self) -> Result<Automaton, NpdaError> {
        let wildcard = self.wildcard;
        let transitions = self
            .transitions
            .into_iter()
            .enumerate()
            .map(|(i, t)| -> Result<Transition, NpdaError> {
                let push = stack_push(0, &t.push, wildcard).map_err(|e| match e {
                    NpdaError::Definition { message, .. } => {
                        NpdaError::definition(0, format!("transition #{}: {message}", i + 1))
                    }
                    other => other,
                })?;
                Ok(Transition {
                    from: t.from,
                    to: t.to,
                    input: input_symbol(t.input, wildcard),
                    guard: stack_guard(t.top, wildcard),
                    push,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Automaton::new(self.start, self.finals, transitions).with_bottom(self.bottom))
    }
}

pub fn load_json_bytes(data: &[u8]) -> Result<Automaton, NpdaError> {
    serde_json::from_slice::<AutomatonDoc>(data)
        .map_err(|e| NpdaError::definition(0, format!("failed to parse automaton JSON: {e}")))?
        .into_automaton()
}

pub fn save_json(path: &Path, a: &Automaton, wildcard: char) -> std::io::Result<()> {
    let f = std::fs::File::create(path)?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, &AutomatonDoc::from_automaton(a, wildcard))?;
    w.flush()
}
