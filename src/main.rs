// src/main.rs
// Usage:
//   pdacc [--bottom C] [--wildcard C] [--max-word-len N] [definition] [word]
//
// `definition` defaults to "automaton.pda"; a `.json` extension selects the JSON
// form. Without `word` the word is read from stdin after a `Word = ` prompt.

use std::{env, io, process};

use anyhow::Result;
use pdacc::{
    cli::{execute, parse_args},
    npda::RunConfig,
};

fn run() -> Result<()> {
    let args = parse_args(RunConfig::from_env(), env::args().skip(1))?;
    let limit = args.config.limits.max_epsilon_growth;
    let outcome = execute(args, &mut io::stdin().lock(), &mut io::stdout().lock())?;
    if !outcome.is_exhaustive() {
        eprintln!(
            "note: {} epsilon branch(es) grew the stack by more than {limit} and were cut; \
             the search is not exhaustive",
            outcome.result.stats().pruned
        );
    }
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e:#}");
        process::exit(1);
    }
}
