// src/bin/fuzz_npda.rs
// Generate random automata and words, run the explorer and the BFS oracle, compare.
//   - FUZZ_SEED=<u64>        base seed (default: time based)
//   - FUZZ_ITERS=<n>         number of cases (default 10000)
//   - FUZZ_MAX_GROWTH=<n>    epsilon stack growth limit for both sides (default 10)
//   - FUZZ_DIR=<dir>         where failing cases are written (default "fuzz-cases")
//   - FUZZ_INPUT=<path>      replay one saved case instead of fuzzing

use std::{
    fs,
    path::{Path, PathBuf},
    time::{Instant, SystemTime, UNIX_EPOCH},
};

use anyhow::{Context, Result, bail};
use pdacc::{
    dev::{
        generator::{GenParams, gen_automaton, gen_word},
        oracle,
    },
    npda::{
        Automaton, ExploreLimits, Explorer, Word,
        config::{env_u64, env_usize},
        loader::{AutomatonDoc, DEFAULT_WILDCARD, to_text},
    },
};
use rand::{Rng, SeedableRng, rngs::StdRng};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
struct Case {
    seed: u64,
    iter: u64,
    max_growth: usize,
    word: String,
    automaton: AutomatonDoc,
}

/// True when explorer and oracle agree.
fn check(a: &Automaton, word: &str, max_growth: usize) -> bool {
    let w = Word::unbounded(word);
    let limits = ExploreLimits {
        max_epsilon_growth: max_growth,
    };
    let got = Explorer::with_limits(a, limits).run(&w).sorted();
    let want: Vec<_> = oracle::terminal_states(a, &w, max_growth).into_iter().collect();
    if got != want {
        eprintln!("[fuzz_npda] MISMATCH on word {word:?}: explorer={got:?} oracle={want:?}");
        eprintln!("{}", to_text(a, DEFAULT_WILDCARD));
        return false;
    }
    true
}

fn save_case(dir: &Path, case: &Case) -> Result<PathBuf> {
    fs::create_dir_all(dir).with_context(|| format!("create {}", dir.display()))?;
    let path = dir.join(format!("npda_seed{}_iter{}.json", case.seed, case.iter));
    let json = serde_json::to_string_pretty(case).context("serialize case")?;
    fs::write(&path, json).with_context(|| format!("write {}", path.display()))?;
    Ok(path)
}

fn replay(path: &Path) -> Result<()> {
    let data = fs::read(path).with_context(|| format!("read {}", path.display()))?;
    let case: Case = serde_json::from_slice(&data).context("parse fuzz case JSON")?;
    let a = case.automaton.into_automaton()?;
    if !check(&a, &case.word, case.max_growth) {
        bail!("replay of {} still diverges", path.display());
    }
    println!("[fuzz_npda] replay OK: {}", path.display());
    Ok(())
}

fn main() -> Result<()> {
    if let Ok(input) = std::env::var("FUZZ_INPUT") {
        return replay(Path::new(&input));
    }

    let now = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    let seed = env_u64("FUZZ_SEED", now);
    let iters = env_u64("FUZZ_ITERS", 10_000);
    let max_growth = env_usize("FUZZ_MAX_GROWTH", 10);
    let dir = PathBuf::from(std::env::var("FUZZ_DIR").unwrap_or_else(|_| "fuzz-cases".into()));

    println!("[fuzz_npda] seed={seed} iters={iters} max_growth={max_growth}");
    let mut rng = StdRng::seed_from_u64(seed);
    let t0 = Instant::now();
    let mut failures = 0usize;

    for iter in 0..iters {
        let params = GenParams {
            n_states: rng.random_range(1..=6),
            n_transitions: rng.random_range(0..=12),
            ..GenParams::default()
        };
        let a = gen_automaton(&mut rng, &params);
        let word = gen_word(&mut rng, &params.alphabet, 6);
        if !check(&a, &word, max_growth) {
            failures += 1;
            let case = Case {
                seed,
                iter,
                max_growth,
                word,
                automaton: AutomatonDoc::from_automaton(&a, DEFAULT_WILDCARD),
            };
            let path = save_case(&dir, &case)?;
            eprintln!(
                "[fuzz_npda] saved {} (replay: FUZZ_INPUT={} cargo run --bin fuzz_npda)",
                path.display(),
                path.display()
            );
        }
    }

    println!(
        "[fuzz_npda] {iters} cases in {:.1} ms, {failures} mismatches",
        t0.elapsed().as_secs_f64() * 1e3
    );
    if failures > 0 {
        bail!("{failures} mismatching cases");
    }
    Ok(())
}
