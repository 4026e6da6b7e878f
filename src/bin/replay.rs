//! The §6.2 replay driver: reads a stream of scenarios from stdin, replays
//! each as a sequence of `allocate`/`deallocate` calls against a fresh
//! `Arena<f64, 1000>`, and prints the arena's head sentinels after every
//! scenario.
//!
//! Ported from `examples/original_source/RunAllocator.cpp`'s I/O contract;
//! see `DESIGN.md` for why `Arena<f64, 1000>` specifically (it matches the
//! concrete scenarios the design spec gives, which assume
//! `size_of::<T>() == 8`).

use std::io::{self, BufRead, Write};
use std::process::ExitCode;

use boundary_arena::Arena;

const SCENARIO_COUNT_MAX: usize = 100;

fn main() -> ExitCode {
  env_logger::init();

  let stdin = io::stdin();
  let mut lines = stdin.lock().lines();

  let scenario_count = match read_scenario_count(&mut lines) {
    Ok(count) => count,
    Err(message) => {
      eprintln!("replay: {message}");
      return ExitCode::FAILURE;
    }
  };

  // A single blank line separates the scenario count from the first
  // scenario's requests; each scenario's own requests are terminated by
  // a blank line in turn, so no further separator is needed between
  // scenarios.
  match lines.next() {
    Some(Ok(line)) if line.trim().is_empty() => {}
    Some(Ok(other)) => {
      eprintln!("replay: expected a blank line after the scenario count, got {other:?}");
      return ExitCode::FAILURE;
    }
    Some(Err(e)) => {
      eprintln!("replay: {e}");
      return ExitCode::FAILURE;
    }
    None => {
      eprintln!("replay: expected a blank line after the scenario count, got end of input");
      return ExitCode::FAILURE;
    }
  }

  let stdout = io::stdout();
  let mut out = stdout.lock();

  for scenario_index in 0..scenario_count {
    match run_scenario(&mut lines) {
      Ok(sentinels) => {
        let line = sentinels.iter().map(i32::to_string).collect::<Vec<_>>().join(" ");
        if let Err(e) = writeln!(out, "{line}") {
          eprintln!("replay: failed to write output: {e}");
          return ExitCode::FAILURE;
        }
      }
      Err(message) => {
        eprintln!("replay: scenario {scenario_index}: {message}");
        return ExitCode::FAILURE;
      }
    }
  }

  ExitCode::SUCCESS
}

fn read_scenario_count(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<usize, String> {
  let first = lines
    .next()
    .ok_or_else(|| "expected a scenario count, got end of input".to_string())?
    .map_err(|e| e.to_string())?;
  let count: i64 = first.trim().parse().map_err(|_| format!("invalid scenario count: {first:?}"))?;
  if !(1..=SCENARIO_COUNT_MAX as i64).contains(&count) {
    return Err(format!("scenario count {count} out of range [1, {SCENARIO_COUNT_MAX}]"));
  }
  Ok(count as usize)
}

/// Replays one scenario and returns the arena's head sentinels in arena
/// order, ready to print.
fn run_scenario(lines: &mut impl Iterator<Item = io::Result<String>>) -> Result<Vec<i32>, String> {
  let mut arena = Arena::<f64, 1000>::new().map_err(|e| e.to_string())?;
  let mut live: Vec<*mut f64> = Vec::new();

  for line in lines.by_ref() {
    let line = line.map_err(|e| e.to_string())?;
    let trimmed = line.trim();
    if trimmed.is_empty() {
      break;
    }
    let request: i64 = trimmed.parse().map_err(|_| format!("invalid request: {trimmed:?}"))?;
    if request == 0 {
      return Err("request token must be nonzero".to_string());
    }

    if request > 0 {
      let n = request as usize;
      log::trace!("allocate({n})");
      let p = arena.allocate(n).map_err(|e| e.to_string())?;
      live.push(p);
      live.sort_by_key(|p| *p as usize);
    } else {
      let j = (-request) as usize;
      if j == 0 || j > live.len() {
        return Err(format!("deallocate index {j} out of range for {} live pointers", live.len()));
      }
      let p = live.remove(j - 1);
      log::trace!("deallocate(#{j})");
      arena.deallocate(p).map_err(|e| e.to_string())?;
    }
  }

  Ok(arena.begin().collect())
}
