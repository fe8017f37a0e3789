//! Shared test helpers for integration tests.

#![allow(dead_code)]

use assert_cmd::Command;
use std::path::Path;

/// The `primescan` binary, run inside `dir` with any inherited
/// configuration variables cleared so a stray `.env` or shell export cannot
/// change the outcome.
#[allow(deprecated)]
pub fn primescan_in(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("primescan").unwrap();
    cmd.current_dir(dir)
        .env_remove("PRIMESCAN_FILE")
        .env_remove("PRIMESCAN_TIMEOUT")
        .env_remove("LOG_FORMAT")
        .env_remove("RUST_LOG");
    cmd
}

/// Whitespace-separated integers in the output file, sorted.
pub fn sorted_tokens(path: &Path) -> Vec<i64> {
    let mut tokens: Vec<i64> = std::fs::read_to_string(path)
        .unwrap()
        .split_whitespace()
        .map(|t| t.parse().unwrap())
        .collect();
    tokens.sort_unstable();
    tokens
}
