//! # Main — CLI Entry Point
//!
//! Parses flags, initialises logging, and hands off to [`cli::run`]. The
//! single-dash long flags of the older tool (`-file`, `-timeout`, `-range`)
//! are rewritten to their `--` spelling before clap sees them.
//!
//! ## Options
//!
//! - `--file` / `PRIMESCAN_FILE`: output file, appended to (default `results.txt`).
//! - `--timeout` / `PRIMESCAN_TIMEOUT`: whole seconds until every search stops (default 10).
//! - `--range X:Y`: inclusive range to search; repeat for more ranges.
//!
//! `LOG_FORMAT=json` switches logs to JSON; `RUST_LOG` sets the level.

mod cli;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use primescan::config::{DEFAULT_FILE, DEFAULT_TIMEOUT_SECS};

#[global_allocator]
static GLOBAL: mimalloc::MiMalloc = mimalloc::MiMalloc;

#[derive(Parser)]
#[command(
    name = "primescan",
    about = "Find the primes in integer ranges before a deadline"
)]
struct Cli {
    /// Path to the file found primes are appended to
    #[arg(short, long, env = "PRIMESCAN_FILE", default_value = DEFAULT_FILE)]
    file: PathBuf,

    /// Seconds after which every unfinished search is abandoned
    #[arg(
        short,
        long,
        env = "PRIMESCAN_TIMEOUT",
        default_value = DEFAULT_TIMEOUT_SECS,
        allow_hyphen_values = true
    )]
    timeout: String,

    /// Range to search, as X:Y with X < Y (repeat for several ranges)
    #[arg(short, long = "range", value_name = "X:Y", allow_hyphen_values = true)]
    ranges: Vec<String>,
}

fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    // LOG_FORMAT=json for log shippers, human-readable otherwise. Both go to
    // stderr: stdout is reserved for configuration diagnostics.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_default();
    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    }

    let cli = Cli::parse_from(cli::normalize_args(std::env::args_os()));
    cli::run(&cli)
}
