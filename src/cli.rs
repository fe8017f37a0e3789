//! # CLI Execution
//!
//! Turns parsed flags into a [`Config`], reports configuration errors, and
//! drives the orchestrator on a tokio runtime.

use anyhow::Result;
use primescan::{orchestrator, Config};
use std::ffi::OsString;
use tracing::debug;

use super::Cli;

/// Long flags that the older tool accepted with a single dash.
const LONG_FLAGS: [&str; 3] = ["file", "timeout", "range"];

/// Rewrite `-file`, `-timeout=5`, `-range 2:9` to their `--` forms. Everything
/// after a bare `--` is left alone, as are values such as `-5:5`.
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    let mut passthrough = false;
    args.into_iter()
        .map(|arg| {
            if passthrough {
                return arg;
            }
            let Some(s) = arg.to_str() else {
                return arg;
            };
            if s == "--" {
                passthrough = true;
                return arg;
            }
            match s.strip_prefix('-') {
                Some(rest) if !rest.starts_with('-') => {
                    let name = rest.split_once('=').map_or(rest, |(name, _)| name);
                    if LONG_FLAGS.contains(&name) {
                        OsString::from(format!("--{rest}"))
                    } else {
                        arg
                    }
                }
                _ => arg,
            }
        })
        .collect()
}

/// Validate configuration and run the search. Configuration errors are
/// printed to stdout and end the run without error; nothing is started.
pub fn run(cli: &Cli) -> Result<()> {
    let config = match Config::from_raw(cli.file.clone(), &cli.timeout, &cli.ranges) {
        Ok(config) => config,
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    };

    let rt = tokio::runtime::Runtime::new()?;
    let summary = rt.block_on(orchestrator::run(&config));
    debug!(total = summary.total(), "all sinks finished");
    Ok(())
}
