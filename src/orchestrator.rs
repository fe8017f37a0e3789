//! # Orchestrator — Deadline, Workers, and Completion
//!
//! Fixes one [`Deadline`] for the whole run, then pairs every range with a
//! searcher thread and a sink task. All pairs share the same deadline and
//! nothing else. The orchestrator only waits: it never looks at a result, it
//! only counts how each sink finished.

use std::time::{Duration, Instant};
use tokio::task::JoinSet;
use tracing::{error, info, warn};

use crate::config::Config;
use crate::deadline::Deadline;
use crate::search;
use crate::sink::{self, SinkOutcome};

/// Per-run tally of sink outcomes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub written: usize,
    pub cancelled: usize,
    pub failed: usize,
    pub elapsed: Duration,
}

impl RunSummary {
    fn record(&mut self, outcome: SinkOutcome) {
        match outcome {
            SinkOutcome::Written { .. } => self.written += 1,
            SinkOutcome::Cancelled => self.cancelled += 1,
            SinkOutcome::Failed => self.failed += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.written + self.cancelled + self.failed
    }
}

/// Run every configured range to completion or to the deadline, whichever
/// comes first. Must be called inside a tokio runtime.
pub async fn run(config: &Config) -> RunSummary {
    let started = Instant::now();
    let deadline = Deadline::after(config.timeout);
    info!(
        ranges = config.ranges.len(),
        timeout_secs = config.timeout.as_secs(),
        output = %config.output.display(),
        "starting range search"
    );

    let mut summary = RunSummary::default();
    let mut sinks = JoinSet::new();
    for &range in &config.ranges {
        match search::spawn(range, deadline) {
            Ok(handle) => {
                sinks.spawn(sink::drain(config.output.clone(), handle));
            }
            Err(e) => {
                error!(range = %range, error = %e, "could not start searcher");
                summary.failed += 1;
            }
        }
    }

    let expiry = async {
        match deadline.instant() {
            Some(at) => tokio::time::sleep_until(at.into()).await,
            None => std::future::pending::<()>().await,
        }
    };
    tokio::pin!(expiry);
    let mut expired = false;

    loop {
        tokio::select! {
            joined = sinks.join_next() => match joined {
                Some(Ok(outcome)) => summary.record(outcome),
                Some(Err(e)) => {
                    error!(error = %e, "sink task aborted");
                    summary.failed += 1;
                }
                None => break,
            },
            _ = &mut expiry, if !expired => {
                expired = true;
                warn!(pending = sinks.len(), "deadline reached, stopping in-flight searches");
            }
        }
    }

    summary.elapsed = started.elapsed();
    info!(
        written = summary.written,
        cancelled = summary.cancelled,
        failed = summary.failed,
        elapsed_ms = summary.elapsed.as_millis() as u64,
        "range search finished"
    );
    summary
}
