//! # Search — One Worker per Range
//!
//! [`spawn`] starts a dedicated thread that walks a [`Range`] in ascending
//! order and hands back a [`SearchHandle`] immediately. The thread delivers
//! at most one value through a `tokio::sync::oneshot` channel:
//!
//! - the whole range was scanned: the primes found, each followed by a
//!   single space (`"2 3 5 7 "`);
//! - the stop signal fired first: the sender is dropped unsent and the
//!   receiver sees a closed, empty channel.
//!
//! The two outcomes are distinct and neither is an error.

use std::fmt::Write as _;
use std::io;
use std::thread;
use std::time::Instant;
use tokio::sync::oneshot;
use tracing::debug;

use crate::deadline::StopSignal;
use crate::primality::{check, Verdict};
use crate::range::Range;

/// Receiving end of one searcher.
#[derive(Debug)]
pub struct SearchHandle {
    range: Range,
    rx: oneshot::Receiver<String>,
}

impl SearchHandle {
    pub fn range(&self) -> Range {
        self.range
    }

    /// Wait for the searcher. `None` means it was stopped before finishing.
    pub async fn recv(self) -> Option<String> {
        self.rx.await.ok()
    }

    #[cfg(test)]
    pub fn blocking_recv(self) -> Option<String> {
        self.rx.blocking_recv().ok()
    }
}

/// Start searching `range` on a new thread. Fails only if the OS refuses to
/// create the thread.
pub fn spawn<S>(range: Range, signal: S) -> io::Result<SearchHandle>
where
    S: StopSignal + 'static,
{
    let (tx, rx) = oneshot::channel();
    thread::Builder::new()
        .name(format!("search-{range}"))
        .spawn(move || {
            let started = Instant::now();
            match collect_primes(range, &signal) {
                Some(found) => {
                    debug!(
                        range = %range,
                        candidates = range.len(),
                        bytes = found.len(),
                        elapsed_ms = started.elapsed().as_millis() as u64,
                        "range search complete"
                    );
                    // Receiver gone means nobody wants the result.
                    let _ = tx.send(found);
                }
                None => {
                    debug!(range = %range, "range search stopped before completion");
                }
            }
        })?;
    Ok(SearchHandle { range, rx })
}

/// Scan `range` synchronously. Returns `None` if `stop` fires before a
/// candidate is tested or while one is being tested, so a returned string is
/// never a partial result. A scan whose last test finished is always kept.
pub fn collect_primes(range: Range, stop: &dyn StopSignal) -> Option<String> {
    let mut found = String::new();
    for candidate in range.min()..=range.max() {
        if stop.is_stop_requested() {
            return None;
        }
        match check(candidate, stop) {
            Verdict::Prime => {
                let _ = write!(found, "{candidate} ");
            }
            Verdict::Composite => {}
            Verdict::Stopped => return None,
        }
    }
    Some(found)
}
