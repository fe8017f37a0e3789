//! # Deadline — Cooperative Cancellation Signal
//!
//! Every searcher and every primality test polls a [`StopSignal`] at a fixed
//! granularity (once per candidate, once per trial division). Nothing is ever
//! interrupted preemptively: a worker notices the signal on its next poll and
//! unwinds on its own.
//!
//! Two implementations:
//!
//! - [`Deadline`]: the process-wide wall-clock cutoff. `Copy`, read-only,
//!   created once by the orchestrator from the configured timeout.
//! - [`StopFlag`]: an explicitly raised flag, used where a caller needs to stop
//!   work at a chosen moment rather than at a fixed instant.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Polled by long-running work to decide whether to keep going.
pub trait StopSignal: Send + Sync {
    fn is_stop_requested(&self) -> bool;
}

impl<T: StopSignal + ?Sized> StopSignal for Arc<T> {
    fn is_stop_requested(&self) -> bool {
        (**self).is_stop_requested()
    }
}

impl<T: StopSignal + ?Sized> StopSignal for &T {
    fn is_stop_requested(&self) -> bool {
        (**self).is_stop_requested()
    }
}

/// Instant after which all in-flight searches must stop producing results.
///
/// `None` means the timeout was too large to represent; such a deadline never
/// expires and the run ends only when every range completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Deadline {
    at: Option<Instant>,
}

impl Deadline {
    /// Deadline `timeout` from now.
    pub fn after(timeout: Duration) -> Self {
        Deadline {
            at: Instant::now().checked_add(timeout),
        }
    }

    pub fn never() -> Self {
        Deadline { at: None }
    }

    pub fn instant(&self) -> Option<Instant> {
        self.at
    }

    pub fn is_expired(&self) -> bool {
        match self.at {
            Some(at) => Instant::now() >= at,
            None => false,
        }
    }
}

impl StopSignal for Deadline {
    fn is_stop_requested(&self) -> bool {
        self.is_expired()
    }
}

/// Manually raised stop signal. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct StopFlag {
    raised: Arc<AtomicBool>,
}

impl StopFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn raise(&self) {
        self.raised.store(true, Ordering::Relaxed);
    }
}

impl StopSignal for StopFlag {
    fn is_stop_requested(&self) -> bool {
        self.raised.load(Ordering::Relaxed)
    }
}
