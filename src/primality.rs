//! # Primality — Cancellable Trial Division
//!
//! Deliberately naive: every divisor from 2 to `x/2` is tried, so the cost of
//! a single test is O(x). The stop signal is polled before every division,
//! which bounds how long a test can overrun the deadline to one modulo
//! operation. [`is_prime`] reports an interrupted test as `false`;
//! [`check`] keeps "stopped" apart from "composite" for callers that care.

use crate::deadline::StopSignal;

/// Outcome of one trial-division test.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Prime,
    Composite,
    /// The signal fired before every divisor was tried.
    Stopped,
}

pub fn check(x: i64, stop: &dyn StopSignal) -> Verdict {
    if x < 2 {
        return Verdict::Composite;
    }
    if x == 2 || x == 3 {
        return Verdict::Prime;
    }
    for divisor in 2..=x / 2 {
        if stop.is_stop_requested() {
            return Verdict::Stopped;
        }
        if x % divisor == 0 {
            return Verdict::Composite;
        }
    }
    Verdict::Prime
}

pub fn is_prime(x: i64, stop: &dyn StopSignal) -> bool {
    check(x, stop) == Verdict::Prime
}
