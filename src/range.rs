//! # Range — Parsing `X:Y` Search Ranges
//!
//! Turns the raw `--range` tokens into validated [`Range`] values. A range is
//! an inclusive `[min, max]` interval with `min < max`; the only way to build
//! one is through [`Range::new`], [`str::parse`], or [`parse_ranges`], so every
//! `Range` in the program already satisfies the invariant.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RangeError {
    #[error("range shouldn't be empty")]
    Empty,

    /// Wrong number of `:` separated parts, or `min >= max`.
    #[error("range should be in the format 'X:Y', where X and Y are int and X<Y (got '{0}')")]
    Format(String),

    #[error("invalid range bound '{bound}' in '{token}': {source}")]
    Bound {
        token: String,
        bound: String,
        #[source]
        source: ParseIntError,
    },
}

/// Inclusive integer interval searched by one worker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    min: i64,
    max: i64,
}

impl Range {
    pub fn new(min: i64, max: i64) -> Result<Self, RangeError> {
        if min >= max {
            return Err(RangeError::Format(format!("{min}:{max}")));
        }
        Ok(Range { min, max })
    }

    pub fn min(&self) -> i64 {
        self.min
    }

    pub fn max(&self) -> i64 {
        self.max
    }

    /// Number of candidates in the range.
    pub(crate) fn len(&self) -> u64 {
        self.max.abs_diff(self.min).saturating_add(1)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.min, self.max)
    }
}

impl FromStr for Range {
    type Err = RangeError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        let token = raw.trim();
        let mut parts = token.split(':');
        let (Some(lo), Some(hi), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(RangeError::Format(token.to_string()));
        };

        let bound = |part: &str| {
            part.parse::<i64>().map_err(|source| RangeError::Bound {
                token: token.to_string(),
                bound: part.to_string(),
                source,
            })
        };
        let (min, max) = (bound(lo)?, bound(hi)?);

        if min >= max {
            return Err(RangeError::Format(token.to_string()));
        }
        Ok(Range { min, max })
    }
}

/// Parse every raw token, preserving order. The first bad token fails the
/// whole set.
pub fn parse_ranges<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<Range>, RangeError> {
    if tokens.is_empty() {
        return Err(RangeError::Empty);
    }
    tokens.iter().map(|t| t.as_ref().parse()).collect()
}
