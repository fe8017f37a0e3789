//! # Config — Validated Run Configuration
//!
//! Raw values come from the CLI (and the environment, through clap). They are
//! validated once into an immutable [`Config`] before any worker starts; every
//! failure here is fatal to the run and reported as a single message.

use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

use crate::range::{parse_ranges, Range, RangeError};

pub const DEFAULT_FILE: &str = "results.txt";
pub const DEFAULT_TIMEOUT_SECS: &str = "10";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("timeout should be int")]
    Timeout(String),

    #[error(transparent)]
    Range(#[from] RangeError),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub output: PathBuf,
    pub timeout: Duration,
    pub ranges: Vec<Range>,
}

impl Config {
    /// Validate raw CLI values. The timeout is checked before the ranges, so a
    /// run with both wrong reports the timeout.
    pub fn from_raw<S: AsRef<str>>(
        output: PathBuf,
        timeout: &str,
        ranges: &[S],
    ) -> Result<Self, ConfigError> {
        let timeout = parse_timeout(timeout)?;
        let ranges = parse_ranges(ranges)?;
        Ok(Config {
            output,
            timeout,
            ranges,
        })
    }
}

/// Whole seconds. Zero or negative values are accepted and mean the deadline
/// has already passed when the run starts.
pub fn parse_timeout(raw: &str) -> Result<Duration, ConfigError> {
    let secs: i64 = raw
        .trim()
        .parse()
        .map_err(|_| ConfigError::Timeout(raw.to_string()))?;
    Ok(Duration::from_secs(secs.max(0) as u64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_from_valid_values() {
        let cfg = Config::from_raw("out.txt".into(), "5", &["2:5", "10:15"]).unwrap();
        assert_eq!(cfg.output, PathBuf::from("out.txt"));
        assert_eq!(cfg.timeout, Duration::from_secs(5));
        assert_eq!(cfg.ranges.len(), 2);
        assert_eq!(cfg.ranges[1].to_string(), "10:15");
    }

    #[test]
    fn default_timeout_parses() {
        assert_eq!(
            parse_timeout(DEFAULT_TIMEOUT_SECS).unwrap(),
            Duration::from_secs(10)
        );
    }

    #[test]
    fn non_integer_timeout_is_rejected() {
        for bad in ["", "ten", "1.5", "5s", "0x10"] {
            assert_eq!(
                parse_timeout(bad),
                Err(ConfigError::Timeout(bad.to_string())),
                "accepted {bad:?}"
            );
        }
    }

    #[test]
    fn timeout_message_is_exact() {
        assert_eq!(
            parse_timeout("ten").unwrap_err().to_string(),
            "timeout should be int"
        );
    }

    #[test]
    fn negative_timeout_clamps_to_zero() {
        assert_eq!(parse_timeout("-3").unwrap(), Duration::ZERO);
    }

    #[test]
    fn timeout_error_reported_before_range_error() {
        let none: [&str; 0] = [];
        let err = Config::from_raw(DEFAULT_FILE.into(), "x", &none).unwrap_err();
        assert!(matches!(err, ConfigError::Timeout(_)));
    }

    #[test]
    fn range_errors_pass_through_unchanged() {
        let none: [&str; 0] = [];
        let err = Config::from_raw(DEFAULT_FILE.into(), "1", &none).unwrap_err();
        assert_eq!(err, ConfigError::Range(RangeError::Empty));
        assert_eq!(err.to_string(), "range shouldn't be empty");

        let err = Config::from_raw(DEFAULT_FILE.into(), "1", &["10:10"]).unwrap_err();
        assert!(err.to_string().starts_with("range should be in the format"));
    }
}
