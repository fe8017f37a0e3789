pub mod config;
pub mod deadline;
pub mod orchestrator;
pub mod primality;
pub mod range;
pub mod search;
pub mod sink;

pub use config::{Config, ConfigError};
pub use deadline::{Deadline, StopFlag, StopSignal};
pub use orchestrator::{run, RunSummary};
pub use primality::is_prime;
pub use range::{parse_ranges, Range, RangeError};
pub use sink::SinkOutcome;
