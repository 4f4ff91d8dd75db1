//! Signal generation module
//!
//! Indicator snapshots, divergence detection and rule-based scoring

mod divergence;
mod scorer;
mod snapshot;
mod types;

pub use divergence::detect_divergence;
pub use scorer::{decide, SignalScorer};
pub use snapshot::{IndicatorSnapshot, Reading};
pub use types::{Direction, Divergence, ScoreError, ScoreResult};
