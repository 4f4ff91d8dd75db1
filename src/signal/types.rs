//! Signal types

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Call direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Go long
    Buy,
    /// Sell or go short
    Sell,
    /// No actionable setup
    Wait,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Direction::Buy => "BUY",
            Direction::Sell => "SELL/SHORT",
            Direction::Wait => "WAIT",
        };
        f.write_str(label)
    }
}

/// Price/RSI divergence over the trailing window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Divergence {
    /// Price lower, RSI higher
    Bullish,
    /// Price higher, RSI lower
    Bearish,
    Neutral,
}

/// Outcome of scoring one bar series
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// Confidence, 0 to 100
    pub score: u32,
    pub direction: Direction,
    /// Close of the latest bar
    pub price: Decimal,
    /// Suggested stop-loss, absent for `Wait`
    pub stop: Option<Decimal>,
    /// Suggested take-profit, absent for `Wait`
    pub target: Option<Decimal>,
    /// Latest RSI rounded to one decimal, absent when undefined
    pub rsi: Option<f64>,
    /// Descriptions of the rules that fired, in evaluation order
    pub signals: Vec<String>,
    pub buy_points: u32,
    pub sell_points: u32,
}

impl ScoreResult {
    /// Result for a series too short to score
    pub fn neutral(price: Decimal) -> Self {
        Self {
            score: 0,
            direction: Direction::Wait,
            price,
            stop: None,
            target: None,
            rsi: None,
            signals: Vec::new(),
            buy_points: 0,
            sell_points: 0,
        }
    }

    /// Whether this result is strong enough to become a call
    pub fn is_call(&self, min_score: u32) -> bool {
        self.direction != Direction::Wait && self.score >= min_score
    }
}

/// Scoring errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScoreError {
    /// A bar carries a NaN or infinite value
    #[error("Malformed bar at index {index}: {field} is not finite")]
    MalformedInput { index: usize, field: &'static str },
}
