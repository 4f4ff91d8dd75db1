//! Risk module
//!
//! Volatility-based stop-loss and take-profit levels

mod levels;

pub use levels::{RiskCalculator, RiskLevels};
