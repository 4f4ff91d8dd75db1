//! callscan: technical signal scoring with cooldown-gated trade calls
//!
//! This library provides the core components for:
//! - Technical indicators over OHLCV bars (RSI, MACD, Bollinger, EMA, ATR, volume)
//! - Rule-based buy/sell scoring with ATR risk levels
//! - Per-asset, per-direction re-emission cooldown
//! - Call, options setup and daily summary messages
//! - Scan cycles over a configured asset list
//! - Structured logging and Prometheus metrics

pub mod cli;
pub mod config;
pub mod feed;
pub mod gate;
pub mod indicators;
pub mod notify;
pub mod options;
pub mod risk;
pub mod scanner;
pub mod signal;
pub mod summary;
pub mod telemetry;

#[cfg(test)]
mod test_util;
