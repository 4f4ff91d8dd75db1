//! Indicator library
//!
//! Stateless transforms over a bar series. Every function returns a vector
//! aligned index-for-index with its input. Lookback-based indicators yield
//! `None` until their warm-up is satisfied; recursive ones (EMA, MACD) are
//! defined from the first bar.

mod atr;
mod bollinger;
mod ema;
mod macd;
mod rsi;
mod volume;

pub use atr::{atr, true_range};
pub use bollinger::{bollinger, BollingerBands};
pub use ema::{ema, EmaTriple};
pub use macd::{macd, MacdSeries};
pub use rsi::rsi;
pub use volume::volume_ratio;

/// Indicator output with an explicit undefined marker per bar
pub type Series = Vec<Option<f64>>;

/// Simple moving average over `period` values
pub fn sma(values: &[f64], period: usize) -> Series {
    rolling(values, period, |window| {
        Some(window.iter().sum::<f64>() / window.len() as f64)
    })
}

/// Sample standard deviation (divisor n - 1) over `period` values
pub fn rolling_std(values: &[f64], period: usize) -> Series {
    rolling(values, period, sample_std)
}

pub(crate) fn sample_std(window: &[f64]) -> Option<f64> {
    let n = window.len();
    if n < 2 {
        return None;
    }
    let mean = window.iter().sum::<f64>() / n as f64;
    let variance = window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1) as f64;
    Some(variance.sqrt())
}

fn rolling<F>(values: &[f64], period: usize, f: F) -> Series
where
    F: Fn(&[f64]) -> Option<f64>,
{
    let mut out = vec![None; values.len()];
    if period == 0 {
        return out;
    }
    for end in period..=values.len() {
        out[end - 1] = f(&values[end - period..end]);
    }
    out
}

#[cfg(test)]
pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
