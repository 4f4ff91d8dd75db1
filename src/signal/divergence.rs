//! Price/RSI divergence detection
//!
//! A coarse two-point comparison of the first and last values in the
//! trailing window, not a swing high/low detector.

use super::Divergence;

/// Classify divergence over the last `window` bars.
///
/// Needs at least `2 * window` bars, otherwise neutral. An undefined RSI at
/// either end of the window is neutral too.
pub fn detect_divergence(closes: &[f64], rsi: &[Option<f64>], window: usize) -> Divergence {
    let n = closes.len();
    if window == 0 || n < window * 2 || rsi.len() != n {
        return Divergence::Neutral;
    }

    let first = n - window;
    let last = n - 1;
    let (Some(rsi_first), Some(rsi_last)) = (rsi[first], rsi[last]) else {
        return Divergence::Neutral;
    };

    let price_change = closes[last] - closes[first];
    if price_change < 0.0 && rsi_last > rsi_first {
        Divergence::Bullish
    } else if price_change > 0.0 && rsi_last < rsi_first {
        Divergence::Bearish
    } else {
        Divergence::Neutral
    }
}
