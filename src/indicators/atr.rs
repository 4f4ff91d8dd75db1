//! Average true range

use super::{sma, Series};
use crate::feed::Bar;

/// True range per bar. The first bar has no previous close and uses
/// `high - low`.
pub fn true_range(bars: &[Bar]) -> Vec<f64> {
    bars.iter()
        .enumerate()
        .map(|(i, bar)| {
            let range = bar.high - bar.low;
            match i.checked_sub(1).map(|p| bars[p].close) {
                Some(prev_close) => range
                    .max((bar.high - prev_close).abs())
                    .max((bar.low - prev_close).abs()),
                None => range,
            }
        })
        .collect()
}

/// Simple (not Wilder) average of the true range over `period` bars
pub fn atr(bars: &[Bar], period: usize) -> Series {
    sma(&true_range(bars), period)
}
