//! Volume ratio

use super::{sma, Series};

/// Current volume over its `period`-bar simple average.
///
/// `None` during warm-up and wherever the average volume is zero.
pub fn volume_ratio(volumes: &[f64], period: usize) -> Series {
    volumes
        .iter()
        .zip(sma(volumes, period))
        .map(|(v, avg)| avg.filter(|a| *a != 0.0).map(|a| v / a))
        .collect()
}
