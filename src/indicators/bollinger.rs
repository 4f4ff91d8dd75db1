//! Bollinger bands

use super::{rolling_std, sma, Series};

#[derive(Debug, Clone)]
pub struct BollingerBands {
    pub upper: Series,
    pub middle: Series,
    pub lower: Series,
}

/// SMA envelope at `k` sample standard deviations.
///
/// A window with zero deviation collapses all three bands onto the middle.
pub fn bollinger(closes: &[f64], period: usize, k: f64) -> BollingerBands {
    let middle = sma(closes, period);
    let deviation = rolling_std(closes, period);

    let band = |sign: f64| -> Series {
        middle
            .iter()
            .zip(&deviation)
            .map(|(&m, &d)| Some(m? + sign * k * d?))
            .collect()
    };
    let upper = band(1.0);
    let lower = band(-1.0);

    BollingerBands {
        upper,
        middle,
        lower,
    }
}
