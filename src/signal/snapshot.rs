//! Indicator readings at the latest two bars

use super::divergence::detect_divergence;
use super::Divergence;
use crate::config::IndicatorConfig;
use crate::feed::{closes, volumes, Bar};
use crate::indicators::{atr, bollinger, macd, rsi, volume_ratio, EmaTriple};

/// A value at the latest bar and the one before it
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Reading {
    pub current: Option<f64>,
    pub previous: Option<f64>,
}

impl Reading {
    pub fn new(current: f64, previous: f64) -> Self {
        Self {
            current: Some(current),
            previous: Some(previous),
        }
    }

    fn from_series(series: &[Option<f64>]) -> Self {
        let n = series.len();
        Self {
            current: n.checked_sub(1).and_then(|i| series[i]),
            previous: n.checked_sub(2).and_then(|i| series[i]),
        }
    }

    fn from_values(values: &[f64]) -> Self {
        let n = values.len();
        Self {
            current: n.checked_sub(1).map(|i| values[i]),
            previous: n.checked_sub(2).map(|i| values[i]),
        }
    }

    /// Both values, if both are defined
    pub fn pair(&self) -> Option<(f64, f64)> {
        Some((self.current?, self.previous?))
    }
}

/// Everything the scoring rules look at, computed fresh per call
#[derive(Debug, Clone, PartialEq)]
pub struct IndicatorSnapshot {
    pub close: Reading,
    pub rsi: Reading,
    pub macd_histogram: Reading,
    pub bollinger_upper: Option<f64>,
    pub bollinger_middle: Option<f64>,
    pub bollinger_lower: Option<f64>,
    pub ema_short: Reading,
    pub ema_medium: Reading,
    pub ema_long: Reading,
    pub atr: Option<f64>,
    pub volume_ratio: Option<f64>,
    pub divergence: Divergence,
}

impl IndicatorSnapshot {
    /// Compute all indicators over `bars` and keep the last two readings
    pub fn compute(bars: &[Bar], config: &IndicatorConfig) -> Self {
        let close = closes(bars);
        let volume = volumes(bars);

        let rsi_series = rsi(&close, config.rsi_period);
        let macd_series = macd(
            &close,
            config.macd_fast,
            config.macd_slow,
            config.macd_signal,
        );
        let bands = bollinger(&close, config.bollinger_period, config.bollinger_k);
        let emas = EmaTriple::new(
            &close,
            config.ema_short,
            config.ema_medium,
            config.ema_long,
        );
        let atr_series = atr(bars, config.atr_period);
        let ratio = volume_ratio(&volume, config.volume_period);
        let divergence = detect_divergence(&close, &rsi_series, config.divergence_window);

        Self {
            close: Reading::from_values(&close),
            rsi: Reading::from_series(&rsi_series),
            macd_histogram: Reading::from_values(&macd_series.histogram),
            bollinger_upper: last(&bands.upper),
            bollinger_middle: last(&bands.middle),
            bollinger_lower: last(&bands.lower),
            ema_short: Reading::from_values(&emas.short),
            ema_medium: Reading::from_values(&emas.medium),
            ema_long: Reading::from_values(&emas.long),
            atr: last(&atr_series),
            volume_ratio: last(&ratio),
            divergence,
        }
    }

    /// Snapshot with every reading undefined, useful as a starting point
    pub fn empty() -> Self {
        Self {
            close: Reading::default(),
            rsi: Reading::default(),
            macd_histogram: Reading::default(),
            bollinger_upper: None,
            bollinger_middle: None,
            bollinger_lower: None,
            ema_short: Reading::default(),
            ema_medium: Reading::default(),
            ema_long: Reading::default(),
            atr: None,
            volume_ratio: None,
            divergence: Divergence::Neutral,
        }
    }
}

fn last(series: &[Option<f64>]) -> Option<f64> {
    series.last().copied().flatten()
}
