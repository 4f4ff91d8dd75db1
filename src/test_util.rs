//! Bar series builders shared by unit tests

use crate::feed::Bar;
use chrono::{Duration, TimeZone, Utc};

/// 15-minute bars opening at the previous close, with a half-point wick
/// above and below the body.
pub(crate) fn bars(closes: &[f64], volumes: &[f64]) -> Vec<Bar> {
    assert_eq!(closes.len(), volumes.len());
    let start = Utc.with_ymd_and_hms(2026, 3, 2, 13, 0, 0).unwrap();
    closes
        .iter()
        .zip(volumes)
        .enumerate()
        .map(|(i, (&close, &volume))| {
            let open = if i == 0 { close } else { closes[i - 1] };
            Bar {
                timestamp: start + Duration::minutes(15 * i as i64),
                open,
                high: open.max(close) + 0.5,
                low: open.min(close) - 0.5,
                close,
                volume,
            }
        })
        .collect()
}

/// 60 closes rising evenly from 100 to 130
pub(crate) fn rising_closes() -> Vec<f64> {
    (0..60).map(|i| 100.0 + 30.0 * i as f64 / 59.0).collect()
}
