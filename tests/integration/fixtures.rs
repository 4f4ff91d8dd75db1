//! Shared bar series

use callscan::feed::Bar;
use chrono::{Duration, TimeZone, Utc};

/// 15-minute bars opening at the previous close with a half-point wick
pub fn bars(closes: &[f64], volumes: &[f64]) -> Vec<Bar> {
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

/// 60 bars rising evenly from 100 to 130 on increasing volume
pub fn rising() -> Vec<Bar> {
    let closes: Vec<f64> = (0..60).map(|i| 100.0 + 30.0 * i as f64 / 59.0).collect();
    let volumes: Vec<f64> = (0..60).map(|i| 1000.0 + 10.0 * i as f64).collect();
    bars(&closes, &volumes)
}

/// 60 bars falling from 130 to 100, then a bounce to 102.5 on 5x volume
pub fn rebound() -> Vec<Bar> {
    let mut closes: Vec<f64> = (0..60).map(|i| 130.0 - 30.0 * i as f64 / 59.0).collect();
    closes.push(102.5);
    let mut volumes = vec![1000.0; 60];
    volumes.push(5000.0);
    bars(&closes, &volumes)
}
