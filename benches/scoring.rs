//! Benchmarks for the scoring path

use callscan::feed::Bar;
use callscan::indicators::{atr, ema, rsi};
use callscan::signal::SignalScorer;
use chrono::{Duration, TimeZone, Utc};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn series(len: usize) -> Vec<Bar> {
    let start = Utc.with_ymd_and_hms(2026, 1, 5, 13, 0, 0).unwrap();
    (0..len)
        .map(|i| {
            let t = i as f64;
            let close = 100.0 + 5.0 * (t / 7.0).sin() + 0.05 * t;
            let open = close - 0.3 * (t / 3.0).cos();
            Bar {
                timestamp: start + Duration::minutes(15 * i as i64),
                open,
                high: open.max(close) + 0.4,
                low: open.min(close) - 0.4,
                close,
                volume: 1000.0 + 200.0 * (t / 5.0).sin().abs(),
            }
        })
        .collect()
}

fn benchmark_score(c: &mut Criterion) {
    let scorer = SignalScorer::default();
    let bars = series(200);

    c.bench_function("score_200_bars", |b| {
        b.iter(|| scorer.score(black_box(&bars)))
    });
}

fn benchmark_indicators(c: &mut Criterion) {
    let bars = series(500);
    let closes: Vec<f64> = bars.iter().map(|b| b.close).collect();

    c.bench_function("rsi_500", |b| b.iter(|| rsi(black_box(&closes), 14)));
    c.bench_function("ema_500", |b| b.iter(|| ema(black_box(&closes), 21)));
    c.bench_function("atr_500", |b| b.iter(|| atr(black_box(&bars), 14)));
}

criterion_group!(benches, benchmark_score, benchmark_indicators);
criterion_main!(benches);
