//! Scoring path end to end

use crate::fixtures::{bars, rebound, rising};
use callscan::config::Config;
use callscan::notify::{format_call, AssetCategory};
use callscan::signal::{Direction, ScoreError, SignalScorer};
use chrono::{TimeZone, Utc};
use rust_decimal_macros::dec;

#[test]
fn test_short_series_is_neutral() {
    let scorer = SignalScorer::default();
    let result = scorer.score(&rising()[..54]).unwrap();

    assert_eq!(result.direction, Direction::Wait);
    assert_eq!(result.score, 0);
    assert!(result.signals.is_empty());
    assert!(result.stop.is_none());
    assert!(result.target.is_none());
}

#[test]
fn test_rising_series_fires_bullish_stack() {
    let result = SignalScorer::default().score(&rising()).unwrap();

    assert!(result
        .signals
        .iter()
        .any(|s| s == "EMAs bullish stack (9/21/50)"));
    assert_eq!(result.buy_points, 15);
    assert_eq!(result.price, dec!(130));
    let rsi = result.rsi.unwrap();
    assert!((0.0..=100.0).contains(&rsi));
}

#[test]
fn test_rising_series_risk_levels() {
    let result = SignalScorer::default().score(&rising()).unwrap();

    // Overbought RSI outweighs the EMA stack
    assert_eq!(result.direction, Direction::Sell);
    assert_eq!(result.score, 20);
    assert_eq!(result.stop, Some(dec!(132.2627)));
    assert_eq!(result.target, Some(dec!(125.4746)));
}

#[test]
fn test_rebound_is_buy() {
    let result = SignalScorer::default().score(&rebound()).unwrap();

    assert_eq!(result.direction, Direction::Buy);
    assert_eq!(result.score, 60);
    assert_eq!(result.stop, Some(dec!(100.0239)));
    assert_eq!(result.target, Some(dec!(107.4522)));
    assert!(!result.is_call(65));
    assert!(result.is_call(60));
}

#[test]
fn test_scoring_is_deterministic() {
    let scorer = SignalScorer::default();
    let series = rebound();
    assert_eq!(scorer.score(&series).unwrap(), scorer.score(&series).unwrap());
}

#[test]
fn test_flat_series_ties_to_wait() {
    let series = bars(&[100.0; 60], &[1000.0; 60]);
    let result = SignalScorer::default().score(&series).unwrap();

    assert_eq!(result.direction, Direction::Wait);
    assert_eq!(result.score, 0);
    assert!(result.buy_points > 0);
    assert_eq!(result.buy_points, result.sell_points);
}

#[test]
fn test_non_finite_bar_rejected() {
    let mut series = rising();
    series[12].volume = f64::INFINITY;

    let err = SignalScorer::default().score(&series).unwrap_err();
    assert_eq!(
        err,
        ScoreError::MalformedInput {
            index: 12,
            field: "volume"
        }
    );
}

#[test]
fn test_longer_warmup_from_config() {
    let mut config = Config::default();
    config.indicators.ema_long = 60;

    let scorer = SignalScorer::from_config(&config);
    assert_eq!(scorer.warmup_len(), 65);
    let result = scorer.score(&rebound()).unwrap();
    assert_eq!(result.direction, Direction::Wait);
    assert!(result.signals.is_empty());
}

#[test]
fn test_call_message_shows_levels() {
    let result = SignalScorer::default().score(&rebound()).unwrap();
    let now = Utc.with_ymd_and_hms(2026, 3, 2, 15, 0, 0).unwrap();

    let message = format_call("PETR4.SA", AssetCategory::BrEquity, &result, now);
    assert!(message.contains("CALL - PETR4.SA"));
    assert!(message.contains("Score: 60/100"));
    assert!(message.contains("Entry: R$102.50"));
    assert!(message.contains("Stop loss: R$100.02"));
    assert!(message.contains("Take profit: R$107.45"));
}
