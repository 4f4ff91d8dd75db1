//! Signal scoring engine
//!
//! Fuses indicator readings into buy and sell point totals, picks a
//! direction and attaches risk levels.

use super::snapshot::IndicatorSnapshot;
use super::{Direction, Divergence, ScoreError, ScoreResult};
use crate::config::{Config, IndicatorConfig, RiskConfig, ScoringConfig};
use crate::feed::Bar;
use crate::risk::RiskCalculator;
use rust_decimal::Decimal;

/// Rule weights
const RSI_EXTREME: u32 = 20;
const RSI_EXIT: u32 = 25;
const MACD_CROSS: u32 = 25;
const MACD_RISING: u32 = 10;
const BOLLINGER_TOUCH: u32 = 20;
const EMA_STACK: u32 = 15;
const EMA_CROSS: u32 = 20;
const VOLUME_SPIKE: u32 = 15;
const DIVERGENCE: u32 = 15;

const MAX_SCORE: u32 = 100;

/// Point totals and fired-rule descriptions for one evaluation
#[derive(Debug, Default)]
struct Tally {
    buy: u32,
    sell: u32,
    signals: Vec<String>,
}

impl Tally {
    fn buy(&mut self, points: u32, signal: String) {
        self.buy += points;
        self.signals.push(signal);
    }

    fn sell(&mut self, points: u32, signal: String) {
        self.sell += points;
        self.signals.push(signal);
    }
}

/// Resolve point totals into a direction and score.
///
/// Equal totals, zero or not, always resolve to `Wait` with score 0.
pub fn decide(buy_points: u32, sell_points: u32) -> (Direction, u32) {
    if buy_points > sell_points {
        (Direction::Buy, buy_points.min(MAX_SCORE))
    } else if sell_points > buy_points {
        (Direction::Sell, sell_points.min(MAX_SCORE))
    } else {
        (Direction::Wait, 0)
    }
}

/// Scores bar series against the technical rule set
#[derive(Debug, Clone)]
pub struct SignalScorer {
    indicators: IndicatorConfig,
    scoring: ScoringConfig,
    risk: RiskCalculator,
}

impl SignalScorer {
    pub fn new(indicators: IndicatorConfig, scoring: ScoringConfig, risk: &RiskConfig) -> Self {
        Self {
            indicators,
            scoring,
            risk: RiskCalculator::new(risk),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.indicators.clone(),
            config.scoring.clone(),
            &config.risk,
        )
    }

    /// Bars required before any rule is evaluated
    pub fn warmup_len(&self) -> usize {
        self.indicators.warmup_len()
    }

    /// Score a bar series, oldest bar first.
    ///
    /// Series shorter than the warm-up return a neutral result without
    /// computing anything. Non-finite bar values are rejected.
    pub fn score(&self, bars: &[Bar]) -> Result<ScoreResult, ScoreError> {
        if bars.len() < self.warmup_len() {
            let price = bars
                .last()
                .and_then(|b| Decimal::try_from(b.close).ok())
                .unwrap_or_default();
            tracing::debug!(
                bars = bars.len(),
                required = self.warmup_len(),
                "Insufficient history, skipping evaluation"
            );
            return Ok(ScoreResult::neutral(price));
        }

        for (index, bar) in bars.iter().enumerate() {
            if let Some(field) = bar.non_finite_field() {
                return Err(ScoreError::MalformedInput { index, field });
            }
        }

        let snapshot = IndicatorSnapshot::compute(bars, &self.indicators);
        Ok(self.evaluate(&snapshot))
    }

    /// Apply the rule set to precomputed readings.
    ///
    /// Rules whose inputs are undefined do not fire.
    pub fn evaluate(&self, snapshot: &IndicatorSnapshot) -> ScoreResult {
        let mut tally = Tally::default();
        self.buy_rules(snapshot, &mut tally);
        self.sell_rules(snapshot, &mut tally);

        let (direction, score) = decide(tally.buy, tally.sell);
        let price = snapshot
            .close
            .current
            .and_then(|c| Decimal::try_from(c).ok())
            .unwrap_or_default();
        let levels = self.risk.levels(direction, price, snapshot.atr);

        tracing::debug!(
            buy_points = tally.buy,
            sell_points = tally.sell,
            %direction,
            score,
            "Evaluated signal rules"
        );

        ScoreResult {
            score,
            direction,
            price,
            stop: levels.map(|l| l.stop),
            target: levels.map(|l| l.target),
            rsi: snapshot.rsi.current.and_then(one_decimal),
            signals: tally.signals,
            buy_points: tally.buy,
            sell_points: tally.sell,
        }
    }

    fn buy_rules(&self, s: &IndicatorSnapshot, tally: &mut Tally) {
        let oversold = self.scoring.rsi_oversold;
        if let Some(rsi) = s.rsi.current {
            if rsi < oversold {
                tally.buy(
                    RSI_EXTREME,
                    format!("RSI oversold ({rsi:.1}), possible bullish reversal"),
                );
            } else if s.rsi.previous.is_some_and(|prev| prev < oversold) {
                tally.buy(
                    RSI_EXIT,
                    format!("RSI leaving oversold ({rsi:.1}), entry signal"),
                );
            }
        }

        if let Some((hist, prev)) = s.macd_histogram.pair() {
            if prev < 0.0 && hist > 0.0 {
                tally.buy(
                    MACD_CROSS,
                    "MACD bullish crossover, histogram turned positive".to_string(),
                );
            } else if hist > 0.0 && hist > prev {
                tally.buy(
                    MACD_RISING,
                    "MACD strengthening, histogram rising".to_string(),
                );
            }
        }

        if let (Some(close), Some(lower)) = (s.close.current, s.bollinger_lower) {
            if close <= lower {
                tally.buy(
                    BOLLINGER_TOUCH,
                    "Price at lower Bollinger band, possible bounce".to_string(),
                );
            }
        }

        if let (Some((short, short_prev)), Some((medium, medium_prev))) =
            (s.ema_short.pair(), s.ema_medium.pair())
        {
            if s.ema_long.current.is_some_and(|long| short > medium && medium > long) {
                tally.buy(EMA_STACK, format!("EMAs bullish stack ({})", self.ema_spans()));
            } else if short > medium && short_prev <= medium_prev {
                tally.buy(
                    EMA_CROSS,
                    format!(
                        "EMA {} crossed above EMA {}",
                        self.indicators.ema_short, self.indicators.ema_medium
                    ),
                );
            }
        }

        if let (Some(ratio), Some((close, prev))) = (s.volume_ratio, s.close.pair()) {
            if ratio >= self.scoring.volume_spike_factor && close > prev {
                tally.buy(
                    VOLUME_SPIKE,
                    format!("Volume spike {ratio:.1}x average on an up bar"),
                );
            }
        }

        if s.divergence == Divergence::Bullish {
            tally.buy(
                DIVERGENCE,
                "Bullish divergence between price and RSI".to_string(),
            );
        }
    }

    fn sell_rules(&self, s: &IndicatorSnapshot, tally: &mut Tally) {
        let overbought = self.scoring.rsi_overbought;
        if let Some(rsi) = s.rsi.current {
            if rsi > overbought {
                tally.sell(
                    RSI_EXTREME,
                    format!("RSI overbought ({rsi:.1}), possible bearish reversal"),
                );
            } else if s.rsi.previous.is_some_and(|prev| prev > overbought) {
                tally.sell(
                    RSI_EXIT,
                    format!("RSI leaving overbought ({rsi:.1}), exit or short signal"),
                );
            }
        }

        if let Some((hist, prev)) = s.macd_histogram.pair() {
            if prev > 0.0 && hist < 0.0 {
                tally.sell(
                    MACD_CROSS,
                    "MACD bearish crossover, histogram turned negative".to_string(),
                );
            }
        }

        if let (Some(close), Some(upper)) = (s.close.current, s.bollinger_upper) {
            if close >= upper {
                tally.sell(
                    BOLLINGER_TOUCH,
                    "Price at upper Bollinger band, possible top".to_string(),
                );
            }
        }

        if let (Some(short), Some(medium), Some(long)) =
            (s.ema_short.current, s.ema_medium.current, s.ema_long.current)
        {
            if short < medium && medium < long {
                tally.sell(EMA_STACK, format!("EMAs bearish stack ({})", self.ema_spans()));
            }
        }

        if let (Some(ratio), Some((close, prev))) = (s.volume_ratio, s.close.pair()) {
            if ratio >= self.scoring.volume_spike_factor && close < prev {
                tally.sell(
                    VOLUME_SPIKE,
                    format!("Volume spike {ratio:.1}x average on a down bar"),
                );
            }
        }

        if s.divergence == Divergence::Bearish {
            tally.sell(
                DIVERGENCE,
                "Bearish divergence between price and RSI".to_string(),
            );
        }
    }

    fn ema_spans(&self) -> String {
        format!(
            "{}/{}/{}",
            self.indicators.ema_short, self.indicators.ema_medium, self.indicators.ema_long
        )
    }
}

/// Round the way `{:.1}` renders, half to even, so the reported value
/// matches the signal text
fn one_decimal(value: f64) -> Option<f64> {
    format!("{value:.1}").parse().ok()
}

impl Default for SignalScorer {
    fn default() -> Self {
        Self::from_config(&Config::default())
    }
}
