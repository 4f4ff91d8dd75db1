//! Options setup advisor
//!
//! Turns a directional call on an underlying into a simple options
//! structure, picking outright options when realized volatility is low and
//! vertical spreads when it is high.

use crate::config::{AssetOptionsConfig, OptionsConfig};
use crate::feed::Bar;
use crate::indicators::sample_std;
use crate::notify::{format_price, AssetCategory};
use crate::signal::{Direction, ScoreResult};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::Serialize;

/// Suggested options structure with strikes
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub enum OptionsStrategy {
    /// Out-of-the-money call about 5% above spot
    LongCall { strike: Decimal },
    BullCallSpread {
        long_strike: Decimal,
        short_strike: Decimal,
    },
    /// Out-of-the-money put about 5% below spot
    LongPut { strike: Decimal },
    BearPutSpread {
        long_strike: Decimal,
        short_strike: Decimal,
    },
}

impl OptionsStrategy {
    pub fn name(&self) -> &'static str {
        match self {
            OptionsStrategy::LongCall { .. } => "LONG CALL",
            OptionsStrategy::BullCallSpread { .. } => "BULL CALL SPREAD",
            OptionsStrategy::LongPut { .. } => "LONG PUT",
            OptionsStrategy::BearPutSpread { .. } => "BEAR PUT SPREAD",
        }
    }

    /// How to put the position on, with strikes quoted for `category`
    pub fn describe(&self, category: AssetCategory) -> String {
        let px = |p: Decimal| format_price(p, category);
        match self {
            OptionsStrategy::LongCall { strike } => {
                format!("Buy an OTM call ~5% above spot (strike ~{})", px(*strike))
            }
            OptionsStrategy::BullCallSpread {
                long_strike,
                short_strike,
            } => format!(
                "Buy call strike {} + sell call strike {}",
                px(*long_strike),
                px(*short_strike)
            ),
            OptionsStrategy::LongPut { strike } => {
                format!("Buy an OTM put ~5% below spot (strike ~{})", px(*strike))
            }
            OptionsStrategy::BearPutSpread {
                long_strike,
                short_strike,
            } => format!(
                "Buy put strike {} + sell put strike {}",
                px(*long_strike),
                px(*short_strike)
            ),
        }
    }
}

/// An options suggestion for one underlying
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OptionsSetup {
    pub asset: String,
    pub direction: Direction,
    pub strategy: OptionsStrategy,
    /// Annualized realized volatility in percent, one decimal
    pub historical_vol_pct: Decimal,
}

/// Suggests options setups from scored underlyings
#[derive(Debug, Clone)]
pub struct OptionsAdvisor {
    config: OptionsConfig,
}

impl OptionsAdvisor {
    pub fn new(config: OptionsConfig) -> Self {
        Self { config }
    }

    /// Bars per year for an asset's options series
    pub fn periods_per_year(&self, asset: &AssetOptionsConfig) -> f64 {
        asset
            .periods_per_year
            .unwrap_or(self.config.periods_per_year)
    }

    /// Suggest a setup from the scored options series, or `None` when the
    /// call is too weak, the direction is `Wait`, or volatility cannot be
    /// estimated.
    pub fn suggest(
        &self,
        asset: &str,
        options: &AssetOptionsConfig,
        bars: &[Bar],
        result: &ScoreResult,
    ) -> Option<OptionsSetup> {
        if result.score < self.config.min_score {
            return None;
        }

        let vol = historical_volatility(bars, self.periods_per_year(options))?;
        let high_vol = vol >= self.config.high_vol_threshold;
        let price = result.price;
        let strike = |mult: Decimal| (price * mult).round_dp(2);

        let strategy = match (result.direction, high_vol) {
            (Direction::Buy, false) => OptionsStrategy::LongCall {
                strike: strike(dec!(1.05)),
            },
            (Direction::Buy, true) => OptionsStrategy::BullCallSpread {
                long_strike: strike(dec!(1.02)),
                short_strike: strike(dec!(1.07)),
            },
            (Direction::Sell, false) => OptionsStrategy::LongPut {
                strike: strike(dec!(0.95)),
            },
            (Direction::Sell, true) => OptionsStrategy::BearPutSpread {
                long_strike: strike(dec!(0.98)),
                short_strike: strike(dec!(0.93)),
            },
            (Direction::Wait, _) => return None,
        };

        let historical_vol_pct = Decimal::try_from(vol * 100.0).ok()?.round_dp(1);
        tracing::debug!(
            asset,
            strategy = strategy.name(),
            %historical_vol_pct,
            "Options setup"
        );

        Some(OptionsSetup {
            asset: asset.to_string(),
            direction: result.direction,
            strategy,
            historical_vol_pct,
        })
    }
}

/// Sample standard deviation of simple close-to-close returns, annualized
/// by `sqrt(periods_per_year)`
pub fn historical_volatility(bars: &[Bar], periods_per_year: f64) -> Option<f64> {
    let returns: Vec<f64> = bars
        .windows(2)
        .filter(|w| w[0].close != 0.0)
        .map(|w| w[1].close / w[0].close - 1.0)
        .collect();
    sample_std(&returns).map(|sd| sd * periods_per_year.sqrt())
}

impl Default for OptionsAdvisor {
    fn default() -> Self {
        Self::new(OptionsConfig::default())
    }
}
