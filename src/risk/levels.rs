//! ATR-based stop and target levels

use crate::config::RiskConfig;
use crate::signal::Direction;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Decimal places kept on stop and target
const LEVEL_DP: u32 = 4;

/// Suggested exit levels for a call
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RiskLevels {
    pub stop: Decimal,
    pub target: Decimal,
}

/// Derives stop/target from the entry price and current ATR
#[derive(Debug, Clone)]
pub struct RiskCalculator {
    stop_mult: Decimal,
    target_mult: Decimal,
}

impl RiskCalculator {
    pub fn new(config: &RiskConfig) -> Self {
        Self {
            stop_mult: config.stop_atr_mult,
            target_mult: config.target_atr_mult,
        }
    }

    /// Levels for a call, or `None` for `Wait` and undefined ATR.
    ///
    /// Buy: stop below, target above. Sell: mirrored.
    pub fn levels(
        &self,
        direction: Direction,
        price: Decimal,
        atr: Option<f64>,
    ) -> Option<RiskLevels> {
        let atr = Decimal::try_from(atr?).ok()?;
        let stop_offset = atr * self.stop_mult;
        let target_offset = atr * self.target_mult;

        let (stop, target) = match direction {
            Direction::Buy => (price - stop_offset, price + target_offset),
            Direction::Sell => (price + stop_offset, price - target_offset),
            Direction::Wait => return None,
        };

        Some(RiskLevels {
            stop: stop.round_dp(LEVEL_DP),
            target: target.round_dp(LEVEL_DP),
        })
    }
}

impl Default for RiskCalculator {
    fn default() -> Self {
        Self::new(&RiskConfig::default())
    }
}
