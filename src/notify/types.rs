//! Notification types

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Asset class tag, used only for message formatting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "snake_case")]
#[value(rename_all = "snake_case")]
pub enum AssetCategory {
    /// Brazilian listed equity
    BrEquity,
    /// US listed equity
    UsEquity,
    Etf,
    /// Real estate fund
    Reit,
    Crypto,
    /// B3 futures (mini index, mini dollar)
    FuturesBr,
    /// International futures
    FuturesIntl,
    Options,
}

impl AssetCategory {
    /// Whether prices are quoted in USD
    pub fn quoted_in_usd(&self) -> bool {
        matches!(
            self,
            AssetCategory::UsEquity
                | AssetCategory::Etf
                | AssetCategory::FuturesIntl
                | AssetCategory::Crypto
        )
    }
}

impl fmt::Display for AssetCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AssetCategory::BrEquity => "BR equity",
            AssetCategory::UsEquity => "US equity",
            AssetCategory::Etf => "ETF",
            AssetCategory::Reit => "REIT",
            AssetCategory::Crypto => "crypto",
            AssetCategory::FuturesBr => "B3 futures",
            AssetCategory::FuturesIntl => "intl futures",
            AssetCategory::Options => "options",
        };
        f.write_str(label)
    }
}
