//! Configuration types for callscan
//!
//! Every section and field carries a default, so an empty TOML file is a
//! valid configuration.

use crate::notify::AssetCategory;
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::PathBuf;

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub indicators: IndicatorConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub risk: RiskConfig,
    #[serde(default)]
    pub cooldown: CooldownConfig,
    #[serde(default)]
    pub options: OptionsConfig,
    #[serde(default)]
    pub notify: NotifyConfig,
    #[serde(default)]
    pub telemetry: TelemetryConfig,
    #[serde(default)]
    pub assets: Vec<AssetConfig>,
}

/// Indicator lookback parameters
#[derive(Debug, Clone, Deserialize)]
pub struct IndicatorConfig {
    #[serde(default = "default_rsi_period")]
    pub rsi_period: usize,

    #[serde(default = "default_macd_fast")]
    pub macd_fast: usize,

    #[serde(default = "default_macd_slow")]
    pub macd_slow: usize,

    #[serde(default = "default_macd_signal")]
    pub macd_signal: usize,

    #[serde(default = "default_bollinger_period")]
    pub bollinger_period: usize,

    /// Band width in standard deviations
    #[serde(default = "default_bollinger_k")]
    pub bollinger_k: f64,

    #[serde(default = "default_ema_short")]
    pub ema_short: usize,

    #[serde(default = "default_ema_medium")]
    pub ema_medium: usize,

    #[serde(default = "default_ema_long")]
    pub ema_long: usize,

    #[serde(default = "default_atr_period")]
    pub atr_period: usize,

    /// Bars in the volume moving average
    #[serde(default = "default_volume_period")]
    pub volume_period: usize,

    /// Trailing bars compared by the divergence detector
    #[serde(default = "default_divergence_window")]
    pub divergence_window: usize,
}

fn default_rsi_period() -> usize {
    14
}
fn default_macd_fast() -> usize {
    12
}
fn default_macd_slow() -> usize {
    26
}
fn default_macd_signal() -> usize {
    9
}
fn default_bollinger_period() -> usize {
    20
}
fn default_bollinger_k() -> f64 {
    2.0
}
fn default_ema_short() -> usize {
    9
}
fn default_ema_medium() -> usize {
    21
}
fn default_ema_long() -> usize {
    50
}
fn default_atr_period() -> usize {
    14
}
fn default_volume_period() -> usize {
    20
}
fn default_divergence_window() -> usize {
    5
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            macd_fast: 12,
            macd_slow: 26,
            macd_signal: 9,
            bollinger_period: 20,
            bollinger_k: 2.0,
            ema_short: 9,
            ema_medium: 21,
            ema_long: 50,
            atr_period: 14,
            volume_period: 20,
            divergence_window: 5,
        }
    }
}

impl IndicatorConfig {
    /// Minimum number of bars before the scorer evaluates any rule.
    ///
    /// `max(slow + signal, bollinger, long EMA) + 5`, i.e. 55 with defaults.
    pub fn warmup_len(&self) -> usize {
        (self.macd_slow + self.macd_signal)
            .max(self.bollinger_period)
            .max(self.ema_long)
            + 5
    }
}

/// Rule thresholds and emission cut-off
#[derive(Debug, Clone, Deserialize)]
pub struct ScoringConfig {
    #[serde(default = "default_rsi_oversold")]
    pub rsi_oversold: f64,

    #[serde(default = "default_rsi_overbought")]
    pub rsi_overbought: f64,

    /// Volume multiple of its average that counts as a spike
    #[serde(default = "default_volume_spike_factor")]
    pub volume_spike_factor: f64,

    /// Minimum score (0-100) for a result to become a call
    #[serde(default = "default_min_call_score")]
    pub min_call_score: u32,
}

fn default_rsi_oversold() -> f64 {
    30.0
}
fn default_rsi_overbought() -> f64 {
    70.0
}
fn default_volume_spike_factor() -> f64 {
    2.0
}
fn default_min_call_score() -> u32 {
    65
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            rsi_oversold: 30.0,
            rsi_overbought: 70.0,
            volume_spike_factor: 2.0,
            min_call_score: 65,
        }
    }
}

/// ATR multipliers for stop-loss and take-profit
#[derive(Debug, Clone, Deserialize)]
pub struct RiskConfig {
    #[serde(default = "default_stop_atr_mult")]
    pub stop_atr_mult: Decimal,

    #[serde(default = "default_target_atr_mult")]
    pub target_atr_mult: Decimal,
}

fn default_stop_atr_mult() -> Decimal {
    Decimal::new(15, 1) // 1.5
}
fn default_target_atr_mult() -> Decimal {
    Decimal::new(30, 1) // 3.0
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            stop_atr_mult: Decimal::new(15, 1),
            target_atr_mult: Decimal::new(30, 1),
        }
    }
}

/// Re-emission cooldown
#[derive(Debug, Clone, Deserialize)]
pub struct CooldownConfig {
    #[serde(default = "default_cooldown_minutes")]
    pub window_minutes: i64,
}

fn default_cooldown_minutes() -> i64 {
    60
}

impl Default for CooldownConfig {
    fn default() -> Self {
        Self { window_minutes: 60 }
    }
}

/// Options setup suggestions. Assets opt in through `[assets.options]`.
#[derive(Debug, Clone, Deserialize)]
pub struct OptionsConfig {
    /// Minimum score of the underlying before a setup is suggested
    #[serde(default = "default_options_min_score")]
    pub min_score: u32,

    /// Annualized volatility above which spreads replace outright options
    #[serde(default = "default_high_vol_threshold")]
    pub high_vol_threshold: f64,

    /// Bars per year used to annualize return volatility, unless the
    /// asset overrides it. 252 fits daily bars.
    #[serde(default = "default_periods_per_year")]
    pub periods_per_year: f64,
}

fn default_options_min_score() -> u32 {
    60
}
fn default_high_vol_threshold() -> f64 {
    0.30
}
fn default_periods_per_year() -> f64 {
    252.0
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            min_score: 60,
            high_vol_threshold: 0.30,
            periods_per_year: 252.0,
        }
    }
}

/// Which messages get delivered
#[derive(Debug, Clone, Deserialize)]
pub struct NotifyConfig {
    #[serde(default = "default_true")]
    pub buy: bool,

    #[serde(default = "default_true")]
    pub sell: bool,

    #[serde(default = "default_true")]
    pub daily_summary: bool,
}

fn default_true() -> bool {
    true
}

impl Default for NotifyConfig {
    fn default() -> Self {
        Self {
            buy: true,
            sell: true,
            daily_summary: true,
        }
    }
}

/// Telemetry configuration
#[derive(Debug, Clone, Deserialize)]
pub struct TelemetryConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Emit JSON log lines instead of human-readable ones
    #[serde(default)]
    pub json_logs: bool,

    /// Install the Prometheus recorder
    #[serde(default)]
    pub metrics: bool,
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for TelemetryConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json_logs: false,
            metrics: false,
        }
    }
}

/// A monitored instrument
#[derive(Debug, Clone, Deserialize)]
pub struct AssetConfig {
    /// Ticker or pair, e.g. "PETR4.SA" or "BTC/USDT"
    pub id: String,

    pub category: AssetCategory,

    /// JSON file holding the bar series
    pub bars: PathBuf,

    /// Options setups for this underlying; absent means none
    #[serde(default)]
    pub options: Option<AssetOptionsConfig>,
}

/// Per-asset options settings
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssetOptionsConfig {
    /// Separate bar series (typically daily) scored for the setup. The
    /// asset's own bars are reused when absent.
    #[serde(default)]
    pub bars: Option<PathBuf>,

    /// Bars per year of the series the setup is computed on, e.g. 6552 for
    /// 15-minute bars over a 6.5 hour session
    #[serde(default)]
    pub periods_per_year: Option<f64>,
}

impl AssetConfig {
    /// The asset as seen by a [`crate::feed::BarSource`] when fetching the
    /// options series
    pub fn options_series(&self) -> Option<AssetConfig> {
        let options = self.options.as_ref()?;
        Some(AssetConfig {
            bars: options.bars.clone().unwrap_or_else(|| self.bars.clone()),
            ..self.clone()
        })
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<std::path::Path>) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
