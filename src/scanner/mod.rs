//! Scan cycle orchestration
//!
//! One pass over the configured assets: fetch bars, score, record for the
//! daily summary, and push calls that clear the cooldown gate to the
//! notifier. Failures on one asset never abort the cycle.

use crate::config::{AssetConfig, Config, NotifyConfig};
use crate::feed::{Bar, BarSource, FeedError};
use crate::gate::{CooldownGate, CooldownKey};
use crate::notify::{
    format_call, format_daily_summary, format_options_setup, AssetCategory, Notifier, NotifyError,
};
use crate::options::{OptionsAdvisor, OptionsSetup};
use crate::signal::{Direction, ScoreError, ScoreResult, SignalScorer};
use crate::summary::DailySummary;
use crate::telemetry::{
    increment, record_latency, set_gauge, CounterMetric, GaugeMetric, LatencyMetric,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::time::Instant;
use thiserror::Error;
use tracing::{debug, error, info, warn};
use uuid::Uuid;

/// Per-asset failures
#[derive(Debug, Error)]
pub enum ScanError {
    #[error(transparent)]
    Feed(#[from] FeedError),
    #[error(transparent)]
    Score(#[from] ScoreError),
}

/// State carried across cycles
#[derive(Debug, Default)]
pub struct ScanState {
    pub gate: CooldownGate,
    pub summary: DailySummary,
}

impl ScanState {
    pub fn new(config: &Config) -> Self {
        Self {
            gate: CooldownGate::from_config(&config.cooldown),
            summary: DailySummary::new(),
        }
    }
}

/// A message that left through the notifier
#[derive(Debug, Clone, Serialize)]
pub struct EmittedCall {
    pub id: Uuid,
    pub asset: String,
    pub category: AssetCategory,
    pub direction: Direction,
    pub score: u32,
    pub emitted_at: DateTime<Utc>,
}

/// What happened to a scored result
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Emission {
    /// Below the call threshold, or `Wait`
    NoCall,
    /// Same asset and direction went out inside the cooldown window
    Suppressed,
    /// Gate passed but notifications for this direction are off
    Muted,
    /// Delivered
    Sent(Uuid),
    /// Gate passed but the notifier failed; the window is still consumed
    DeliveryFailed,
}

/// Outcome for one successfully scored asset
#[derive(Debug, Clone, Serialize)]
pub struct AssetReport {
    pub asset: String,
    pub result: ScoreResult,
    pub emission: Emission,
    /// Setup suggested for an asset that opts into options
    pub options: Option<OptionsSetup>,
    /// What happened to that setup; `None` when there is none
    pub options_emission: Option<Emission>,
}

/// Asset skipped on a feed or input error
#[derive(Debug, Clone, Serialize)]
pub struct AssetFailure {
    pub asset: String,
    pub error: String,
}

/// Outcome of one pass over the asset list
#[derive(Debug, Default, Clone, Serialize)]
pub struct CycleReport {
    pub reports: Vec<AssetReport>,
    pub failures: Vec<AssetFailure>,
    pub calls: Vec<EmittedCall>,
}

impl CycleReport {
    /// Assets scored, whatever their outcome
    pub fn analyzed(&self) -> usize {
        self.reports.len()
    }

    /// Calls delivered, options setups included
    pub fn emitted(&self) -> usize {
        self.calls.len()
    }

    pub fn suppressed(&self) -> usize {
        self.reports
            .iter()
            .filter(|r| r.emission == Emission::Suppressed)
            .count()
    }

    pub fn failed(&self) -> usize {
        self.failures.len()
    }
}

/// Drives scoring and emission for a list of assets
pub struct Scanner<S, N> {
    scorer: SignalScorer,
    source: S,
    notifier: N,
    options: OptionsAdvisor,
    min_call_score: u32,
    notify: NotifyConfig,
}

impl<S: BarSource, N: Notifier> Scanner<S, N> {
    pub fn new(config: &Config, source: S, notifier: N) -> Self {
        Self {
            scorer: SignalScorer::from_config(config),
            source,
            notifier,
            options: OptionsAdvisor::new(config.options.clone()),
            min_call_score: config.scoring.min_call_score,
            notify: config.notify.clone(),
        }
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// Score every asset once
    pub fn run_cycle(
        &self,
        assets: &[AssetConfig],
        state: &mut ScanState,
        now: DateTime<Utc>,
    ) -> CycleReport {
        let mut report = CycleReport::default();

        for asset in assets {
            match self.scan_asset(asset, state, now, &mut report.calls) {
                Ok(asset_report) => report.reports.push(asset_report),
                Err(e) => {
                    warn!(asset = %asset.id, error = %e, "Skipping asset");
                    increment(CounterMetric::AssetFailures);
                    report.failures.push(AssetFailure {
                        asset: asset.id.clone(),
                        error: e.to_string(),
                    });
                }
            }
        }

        set_gauge(GaugeMetric::CooldownKeys, state.gate.len() as f64);
        set_gauge(GaugeMetric::SummaryEntries, state.summary.len() as f64);

        info!(
            analyzed = report.analyzed(),
            emitted = report.emitted(),
            suppressed = report.suppressed(),
            failed = report.failed(),
            "Scan cycle complete"
        );

        report
    }

    /// Fetch, score, record and possibly emit for a single asset
    pub fn scan_asset(
        &self,
        asset: &AssetConfig,
        state: &mut ScanState,
        now: DateTime<Utc>,
        calls: &mut Vec<EmittedCall>,
    ) -> Result<AssetReport, ScanError> {
        let (bars, result) = self.fetch_and_score(asset)?;

        state.summary.record(&asset.id, result.clone(), now);

        let emission = if result.is_call(self.min_call_score) {
            let key = CooldownKey::new(&asset.id, result.direction);
            let (emission, call) = self.emit(asset, key, result.score, state, now, || {
                format_call(&asset.id, asset.category, &result, now)
            });
            calls.extend(call);
            emission
        } else {
            Emission::NoCall
        };

        let options = self.scan_options(asset, &bars, &result, state, now, calls);
        let (options, options_emission) = match options {
            Some((setup, emission)) => (Some(setup), Some(emission)),
            None => (None, None),
        };

        Ok(AssetReport {
            asset: asset.id.clone(),
            result,
            emission,
            options,
            options_emission,
        })
    }

    /// Send the accumulated summary and clear it.
    ///
    /// Returns `Ok(false)` when disabled or there is nothing to report. The
    /// accumulator is flushed even when delivery fails.
    pub fn send_daily_summary(
        &self,
        state: &mut ScanState,
        now: DateTime<Utc>,
    ) -> Result<bool, NotifyError> {
        if !self.notify.daily_summary || state.summary.is_empty() {
            return Ok(false);
        }

        let message = format_daily_summary(&state.summary, now);
        let sent = self.notifier.send(&message);
        let flushed = state.summary.flush();
        info!(entries = flushed.len(), "Daily summary flushed");
        set_gauge(GaugeMetric::SummaryEntries, 0.0);

        sent.map(|_| true)
    }

    fn fetch_and_score(
        &self,
        asset: &AssetConfig,
    ) -> Result<(Vec<Bar>, ScoreResult), ScanError> {
        let started = Instant::now();
        let bars = self.source.fetch(asset)?;
        record_latency(LatencyMetric::BarFetch, started.elapsed());

        let started = Instant::now();
        let result = self.scorer.score(&bars)?;
        record_latency(LatencyMetric::Scoring, started.elapsed());
        increment(CounterMetric::AssetsScored);

        debug!(
            asset = %asset.id,
            direction = ?result.direction,
            score = result.score,
            buy_points = result.buy_points,
            sell_points = result.sell_points,
            "Asset scored"
        );
        Ok((bars, result))
    }

    /// Options setup for an asset that opts in. A separate options series is
    /// fetched and scored on its own; otherwise the call's bars and result
    /// are reused. Failures here are logged and leave the call untouched.
    fn scan_options(
        &self,
        asset: &AssetConfig,
        bars: &[Bar],
        result: &ScoreResult,
        state: &mut ScanState,
        now: DateTime<Utc>,
        calls: &mut Vec<EmittedCall>,
    ) -> Option<(OptionsSetup, Emission)> {
        let asset_options = asset.options.as_ref()?;

        let scored;
        let (options_bars, options_result) = if asset_options.bars.is_some() {
            let series = asset.options_series()?;
            scored = match self.fetch_and_score(&series) {
                Ok(scored) => scored,
                Err(e) => {
                    warn!(asset = %asset.id, error = %e, "Skipping options setup");
                    return None;
                }
            };
            (scored.0.as_slice(), &scored.1)
        } else {
            (bars, result)
        };

        let setup = self
            .options
            .suggest(&asset.id, asset_options, options_bars, options_result)?;
        let key = CooldownKey::new(format!("{}:options", asset.id), setup.direction);
        let (emission, call) = self.emit(asset, key, options_result.score, state, now, || {
            format_options_setup(&setup, asset.category, now)
        });
        calls.extend(call);

        Some((setup, emission))
    }

    /// Pass `key` through the cooldown gate, then deliver unless the
    /// direction is muted. The gate is marked before delivery.
    fn emit(
        &self,
        asset: &AssetConfig,
        key: CooldownKey,
        score: u32,
        state: &mut ScanState,
        now: DateTime<Utc>,
        render: impl FnOnce() -> String,
    ) -> (Emission, Option<EmittedCall>) {
        let direction = key.direction;
        if !state.gate.check_and_mark(key, now).is_allowed() {
            info!(asset = %asset.id, %direction, "Call suppressed by cooldown");
            increment(CounterMetric::CallsSuppressed);
            return (Emission::Suppressed, None);
        }
        if !self.direction_enabled(direction) {
            debug!(asset = %asset.id, %direction, "Call muted");
            return (Emission::Muted, None);
        }

        let started = Instant::now();
        let sent = self.notifier.send(&render());
        record_latency(LatencyMetric::Delivery, started.elapsed());

        match sent {
            Ok(()) => {
                let id = Uuid::new_v4();
                info!(asset = %asset.id, %direction, score, call_id = %id, "Call emitted");
                increment(CounterMetric::CallsSent);
                let call = EmittedCall {
                    id,
                    asset: asset.id.clone(),
                    category: asset.category,
                    direction,
                    score,
                    emitted_at: now,
                };
                (Emission::Sent(id), Some(call))
            }
            Err(e) => {
                error!(asset = %asset.id, error = %e, "Failed to deliver call");
                increment(CounterMetric::DeliveryFailures);
                (Emission::DeliveryFailed, None)
            }
        }
    }

    fn direction_enabled(&self, direction: Direction) -> bool {
        match direction {
            Direction::Buy => self.notify.buy,
            Direction::Sell => self.notify.sell,
            Direction::Wait => false,
        }
    }
}
