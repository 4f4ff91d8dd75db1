//! Daily results accumulator
//!
//! Holds every scored result since the last flush. Owned by the caller;
//! flushed once per day after the summary message goes out.

use crate::signal::{Direction, ScoreResult};
use chrono::{DateTime, Utc};
use serde::Serialize;

/// One scored asset
#[derive(Debug, Clone, Serialize)]
pub struct SummaryEntry {
    pub asset: String,
    pub result: ScoreResult,
    pub recorded_at: DateTime<Utc>,
}

#[derive(Debug, Default, Clone)]
pub struct DailySummary {
    entries: Vec<SummaryEntry>,
}

impl DailySummary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, asset: impl Into<String>, result: ScoreResult, now: DateTime<Utc>) {
        self.entries.push(SummaryEntry {
            asset: asset.into(),
            result,
            recorded_at: now,
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn buy_count(&self) -> usize {
        self.count(Direction::Buy)
    }

    pub fn sell_count(&self) -> usize {
        self.count(Direction::Sell)
    }

    fn count(&self, direction: Direction) -> usize {
        self.entries
            .iter()
            .filter(|e| e.result.direction == direction)
            .count()
    }

    /// Highest-scoring entries, best first. Ties keep recording order.
    pub fn top(&self, n: usize) -> Vec<&SummaryEntry> {
        let mut ranked: Vec<&SummaryEntry> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.result.score.cmp(&a.result.score));
        ranked.truncate(n);
        ranked
    }

    /// Take all entries, leaving the accumulator empty
    pub fn flush(&mut self) -> Vec<SummaryEntry> {
        std::mem::take(&mut self.entries)
    }
}
