//! Cooldown gate
//!
//! State lives only as long as the gate value; nothing is persisted, so a
//! restart forgets every cooldown.

use crate::config::CooldownConfig;
use crate::signal::Direction;
use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Mutex;

/// Identity of a call for deduplication
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CooldownKey {
    pub asset: String,
    pub direction: Direction,
}

impl CooldownKey {
    pub fn new(asset: impl Into<String>, direction: Direction) -> Self {
        Self {
            asset: asset.into(),
            direction,
        }
    }
}

/// Outcome of a gate check
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GateDecision {
    /// Emit now; the window has been restarted
    Allowed,
    /// Same call went out within the window
    Suppressed,
}

impl GateDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GateDecision::Allowed)
    }
}

/// Tracks the last emission time per (asset, direction)
///
/// Entries are never evicted: the key space is bounded by the configured
/// assets times two directions.
#[derive(Debug, Clone)]
pub struct CooldownGate {
    window: Duration,
    last_emitted: HashMap<CooldownKey, DateTime<Utc>>,
}

impl CooldownGate {
    /// Create a gate with the given window
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            last_emitted: HashMap::new(),
        }
    }

    pub fn from_config(config: &CooldownConfig) -> Self {
        Self::new(Duration::minutes(config.window_minutes))
    }

    /// Check eligibility and, if eligible, record `now` as the emission time.
    ///
    /// The mark happens here, before the caller attempts delivery, so a
    /// failed send still consumes the window.
    pub fn check_and_mark(&mut self, key: CooldownKey, now: DateTime<Utc>) -> GateDecision {
        if let Some(last) = self.last_emitted.get(&key) {
            let elapsed_minutes = (now - *last).num_minutes();
            if elapsed_minutes < self.window.num_minutes() {
                tracing::debug!(
                    asset = %key.asset,
                    direction = %key.direction,
                    elapsed_minutes,
                    "Call suppressed by cooldown"
                );
                return GateDecision::Suppressed;
            }
        }

        self.last_emitted.insert(key, now);
        GateDecision::Allowed
    }

    /// Last recorded emission for a key
    pub fn last_emitted(&self, key: &CooldownKey) -> Option<DateTime<Utc>> {
        self.last_emitted.get(key).copied()
    }

    /// Number of keys ever marked
    pub fn len(&self) -> usize {
        self.last_emitted.len()
    }

    pub fn is_empty(&self) -> bool {
        self.last_emitted.is_empty()
    }
}

impl Default for CooldownGate {
    fn default() -> Self {
        Self::from_config(&CooldownConfig::default())
    }
}

/// Cooldown gate for callers scanning assets from several threads.
///
/// Each check-and-mark runs under one lock, so two workers can never both
/// be allowed for the same key within a window.
#[derive(Debug, Default)]
pub struct SharedCooldownGate {
    inner: Mutex<CooldownGate>,
}

impl SharedCooldownGate {
    pub fn new(gate: CooldownGate) -> Self {
        Self {
            inner: Mutex::new(gate),
        }
    }

    pub fn check_and_mark(&self, key: CooldownKey, now: DateTime<Utc>) -> GateDecision {
        // A poisoned lock still holds a consistent map: every mutation is a
        // single insert.
        let mut gate = self.inner.lock().unwrap_or_else(|e| e.into_inner());
        gate.check_and_mark(key, now)
    }

    /// Unwrap the gate once all workers are done
    pub fn into_inner(self) -> CooldownGate {
        self.inner.into_inner().unwrap_or_else(|e| e.into_inner())
    }
}
