//! Emission gate module
//!
//! Suppresses repeat calls for the same asset and direction

mod cooldown;

pub use cooldown::{CooldownGate, CooldownKey, GateDecision, SharedCooldownGate};
