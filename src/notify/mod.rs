//! Notification module
//!
//! Message rendering and the delivery boundary. Real delivery channels
//! (chat gateways, webhooks) plug in behind [`Notifier`].

mod console;
mod format;
mod types;

pub use console::ConsoleNotifier;
pub use format::{
    format_call, format_daily_summary, format_options_setup, format_price, format_test_message,
    MAX_SIGNALS_SHOWN,
};
pub use types::AssetCategory;

use thiserror::Error;

/// Delivery errors
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Channel rejected or failed the message
    #[error("Delivery failed: {0}")]
    Delivery(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Trait for message delivery channels
pub trait Notifier: Send + Sync {
    /// Deliver one rendered message
    fn send(&self, message: &str) -> Result<(), NotifyError>;
}
