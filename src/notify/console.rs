//! Console delivery

use super::{Notifier, NotifyError};
use std::io::Write;

/// Prints messages to stdout instead of delivering them
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn send(&self, message: &str) -> Result<(), NotifyError> {
        let mut out = std::io::stdout().lock();
        writeln!(out, "{message}")?;
        writeln!(out, "{}", "-".repeat(50))?;
        tracing::info!(chars = message.len(), "Message delivered to console");
        Ok(())
    }
}
