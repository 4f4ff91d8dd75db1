//! Telemetry module
//!
//! Structured logging and Prometheus metrics

mod logging;
mod metrics;

pub use self::metrics::{
    increment, record_latency, render_metrics, set_gauge, CounterMetric, GaugeMetric,
    LatencyMetric,
};
pub use logging::{init_logging, LogFormat};

use crate::config::TelemetryConfig;
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

/// Handle kept alive for the life of the process
pub struct TelemetryGuard {
    prometheus: Option<PrometheusHandle>,
}

impl TelemetryGuard {
    /// Prometheus text rendering, if metrics are enabled
    pub fn render(&self) -> Option<String> {
        self.prometheus.as_ref().map(render_metrics)
    }
}

/// Initialize all telemetry subsystems
pub fn init_telemetry(config: &TelemetryConfig) -> anyhow::Result<TelemetryGuard> {
    let format = if config.json_logs {
        LogFormat::Json
    } else {
        LogFormat::Pretty
    };
    init_logging(&config.log_level, format)?;

    let prometheus = if config.metrics {
        let handle = PrometheusBuilder::new()
            .install_recorder()
            .map_err(|e| anyhow::anyhow!("Failed to install metrics recorder: {}", e))?;
        tracing::debug!("Prometheus recorder installed");
        Some(handle)
    } else {
        None
    };

    Ok(TelemetryGuard { prometheus })
}
