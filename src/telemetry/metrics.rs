//! Prometheus metrics

use metrics_exporter_prometheus::PrometheusHandle;
use std::time::Duration;

/// Latency metric types
#[derive(Debug, Clone, Copy)]
pub enum LatencyMetric {
    /// Bar retrieval per asset
    BarFetch,
    /// Indicator computation and rule evaluation per asset
    Scoring,
    /// Message delivery
    Delivery,
}

/// Counter metric types
#[derive(Debug, Clone, Copy)]
pub enum CounterMetric {
    /// Assets scored successfully
    AssetsScored,
    /// Assets skipped on feed or input errors
    AssetFailures,
    /// Calls delivered
    CallsSent,
    /// Calls blocked by the cooldown gate
    CallsSuppressed,
    /// Deliveries that failed after passing the gate
    DeliveryFailures,
}

/// Gauge metric types
#[derive(Debug, Clone, Copy)]
pub enum GaugeMetric {
    /// Keys tracked by the cooldown gate
    CooldownKeys,
    /// Results waiting for the daily summary
    SummaryEntries,
}

/// Record a latency measurement
pub fn record_latency(metric: LatencyMetric, duration: Duration) {
    let metric_name = match metric {
        LatencyMetric::BarFetch => "callscan_bar_fetch_latency_ms",
        LatencyMetric::Scoring => "callscan_scoring_latency_ms",
        LatencyMetric::Delivery => "callscan_delivery_latency_ms",
    };

    metrics::histogram!(metric_name).record(duration.as_secs_f64() * 1000.0);
}

/// Increment a counter by one
pub fn increment(metric: CounterMetric) {
    let metric_name = match metric {
        CounterMetric::AssetsScored => "callscan_assets_scored_total",
        CounterMetric::AssetFailures => "callscan_asset_failures_total",
        CounterMetric::CallsSent => "callscan_calls_sent_total",
        CounterMetric::CallsSuppressed => "callscan_calls_suppressed_total",
        CounterMetric::DeliveryFailures => "callscan_delivery_failures_total",
    };

    metrics::counter!(metric_name).increment(1);
}

/// Set a gauge value
pub fn set_gauge(metric: GaugeMetric, value: f64) {
    let metric_name = match metric {
        GaugeMetric::CooldownKeys => "callscan_cooldown_keys",
        GaugeMetric::SummaryEntries => "callscan_summary_entries",
    };

    metrics::gauge!(metric_name).set(value);
}

/// Prometheus text exposition of everything recorded so far
pub fn render_metrics(handle: &PrometheusHandle) -> String {
    handle.render()
}
