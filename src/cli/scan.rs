//! Scan command implementation

use crate::config::Config;
use crate::feed::FileBarSource;
use crate::notify::ConsoleNotifier;
use crate::scanner::{CycleReport, Emission, ScanState, Scanner};
use crate::telemetry::TelemetryGuard;
use chrono::Utc;
use clap::Args;
use std::path::{Path, PathBuf};

#[derive(Args, Debug)]
pub struct ScanArgs {
    /// Directory relative bar paths resolve against (defaults to the
    /// config file's directory)
    #[arg(long)]
    pub base_dir: Option<PathBuf>,

    /// Send the daily summary after the cycle
    #[arg(long)]
    pub summary: bool,

    /// Print the cycle report as JSON
    #[arg(long)]
    pub json: bool,

    /// Print Prometheus metrics after the cycle
    #[arg(long)]
    pub metrics: bool,
}

impl ScanArgs {
    pub fn execute(
        &self,
        config: &Config,
        config_path: &Path,
        telemetry: &TelemetryGuard,
    ) -> anyhow::Result<()> {
        if config.assets.is_empty() {
            tracing::warn!("No assets configured");
            return Ok(());
        }

        let base_dir = self.base_dir.clone().unwrap_or_else(|| {
            config_path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_default()
        });
        tracing::info!(assets = config.assets.len(), base_dir = ?base_dir, "Starting scan");

        let scanner = Scanner::new(config, FileBarSource::new(base_dir), ConsoleNotifier);
        let mut state = ScanState::new(config);
        let report = scanner.run_cycle(&config.assets, &mut state, Utc::now());

        if self.summary {
            scanner.send_daily_summary(&mut state, Utc::now())?;
        }

        if self.json {
            println!("{}", serde_json::to_string_pretty(&report)?);
        } else {
            print_report(&report);
        }

        if self.metrics {
            match telemetry.render() {
                Some(text) => println!("{text}"),
                None => tracing::warn!("Metrics disabled, set telemetry.metrics = true"),
            }
        }

        Ok(())
    }
}

fn print_report(report: &CycleReport) {
    println!("{:<14} {:>12} {:>6}  OUTCOME", "ASSET", "DIRECTION", "SCORE");
    for r in &report.reports {
        println!(
            "{:<14} {:>12} {:>6}  {}",
            r.asset,
            r.result.direction.to_string(),
            r.result.score,
            outcome(&r.emission)
        );
        if let (Some(setup), Some(emission)) = (&r.options, &r.options_emission) {
            println!("{:<14} {:>12} {:>6}  {}", "", setup.strategy.name(), "", outcome(emission));
        }
    }
    for f in &report.failures {
        println!("{:<14} {:>12} {:>6}  {}", f.asset, "ERROR", "", f.error);
    }
    println!(
        "analyzed={} emitted={} suppressed={} failed={}",
        report.analyzed(),
        report.emitted(),
        report.suppressed(),
        report.failed()
    );
}

fn outcome(emission: &Emission) -> String {
    match emission {
        Emission::NoCall => "-".to_string(),
        Emission::Suppressed => "suppressed".to_string(),
        Emission::Muted => "muted".to_string(),
        Emission::Sent(id) => format!("sent {id}"),
        Emission::DeliveryFailed => "delivery failed".to_string(),
    }
}
