//! Scan cycles over bar files on disk

use crate::fixtures::{rebound, rising};
use callscan::config::Config;
use callscan::feed::{Bar, FileBarSource};
use callscan::notify::{Notifier, NotifyError};
use callscan::scanner::{Emission, ScanState, Scanner};
use callscan::signal::Direction;
use chrono::{DateTime, Duration, TimeZone, Utc};
use std::path::Path;
use std::sync::Mutex;

#[derive(Default)]
struct Inbox {
    messages: Mutex<Vec<String>>,
}

impl Notifier for Inbox {
    fn send(&self, message: &str) -> Result<(), NotifyError> {
        self.messages.lock().unwrap().push(message.to_string());
        Ok(())
    }
}

fn write_bars(dir: &Path, name: &str, bars: &[Bar]) {
    let json = serde_json::to_string(bars).unwrap();
    std::fs::write(dir.join(name), json).unwrap();
}

fn config(dir: &Path) -> Config {
    write_bars(dir, "reb.json", &rebound());
    write_bars(dir, "up.json", &rising());
    std::fs::write(dir.join("broken.json"), "[{\"close\": 1.0}]").unwrap();

    let toml = r#"
        [scoring]
        min_call_score = 60

        [cooldown]
        window_minutes = 60

        [[assets]]
        id = "VALE3.SA"
        category = "br_equity"
        bars = "reb.json"

        [[assets]]
        id = "AAPL"
        category = "us_equity"
        bars = "up.json"

        [[assets]]
        id = "BROKEN"
        category = "crypto"
        bars = "broken.json"

        [[assets]]
        id = "GONE"
        category = "etf"
        bars = "missing.json"
    "#;
    let path = dir.join("config.toml");
    std::fs::write(&path, toml).unwrap();
    Config::load(&path).unwrap()
}

fn t0() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 3, 14, 0, 0).unwrap()
}

#[test]
fn test_scan_cycle_from_files() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());
    let scanner = Scanner::new(&config, FileBarSource::new(dir.path()), Inbox::default());
    let mut state = ScanState::new(&config);

    let report = scanner.run_cycle(&config.assets, &mut state, t0());

    assert_eq!(report.analyzed(), 2);
    assert_eq!(report.failed(), 2);
    assert_eq!(report.emitted(), 1);
    assert_eq!(report.calls[0].asset, "VALE3.SA");
    assert_eq!(report.calls[0].direction, Direction::Buy);
    assert_eq!(report.reports[1].emission, Emission::NoCall);

    let failed: Vec<&str> = report.failures.iter().map(|f| f.asset.as_str()).collect();
    assert_eq!(failed, vec!["BROKEN", "GONE"]);

    let messages = scanner.notifier().messages.lock().unwrap();
    assert_eq!(messages.len(), 1);
    assert!(messages[0].contains("[BR equity] CALL - VALE3.SA"));
}

#[test]
fn test_repeat_cycles_respect_cooldown() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());
    let scanner = Scanner::new(&config, FileBarSource::new(dir.path()), Inbox::default());
    let mut state = ScanState::new(&config);

    let schedule = [0, 15, 30, 45, 61, 75];
    let emitted: Vec<usize> = schedule
        .iter()
        .map(|&m| {
            scanner
                .run_cycle(&config.assets, &mut state, t0() + Duration::minutes(m))
                .emitted()
        })
        .collect();

    assert_eq!(emitted, vec![1, 0, 0, 0, 1, 0]);
}

#[test]
fn test_summary_covers_every_scored_asset() {
    let dir = tempfile::tempdir().unwrap();
    let config = config(dir.path());
    let scanner = Scanner::new(&config, FileBarSource::new(dir.path()), Inbox::default());
    let mut state = ScanState::new(&config);

    scanner.run_cycle(&config.assets, &mut state, t0());
    assert_eq!(state.summary.len(), 2);
    assert_eq!(state.summary.buy_count(), 1);
    assert_eq!(state.summary.sell_count(), 1);

    assert!(scanner.send_daily_summary(&mut state, t0()).unwrap());
    assert!(state.summary.is_empty());

    let messages = scanner.notifier().messages.lock().unwrap();
    let summary = messages.last().unwrap();
    assert!(summary.contains("VALE3.SA"));
    assert!(summary.contains("AAPL"));
}
