//! Configuration loading

use callscan::config::Config;
use callscan::notify::AssetCategory;
use rust_decimal_macros::dec;
use std::io::Write;

#[test]
fn test_empty_file_is_valid() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file).unwrap();

    let config = Config::load(file.path()).unwrap();
    assert_eq!(config.indicators.warmup_len(), 55);
    assert_eq!(config.scoring.min_call_score, 65);
    assert_eq!(config.risk.stop_atr_mult, dec!(1.5));
    assert_eq!(config.cooldown.window_minutes, 60);
    assert!(config.notify.daily_summary);
    assert_eq!(config.telemetry.log_level, "info");
}

#[test]
fn test_example_config_parses() {
    let config: Config = toml::from_str(include_str!("../../config.toml.example")).unwrap();
    assert!(!config.assets.is_empty());
    assert!(config
        .assets
        .iter()
        .any(|a| a.category == AssetCategory::Crypto));

    let opted_in: Vec<&str> = config
        .assets
        .iter()
        .filter(|a| a.options.is_some())
        .map(|a| a.id.as_str())
        .collect();
    assert_eq!(opted_in, vec!["PETR4.SA", "AAPL"]);
}

#[test]
fn test_malformed_file_is_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[scoring]\nmin_call_score = \"high\"").unwrap();

    assert!(Config::load(file.path()).is_err());
}
