//! Score command implementation

use crate::config::{AssetConfig, Config};
use crate::feed::{BarSource, FileBarSource};
use crate::notify::{format_call, AssetCategory};
use crate::signal::SignalScorer;
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ScoreArgs {
    /// JSON file holding the bar series
    pub file: PathBuf,

    /// Asset class, used for price formatting
    #[arg(long, value_enum, default_value = "us_equity")]
    pub category: AssetCategory,

    /// Asset name shown in the message (defaults to the file stem)
    #[arg(long)]
    pub asset: Option<String>,

    /// Print the rendered call message instead of JSON
    #[arg(long)]
    pub message: bool,
}

impl ScoreArgs {
    pub fn execute(&self, config: &Config) -> anyhow::Result<()> {
        let id = self.asset.clone().unwrap_or_else(|| {
            self.file
                .file_stem()
                .map(|s| s.to_string_lossy().into_owned())
                .unwrap_or_else(|| "asset".to_string())
        });
        let asset = AssetConfig {
            id,
            category: self.category,
            bars: self.file.clone(),
            options: None,
        };

        let bars = FileBarSource::new(".").fetch(&asset)?;
        let result = SignalScorer::from_config(config).score(&bars)?;

        if self.message {
            println!("{}", format_call(&asset.id, asset.category, &result, Utc::now()));
        } else {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }

        Ok(())
    }
}
