//! Bar feed module
//!
//! Boundary to market-data providers. The engine only ever sees `&[Bar]`.

mod file;
mod types;

pub use file::FileBarSource;
pub use types::{closes, volumes, Bar};

use crate::config::AssetConfig;
use std::path::PathBuf;
use thiserror::Error;

/// Bar retrieval errors
#[derive(Debug, Error)]
pub enum FeedError {
    /// Bar file could not be read
    #[error("Failed to read bars from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Bar file is not a valid bar array (missing fields, bad types)
    #[error("Malformed bars in {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Source returned no bars at all
    #[error("No bars available for {0}")]
    Empty(String),
}

/// Trait for bar series providers
pub trait BarSource: Send + Sync {
    /// Fetch the bar series for an asset, oldest first
    fn fetch(&self, asset: &AssetConfig) -> Result<Vec<Bar>, FeedError>;
}
