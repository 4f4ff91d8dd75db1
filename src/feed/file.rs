//! JSON file bar source

use super::{Bar, BarSource, FeedError};
use crate::config::AssetConfig;
use std::path::{Path, PathBuf};

/// Reads each asset's bars from a JSON array on disk
pub struct FileBarSource {
    /// Base directory for relative bar paths
    base_dir: PathBuf,
}

impl FileBarSource {
    /// Create a source resolving relative paths against `base_dir`
    pub fn new(base_dir: impl Into<PathBuf>) -> Self {
        Self {
            base_dir: base_dir.into(),
        }
    }

    fn resolve(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.base_dir.join(path)
        }
    }
}

impl BarSource for FileBarSource {
    fn fetch(&self, asset: &AssetConfig) -> Result<Vec<Bar>, FeedError> {
        let path = self.resolve(&asset.bars);
        let content = std::fs::read_to_string(&path).map_err(|source| FeedError::Io {
            path: path.clone(),
            source,
        })?;
        let bars: Vec<Bar> =
            serde_json::from_str(&content).map_err(|source| FeedError::Parse {
                path: path.clone(),
                source,
            })?;

        if bars.is_empty() {
            return Err(FeedError::Empty(asset.id.clone()));
        }

        tracing::debug!(asset = %asset.id, bars = bars.len(), path = ?path, "Loaded bars");
        Ok(bars)
    }
}
