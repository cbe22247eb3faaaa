//! Configuration for an inverted index.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, VortexError};
use crate::storage::traits::StorageConfig;

/// How `search` normalizes its query term.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryNormalization {
    /// Lowercase ASCII letters only. Punctuation is kept, so `"hello,"`
    /// never matches the indexed term `"hello"`.
    #[default]
    LowercaseOnly,

    /// Apply the same normalization as indexing: strip ASCII punctuation,
    /// then lowercase.
    Full,
}

/// Configuration for [`InvertedIndex`](crate::index::InvertedIndex).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndexConfig {
    /// Query-side normalization applied by `search`.
    pub query_normalization: QueryNormalization,

    /// I/O settings used by `save` and `load`.
    pub storage: StorageConfig,
}

impl IndexConfig {
    /// Read a configuration from a JSON file. Missing fields take their
    /// default values.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: IndexConfig = serde_json::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check that the configuration is usable.
    pub fn validate(&self) -> Result<()> {
        if self.storage.buffer_size == 0 {
            return Err(VortexError::config("storage.buffer_size must be positive"));
        }
        Ok(())
    }
}
