//! Configuration for orderdesk
//!
//! A single JSON file. Every field is optional:
//!
//! ```json
//! { "page_size": 10, "dataset": "./orders.json", "log_filter": "warn" }
//! ```

mod errors;

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

pub use errors::{ConfigError, ConfigResult};

use crate::criteria::DEFAULT_PAGE_SIZE;
use crate::dataset::{Dataset, DatasetResult};
use crate::observability::Event;

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Initial rows per page (default 10)
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// JSON orders file; the bundled sample is used when absent
    #[serde(default)]
    pub dataset: Option<PathBuf>,

    /// tracing filter directive used when RUST_LOG is unset (default "warn")
    #[serde(default = "default_log_filter")]
    pub log_filter: String,
}

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE.get()
}

fn default_log_filter() -> String {
    "warn".to_string()
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            dataset: None,
            log_filter: default_log_filter(),
        }
    }
}

impl EngineConfig {
    /// Reads and validates a config file
    pub fn load(path: &Path) -> ConfigResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_json_str(&content)?;

        tracing::info!(
            event = %Event::ConfigLoaded,
            path = %path.display(),
            page_size = config.page_size,
            "config loaded"
        );
        Ok(config)
    }

    /// Parses and validates config JSON
    pub fn from_json_str(json: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Checks value constraints serde cannot express
    pub fn validate(&self) -> ConfigResult<()> {
        if self.page_size == 0 {
            return Err(ConfigError::Invalid {
                field: "page_size",
                reason: "must be greater than zero".to_string(),
            });
        }
        Ok(())
    }

    /// Loads the configured dataset, or the bundled sample
    pub fn load_dataset(&self) -> DatasetResult<Dataset> {
        match &self.dataset {
            Some(path) => Dataset::from_json_file(path),
            None => Ok(Dataset::sample()),
        }
    }
}
