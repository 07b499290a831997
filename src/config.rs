//! Engine configuration
//!
//! Read from YAML, e.g.:
//!
//! ```yaml
//! max_history: 200
//! notify_undo_redo: false
//! ```

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::history::DEFAULT_MAX_HISTORY;

/// Tunables for an editing session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineConfig {
    /// Actions kept in history before the oldest are evicted
    #[serde(default = "default_max_history")]
    pub max_history: usize,
    /// Whether undo/redo emit notifications
    #[serde(default = "default_notify_undo_redo")]
    pub notify_undo_redo: bool,
}

fn default_max_history() -> usize {
    DEFAULT_MAX_HISTORY
}

fn default_notify_undo_redo() -> bool {
    true
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_history: default_max_history(),
            notify_undo_redo: default_notify_undo_redo(),
        }
    }
}

impl EngineConfig {
    /// Parse config from a YAML string
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).context("failed to parse engine config")
    }

    /// Serialize config to YAML
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).context("failed to serialize engine config")
    }

    /// Load config from disk, or return defaults if missing or unreadable
    pub fn load(path: &Path) -> Self {
        if !path.exists() {
            tracing::debug!(
                "Config file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        match Self::read(path) {
            Ok(config) => {
                tracing::info!("Loaded config from {}", path.display());
                config
            }
            Err(e) => {
                tracing::warn!("{:#}", e);
                Self::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config at {}", path.display()))?;
        Self::from_yaml_str(&content)
            .with_context(|| format!("invalid config at {}", path.display()))
    }
}
