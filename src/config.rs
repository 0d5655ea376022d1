//! Application configuration
//!
//! Settings come from an optional TOML file; every key is optional and falls
//! back to the built-in default. Command-line flags are applied on top by
//! the binary.
//!
//! ```toml
//! base_interval_ms = 1500
//! speed = 2.0
//! topic = "linked-lists"
//! operation = "delete-head"
//! list_kind = "doubly"
//! script = "my-operations.toml"
//! ```

use crate::catalog::Topic;
use crate::errors::{Error, Result};
use crate::sequencer::playback::BASE_INTERVAL;
use crate::viz::ListKind;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Time between automatic steps at 1x speed
    pub base_interval: Duration,
    /// Initial speed multiplier
    pub speed: f64,
    pub topic: Topic,
    /// Operation id to open with (first operation when unset)
    pub operation: Option<String>,
    pub list_kind: ListKind,
    /// Script file replacing the topic's built-in operations
    pub script: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            base_interval: BASE_INTERVAL,
            speed: 1.0,
            topic: Topic::Arrays,
            operation: None,
            list_kind: ListKind::Singly,
            script: None,
        }
    }
}

/// On-disk form; absent keys keep their defaults
#[derive(Debug, Clone, Default, Deserialize)]
struct TomlConfig {
    base_interval_ms: Option<u64>,
    speed: Option<f64>,
    topic: Option<Topic>,
    operation: Option<String>,
    list_kind: Option<ListKind>,
    script: Option<PathBuf>,
}

impl Config {
    pub fn parse(text: &str) -> Result<Self> {
        let toml_config: TomlConfig = toml::from_str(text).map_err(|source| Error::Parse {
            what: "config".to_string(),
            source,
        })?;

        let mut config = Config::default();
        config.apply(toml_config);
        Ok(config)
    }

    /// Load a config file; a relative `script` path is resolved against the
    /// file's directory
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let mut config = Self::parse(&text)?;

        if let (Some(script), Some(dir)) = (config.script.as_mut(), path.parent()) {
            if script.is_relative() {
                *script = dir.join(&*script);
            }
        }

        tracing::info!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn apply(&mut self, toml_config: TomlConfig) {
        if let Some(ms) = toml_config.base_interval_ms {
            self.base_interval = Duration::from_millis(ms.max(1));
        }
        if let Some(speed) = toml_config.speed {
            self.speed = speed;
        }
        if let Some(topic) = toml_config.topic {
            self.topic = topic;
        }
        if toml_config.operation.is_some() {
            self.operation = toml_config.operation;
        }
        if let Some(kind) = toml_config.list_kind {
            self.list_kind = kind;
        }
        if toml_config.script.is_some() {
            self.script = toml_config.script;
        }
    }
}
