//! Host configuration.
//!
//! Settings are read from an optional `barista.toml` next to the binary;
//! every field has a default so the file is not required.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("config file error: {0}")]
    File(#[from] std::io::Error),

    #[error("config parse error: {0}")]
    Parse(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Top-level host configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HostConfig {
    /// Script source executed at startup.
    pub script_path: PathBuf,

    /// Where the generated type-declaration stub is written.
    pub declarations_path: PathBuf,

    /// Hard heap limit for the isolated runtime, in bytes.
    pub memory_limit: Option<usize>,

    /// Allocation threshold that triggers a garbage-collection pass.
    pub gc_threshold: Option<usize>,
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            script_path: PathBuf::from("scripts/index.js"),
            declarations_path: PathBuf::from("scripts/types.d.ts"),
            memory_limit: None,
            gc_threshold: None,
        }
    }
}

impl HostConfig {
    /// Loads the config file at `path`, falling back to defaults when the
    /// file does not exist.
    pub fn load(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let raw = fs::read_to_string(path)?;
        toml::from_str(&raw).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}
