//! Store configuration
//!
//! The only setting is the data directory used to resolve, list, save and
//! open graph files. It is an explicit value handed to
//! [`Catalog`](crate::persistence::Catalog), never process-wide state.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Environment variable consulted by [`StoreConfig::from_env`]
pub const DATA_DIR_ENV: &str = "GRAPHOLOGY_DATA_DIR";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Config file could not be read
    #[error("I/O error reading config: {0}")]
    Io(#[from] std::io::Error),

    /// Config file is not valid YAML for this schema
    #[error("Invalid config: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Persistence settings
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    /// Directory holding `<name>.db` files (None = persistence disabled)
    pub data_dir: Option<PathBuf>,
}

impl StoreConfig {
    /// Config rooted at `path`
    pub fn with_data_dir(path: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: Some(path.into()),
        }
    }

    /// Read the data directory from `GRAPHOLOGY_DATA_DIR`, if set and non-empty
    pub fn from_env() -> Self {
        let data_dir = std::env::var_os(DATA_DIR_ENV)
            .filter(|v| !v.is_empty())
            .map(PathBuf::from);
        Self { data_dir }
    }

    /// Load from a YAML file such as `data_dir: ./test-data`
    pub fn from_yaml_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&text)
    }

    /// Parse from YAML text
    pub fn from_yaml_str(text: &str) -> ConfigResult<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    /// Fill unset fields from `other`
    pub fn or(self, other: StoreConfig) -> Self {
        Self {
            data_dir: self.data_dir.or(other.data_dir),
        }
    }
}
