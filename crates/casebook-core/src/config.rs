//! TOML configuration.
//!
//! ```toml
//! [storage]
//! data_path = "casebook.json"
//!
//! [view]
//! page_size = 10
//! default_sort = "name"
//! ```
//!
//! Every key is optional.

use crate::{
    error::ErrorClass,
    query::{SortKey, page::DEFAULT_PAGE_SIZE},
};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    num::NonZeroUsize,
    path::{Path, PathBuf},
};
use thiserror::Error as ThisError;

/// Environment variable naming the config file.
pub const ENV_CONFIG: &str = "CASEBOOK_CONFIG";

const DEFAULT_DATA_PATH: &str = "casebook.json";

///
/// ConfigError
///

#[derive(Clone, Debug, Eq, PartialEq, ThisError)]
pub enum ConfigError {
    #[error("failed to read config '{path}': {message}")]
    Read { path: String, message: String },

    #[error("failed to parse config: {0}")]
    Parse(String),

    #[error("invalid config: {0}")]
    Invalid(String),
}

impl ConfigError {
    #[must_use]
    pub const fn class(&self) -> ErrorClass {
        match self {
            Self::Read { .. } => ErrorClass::Io,
            Self::Parse(_) | Self::Invalid(_) => ErrorClass::InvalidInput,
        }
    }
}

///
/// Config
///

#[derive(Clone, Debug, Default, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub storage: StorageConfig,
    pub view: ViewConfig,
}

///
/// StorageConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StorageConfig {
    /// JSON file holding the persisted collection.
    pub data_path: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
        }
    }
}

///
/// ViewConfig
///

#[derive(Clone, Debug, Deserialize, Eq, PartialEq, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewConfig {
    pub page_size: usize,
    /// `"name"`, `"lastRunAt"`, or anything else for store order.
    pub default_sort: String,
}

impl Default for ViewConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE.get(),
            default_sort: String::new(),
        }
    }
}

impl ViewConfig {
    /// Page size, checked positive.
    pub fn page_size(&self) -> Result<NonZeroUsize, ConfigError> {
        NonZeroUsize::new(self.page_size)
            .ok_or_else(|| ConfigError::Invalid("view.page_size must be at least 1".to_string()))
    }

    #[must_use]
    pub fn default_sort(&self) -> SortKey {
        SortKey::parse(&self.default_sort)
    }
}

impl Config {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(text).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;

        Ok(config)
    }

    /// Read and parse a config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|err| ConfigError::Read {
            path: path.display().to_string(),
            message: err.to_string(),
        })?;

        Self::from_toml_str(&text)
    }

    /// Load `path` if given, else the defaults.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        path.map_or_else(|| Ok(Self::default()), Self::load)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.view.page_size()?;
        if self.storage.data_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "storage.data_path must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}

///
/// TESTS
///
