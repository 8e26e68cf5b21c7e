//! Registry configuration loaded from TOML

use crate::error::RegistryResult;
use crate::locale::{LocaleResolver, DEFAULT_LOCALE, DEFAULT_LOCALE_ENV};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Configuration for building a [`Registry`](crate::Registry).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RegistryConfig {
    /// Locale used when neither the request nor the environment resolves.
    pub default_locale: String,
    /// Environment variable holding the ambient locale.
    pub locale_env: String,
    /// Whether the compiled-in catalogs are registered.
    pub load_builtin: bool,
    /// Directories of `<name>.<locale>` files registered after the built-ins.
    pub catalog_dirs: Vec<PathBuf>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            default_locale: DEFAULT_LOCALE.to_string(),
            locale_env: DEFAULT_LOCALE_ENV.to_string(),
            load_builtin: true,
            catalog_dirs: Vec::new(),
        }
    }
}

impl RegistryConfig {
    /// Parse a configuration from TOML text
    pub fn from_toml_str(content: &str) -> RegistryResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Read and parse a TOML configuration file
    pub fn load(path: impl AsRef<Path>) -> RegistryResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Locale resolver described by this configuration
    pub fn resolver(&self) -> LocaleResolver {
        LocaleResolver::new(self.locale_env.clone(), self.default_locale.clone())
    }
}
