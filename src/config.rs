//! Configuration for proximity covers.
//!
//! Every field has a default, so a partial document (or an empty one) is a
//! valid configuration:
//!
//! ```json
//! { "precision": 8, "compression": { "enabled": true, "min_precision": 4 } }
//! ```
use crate::compute::validation::validate_precision;
use crate::error::{ProxhashError, Result};
use serde::de::Error;
use std::path::Path;

/// Cover configuration.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Geohash precision the circle is sampled at.
    #[serde(default = "Config::default_precision")]
    pub precision: usize,

    #[serde(default)]
    pub compression: CompressionConfig,
}

/// Settings for merging sampled codes into coarser cells.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CompressionConfig {
    #[serde(default)]
    pub enabled: bool,

    /// Shortest code merging may produce
    #[serde(default = "CompressionConfig::default_min_precision")]
    pub min_precision: usize,

    /// Longest code emitted; longer unmerged codes are truncated
    #[serde(default = "CompressionConfig::default_cutoff_precision")]
    pub cutoff_precision: usize,
}

impl CompressionConfig {
    const fn default_min_precision() -> usize {
        3
    }

    const fn default_cutoff_precision() -> usize {
        7
    }

    /// Enabled compression with the given bounds.
    pub fn enabled(min_precision: usize, cutoff_precision: usize) -> Self {
        Self {
            enabled: true,
            min_precision,
            cutoff_precision,
        }
    }
}

impl Default for CompressionConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            min_precision: Self::default_min_precision(),
            cutoff_precision: Self::default_cutoff_precision(),
        }
    }
}

impl Config {
    const fn default_precision() -> usize {
        7
    }

    pub fn with_precision(mut self, precision: usize) -> Self {
        self.precision = precision;
        self
    }

    pub fn with_compression(mut self, compression: CompressionConfig) -> Self {
        self.compression = compression;
        self
    }

    pub fn without_compression(mut self) -> Self {
        self.compression.enabled = false;
        self
    }

    /// Check every precision lies in [1, 12].
    ///
    /// Compression bounds are checked even when compression is disabled, so a
    /// configuration stays valid when it is switched on later.
    pub fn validate(&self) -> Result<()> {
        validate_precision("precision", self.precision)?;
        validate_precision("min precision", self.compression.min_precision)?;
        validate_precision("cutoff precision", self.compression.cutoff_precision)?;

        if self.compression.enabled && self.compression.cutoff_precision < self.precision {
            log::warn!(
                "Cutoff precision {} is coarser than sampling precision {}; unmerged codes will be truncated",
                self.compression.cutoff_precision,
                self.precision
            );
        }

        Ok(())
    }

    pub fn from_json(json: &str) -> std::result::Result<Self, serde_json::Error> {
        let config: Config = serde_json::from_str(json)?;
        if let Err(e) = config.validate() {
            return Err(serde_json::Error::custom(e));
        }
        Ok(config)
    }

    pub fn to_json(&self) -> std::result::Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    #[cfg(feature = "toml")]
    pub fn from_toml(toml_str: &str) -> std::result::Result<Self, toml::de::Error> {
        let config: Config = toml::from_str(toml_str)?;
        if let Err(e) = config.validate() {
            return Err(toml::de::Error::custom(e));
        }
        Ok(config)
    }

    #[cfg(feature = "toml")]
    pub fn to_toml(&self) -> std::result::Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Load a configuration file, choosing the format from its extension.
    ///
    /// `.toml` files need the `toml` feature; anything else is read as JSON.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| {
            ProxhashError::Config(format!("Failed to read {}: {}", path.display(), e))
        })?;

        let is_toml = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"));

        if is_toml {
            #[cfg(feature = "toml")]
            {
                return Self::from_toml(&contents)
                    .map_err(|e| ProxhashError::Config(format!("{}: {}", path.display(), e)));
            }
            #[cfg(not(feature = "toml"))]
            {
                return Err(ProxhashError::Config(format!(
                    "{}: TOML configuration requires the `toml` feature",
                    path.display()
                )));
            }
        }

        Self::from_json(&contents)
            .map_err(|e| ProxhashError::Config(format!("{}: {}", path.display(), e)))
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            precision: Self::default_precision(),
            compression: CompressionConfig::default(),
        }
    }
}
