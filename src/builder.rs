//! Builder for proximity cover pipelines.

use crate::config::{CompressionConfig, Config};
use crate::cover::ProximityCover;
use crate::error::Result;

/// Builder for [`ProximityCover`] with sampling and compression settings.
#[derive(Debug, Default)]
pub struct CoverBuilder {
    config: Config,
}

impl CoverBuilder {
    /// Create a builder with the default configuration (precision 7, no
    /// compression).
    pub fn new() -> Self {
        Self::default()
    }

    /// Start from an existing configuration.
    pub fn config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Set the sampling precision.
    pub fn precision(mut self, precision: usize) -> Self {
        self.config.precision = precision;
        self
    }

    /// Enable compression with the given minimum and cutoff precisions.
    pub fn compression(mut self, min_precision: usize, cutoff_precision: usize) -> Self {
        self.config.compression = CompressionConfig::enabled(min_precision, cutoff_precision);
        self
    }

    /// Disable compression, keeping any configured bounds.
    pub fn without_compression(mut self) -> Self {
        self.config = self.config.without_compression();
        self
    }

    /// Validate the configuration and build the pipeline.
    pub fn build(self) -> Result<ProximityCover> {
        ProximityCover::from_config(self.config)
    }
}
