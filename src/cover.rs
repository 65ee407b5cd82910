//! Proximity covers: sampling followed by optional compression.

use crate::compute::codec::{GeohashCodec, GeohashEncoder};
use crate::compute::compress::compress;
use crate::compute::sampler::GridSampler;
use crate::compute::validation::{validate_geographic_point, validate_radius};
use crate::config::Config;
use crate::error::Result;
use geo::Point;
use std::collections::BTreeSet;

/// Codes covering one query circle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverResult {
    /// The cover. Sorted and deduplicated when compression ran; otherwise the
    /// raw samples in sampling order, duplicates included.
    pub codes: Vec<String>,
    /// Number of codes the sampler produced, duplicates included.
    pub sampled: usize,
    /// Whether `codes` went through compression.
    pub compressed: bool,
}

impl CoverResult {
    /// How many codes compression (or nothing) removed from the raw samples.
    pub fn reduced(&self) -> usize {
        self.sampled.saturating_sub(self.codes.len())
    }

    /// Sorted, deduplicated view of the cover.
    pub fn unique_codes(&self) -> Vec<&str> {
        self.codes
            .iter()
            .map(String::as_str)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.codes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }
}

/// A validated cover pipeline.
///
/// Built with [`CoverBuilder`](crate::CoverBuilder) or from a [`Config`].
///
/// # Examples
///
/// ```rust
/// use proxhash::{Point, ProximityCover};
///
/// let cover = ProximityCover::builder()
///     .precision(7)
///     .compression(3, 7)
///     .build()?;
///
/// let result = cover.query(&Point::new(116.334255, 40.027400), 1000.0)?;
/// assert!(result.len() <= result.sampled);
/// # Ok::<(), proxhash::ProxhashError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ProximityCover<E = GeohashCodec> {
    config: Config,
    sampler: GridSampler<E>,
}

impl ProximityCover {
    pub fn builder() -> crate::CoverBuilder {
        crate::CoverBuilder::new()
    }

    /// Create a pipeline from a configuration, validating it first.
    pub fn from_config(config: Config) -> Result<Self> {
        Self::with_encoder(config, GeohashCodec)
    }
}

impl<E: GeohashEncoder> ProximityCover<E> {
    /// Create a pipeline that encodes with a custom encoder.
    pub fn with_encoder(config: Config, encoder: E) -> Result<Self> {
        config.validate()?;
        Ok(Self {
            config,
            sampler: GridSampler::with_encoder(encoder),
        })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Cover the circle of `radius_meters` around `center`.
    ///
    /// `center` is validated as a geographic coordinate (`x = longitude`,
    /// `y = latitude`) before any sampling happens.
    pub fn query(&self, center: &Point, radius_meters: f64) -> Result<CoverResult> {
        validate_geographic_point(center)?;
        validate_radius(radius_meters)?;

        let samples = self
            .sampler
            .sample(center, radius_meters, self.config.precision)?;
        let sampled = samples.len();

        let compression = &self.config.compression;
        if !compression.enabled {
            return Ok(CoverResult {
                codes: samples,
                sampled,
                compressed: false,
            });
        }

        let codes = compress(
            &samples,
            compression.min_precision,
            compression.cutoff_precision,
        )?;

        log::debug!(
            "Cover around ({}, {}) r={}m: {} samples compressed to {} codes",
            center.x(),
            center.y(),
            radius_meters,
            sampled,
            codes.len()
        );

        Ok(CoverResult {
            codes,
            sampled,
            compressed: true,
        })
    }
}
