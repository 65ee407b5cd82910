//! Circle-to-geohash sampling.
//!
//! The sampler walks a grid of half-cell steps over the north-east quadrant of
//! the query circle. Each step is the lower-left corner of a candidate cell;
//! the candidate is kept when its centroid lies inside the circle. Kept
//! centroids are mirrored into the other three quadrants, projected back to
//! coordinates and encoded at the requested precision.
//!
//! ```text
//!        (-x, y) ┆ (x, y)
//!      ──────────┼──────────
//!       (-x,-y)  ┆ (x,-y)
//! ```
//!
//! Only one quadrant is tested, since the in-circle test is symmetric about
//! the origin.

use super::codec::{GeohashCodec, GeohashEncoder};
use super::dimensions::cell_size;
use super::projection::{PlanarOffset, project_back};
use super::validation::validate_radius;
use crate::error::Result;
use geo::Point;

/// Candidate grids larger than this are logged as suspicious.
const LARGE_GRID_WARNING: u64 = 1_000_000;

/// Samples the geohash cells covering a circle.
///
/// # Examples
///
/// ```rust
/// use proxhash::compute::sampler::GridSampler;
/// use geo::Point;
///
/// let sampler = GridSampler::new();
/// let center = Point::new(116.334255, 40.027400);
///
/// let codes = sampler.sample(&center, 100.0, 8)?;
/// assert!(!codes.is_empty());
/// assert!(codes.iter().all(|c| c.len() == 8));
/// # Ok::<(), proxhash::ProxhashError>(())
/// ```
#[derive(Debug, Clone, Default)]
pub struct GridSampler<E = GeohashCodec> {
    encoder: E,
}

impl GridSampler {
    /// Create a sampler using the default geohash codec.
    pub fn new() -> Self {
        Self {
            encoder: GeohashCodec,
        }
    }
}

impl<E: GeohashEncoder> GridSampler<E> {
    /// Create a sampler that encodes with a custom encoder.
    pub fn with_encoder(encoder: E) -> Self {
        Self { encoder }
    }

    /// Sample the geohash codes at `precision` whose grid cells fall within
    /// `radius_meters` of `center` (`x = longitude`, `y = latitude`).
    ///
    /// The result is a list: the same code may appear several times, once per
    /// sample that landed in it. Compression removes the duplicates.
    ///
    /// # Errors
    ///
    /// Returns [`ProxhashError::InvalidArgument`](crate::ProxhashError) when
    /// `precision` is outside [1, 12], and
    /// [`ProxhashError::InvalidInput`](crate::ProxhashError) for a negative or
    /// non-finite radius.
    pub fn sample(
        &self,
        center: &Point,
        radius_meters: f64,
        precision: usize,
    ) -> Result<Vec<String>> {
        let cell = cell_size(precision)?.half();
        validate_radius(radius_meters)?;

        let lat_steps = (radius_meters / cell.height).ceil() as u64;
        let lon_steps = (radius_meters / cell.width).ceil() as u64;

        let candidates = lat_steps.saturating_mul(lon_steps);
        if candidates > LARGE_GRID_WARNING {
            log::warn!(
                "Sampling {} candidate cells for radius {}m at precision {}; consider a coarser precision",
                candidates,
                radius_meters,
                precision
            );
        }

        let mut codes = Vec::with_capacity(128);
        let mut rejected = 0usize;

        for i in 0..lat_steps {
            let y = cell.height * i as f64;
            for j in 0..lon_steps {
                let x = cell.width * j as f64;

                let centroid = PlanarOffset::new(y + cell.height / 2.0, x + cell.width / 2.0);
                if !centroid.within_radius(radius_meters) {
                    continue;
                }

                for offset in centroid.quadrant_mirrors() {
                    let point = project_back(offset, center);
                    match self.encoder.encode(&point, precision) {
                        Some(code) => codes.push(code),
                        None => rejected += 1,
                    }
                }
            }
        }

        if rejected > 0 {
            log::warn!(
                "Skipped {} samples outside the encodable coordinate range around ({}, {})",
                rejected,
                center.x(),
                center.y()
            );
        }

        log::debug!(
            "Sampled {} codes from a {}x{} step grid at precision {}",
            codes.len(),
            lat_steps,
            lon_steps,
            precision
        );

        Ok(codes)
    }
}
