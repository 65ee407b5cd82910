//! Geohash encoding seam.
//!
//! Sampling only needs a way to turn a coordinate into a geohash string of a
//! given length. [`GeohashEncoder`] abstracts that so the sampler can be driven
//! by the `geohash` crate in production and by recording encoders in tests.

use geo::Point;

/// The 32-symbol geohash alphabet in encoding order (`a`, `i`, `l`, `o` are
/// excluded).
pub const BASE32: [char; 32] = [
    '0', '1', '2', '3', '4', '5', '6', '7', '8', '9', 'b', 'c', 'd', 'e', 'f', 'g', 'h', 'j', 'k',
    'm', 'n', 'p', 'q', 'r', 's', 't', 'u', 'v', 'w', 'x', 'y', 'z',
];

/// Number of children a geohash cell splits into at the next precision.
pub const SIBLING_COUNT: usize = BASE32.len();

/// Encodes a coordinate into a geohash of the requested length.
pub trait GeohashEncoder {
    /// Encode `point` (`x = longitude`, `y = latitude`) with `precision`
    /// characters.
    ///
    /// Returns `None` when the coordinate cannot be represented, e.g. a
    /// latitude beyond the poles.
    fn encode(&self, point: &Point, precision: usize) -> Option<String>;
}

/// Default encoder backed by the `geohash` crate.
#[derive(Debug, Clone, Copy, Default)]
pub struct GeohashCodec;

impl GeohashEncoder for GeohashCodec {
    fn encode(&self, point: &Point, precision: usize) -> Option<String> {
        let coord = geohash::Coord {
            x: point.x(),
            y: point.y(),
        };
        match geohash::encode(coord, precision) {
            Ok(hash) => Some(hash),
            Err(e) => {
                log::debug!(
                    "Geohash encoding rejected ({}, {}) at precision {}: {}",
                    point.x(),
                    point.y(),
                    precision,
                    e
                );
                None
            }
        }
    }
}

impl<E: GeohashEncoder + ?Sized> GeohashEncoder for &E {
    fn encode(&self, point: &Point, precision: usize) -> Option<String> {
        (**self).encode(point, precision)
    }
}
