//! Validation for precisions, coordinates and radii.

use crate::error::{ProxhashError, Result};
use geo::Point;

/// Shortest geohash supported by the codec.
pub const MIN_PRECISION: usize = 1;

/// Longest geohash supported by the codec.
pub const MAX_PRECISION: usize = 12;

/// Validates that a precision lies in [1, 12].
///
/// `name` identifies the argument in the error message.
///
/// # Examples
///
/// ```
/// use proxhash::validation::validate_precision;
///
/// assert!(validate_precision("precision", 7).is_ok());
/// assert!(validate_precision("precision", 0).is_err());
/// assert!(validate_precision("cutoff precision", 13).is_err());
/// ```
pub fn validate_precision(name: &str, precision: usize) -> Result<()> {
    if !(MIN_PRECISION..=MAX_PRECISION).contains(&precision) {
        return Err(ProxhashError::InvalidArgument(format!(
            "{} must be in range [{}, {}], got: {}",
            name, MIN_PRECISION, MAX_PRECISION, precision
        )));
    }
    Ok(())
}

/// Validates a query center has finite, in-range longitude and latitude.
///
/// Longitude: [-180.0, 180.0], Latitude: [-90.0, 90.0]
///
/// # Examples
///
/// ```
/// use proxhash::validation::validate_geographic_point;
/// use geo::Point;
///
/// let beijing = Point::new(116.334255, 40.027400);
/// assert!(validate_geographic_point(&beijing).is_ok());
///
/// let invalid = Point::new(116.0, 95.0);
/// assert!(validate_geographic_point(&invalid).is_err());
/// ```
pub fn validate_geographic_point(point: &Point) -> Result<()> {
    let (x, y) = (point.x(), point.y());

    if !x.is_finite() {
        return Err(ProxhashError::InvalidInput(format!(
            "Longitude must be finite, got: {}",
            x
        )));
    }

    if !y.is_finite() {
        return Err(ProxhashError::InvalidInput(format!(
            "Latitude must be finite, got: {}",
            y
        )));
    }

    if !(-180.0..=180.0).contains(&x) {
        return Err(ProxhashError::InvalidInput(format!(
            "Longitude out of range [-180.0, 180.0]: {}",
            x
        )));
    }

    if !(-90.0..=90.0).contains(&y) {
        return Err(ProxhashError::InvalidInput(format!(
            "Latitude out of range [-90.0, 90.0]: {}",
            y
        )));
    }

    Ok(())
}

/// Validates a search radius in meters.
pub fn validate_radius(radius_meters: f64) -> Result<()> {
    if !radius_meters.is_finite() || radius_meters < 0.0 {
        return Err(ProxhashError::InvalidInput(format!(
            "Radius must be a finite, non-negative number of meters, got: {}",
            radius_meters
        )));
    }
    Ok(())
}
