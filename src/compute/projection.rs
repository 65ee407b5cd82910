//! Local flat-earth projection between meter offsets and degrees.
//!
//! Offsets are converted with a spherical small-angle approximation around a
//! reference coordinate. The approximation is only meaningful for offsets that
//! are small relative to the Earth's radius.

use geo::Point;

/// Mean Earth radius in meters used by the projection.
pub const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// Planar displacement in meters from a reference coordinate.
///
/// `y` grows northward and `x` grows eastward.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlanarOffset {
    pub y: f64,
    pub x: f64,
}

impl PlanarOffset {
    pub fn new(y: f64, x: f64) -> Self {
        Self { y, x }
    }

    /// The four reflections of this offset across both axes, in the order
    /// `(y, x)`, `(-y, x)`, `(y, -x)`, `(-y, -x)`.
    pub fn quadrant_mirrors(&self) -> [PlanarOffset; 4] {
        [
            PlanarOffset::new(self.y, self.x),
            PlanarOffset::new(-self.y, self.x),
            PlanarOffset::new(self.y, -self.x),
            PlanarOffset::new(-self.y, -self.x),
        ]
    }

    /// Whether this offset lies inside or on a circle of `radius` meters
    /// centered at the origin.
    pub fn within_radius(&self, radius: f64) -> bool {
        self.x * self.x + self.y * self.y <= radius * radius
    }
}

/// Convert a planar offset back to a coordinate relative to `reference`.
///
/// Returns a point with `x = longitude` and `y = latitude`.
///
/// Wraparound is limited to two rules: a longitude above 180 has 360
/// subtracted, and a latitude below -180 adds 360 to the longitude. The second
/// rule is tested on latitude and is unreachable for realistic offsets; it is
/// kept as-is so any change to it is deliberate. No other clamping happens, so
/// offsets near the poles can yield latitudes outside [-90, 90].
///
/// # Examples
///
/// ```
/// use proxhash::compute::projection::{project_back, PlanarOffset};
/// use geo::Point;
///
/// let center = Point::new(116.334255, 40.027400);
/// let same = project_back(PlanarOffset::new(0.0, 0.0), &center);
/// assert_eq!(same, center);
/// ```
pub fn project_back(offset: PlanarOffset, reference: &Point) -> Point {
    let (ref_lon, ref_lat) = (reference.x(), reference.y());

    let lat_diff = (offset.y / EARTH_RADIUS_METERS).to_degrees();
    let lon_diff = (offset.x / EARTH_RADIUS_METERS).to_degrees() / ref_lat.to_radians().cos();

    let lat = ref_lat + lat_diff;
    let mut lon = ref_lon + lon_diff;

    if lon > 180.0 {
        lon -= 360.0;
    }
    // FIXME: guarded on latitude rather than longitude, so longitudes below
    // -180 are never wrapped.
    if lat < -180.0 {
        lon += 360.0;
    }

    Point::new(lon, lat)
}
