//! Geohash cell dimensions per precision level.
//!
//! | Precision | Height (m) | Width (m) |
//! |-----------|------------|-----------|
//! | 1         | 4,992,600  | 5,009,400 |
//! | 2         | 624,100    | 1,252,300 |
//! | 3         | 156,000    | 156,500   |
//! | 4         | 19,500     | 39,100    |
//! | 5         | 4,900      | 4,900     |
//! | 6         | 609.4      | 1,200     |
//! | 7         | 152.4      | 152.9     |
//! | 8         | 19.0       | 38.2      |
//! | 9         | 4.8        | 4.8       |
//! | 10        | 0.595      | 1.2       |
//! | 11        | 0.149      | 0.149     |
//! | 12        | 0.0199     | 0.0370    |

use super::validation::validate_precision;
use crate::error::Result;

/// Height and width of a geohash cell in meters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellSize {
    pub height: f64,
    pub width: f64,
}

impl CellSize {
    const fn new(height: f64, width: f64) -> Self {
        Self { height, width }
    }

    /// Half of this cell in both dimensions.
    pub fn half(&self) -> Self {
        Self {
            height: self.height / 2.0,
            width: self.width / 2.0,
        }
    }
}

/// Cell dimensions indexed by `precision - 1`.
pub const GRID_DIMENSIONS: [CellSize; 12] = [
    CellSize::new(4_992_600.0, 5_009_400.0),
    CellSize::new(624_100.0, 1_252_300.0),
    CellSize::new(156_000.0, 156_500.0),
    CellSize::new(19_500.0, 39_100.0),
    CellSize::new(4_900.0, 4_900.0),
    CellSize::new(609.4, 1_200.0),
    CellSize::new(152.4, 152.9),
    CellSize::new(19.0, 38.2),
    CellSize::new(4.8, 4.8),
    CellSize::new(0.595, 1.2),
    CellSize::new(0.149, 0.149),
    CellSize::new(0.0199, 0.0370),
];

/// Look up the cell size for a precision in [1, 12].
///
/// # Examples
///
/// ```
/// use proxhash::compute::dimensions::cell_size;
///
/// let size = cell_size(7).unwrap();
/// assert_eq!(size.height, 152.4);
/// assert_eq!(size.width, 152.9);
/// assert!(cell_size(0).is_err());
/// ```
pub fn cell_size(precision: usize) -> Result<CellSize> {
    validate_precision("precision", precision)?;
    Ok(GRID_DIMENSIONS[precision - 1])
}
