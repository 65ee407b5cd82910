//! Cover a circular query region with geohash cells, then compress the cover.
//!
//! A circle (center + radius in meters) is sampled on a half-cell grid at a
//! fixed geohash precision. The resulting codes can be compressed by merging
//! every complete group of 32 sibling cells into its parent, down to a minimum
//! precision, while unmerged codes are truncated to a cutoff precision. The
//! output is a small set of prefixes suitable for prefix queries against a
//! geohash-keyed store.
//!
//! ```rust
//! use proxhash::{Point, ProximityCover};
//!
//! let cover = ProximityCover::builder()
//!     .precision(7)
//!     .compression(3, 7)
//!     .build()?;
//!
//! let result = cover.query(&Point::new(-74.0060, 40.7128), 1000.0)?;
//! println!("{} codes, {} reduced", result.len(), result.reduced());
//! # Ok::<(), proxhash::ProxhashError>(())
//! ```
//!
//! The two algorithms are also usable on their own:
//!
//! ```rust
//! use proxhash::{GridSampler, Point, compress, expand};
//!
//! let samples = GridSampler::new().sample(&Point::new(116.33, 40.02), 100.0, 8)?;
//! assert!(!samples.is_empty());
//!
//! assert_eq!(compress(&expand("tdnu2"), 3, 7)?, vec!["tdnu2"]);
//! # Ok::<(), proxhash::ProxhashError>(())
//! ```

pub mod builder;
pub mod compute;
pub mod config;
pub mod cover;
pub mod error;

pub use builder::CoverBuilder;
pub use cover::{CoverResult, ProximityCover};
pub use error::{ProxhashError, Result};

pub use config::{CompressionConfig, Config};

pub use compute::codec::{BASE32, GeohashCodec, GeohashEncoder};
pub use compute::compress::compress;
pub use compute::dimensions::{CellSize, GRID_DIMENSIONS, cell_size};
pub use compute::expand::{expand, expand_all, expand_to};
pub use compute::projection::{PlanarOffset, project_back};
pub use compute::sampler::GridSampler;

pub use compute::validation;

pub use geo::Point;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Common imports
pub mod prelude {

    pub use crate::{CoverBuilder, ProximityCover, ProxhashError, Result};

    pub use geo::Point;

    pub use crate::{Config, CompressionConfig, GridSampler, compress, expand};
}
