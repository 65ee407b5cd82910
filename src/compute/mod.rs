//! Geohash cover algorithms.
//!
//! - [`sampler`]: which cells at a precision cover a circle
//! - [`compress`]: merging complete sibling groups into coarser cells
//! - [`expand`]: the inverse step, splitting a cell into its 32 children
//!
//! The remaining modules hold the shared pieces: cell dimensions, the planar
//! projection, the codec seam and argument validation.

pub mod codec;
pub mod compress;
pub mod dimensions;
pub mod expand;
pub mod projection;
pub mod sampler;
pub mod validation;
