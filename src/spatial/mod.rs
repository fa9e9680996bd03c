//! Geometry of square crops and mosaic grids

/// Centered square cropping
pub mod crop;
/// Grid partitioning of the cropped target
pub mod grid;

pub use crop::{SquareRegion, crop_square};
pub use grid::{Cell, MosaicGrid};
