//! Photo mosaics from quadrant color signatures
//!
//! A library of reference images is indexed by the truncated mean color of
//! each quadrant of their centered square. A target image is then split into
//! a grid of cells, and every cell is replaced by the library image whose
//! signature is nearest in Euclidean distance.

#![forbid(unsafe_code)]

/// Command line, configuration, errors, logging and image I/O
pub mod io;
/// Reference image library: building, storage and search
pub mod library;
/// Mosaic composition
pub mod mosaic;
/// Color signatures and their distance
pub mod signature;
/// Square crops and grid partitioning
pub mod spatial;

pub use io::error::{MosaicError, Result};
