//! Mosaic composition from a target image and a library

/// Grid matching and canvas composition
pub mod assembler;

pub use assembler::{compose, compose_file};
