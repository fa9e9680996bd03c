//! Color signatures and the distance used to compare them
//!
//! A signature is the truncated mean color of each quadrant of a square
//! image. Two signatures are compared by plain Euclidean distance over the
//! resulting 12 channels.

/// Truncated mean color of a pixel region
pub mod color;
/// Euclidean distance between signatures
pub mod distance;
/// Quadrant splitting and signature computation
pub mod quadrant;

pub use color::ColorSample;
pub use quadrant::{QuadrantSignature, pixel_view};
