//! Euclidean distance between quadrant signatures

use crate::signature::quadrant::QuadrantSignature;

/// Sum of squared channel differences over all 12 channels
pub fn squared_distance(a: &QuadrantSignature, b: &QuadrantSignature) -> u32 {
    a.channels()
        .iter()
        .zip(b.channels().iter())
        .map(|(&x, &y)| {
            let diff = u32::from(x.abs_diff(y));
            diff * diff
        })
        .sum()
}

/// Euclidean distance between two signatures treated as 12-dimensional points
pub fn distance(a: &QuadrantSignature, b: &QuadrantSignature) -> f64 {
    f64::from(squared_distance(a, b)).sqrt()
}
