//! Truncated mean color of a pixel region

use ndarray::{ArrayView3, Axis};
use serde::{Deserialize, Serialize};

/// Mean red, green and blue of a pixel region, floor-divided
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ColorSample {
    /// Mean red channel
    pub red: u8,
    /// Mean green channel
    pub green: u8,
    /// Mean blue channel
    pub blue: u8,
}

impl ColorSample {
    /// Create a sample from explicit channel values
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// Average a `(height, width, channel)` region of RGB pixels
    ///
    /// Each channel is the integer sum divided by the pixel count, rounded
    /// down. An empty region averages to black.
    pub fn mean(pixels: ArrayView3<'_, u8>) -> Self {
        let mut sums = [0u64; 3];
        let mut count = 0u64;

        for pixel in pixels.lanes(Axis(2)) {
            for (sum, &value) in sums.iter_mut().zip(pixel.iter()) {
                *sum += u64::from(value);
            }
            count += 1;
        }

        if count == 0 {
            return Self::default();
        }

        // A mean of u8 values never exceeds u8::MAX
        let channel = |sum: u64| u8::try_from(sum / count).unwrap_or(u8::MAX);
        let [red, green, blue] = sums;
        Self {
            red: channel(red),
            green: channel(green),
            blue: channel(blue),
        }
    }

    /// Channels in red, green, blue order
    pub const fn channels(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }
}
