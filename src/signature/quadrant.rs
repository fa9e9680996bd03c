//! Four-quadrant color signatures

use crate::io::error::{Result, computation_error};
use crate::signature::color::ColorSample;
use crate::spatial::crop::window;
use image::RgbImage;
use ndarray::ArrayView3;
use serde::{Deserialize, Serialize};

/// Axis-aligned rectangle of one quadrant, in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct QuadrantRegion {
    /// Left edge
    pub x: usize,
    /// Top edge
    pub y: usize,
    /// Width
    pub width: usize,
    /// Height
    pub height: usize,
}

impl QuadrantRegion {
    /// Number of pixels covered
    pub const fn pixel_count(&self) -> usize {
        self.width * self.height
    }
}

/// Split a `width` x `height` region at `width / 2` and `height / 2`
///
/// Returned in top-left, top-right, bottom-left, bottom-right order. Odd
/// remainders land in the right column and bottom row.
pub const fn quadrant_regions(width: usize, height: usize) -> [QuadrantRegion; 4] {
    let half_width = width / 2;
    let half_height = height / 2;
    [
        QuadrantRegion {
            x: 0,
            y: 0,
            width: half_width,
            height: half_height,
        },
        QuadrantRegion {
            x: half_width,
            y: 0,
            width: width - half_width,
            height: half_height,
        },
        QuadrantRegion {
            x: 0,
            y: half_height,
            width: half_width,
            height: height - half_height,
        },
        QuadrantRegion {
            x: half_width,
            y: half_height,
            width: width - half_width,
            height: height - half_height,
        },
    ]
}

/// Average colors of the four quadrants of a square image
///
/// Serialized field names match the library file format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct QuadrantSignature {
    /// Upper left quadrant
    pub top_left: ColorSample,
    /// Upper right quadrant
    pub top_right: ColorSample,
    /// Lower left quadrant
    pub bot_left: ColorSample,
    /// Lower right quadrant
    pub bot_right: ColorSample,
}

impl QuadrantSignature {
    /// Compute the signature of a `(height, width, channel)` RGB region
    pub fn from_pixels(pixels: ArrayView3<'_, u8>) -> Self {
        let (height, width, _) = pixels.dim();
        let [top_left, top_right, bot_left, bot_right] =
            quadrant_regions(width, height).map(|region| {
                let quadrant = window(
                    pixels.view(),
                    region.x,
                    region.y,
                    region.width,
                    region.height,
                );
                ColorSample::mean(quadrant)
            });

        Self {
            top_left,
            top_right,
            bot_left,
            bot_right,
        }
    }

    /// Compute the signature of a whole RGB image
    ///
    /// # Errors
    ///
    /// Returns a computation error if the image buffer does not hold exactly
    /// three bytes per pixel
    pub fn from_image(image: &RgbImage) -> Result<Self> {
        Ok(Self::from_pixels(pixel_view(image)?))
    }

    /// Quadrants in top-left, top-right, bottom-left, bottom-right order
    pub const fn quadrants(&self) -> [ColorSample; 4] {
        [self.top_left, self.top_right, self.bot_left, self.bot_right]
    }

    /// The 12 channel values, quadrant by quadrant in red, green, blue order
    pub fn channels(&self) -> [u8; 12] {
        let mut channels = [0u8; 12];
        for (slot, value) in channels
            .iter_mut()
            .zip(self.quadrants().iter().flat_map(ColorSample::channels))
        {
            *slot = value;
        }
        channels
    }
}

/// View an RGB image as a `(height, width, channel)` array without copying
///
/// # Errors
///
/// Returns a computation error if the buffer length does not match the
/// image dimensions
pub fn pixel_view(image: &RgbImage) -> Result<ArrayView3<'_, u8>> {
    let shape = (image.height() as usize, image.width() as usize, 3);
    ArrayView3::from_shape(shape, image.as_raw().as_slice())
        .map_err(|e| computation_error("pixel view", &e))
}
