//! Centered square cropping for images and pixel arrays

use image::{GenericImageView, SubImage, imageops};
use ndarray::{ArrayView3, Axis, Slice};

/// Largest centered square inside a rectangular image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SquareRegion {
    /// Left edge in pixels
    pub x: u32,
    /// Top edge in pixels
    pub y: u32,
    /// Edge length in pixels
    pub side: u32,
}

impl SquareRegion {
    /// Compute the centered square of a `width` x `height` image
    ///
    /// The longer axis is trimmed equally on both sides, with the odd pixel
    /// (if any) dropped from the far side.
    pub const fn centered(width: u32, height: u32) -> Self {
        if width > height {
            Self {
                x: (width - height) / 2,
                y: 0,
                side: height,
            }
        } else {
            Self {
                x: 0,
                y: (height - width) / 2,
                side: width,
            }
        }
    }

    /// Borrow the region of an image without copying pixels
    pub fn view<'a, I: GenericImageView>(&self, image: &'a I) -> SubImage<&'a I> {
        imageops::crop_imm(image, self.x, self.y, self.side, self.side)
    }

    /// Narrow a `(height, width, channel)` pixel view to the region
    pub fn slice<'a>(&self, pixels: ArrayView3<'a, u8>) -> ArrayView3<'a, u8> {
        let (x, y, side) = (self.x as usize, self.y as usize, self.side as usize);
        window(pixels, x, y, side, side)
    }
}

/// Narrow a `(height, width, channel)` pixel view to a rectangle, keeping
/// every channel
pub fn window(
    pixels: ArrayView3<'_, u8>,
    x: usize,
    y: usize,
    width: usize,
    height: usize,
) -> ArrayView3<'_, u8> {
    pixels
        .slice_axis_move(Axis(0), Slice::from(y..y + height))
        .slice_axis_move(Axis(1), Slice::from(x..x + width))
}

/// Borrow the centered square of an image
pub fn crop_square<I: GenericImageView>(image: &I) -> SubImage<&I> {
    let (width, height) = image.dimensions();
    SquareRegion::centered(width, height).view(image)
}
