//! Image loading, tile preparation and export

use crate::io::configuration::RESIZE_FILTER;
use crate::io::error::{MosaicError, Result};
use crate::spatial::crop_square;
use image::{RgbImage, imageops};
use std::path::Path;

/// Open and decode an input image as 8-bit RGB
///
/// # Errors
///
/// Returns `ImageDecode` if the file cannot be opened or decoded
pub fn open_rgb(path: &Path) -> Result<RgbImage> {
    image::open(path)
        .map(|img| img.to_rgb8())
        .map_err(|e| MosaicError::ImageDecode {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Open a reference image listed in a library
///
/// # Errors
///
/// Returns `ReferenceImageMissing` if the file vanished or cannot be decoded
pub fn open_reference(path: &Path) -> Result<RgbImage> {
    image::open(path)
        .map(|img| img.to_rgb8())
        .map_err(|e| MosaicError::ReferenceImageMissing {
            path: path.to_path_buf(),
            source: e,
        })
}

/// Crop an image to its centered square and resize it to `size` x `size`
pub fn square_tile(image: &RgbImage, size: u32) -> RgbImage {
    let square = crop_square(image).to_image();
    imageops::resize(&square, size, size, RESIZE_FILTER)
}

/// Save an image, creating the parent directory if needed
///
/// The format follows the file extension.
///
/// # Errors
///
/// Returns an error if:
/// - The parent directory cannot be created
/// - The image cannot be encoded or written
pub fn save_image(image: &RgbImage, output_path: &Path) -> Result<()> {
    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| MosaicError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    image
        .save(output_path)
        .map_err(|e| MosaicError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })
}
