//! Defaults and runtime configuration for library building and composition

use crate::io::error::{Result, invalid_parameter};
use image::imageops::FilterType;
use std::path::PathBuf;

/// Default edge length in pixels of each pasted tile
pub const DEFAULT_TILE_SIZE: u32 = 200;

/// Default edge length in pixels of the square output canvas
pub const DEFAULT_IMAGE_SIZE: u32 = 4000;

/// Default library file used by both pipelines
pub const DEFAULT_LIBRARY_FILE: &str = "libfile.txt";

/// Default edge length in pixels of saved library thumbnails
pub const DEFAULT_THUMBNAIL_SIZE: u32 = 200;

// Output settings
/// Suffix added to the target file stem when no output path is given
pub const OUTPUT_SUFFIX: &str = "_mosaic";

/// Resampling filter used for tiles and thumbnails (bicubic)
pub const RESIZE_FILTER: FilterType = FilterType::CatmullRom;

// Logging settings
/// Date component appended to log file names
pub const LOG_FILE_DATE_FORMAT: &str = "%Y-%m-%d";
/// Infix between the command name and the date in log file names
pub const LOG_FILE_INFIX: &str = ".log.";

/// Timestamp format at the start of each log line, in local time
pub const LOG_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S,%3f";

/// How the library file is opened at the start of a build run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WriteMode {
    /// Discard any existing records
    #[default]
    Truncate,
    /// Keep existing records and add new ones after them
    Append,
}

/// Thumbnail output requested during a library build
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailConfig {
    /// Directory receiving one thumbnail per processed image
    pub directory: PathBuf,
    /// Edge length of each square thumbnail
    pub size: u32,
}

/// Parameters of a library build run
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BuildConfig {
    /// Truncate or append to the library file
    pub write_mode: WriteMode,
    /// Optional thumbnail output
    pub thumbnails: Option<ThumbnailConfig>,
}

impl BuildConfig {
    /// Reject thumbnail sizes that would produce empty images
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the thumbnail size is zero
    pub fn validate(&self) -> Result<()> {
        match &self.thumbnails {
            Some(thumbnails) if thumbnails.size == 0 => Err(invalid_parameter(
                "thumbnail_size",
                &thumbnails.size,
                &"must be greater than zero",
            )),
            _ => Ok(()),
        }
    }
}

/// Geometry of a composed mosaic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicConfig {
    /// Edge length in pixels of each pasted tile
    pub tile_size: u32,
    /// Edge length in pixels of the square output canvas
    pub image_size: u32,
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            tile_size: DEFAULT_TILE_SIZE,
            image_size: DEFAULT_IMAGE_SIZE,
        }
    }
}

impl MosaicConfig {
    /// Check that both dimensions are positive
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` naming the first zero dimension
    pub fn validate(&self) -> Result<()> {
        if self.tile_size == 0 {
            return Err(invalid_parameter(
                "tile_size",
                &self.tile_size,
                &"must be greater than zero",
            ));
        }
        if self.image_size == 0 {
            return Err(invalid_parameter(
                "image_size",
                &self.image_size,
                &"must be greater than zero",
            ));
        }
        Ok(())
    }

    /// Number of tiles along each edge of the canvas
    pub const fn tiles_per_side(&self) -> u32 {
        match self.image_size.checked_div(self.tile_size) {
            Some(tiles) => tiles,
            None => 0,
        }
    }
}
