//! Grid matching and canvas composition

use crate::io::configuration::MosaicConfig;
use crate::io::error::{MosaicError, Result};
use crate::io::image::{open_reference, open_rgb, square_tile};
use crate::io::progress::ProgressManager;
use crate::library::Library;
use crate::signature::{QuadrantSignature, pixel_view};
use crate::spatial::crop::window;
use crate::spatial::{Cell, MosaicGrid, SquareRegion};
use image::{RgbImage, imageops};
use ndarray::ArrayView3;
use std::path::Path;
use tracing::{debug, info, warn};

/// Compose a mosaic of `target` from the library's reference images
///
/// The target is cropped to its centered square and split into an N x N
/// grid, N being `image_size / tile_size`. Cells are matched in row-major
/// order; each match is opened, cropped, resized to the tile size and pasted
/// onto an `image_size` x `image_size` canvas. Only one reference image is
/// decoded at a time. A canvas smaller than one tile yields a blank canvas.
///
/// # Errors
///
/// Returns an error if:
/// - The configuration is invalid or the target is too small for the grid
/// - The library is empty (`EmptyLibrary`)
/// - A matched reference image cannot be opened (`ReferenceImageMissing`)
pub fn compose(
    target: &RgbImage,
    library: &Library,
    config: &MosaicConfig,
    progress: &ProgressManager,
) -> Result<RgbImage> {
    config.validate()?;
    if library.is_empty() {
        return Err(MosaicError::EmptyLibrary);
    }

    let region = SquareRegion::centered(target.width(), target.height());
    let square = region.slice(pixel_view(target)?);
    let grid = MosaicGrid::plan(region.side, config)?;
    let mut canvas = RgbImage::new(config.image_size, config.image_size);

    if grid.is_empty() {
        warn!(
            "Tile size {} exceeds image size {}; producing an empty canvas",
            config.tile_size, config.image_size
        );
        return Ok(canvas);
    }

    progress.start("rows", u64::from(grid.tiles_per_side()));
    for row in 0..grid.tiles_per_side() {
        info!("Processing row {row}");
        for cell in grid.row(row) {
            let signature = QuadrantSignature::from_pixels(cell_pixels(square, &cell, &grid));
            let best = library.nearest(&signature)?;
            debug!(
                "Cell ({}, {}) -> {} (distance {:.2})",
                cell.row,
                cell.col,
                best.entry.path.display(),
                best.distance
            );

            let tile = load_tile(&best.entry.path, grid.tile_size())?;
            imageops::replace(
                &mut canvas,
                &tile,
                i64::from(cell.canvas_x),
                i64::from(cell.canvas_y),
            );
        }
        progress.advance(&format!("row {row}"));
    }
    progress.finish();

    Ok(canvas)
}

/// Open a target image and compose its mosaic
///
/// # Errors
///
/// Returns `ImageDecode` if the target cannot be opened, or any error from
/// [`compose`]
pub fn compose_file(
    target_path: &Path,
    library: &Library,
    config: &MosaicConfig,
    progress: &ProgressManager,
) -> Result<RgbImage> {
    info!("Processing {}", target_path.display());
    let target = open_rgb(target_path)?;
    compose(&target, library, config, progress)
}

fn cell_pixels<'a>(square: ArrayView3<'a, u8>, cell: &Cell, grid: &MosaicGrid) -> ArrayView3<'a, u8> {
    let size = grid.cell_size() as usize;
    let (x, y) = (cell.source_x as usize, cell.source_y as usize);
    window(square, x, y, size, size)
}

fn load_tile(path: &Path, tile_size: u32) -> Result<RgbImage> {
    let reference = open_reference(path)?;
    Ok(square_tile(&reference, tile_size))
}
