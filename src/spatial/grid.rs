//! Partitioning of a square target into mosaic cells

use crate::io::configuration::MosaicConfig;
use crate::io::error::{Result, invalid_parameter};

/// One grid position, with its source rectangle in the cropped target and
/// its destination on the output canvas
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// Grid row, top to bottom
    pub row: u32,
    /// Grid column, left to right
    pub col: u32,
    /// Left edge of the cell in the cropped target
    pub source_x: u32,
    /// Top edge of the cell in the cropped target
    pub source_y: u32,
    /// Left edge of the tile on the canvas
    pub canvas_x: u32,
    /// Top edge of the tile on the canvas
    pub canvas_y: u32,
}

/// N x N partition of a square target image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MosaicGrid {
    tiles_per_side: u32,
    cell_size: u32,
    tile_size: u32,
}

impl MosaicGrid {
    /// Plan the grid for a square target of edge `square_side`
    ///
    /// A canvas smaller than one tile gives an empty grid.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration has a zero dimension or
    /// if the target is too small to give every cell at least one pixel
    pub fn plan(square_side: u32, config: &MosaicConfig) -> Result<Self> {
        config.validate()?;
        let tiles_per_side = config.tiles_per_side();
        let cell_size = square_side.checked_div(tiles_per_side).unwrap_or(0);

        if tiles_per_side > 0 && cell_size == 0 {
            return Err(invalid_parameter(
                "image_size",
                &config.image_size,
                &format!(
                    "target square of {square_side}px cannot be split into {tiles_per_side}x{tiles_per_side} cells"
                ),
            ));
        }

        Ok(Self {
            tiles_per_side,
            cell_size,
            tile_size: config.tile_size,
        })
    }

    /// Number of cells along each edge
    pub const fn tiles_per_side(&self) -> u32 {
        self.tiles_per_side
    }

    /// Edge length of a cell in the cropped target
    pub const fn cell_size(&self) -> u32 {
        self.cell_size
    }

    /// Edge length of a tile on the canvas
    pub const fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// Whether the grid has no cells
    pub const fn is_empty(&self) -> bool {
        self.tiles_per_side == 0
    }

    /// Cells of one row, left to right
    pub fn row(&self, row: u32) -> impl Iterator<Item = Cell> + '_ {
        (0..self.tiles_per_side).map(move |col| Cell {
            row,
            col,
            source_x: col * self.cell_size,
            source_y: row * self.cell_size,
            canvas_x: col * self.tile_size,
            canvas_y: row * self.tile_size,
        })
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.tiles_per_side).flat_map(move |row| self.row(row))
    }
}
