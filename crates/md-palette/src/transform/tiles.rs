//! Tile geometry and the full-raster transform path.
//!
//! Rasters are processed tile by tile. A [`TileGeometry`] splits an image
//! into fixed-size tiles, clipping the last column and row of tiles to the
//! image edge. Rows of tiles write disjoint parts of the output buffer and
//! are processed in parallel.

use rayon::prelude::*;

use super::error::TransformError;
use super::pixel::transform_pixel_into;
use crate::lut::ColorLut;

/// Layout of a tightly packed, row-major, 8-bit-per-channel raster.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RasterLayout {
    /// Image width in pixels
    pub width: u32,
    /// Image height in pixels
    pub height: u32,
    /// Bytes per pixel (1 grey, 2 grey+alpha, 3 RGB, 4 RGBA)
    pub channels: usize,
}

impl RasterLayout {
    /// Create a layout.
    #[inline]
    pub fn new(width: u32, height: u32, channels: usize) -> Self {
        Self {
            width,
            height,
            channels,
        }
    }

    /// Bytes in one row.
    #[inline]
    pub fn row_bytes(&self) -> usize {
        self.width as usize * self.channels
    }

    /// Bytes in the whole raster.
    #[inline]
    pub fn byte_len(&self) -> usize {
        self.row_bytes() * self.height as usize
    }

    /// Check that `buffer` matches this layout.
    pub fn validate(&self, buffer: &[u8]) -> Result<(), TransformError> {
        if self.channels == 0 {
            return Err(TransformError::UnsupportedChannels {
                channels: self.channels,
            });
        }
        if buffer.len() != self.byte_len() {
            return Err(TransformError::BufferSize {
                expected: self.byte_len(),
                actual: buffer.len(),
            });
        }
        Ok(())
    }
}

/// Tile edge lengths in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileSize {
    /// Tile width in pixels
    pub width: u32,
    /// Tile height in pixels
    pub height: u32,
}

impl TileSize {
    /// The 64x64 tile used by default.
    pub const DEFAULT: TileSize = TileSize {
        width: 64,
        height: 64,
    };

    /// Create a tile size.
    #[inline]
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }
}

impl Default for TileSize {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// A tile's position and clipped extent within the image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileRect {
    /// Left edge in pixels
    pub x: u32,
    /// Top edge in pixels
    pub y: u32,
    /// Effective width (smaller than the tile width on the right edge)
    pub width: u32,
    /// Effective height (smaller than the tile height on the bottom edge)
    pub height: u32,
}

/// Tile counts and bounds for an image.
///
/// # Example
///
/// ```
/// use md_palette::{TileGeometry, TileSize};
///
/// let geometry = TileGeometry::new(100, 64, TileSize::DEFAULT).unwrap();
/// assert_eq!(geometry.columns(), 2);
/// assert_eq!(geometry.rows(), 1);
/// assert_eq!(geometry.tile(1, 0).width, 36);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGeometry {
    width: u32,
    height: u32,
    tile: TileSize,
}

impl TileGeometry {
    /// Create a geometry for a `width` x `height` image.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::EmptyTile`] if either tile edge is zero.
    pub fn new(width: u32, height: u32, tile: TileSize) -> Result<Self, TransformError> {
        if tile.width == 0 || tile.height == 0 {
            return Err(TransformError::EmptyTile);
        }
        Ok(Self {
            width,
            height,
            tile,
        })
    }

    /// Number of tile columns.
    #[inline]
    pub fn columns(&self) -> u32 {
        self.width.div_ceil(self.tile.width)
    }

    /// Number of tile rows.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.height.div_ceil(self.tile.height)
    }

    /// Total number of tiles.
    #[inline]
    pub fn tile_count(&self) -> usize {
        self.columns() as usize * self.rows() as usize
    }

    /// Tile size this geometry was built with.
    #[inline]
    pub fn tile_size(&self) -> TileSize {
        self.tile
    }

    /// Bounds of the tile at column `tx`, row `ty`, clipped to the image.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that the tile lies within the grid.
    pub fn tile(&self, tx: u32, ty: u32) -> TileRect {
        debug_assert!(tx < self.columns() && ty < self.rows(), "tile out of grid");
        let x = tx * self.tile.width;
        let y = ty * self.tile.height;
        TileRect {
            x,
            y,
            width: self.tile.width.min(self.width - x),
            height: self.tile.height.min(self.height - y),
        }
    }

    /// All tiles, column by column (top to bottom within each column).
    pub fn tiles(&self) -> impl Iterator<Item = TileRect> + '_ {
        (0..self.columns()).flat_map(move |tx| (0..self.rows()).map(move |ty| self.tile(tx, ty)))
    }
}

/// One finished tile, as reported by [`transform_raster_with_progress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileProgress {
    /// Bounds of the finished tile
    pub rect: TileRect,
    /// Position in column-major order (`tx * rows + ty`)
    pub index: usize,
    /// Number of tiles in the image
    pub total: usize,
}

/// Transform every pixel of `src` into `dst`, tile by tile.
///
/// Both buffers must match `layout`. Rows of tiles are distributed over
/// the rayon thread pool; the result is identical to a sequential pass.
///
/// # Errors
///
/// - [`TransformError::UnsupportedChannels`] for a zero-channel layout
/// - [`TransformError::BufferSize`] if either buffer does not match `layout`
/// - [`TransformError::EmptyTile`] for a zero tile edge
pub fn transform_raster(
    layout: RasterLayout,
    tile: TileSize,
    src: &[u8],
    dst: &mut [u8],
    lut: &ColorLut,
) -> Result<(), TransformError> {
    transform_raster_with_progress(layout, tile, src, dst, lut, |_| {})
}

/// [`transform_raster`] that calls `progress` once per finished tile.
///
/// Rows of tiles run concurrently, so `progress` is called from worker
/// threads and tiles of different rows finish in no particular order.
/// Within a row, tiles are reported left to right.
///
/// # Errors
///
/// Same as [`transform_raster`].
pub fn transform_raster_with_progress<F>(
    layout: RasterLayout,
    tile: TileSize,
    src: &[u8],
    dst: &mut [u8],
    lut: &ColorLut,
    progress: F,
) -> Result<(), TransformError>
where
    F: Fn(TileProgress) + Sync,
{
    layout.validate(src)?;
    layout.validate(dst)?;
    let geometry = TileGeometry::new(layout.width, layout.height, tile)?;

    if dst.is_empty() {
        return Ok(());
    }

    let row_bytes = layout.row_bytes();
    let band_bytes = row_bytes * tile.height as usize;
    let channels = layout.channels;
    let rows = geometry.rows() as usize;
    let total = geometry.tile_count();

    dst.par_chunks_mut(band_bytes)
        .enumerate()
        .for_each(|(ty, band)| {
            let band_src = &src[ty * band_bytes..ty * band_bytes + band.len()];
            for tx in 0..geometry.columns() {
                let rect = geometry.tile(tx, ty as u32);
                for row in 0..rect.height as usize {
                    let start = row * row_bytes + rect.x as usize * channels;
                    let end = start + rect.width as usize * channels;
                    let src_row = &band_src[start..end];
                    let dst_row = &mut band[start..end];
                    for (s, d) in src_row
                        .chunks_exact(channels)
                        .zip(dst_row.chunks_exact_mut(channels))
                    {
                        transform_pixel_into(s, d, lut);
                    }
                }
                progress(TileProgress {
                    rect,
                    index: tx as usize * rows + ty,
                    total,
                });
            }
        });

    Ok(())
}
