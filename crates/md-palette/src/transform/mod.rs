//! Transform engine
//!
//! Applies a [`ColorLut`](crate::ColorLut) to pixels, colormaps and tiled
//! rasters, and drives palette fades.
//!
//! # Paths
//!
//! - **Pixel**: [`transform_pixel`] applies the shadow/highlight consensus
//!   rule ([`select_triple`]) to the first three channels.
//! - **Indexed palette**: [`transform_colormap`] converts only the colormap
//!   of an indexed image. Same rule, fewer entries.
//! - **Raster**: [`transform_raster`] walks a [`TileGeometry`] and writes
//!   a caller-provided output buffer.
//! - **Fade**: [`FadeSequence`] yields one table per frame; [`render_fade`]
//!   and [`fade_colormap`] apply them to the unfaded input.

mod error;
mod fade;
mod palette;
mod pixel;
mod tiles;

pub use error::TransformError;
pub use fade::{
    build_fade_step, fade_colormap, render_fade, FadeMode, FadeSequence, FADE_ENDPOINT_STEP,
    FADE_STEPS,
};
pub use palette::{transform_colormap, transform_palette};
pub use pixel::{select_triple, transform_pixel, transform_pixel_into, transform_rgb};
pub use tiles::{
    transform_raster, transform_raster_with_progress, RasterLayout, TileGeometry, TileProgress,
    TileRect, TileSize,
};
