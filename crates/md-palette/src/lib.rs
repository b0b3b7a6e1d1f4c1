#![allow(clippy::module_inception)]

//! md-palette: Mega Drive color quantization
//!
//! This library converts 8-bit color values between three calibration
//! profiles of the Mega Drive / Genesis VDP color space, and renders palette
//! fades the way the hardware does them.
//!
//! # Quick Start
//!
//! The [`ColorConverter`] builder is the primary entry point:
//!
//! ```
//! use md_palette::{ColorConverter, Profile};
//!
//! let converter = ColorConverter::new(Profile::SonMapEd, Profile::SKCollect);
//! assert_eq!(converter.convert_pixel(&[0x20, 0x40, 0x60]), vec![0x22, 0x44, 0x66]);
//! ```
//!
//! # Profiles
//!
//! Each [`Profile`] has two level tables:
//!
//! - 8 **normal** levels, the 3-bit channel values of the VDP
//! - 15 **shadow/highlight** levels: shadow halves the normal levels,
//!   highlight lifts them by half; fine index 7 belongs to both
//!
//! | Profile | Normal levels |
//! |---------|---------------|
//! | [`Profile::SonMapEd`] | `00 20 40 60 80 A0 C0 E0` |
//! | [`Profile::SKCollect`] | `00 22 44 66 88 AA CC EE` |
//! | [`Profile::Measured`] | `00 34 57 74 90 AC CE FF` |
//!
//! # Lookup Tables
//!
//! [`ColorLut`] maps every input byte to a [`ChannelEntry`]: the nearest
//! source level, re-quantized into the destination profile. With
//! shadow/highlight enabled each entry also carries a fine value and two
//! candidacy flags.
//!
//! # Shadow/Highlight Consensus
//!
//! The VDP applies shadow or highlight to a whole pixel, never to a single
//! channel. [`select_triple`] therefore uses fine values only if all three
//! channels are shadow candidates or all three are highlight candidates:
//!
//! ```
//! use md_palette::{transform_pixel, ColorLut, Profile};
//!
//! let lut = ColorLut::new(Profile::SKCollect, Profile::SKCollect, true);
//!
//! // 0x30 is shadow-only on the fine grid; all channels agree.
//! assert_eq!(transform_pixel(&[0x30, 0x30, 0x30], &lut), vec![0x33, 0x33, 0x33]);
//!
//! // 0xFF disagrees with the other two; everything falls back to normal.
//! assert_eq!(transform_pixel(&[0x30, 0xFF, 0x30], &lut), vec![0x22, 0xEE, 0x22]);
//! ```
//!
//! # Rasters and Tiles
//!
//! [`transform_raster`] processes an image in [`TileGeometry`] tiles
//! (64x64 by default, see [`TileSize`]). Rows of tiles run on the rayon
//! pool; the output is identical to a sequential pass.
//! [`transform_raster_with_progress`] reports each finished tile as a
//! [`TileProgress`].
//!
//! # Fades
//!
//! A [`FadeSequence`] yields 15 tables (16 with the endpoint). Each frame
//! is rendered from the unfaded input:
//!
//! ```
//! use md_palette::{FadeMode, FadeSequence, Profile};
//!
//! let fade = FadeSequence::new(Profile::SonMapEd, Profile::SonMapEd, FadeMode::CurrentToBlack);
//! let last = fade.luts().last().unwrap();
//! assert_eq!(last[0xE0].normal_value, 0);
//! ```

pub mod api;
pub mod lut;
pub mod output;
pub mod profile;
pub mod transform;


pub use api::{ColorConverter, MdError, PaletteFader};
pub use lut::{build_lut, find_representable_color, map_level, ChannelEntry, ColorLut, LutError};
pub use output::FadeFrames;
pub use profile::{
    nearest_index, nearest_level, LevelGrid, ParseFadeModeError, ParseProfileError, Profile,
    FINE_LEVELS, FINE_MIDPOINT, NORMAL_LEVELS,
};
pub use transform::{
    build_fade_step, fade_colormap, render_fade, select_triple, transform_colormap,
    transform_palette, transform_pixel, transform_pixel_into, transform_raster,
    transform_raster_with_progress, transform_rgb, FadeMode, FadeSequence, RasterLayout,
    TileGeometry, TileProgress, TileRect, TileSize, TransformError, FADE_ENDPOINT_STEP,
    FADE_STEPS,
};
