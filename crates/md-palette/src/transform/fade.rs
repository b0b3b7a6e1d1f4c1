//! Palette fades toward black or white.
//!
//! A fade is a sequence of per-byte tables. Step `s` interpolates each
//! input byte toward the endpoint in raw byte space (floor division by 15),
//! re-quantizes the result to the source profile's normal grid and converts
//! it into the destination profile. Frames never use shadow/highlight.

use std::fmt;
use std::str::FromStr;

use rayon::prelude::*;

use super::error::TransformError;
use super::palette::transform_colormap;
use super::tiles::{transform_raster, RasterLayout, TileSize};
use crate::lut::{find_representable_color, map_level, ColorLut, LutError};
use crate::output::FadeFrames;
use crate::profile::{LevelGrid, ParseFadeModeError, Profile};

/// Number of frames in a fade, excluding the endpoint.
pub const FADE_STEPS: u8 = 15;

/// Step index of the optional endpoint frame.
pub const FADE_ENDPOINT_STEP: u8 = FADE_STEPS;

/// Direction of a fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FadeMode {
    /// Start at the image, end at black.
    CurrentToBlack,
    /// Start at black, end at the image.
    #[default]
    BlackToCurrent,
    /// Start at the image, end at the profile's white.
    CurrentToWhite,
    /// Start at the profile's white, end at the image.
    WhiteToCurrent,
}

impl FadeMode {
    /// All modes, in menu order.
    pub const ALL: [FadeMode; 4] = [
        FadeMode::CurrentToBlack,
        FadeMode::BlackToCurrent,
        FadeMode::CurrentToWhite,
        FadeMode::WhiteToCurrent,
    ];

    /// Interpolate `value` at `step` (0..=15) with integer floor division.
    ///
    /// `white` is the source profile's representable white, used by the
    /// two white modes.
    ///
    /// # Example
    ///
    /// ```
    /// use md_palette::FadeMode;
    ///
    /// // floor(224 * 1 / 15)
    /// assert_eq!(FadeMode::CurrentToBlack.interpolate(224, 14, 0xE0), 14);
    /// ```
    #[inline]
    pub fn interpolate(self, value: u8, step: u8, white: u8) -> u8 {
        debug_assert!(step <= FADE_ENDPOINT_STEP, "fade step {step} out of range");
        let n = FADE_STEPS as u32;
        let v = value as u32;
        let s = step as u32;
        let w = white as u32;
        let mixed = match self {
            FadeMode::CurrentToBlack => v * (n - s),
            FadeMode::BlackToCurrent => v * s,
            FadeMode::CurrentToWhite => v * (n - s) + w * s,
            FadeMode::WhiteToCurrent => v * s + w * (n - s),
        };
        (mixed / n) as u8
    }

    /// Canonical kebab-case key, as accepted by `FromStr`.
    pub fn key(self) -> &'static str {
        match self {
            FadeMode::CurrentToBlack => "current-to-black",
            FadeMode::BlackToCurrent => "black-to-current",
            FadeMode::CurrentToWhite => "current-to-white",
            FadeMode::WhiteToCurrent => "white-to-current",
        }
    }
}

impl fmt::Display for FadeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FadeMode::CurrentToBlack => write!(f, "Current to black"),
            FadeMode::BlackToCurrent => write!(f, "Black to current"),
            FadeMode::CurrentToWhite => write!(f, "Current to white"),
            FadeMode::WhiteToCurrent => write!(f, "White to current"),
        }
    }
}

impl FromStr for FadeMode {
    type Err = ParseFadeModeError;

    /// Parse a fade mode; case-insensitive, `_` and spaces accepted for `-`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        let key = name.to_ascii_lowercase().replace(['_', ' '], "-");
        FadeMode::ALL
            .into_iter()
            .find(|mode| mode.key() == key)
            .ok_or_else(|| ParseFadeModeError {
                name: name.to_string(),
            })
    }
}

/// Build the table for one fade step.
///
/// `src_white` is normally `find_representable_color(255, source)`.
/// Steps `0..=14` are the fade frames; step 15 is the endpoint itself.
///
/// # Errors
///
/// Returns [`LutError::FadeStepOutOfRange`] for steps above 15.
pub fn build_fade_step(
    source: Profile,
    destination: Profile,
    mode: FadeMode,
    step: u8,
    src_white: u8,
) -> Result<ColorLut, LutError> {
    if step > FADE_ENDPOINT_STEP {
        return Err(LutError::FadeStepOutOfRange {
            step,
            max: FADE_ENDPOINT_STEP,
        });
    }

    Ok(fade_table(source, destination, mode, step, src_white))
}

fn fade_table(
    source: Profile,
    destination: Profile,
    mode: FadeMode,
    step: u8,
    src_white: u8,
) -> ColorLut {
    ColorLut::from_normal_fn(source, destination, |v| {
        let faded = mode.interpolate(v, step, src_white);
        map_level(faded, source, destination, LevelGrid::Normal)
    })
}

/// The ordered tables of a fade between two profiles.
///
/// # Example
///
/// ```
/// use md_palette::{FadeMode, FadeSequence, Profile};
///
/// let fade = FadeSequence::new(Profile::SonMapEd, Profile::SonMapEd, FadeMode::CurrentToBlack);
/// let luts: Vec<_> = fade.luts().collect();
/// assert_eq!(luts.len(), 15);
/// assert_eq!(luts[14][224].normal_value, 0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeSequence {
    source: Profile,
    destination: Profile,
    mode: FadeMode,
    src_white: u8,
    include_endpoint: bool,
}

impl FadeSequence {
    /// Create a 15-frame fade.
    pub fn new(source: Profile, destination: Profile, mode: FadeMode) -> Self {
        Self {
            source,
            destination,
            mode,
            src_white: find_representable_color(u8::MAX, source),
            include_endpoint: false,
        }
    }

    /// Also produce the endpoint frame as a 16th step.
    #[inline]
    pub fn with_endpoint(mut self, include: bool) -> Self {
        self.include_endpoint = include;
        self
    }

    /// Fade direction.
    #[inline]
    pub fn mode(&self) -> FadeMode {
        self.mode
    }

    /// Source profile.
    #[inline]
    pub fn source(&self) -> Profile {
        self.source
    }

    /// Destination profile.
    #[inline]
    pub fn destination(&self) -> Profile {
        self.destination
    }

    /// The source profile's white, used by the white modes.
    #[inline]
    pub fn src_white(&self) -> u8 {
        self.src_white
    }

    /// Number of frames this sequence produces (15, or 16 with endpoint).
    #[inline]
    pub fn len(&self) -> usize {
        FADE_STEPS as usize + usize::from(self.include_endpoint)
    }

    /// Always false; a fade has at least 15 frames.
    #[inline]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Table for one step.
    pub fn step_lut(&self, step: u8) -> Result<ColorLut, LutError> {
        build_fade_step(
            self.source,
            self.destination,
            self.mode,
            step,
            self.src_white,
        )
    }

    /// Tables for every step, built lazily in order.
    pub fn luts(&self) -> impl Iterator<Item = ColorLut> + '_ {
        (0..self.len() as u8).map(move |step| {
            fade_table(
                self.source,
                self.destination,
                self.mode,
                step,
                self.src_white,
            )
        })
    }
}

/// Render every frame of `sequence` from the unfaded raster `src`.
///
/// Frames only depend on `src`, so they are rendered in parallel.
///
/// # Errors
///
/// Same as [`transform_raster`].
pub fn render_fade(
    sequence: &FadeSequence,
    layout: RasterLayout,
    tile: TileSize,
    src: &[u8],
) -> Result<FadeFrames, TransformError> {
    layout.validate(src)?;

    let luts: Vec<ColorLut> = sequence.luts().collect();
    let frames = luts
        .par_iter()
        .map(|lut| {
            let mut frame = vec![0u8; layout.byte_len()];
            transform_raster(layout, tile, src, &mut frame, lut)?;
            Ok::<_, TransformError>(frame)
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(FadeFrames::new(layout, frames))
}

/// Produce one converted colormap per frame of `sequence`.
///
/// # Errors
///
/// Returns [`TransformError::MalformedColormap`] if the colormap length is
/// not a multiple of 3.
pub fn fade_colormap(
    sequence: &FadeSequence,
    colormap: &[u8],
) -> Result<Vec<Vec<u8>>, TransformError> {
    sequence
        .luts()
        .map(|lut| {
            let mut frame = colormap.to_vec();
            transform_colormap(&mut frame, &lut)?;
            Ok::<_, TransformError>(frame)
        })
        .collect()
}
