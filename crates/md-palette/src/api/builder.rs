//! ColorConverter and PaletteFader builders -- the primary entry points.
//!
//! Both wrap the transform engine behind a fluent builder API. Builders
//! take `&self` for the actual work so one instance can be reused across
//! many images.

use std::sync::OnceLock;

use crate::lut::ColorLut;
use crate::output::FadeFrames;
use crate::profile::Profile;
use crate::transform::{
    fade_colormap, render_fade, transform_colormap, transform_palette, transform_pixel,
    transform_raster_with_progress, FadeMode, FadeSequence, RasterLayout, TileProgress, TileSize,
    TransformError,
};

/// Converts colors between two calibration profiles.
///
/// The composite table is built on first use and cached; any
/// configuration method drops the cached table.
///
/// # Example
///
/// ```
/// use md_palette::{ColorConverter, Profile};
///
/// let converter = ColorConverter::new(Profile::SKCollect, Profile::Measured);
/// assert_eq!(converter.convert_pixel(&[0x66, 0x66, 0x66]), vec![0x74, 0x74, 0x74]);
///
/// let mut colormap = vec![0x00, 0x22, 0x44];
/// converter.convert_colormap(&mut colormap).unwrap();
/// assert_eq!(colormap, vec![0x00, 0x34, 0x57]);
/// ```
#[derive(Debug, Clone)]
pub struct ColorConverter {
    source: Profile,
    destination: Profile,
    shadow_highlight: bool,
    tile: TileSize,
    lut: OnceLock<ColorLut>,
}

impl ColorConverter {
    /// Create a converter with shadow/highlight off and 64x64 tiles.
    pub fn new(source: Profile, destination: Profile) -> Self {
        Self {
            source,
            destination,
            shadow_highlight: false,
            tile: TileSize::DEFAULT,
            lut: OnceLock::new(),
        }
    }

    /// Enable or disable the shadow/highlight grid.
    #[inline]
    pub fn shadow_highlight(mut self, enabled: bool) -> Self {
        self.shadow_highlight = enabled;
        self.lut = OnceLock::new();
        self
    }

    /// Set the tile size used by [`convert_raster`](Self::convert_raster).
    #[inline]
    pub fn tile_size(mut self, width: u32, height: u32) -> Self {
        self.tile = TileSize::new(width, height);
        self
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

    /// Whether the shadow/highlight grid is used.
    #[inline]
    pub fn is_shadow_highlight(&self) -> bool {
        self.shadow_highlight
    }

    /// The composite table, built on first call.
    pub fn lut(&self) -> &ColorLut {
        self.lut
            .get_or_init(|| ColorLut::new(self.source, self.destination, self.shadow_highlight))
    }

    /// Convert one pixel (1-4 channels).
    pub fn convert_pixel(&self, channels: &[u8]) -> Vec<u8> {
        transform_pixel(channels, self.lut())
    }

    /// Convert a list of RGB palette entries.
    pub fn convert_palette(&self, entries: &[[u8; 3]]) -> Vec<[u8; 3]> {
        transform_palette(entries, self.lut())
    }

    /// Convert a flat RGB colormap in place.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::MalformedColormap`] if the length is not a
    /// multiple of 3.
    pub fn convert_colormap(&self, colormap: &mut [u8]) -> Result<(), TransformError> {
        transform_colormap(colormap, self.lut())
    }

    /// Convert a raster into a new buffer.
    ///
    /// # Errors
    ///
    /// Same as [`transform_raster`](crate::transform_raster).
    pub fn convert_raster(
        &self,
        layout: RasterLayout,
        src: &[u8],
    ) -> Result<Vec<u8>, TransformError> {
        self.convert_raster_with_progress(layout, src, |_| {})
    }

    /// Convert a raster, calling `progress` as each tile finishes.
    ///
    /// # Errors
    ///
    /// Same as [`transform_raster`](crate::transform_raster).
    pub fn convert_raster_with_progress<F>(
        &self,
        layout: RasterLayout,
        src: &[u8],
        progress: F,
    ) -> Result<Vec<u8>, TransformError>
    where
        F: Fn(TileProgress) + Sync,
    {
        layout.validate(src)?;
        let mut dst = vec![0u8; layout.byte_len()];
        transform_raster_with_progress(layout, self.tile, src, &mut dst, self.lut(), progress)?;
        Ok(dst)
    }
}

/// Renders palette fades between two calibration profiles.
///
/// # Example
///
/// ```
/// use md_palette::{FadeMode, PaletteFader, Profile, RasterLayout};
///
/// let fader = PaletteFader::new(Profile::SonMapEd, Profile::SonMapEd, FadeMode::CurrentToBlack)
///     .include_endpoint(true);
///
/// let layout = RasterLayout::new(1, 1, 3);
/// let frames = fader.fade_raster(layout, &[0xE0, 0x60, 0x20]).unwrap();
///
/// assert_eq!(frames.len(), 16);
/// assert_eq!(frames.frame(0), Some(&[0xE0u8, 0x60, 0x20][..]));
/// assert_eq!(frames.last(), Some(&[0u8, 0, 0][..]));
/// ```
#[derive(Debug, Clone)]
pub struct PaletteFader {
    source: Profile,
    destination: Profile,
    mode: FadeMode,
    include_endpoint: bool,
    tile: TileSize,
}

impl PaletteFader {
    /// Create a 15-frame fader with 64x64 tiles.
    pub fn new(source: Profile, destination: Profile, mode: FadeMode) -> Self {
        Self {
            source,
            destination,
            mode,
            include_endpoint: false,
            tile: TileSize::DEFAULT,
        }
    }

    /// Also render the endpoint frame as a 16th step.
    #[inline]
    pub fn include_endpoint(mut self, include: bool) -> Self {
        self.include_endpoint = include;
        self
    }

    /// Set the tile size used for raster fades.
    #[inline]
    pub fn tile_size(mut self, width: u32, height: u32) -> Self {
        self.tile = TileSize::new(width, height);
        self
    }

    /// Fade direction.
    #[inline]
    pub fn mode(&self) -> FadeMode {
        self.mode
    }

    /// The table sequence this fader applies.
    pub fn sequence(&self) -> FadeSequence {
        FadeSequence::new(self.source, self.destination, self.mode)
            .with_endpoint(self.include_endpoint)
    }

    /// Render every frame of the fade from an unfaded raster.
    ///
    /// # Errors
    ///
    /// Same as [`render_fade`].
    pub fn fade_raster(
        &self,
        layout: RasterLayout,
        src: &[u8],
    ) -> Result<FadeFrames, TransformError> {
        render_fade(&self.sequence(), layout, self.tile, src)
    }

    /// One converted colormap per frame.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::MalformedColormap`] if the length is not a
    /// multiple of 3.
    pub fn fade_colormap(&self, colormap: &[u8]) -> Result<Vec<Vec<u8>>, TransformError> {
        fade_colormap(&self.sequence(), colormap)
    }
}
