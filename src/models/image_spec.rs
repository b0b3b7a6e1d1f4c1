use crate::error::ImageError;
use md_palette::RasterLayout;

/// Pixel formats the converter accepts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelFormat {
    /// Palette indices plus a PLTE chunk; any index depth
    Indexed,
    Gray,
    GrayAlpha,
    Rgb,
    Rgba,
}

impl PixelFormat {
    pub fn from_color_type(color_type: png::ColorType) -> Self {
        match color_type {
            png::ColorType::Indexed => Self::Indexed,
            png::ColorType::Grayscale => Self::Gray,
            png::ColorType::GrayscaleAlpha => Self::GrayAlpha,
            png::ColorType::Rgb => Self::Rgb,
            png::ColorType::Rgba => Self::Rgba,
        }
    }

    pub fn color_type(self) -> png::ColorType {
        match self {
            Self::Indexed => png::ColorType::Indexed,
            Self::Gray => png::ColorType::Grayscale,
            Self::GrayAlpha => png::ColorType::GrayscaleAlpha,
            Self::Rgb => png::ColorType::Rgb,
            Self::Rgba => png::ColorType::Rgba,
        }
    }

    /// Bytes per pixel at 8-bit depth
    pub fn channels(self) -> usize {
        match self {
            Self::Indexed | Self::Gray => 1,
            Self::GrayAlpha => 2,
            Self::Rgb => 3,
            Self::Rgba => 4,
        }
    }

    /// Gray and RGB carry transparency as a tRNS color key
    pub fn has_color_key(self) -> bool {
        matches!(self, Self::Gray | Self::Rgb)
    }

    /// The same format with an alpha channel
    pub fn with_alpha(self) -> Self {
        match self {
            Self::Gray => Self::GrayAlpha,
            Self::Rgb => Self::Rgba,
            other => other,
        }
    }
}

/// A decoded PNG, kept close to its on-disk form so it can be written
/// back with the same color type, depth and ancillary chunks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedImage {
    pub width: u32,
    pub height: u32,
    pub format: PixelFormat,
    pub bit_depth: png::BitDepth,
    /// Row data as stored in the file (packed for sub-byte indexed depths)
    pub data: Vec<u8>,
    /// Flat RGB colormap (PLTE); present for indexed images
    pub palette: Option<Vec<u8>>,
    /// tRNS contents: per-entry alpha for indexed images, or the
    /// transparent color key of a gray/RGB image with one byte per sample
    pub trns: Option<Vec<u8>>,
}

impl DecodedImage {
    pub fn is_indexed(&self) -> bool {
        self.format == PixelFormat::Indexed
    }

    /// Layout of the pixel data for the raster path.
    pub fn layout(&self) -> RasterLayout {
        RasterLayout::new(self.width, self.height, self.format.channels())
    }

    /// The colormap of an indexed image.
    pub fn colormap(&self) -> Result<&[u8], ImageError> {
        self.palette.as_deref().ok_or(ImageError::MissingPalette)
    }

    /// The transparent color of a gray or RGB image.
    pub fn color_key(&self) -> Option<&[u8]> {
        if !self.format.has_color_key() {
            return None;
        }
        self.trns
            .as_deref()
            .filter(|key| key.len() == self.format.channels())
    }

    /// Same image with recolored pixel data and its color key recolored
    /// by `map_key`.
    ///
    /// `data` must be this image's pixels transformed one by one. When an
    /// opaque pixel ends up on the recolored key, the key can no longer
    /// single out the transparent pixels; the image then gets an alpha
    /// channel instead of a tRNS chunk.
    pub fn with_keyed_data(&self, data: Vec<u8>, map_key: impl FnOnce(&[u8]) -> Vec<u8>) -> Self {
        let Some(old_key) = self.color_key() else {
            return self.with_data(data);
        };
        let new_key = map_key(old_key);
        let channels = self.format.channels();
        let pixels = || {
            self.data
                .chunks_exact(channels)
                .zip(data.chunks_exact(channels))
        };

        if !pixels().any(|(before, after)| before != old_key && after == new_key.as_slice()) {
            return Self {
                data,
                trns: Some(new_key),
                ..self.clone_header()
            };
        }

        tracing::debug!(
            key = ?old_key,
            "Color key collides after conversion, adding an alpha channel"
        );
        let data = pixels()
            .flat_map(|(before, after)| {
                let alpha = if before == old_key { 0 } else { u8::MAX };
                after.iter().copied().chain(std::iter::once(alpha))
            })
            .collect();
        Self {
            data,
            format: self.format.with_alpha(),
            trns: None,
            ..self.clone_header()
        }
    }

    /// Same image with different pixel data.
    pub fn with_data(&self, data: Vec<u8>) -> Self {
        Self {
            data,
            ..self.clone_header()
        }
    }

    /// Same image with a different colormap.
    pub fn with_palette(&self, palette: Vec<u8>) -> Self {
        Self {
            data: self.data.clone(),
            palette: Some(palette),
            ..self.clone_header()
        }
    }

    fn clone_header(&self) -> Self {
        Self {
            width: self.width,
            height: self.height,
            format: self.format,
            bit_depth: self.bit_depth,
            data: Vec::new(),
            palette: self.palette.clone(),
            trns: self.trns.clone(),
        }
    }
}
