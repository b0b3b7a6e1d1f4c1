use crate::error::ImageError;
use crate::models::{ConvertSettings, DecodedImage};
use crate::rendering::{decode_png, encode_png, optimize_png};
use md_palette::ColorConverter;
use std::path::Path;

/// Outcome of converting one file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConvertReport {
    /// Only the colormap was rewritten
    pub palette_only: bool,
    /// Palette entries (indexed) or pixels (raster) converted
    pub converted: usize,
    /// Size of the written PNG
    pub bytes_written: usize,
}

/// Converts PNG images from one calibration profile to another
pub struct ConverterService {
    converter: ColorConverter,
    optimize: bool,
}

impl ConverterService {
    pub fn new(settings: &ConvertSettings) -> Self {
        let converter = ColorConverter::new(settings.source, settings.destination)
            .shadow_highlight(settings.shadow_highlight)
            .tile_size(settings.tile.width, settings.tile.height);
        Self {
            converter,
            optimize: settings.optimize,
        }
    }

    pub fn converter(&self) -> &ColorConverter {
        &self.converter
    }

    /// Convert a decoded image.
    ///
    /// Indexed images only get a new colormap; everything else goes through
    /// the tiled raster path into a new buffer. A gray/RGB color key is
    /// converted like a pixel so the same pixels stay transparent.
    pub fn convert_image(&self, image: &DecodedImage) -> Result<DecodedImage, ImageError> {
        if image.is_indexed() {
            let mut colormap = image.colormap()?.to_vec();
            self.converter.convert_colormap(&mut colormap)?;
            tracing::debug!(entries = colormap.len() / 3, "Converted colormap");
            return Ok(image.with_palette(colormap));
        }

        let layout = image.layout();
        let data = self
            .converter
            .convert_raster_with_progress(layout, &image.data, |p| {
                tracing::debug!(
                    tile = p.index + 1,
                    of = p.total,
                    x = p.rect.x,
                    y = p.rect.y,
                    "Converted tile"
                );
            })?;
        tracing::debug!(width = layout.width, height = layout.height, "Converted raster");
        Ok(image.with_keyed_data(data, |key| self.converter.convert_pixel(key)))
    }

    /// Convert encoded PNG bytes.
    pub fn convert_png(&self, png_bytes: &[u8]) -> Result<Vec<u8>, ImageError> {
        let image = decode_png(png_bytes)?;
        let converted = self.convert_image(&image)?;
        self.encode(&converted)
    }

    /// Read `input`, convert it and write `output`.
    pub fn convert_file(&self, input: &Path, output: &Path) -> Result<ConvertReport, ImageError> {
        tracing::info!(
            input = %input.display(),
            from = %self.converter.source(),
            to = %self.converter.destination(),
            shadow_highlight = self.converter.is_shadow_highlight(),
            "Converting colors"
        );

        let image = decode_png(&std::fs::read(input)?)?;
        let converted = self.convert_image(&image)?;
        let png_bytes = self.encode(&converted)?;
        std::fs::write(output, &png_bytes)?;

        let report = ConvertReport {
            palette_only: image.is_indexed(),
            converted: match &converted.palette {
                Some(plte) if image.is_indexed() => plte.len() / 3,
                _ => image.width as usize * image.height as usize,
            },
            bytes_written: png_bytes.len(),
        };
        tracing::info!(
            output = %output.display(),
            palette_only = report.palette_only,
            bytes = report.bytes_written,
            "Wrote converted image"
        );
        Ok(report)
    }

    fn encode(&self, image: &DecodedImage) -> Result<Vec<u8>, ImageError> {
        let png_bytes = encode_png(image)?;
        Ok(if self.optimize {
            optimize_png(png_bytes)
        } else {
            png_bytes
        })
    }
}
