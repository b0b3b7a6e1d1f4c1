use crate::error::ImageError;
use crate::models::{DecodedImage, FadeSettings};
use crate::rendering::{decode_png, encode_png, optimize_png};
use md_palette::{PaletteFader, RasterLayout};
use std::path::{Path, PathBuf};

/// File name of one fade frame: `<prefix>_NN.png`
pub fn frame_file_name(prefix: &str, step: usize) -> String {
    format!("{prefix}_{step:02}.png")
}

/// Renders palette fades of PNG images, one output image per frame
pub struct FaderService {
    fader: PaletteFader,
    optimize: bool,
}

impl FaderService {
    pub fn new(settings: &FadeSettings) -> Self {
        let fader = PaletteFader::new(settings.source, settings.destination, settings.mode)
            .include_endpoint(settings.include_endpoint)
            .tile_size(settings.tile.width, settings.tile.height);
        Self {
            fader,
            optimize: settings.optimize,
        }
    }

    pub fn fader(&self) -> &PaletteFader {
        &self.fader
    }

    /// Render every frame of the fade.
    ///
    /// Indexed images fade through their colormap, everything else
    /// through the raster path. Each frame is derived from `image`; a
    /// gray/RGB color key fades along with the pixels.
    pub fn fade_image(&self, image: &DecodedImage) -> Result<Vec<DecodedImage>, ImageError> {
        if image.is_indexed() {
            let colormaps = self.fader.fade_colormap(image.colormap()?)?;
            return Ok(colormaps
                .into_iter()
                .map(|colormap| image.with_palette(colormap))
                .collect());
        }

        let frames = self.fader.fade_raster(image.layout(), &image.data)?;
        // The key fades as a one-pixel raster
        let keys = image
            .color_key()
            .map(|key| self.fader.fade_raster(RasterLayout::new(1, 1, key.len()), key))
            .transpose()?;

        Ok(frames
            .into_frames()
            .into_iter()
            .enumerate()
            .map(|(step, data)| {
                image.with_keyed_data(data, |_| {
                    keys.as_ref()
                        .and_then(|keys| keys.frame(step))
                        .map(<[u8]>::to_vec)
                        .unwrap_or_default()
                })
            })
            .collect())
    }

    /// Read `input` and write one PNG per frame into `out_dir`.
    ///
    /// Returns the written paths in frame order.
    pub fn fade_file(
        &self,
        input: &Path,
        out_dir: &Path,
        prefix: &str,
    ) -> Result<Vec<PathBuf>, ImageError> {
        let sequence = self.fader.sequence();
        tracing::info!(
            input = %input.display(),
            from = %sequence.source(),
            to = %sequence.destination(),
            mode = %sequence.mode(),
            frames = sequence.len(),
            "Rendering palette fade"
        );

        let image = decode_png(&std::fs::read(input)?)?;
        let frames = self.fade_image(&image)?;

        std::fs::create_dir_all(out_dir)?;
        let mut written = Vec::with_capacity(frames.len());
        for (step, frame) in frames.iter().enumerate() {
            let path = out_dir.join(frame_file_name(prefix, step));
            let mut png_bytes = encode_png(frame)?;
            if self.optimize {
                png_bytes = optimize_png(png_bytes);
            }
            std::fs::write(&path, &png_bytes)?;
            tracing::debug!(step, path = %path.display(), bytes = png_bytes.len(), "Wrote fade frame");
            written.push(path);
        }

        tracing::info!(
            out_dir = %out_dir.display(),
            frames = written.len(),
            "Palette fade complete"
        );
        Ok(written)
    }
}
