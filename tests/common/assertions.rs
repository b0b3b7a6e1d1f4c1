//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use std::path::Path;

/// Raw decoded PNG contents
#[derive(Debug)]
pub struct RawPng {
    pub width: u32,
    pub height: u32,
    pub color_type: png::ColorType,
    pub bit_depth: png::BitDepth,
    pub palette: Option<Vec<u8>>,
    pub trns: Option<Vec<u8>>,
    pub data: Vec<u8>,
}

/// Decode PNG bytes without transformations
pub fn read_raw_png(bytes: &[u8]) -> RawPng {
    let mut decoder = png::Decoder::new(std::io::Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::IDENTITY);
    let mut reader = decoder.read_info().expect("valid PNG header");
    let info = reader.info().clone();
    let mut data = vec![0u8; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut data).expect("valid PNG data");
    data.truncate(frame.buffer_size());

    RawPng {
        width: info.width,
        height: info.height,
        color_type: info.color_type,
        bit_depth: info.bit_depth,
        palette: info.palette.map(|p| p.to_vec()),
        trns: info.trns.map(|t| t.to_vec()),
        data,
    }
}

/// Read and decode a PNG file
pub fn read_png_file(path: &Path) -> RawPng {
    let bytes = std::fs::read(path)
        .unwrap_or_else(|e| panic!("Failed to read {}: {e}", path.display()));
    assert_png(&bytes);
    read_raw_png(&bytes)
}

/// Assert bytes start with the PNG signature
pub fn assert_png(bytes: &[u8]) {
    assert!(
        bytes.starts_with(&[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]),
        "Expected PNG image, got {} bytes starting with {:?}",
        bytes.len(),
        &bytes[..8.min(bytes.len())]
    );
}

/// Assert the first `color_channels` of every pixel lie on `levels`
pub fn assert_on_grid(data: &[u8], channels: usize, color_channels: usize, levels: &[u8]) {
    for (i, px) in data.chunks_exact(channels).enumerate() {
        for (c, v) in px.iter().take(color_channels).enumerate() {
            assert!(
                levels.contains(v),
                "Pixel {i} channel {c} value {v:#04x} not on grid {levels:02X?}"
            );
        }
    }
}

/// Assert the alpha channel (last of `channels`) matches between two rasters
pub fn assert_alpha_kept(before: &[u8], after: &[u8], channels: usize) {
    let alpha = |d: &[u8]| -> Vec<u8> { d.chunks_exact(channels).map(|p| p[channels - 1]).collect() };
    assert_eq!(alpha(before), alpha(after), "alpha channel changed");
}

/// Assert that exactly the pixels at `keyed` are transparent in a frame
/// decoded from a keyed gray/RGB input.
///
/// The frame either still carries a color key (which must match those
/// pixels and no others) or has gained an alpha channel.
pub fn assert_keyed_transparency(frame: &RawPng, color_channels: usize, keyed: &[usize]) {
    match frame.color_type {
        png::ColorType::Grayscale | png::ColorType::Rgb => {
            let key = frame.trns.as_deref().expect("color key kept");
            assert_eq!(key.len(), color_channels, "color key sample count");
            for (i, px) in frame.data.chunks_exact(color_channels).enumerate() {
                assert_eq!(
                    px == key,
                    keyed.contains(&i),
                    "pixel {i} {px:02X?} vs key {key:02X?}"
                );
            }
        }
        png::ColorType::GrayscaleAlpha | png::ColorType::Rgba => {
            assert_eq!(frame.trns, None);
            let channels = color_channels + 1;
            for (i, px) in frame.data.chunks_exact(channels).enumerate() {
                let expected = if keyed.contains(&i) { 0 } else { 0xFF };
                assert_eq!(px[color_channels], expected, "alpha of pixel {i}");
            }
        }
        other => panic!("unexpected color type {other:?}"),
    }
}
