use crate::error::ImageError;
use crate::models::{DecodedImage, PixelFormat};
use std::io::Cursor;

/// Decode a PNG without any transformations.
///
/// Indexed images keep their packed index data and PLTE; every other
/// color type must be 8 bits per channel.
pub fn decode_png(bytes: &[u8]) -> Result<DecodedImage, ImageError> {
    let mut decoder = png::Decoder::new(Cursor::new(bytes));
    decoder.set_transformations(png::Transformations::IDENTITY);
    let mut reader = decoder.read_info()?;

    let info = reader.info();
    let (width, height) = (info.width, info.height);
    let format = PixelFormat::from_color_type(info.color_type);
    let bit_depth = info.bit_depth;
    let palette = info.palette.as_ref().map(|p| p.to_vec());
    // The decoder narrows an 8-bit color key to one byte per sample
    let trns = info.trns.as_ref().map(|t| t.to_vec());

    if format == PixelFormat::Indexed {
        if palette.is_none() {
            return Err(ImageError::MissingPalette);
        }
    } else if bit_depth != png::BitDepth::Eight {
        return Err(ImageError::UnsupportedBitDepth {
            depth: bit_depth as u8,
        });
    }

    let mut data = vec![0u8; reader.output_buffer_size()];
    let frame = reader.next_frame(&mut data)?;
    data.truncate(frame.buffer_size());

    tracing::debug!(width, height, ?format, ?bit_depth, "Decoded PNG");

    Ok(DecodedImage {
        width,
        height,
        format,
        bit_depth,
        data,
        palette: if format == PixelFormat::Indexed {
            palette
        } else {
            None
        },
        trns,
    })
}

/// Encode an image with its original color type, depth, PLTE and tRNS.
///
/// A gray/RGB color key is written with two bytes per sample, as tRNS
/// requires for those color types.
pub fn encode_png(image: &DecodedImage) -> Result<Vec<u8>, ImageError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, image.width, image.height);
        encoder.set_color(image.format.color_type());
        encoder.set_depth(image.bit_depth);
        if let Some(plte) = &image.palette {
            encoder.set_palette(plte.clone());
        }
        match (image.color_key(), &image.trns) {
            (Some(key), _) => {
                encoder.set_trns(key.iter().flat_map(|&s| [0, s]).collect::<Vec<u8>>());
            }
            (None, Some(trns)) if image.is_indexed() => encoder.set_trns(trns.clone()),
            _ => {}
        }
        let mut writer = encoder.write_header()?;
        writer.write_image_data(&image.data)?;
    }
    Ok(buf.into_inner())
}

/// Re-compress with oxipng (zopfli + adaptive filter selection).
///
/// Falls back to the input when optimization fails.
pub fn optimize_png(png_bytes: Vec<u8>) -> Vec<u8> {
    let before = png_bytes.len();
    match oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) => {
            tracing::debug!(before, after = optimized.len(), "Optimized PNG");
            optimized
        }
        Err(e) => {
            tracing::warn!(%e, "PNG optimization failed, keeping original");
            png_bytes
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn rgba_image() -> DecodedImage {
        DecodedImage {
            width: 2,
            height: 2,
            format: PixelFormat::Rgba,
            bit_depth: png::BitDepth::Eight,
            data: vec![
                0x00, 0x22, 0x44, 0xFF, 0x66, 0x88, 0xAA, 0x80, //
                0xCC, 0xEE, 0x00, 0x00, 0x11, 0x33, 0x55, 0x10,
            ],
            palette: None,
            trns: None,
        }
    }

    #[test]
    fn test_rgba_round_trip() {
        let image = rgba_image();
        let bytes = encode_png(&image).unwrap();
        assert_eq!(decode_png(&bytes).unwrap(), image);
    }

    #[test]
    fn test_indexed_round_trip_keeps_packed_data() {
        let image = DecodedImage {
            width: 3,
            height: 2,
            format: PixelFormat::Indexed,
            bit_depth: png::BitDepth::Two,
            // 3 pixels at 2 bits per pixel pack into one byte per row
            data: vec![0b00_01_10_00, 0b10_01_00_00],
            palette: Some(vec![0, 0, 0, 0x22, 0x44, 0x66, 0xEE, 0xEE, 0xEE]),
            trns: Some(vec![0]),
        };
        let bytes = encode_png(&image).unwrap();
        assert_eq!(decode_png(&bytes).unwrap(), image);
    }

    fn keyed_png(color_type: png::ColorType, trns: &[u8], data: &[u8]) -> Vec<u8> {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, 2, 1);
            encoder.set_color(color_type);
            encoder.set_depth(png::BitDepth::Eight);
            encoder.set_trns(trns.to_vec());
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(data).unwrap();
        }
        buf
    }

    #[test]
    fn test_rgb_color_key_round_trip() {
        let png = keyed_png(
            png::ColorType::Rgb,
            &[0x00, 0x10, 0x00, 0x10, 0x00, 0x10],
            &[0x10, 0x10, 0x10, 0x80, 0x40, 0x20],
        );

        let image = decode_png(&png).unwrap();
        assert_eq!(image.color_key(), Some(&[0x10, 0x10, 0x10][..]));

        let again = decode_png(&encode_png(&image).unwrap()).unwrap();
        assert_eq!(again, image);
    }

    #[test]
    fn test_gray_color_key_round_trip() {
        let png = keyed_png(png::ColorType::Grayscale, &[0x00, 0x7F], &[0x7F, 0x00]);

        let image = decode_png(&png).unwrap();
        assert_eq!(image.color_key(), Some(&[0x7F][..]));

        let again = decode_png(&encode_png(&image).unwrap()).unwrap();
        assert_eq!(again, image);
    }

    #[test]
    fn test_sixteen_bit_rejected() {
        let mut buf = Vec::new();
        {
            let mut encoder = png::Encoder::new(&mut buf, 1, 1);
            encoder.set_color(png::ColorType::Rgb);
            encoder.set_depth(png::BitDepth::Sixteen);
            let mut writer = encoder.write_header().unwrap();
            writer.write_image_data(&[0; 6]).unwrap();
        }
        assert!(matches!(
            decode_png(&buf),
            Err(ImageError::UnsupportedBitDepth { depth: 16 })
        ));
    }

    #[test]
    fn test_garbage_rejected() {
        assert!(matches!(
            decode_png(b"not a png"),
            Err(ImageError::Decode(_))
        ));
    }

    #[test]
    fn test_optimize_output_decodes() {
        let image = rgba_image();
        let bytes = encode_png(&image).unwrap();
        let optimized = optimize_png(bytes);
        // oxipng may pick another color type, so only the header is compared
        let decoded = decode_png(&optimized).unwrap();
        assert_eq!((decoded.width, decoded.height), (2, 2));
    }
}
