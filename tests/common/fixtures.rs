//! Test fixtures: small PNG images built directly with the png encoder.

/// Color values on the S&KC normal grid
pub mod skc {
    pub const LEVELS: [u8; 8] = [0x00, 0x22, 0x44, 0x66, 0x88, 0xAA, 0xCC, 0xEE];
}

/// Encode raw 8-bit (or packed indexed) row data
pub fn encode(
    width: u32,
    height: u32,
    color_type: png::ColorType,
    bit_depth: png::BitDepth,
    palette: Option<&[u8]>,
    trns: Option<&[u8]>,
    data: &[u8],
) -> Vec<u8> {
    let mut buf = Vec::new();
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(bit_depth);
        if let Some(plte) = palette {
            encoder.set_palette(plte.to_vec());
        }
        if let Some(trns) = trns {
            encoder.set_trns(trns.to_vec());
        }
        let mut writer = encoder.write_header().expect("PNG header");
        writer.write_image_data(data).expect("PNG data");
    }
    buf
}

/// 8x8 RGB gradient: red runs along x, green along y, blue is constant
pub fn rgb_gradient() -> (u32, u32, Vec<u8>) {
    let (w, h) = (8u32, 8u32);
    let mut data = Vec::with_capacity((w * h * 3) as usize);
    for y in 0..h {
        for x in 0..w {
            data.extend_from_slice(&[(x * 32) as u8, (y * 32) as u8, 0x66]);
        }
    }
    (w, h, data)
}

pub fn rgb_png() -> Vec<u8> {
    let (w, h, data) = rgb_gradient();
    encode(
        w,
        h,
        png::ColorType::Rgb,
        png::BitDepth::Eight,
        None,
        None,
        &data,
    )
}

/// 70x3 RGBA image (wider than one tile) with varying alpha
pub fn rgba_png() -> (Vec<u8>, Vec<u8>) {
    let (w, h) = (70u32, 3u32);
    let data: Vec<u8> = (0..w * h)
        .flat_map(|i| {
            let v = (i * 7 % 256) as u8;
            [v, v.wrapping_add(80), 255 - v, (i % 256) as u8]
        })
        .collect();
    let png = encode(
        w,
        h,
        png::ColorType::Rgba,
        png::BitDepth::Eight,
        None,
        None,
        &data,
    );
    (png, data)
}

/// 4x1 indexed image at 2 bits per pixel with an S&KC palette and tRNS
pub fn indexed_png() -> Vec<u8> {
    let palette = [
        0x00, 0x00, 0x00, //
        0x22, 0x44, 0x66, //
        0x88, 0xAA, 0xCC, //
        0xEE, 0xEE, 0xEE,
    ];
    encode(
        4,
        1,
        png::ColorType::Indexed,
        png::BitDepth::Two,
        Some(&palette),
        Some(&[0x00]),
        &[0b00_01_10_11],
    )
}

/// 2x2 16-bit grayscale image
pub fn gray16_png() -> Vec<u8> {
    encode(
        2,
        2,
        png::ColorType::Grayscale,
        png::BitDepth::Sixteen,
        None,
        None,
        &[0; 8],
    )
}

/// 4x2 RGB image whose tRNS color key is (0x20, 0x40, 0x60).
///
/// Pixels 0 and 5 carry the key; the rest are opaque SonMapEd colors.
pub fn keyed_rgb_png() -> (Vec<u8>, Vec<u8>) {
    let data: Vec<u8> = [
        [0x20, 0x40, 0x60],
        [0xE0, 0x00, 0x00],
        [0x00, 0xE0, 0x00],
        [0x00, 0x00, 0xE0],
        [0x80, 0x80, 0x80],
        [0x20, 0x40, 0x60],
        [0xA0, 0xC0, 0x20],
        [0xE0, 0xE0, 0xE0],
    ]
    .concat();
    let png = encode(
        4,
        2,
        png::ColorType::Rgb,
        png::BitDepth::Eight,
        None,
        Some(&[0x00, 0x20, 0x00, 0x40, 0x00, 0x60]),
        &data,
    );
    (png, data)
}

/// 4x1 grayscale image; with `key`, a tRNS chunk marks that gray transparent
pub fn gray_png(key: Option<u8>) -> (Vec<u8>, Vec<u8>) {
    let data = vec![0x20, 0x60, 0xA0, 0xE0];
    let trns = key.map(|k| [0x00, k]);
    let png = encode(
        4,
        1,
        png::ColorType::Grayscale,
        png::BitDepth::Eight,
        None,
        trns.as_ref().map(|t| &t[..]),
        &data,
    );
    (png, data)
}

/// 3x1 gray+alpha image
pub fn gray_alpha_png() -> (Vec<u8>, Vec<u8>) {
    let data = vec![0x20, 0x00, 0x90, 0x80, 0xE0, 0xFF];
    let png = encode(
        3,
        1,
        png::ColorType::GrayscaleAlpha,
        png::BitDepth::Eight,
        None,
        None,
        &data,
    );
    (png, data)
}
