//! Per-pixel shadow/highlight consensus.

use crate::lut::{ChannelEntry, ColorLut};

/// Pick the output triple for one pixel from its three channel entries.
///
/// The fine values are used only when all three channels agree: either all
/// are shadow candidates or all are highlight candidates. Any disagreement
/// falls back to the normal values for every channel; a pixel is never
/// partially mapped to the fine grid.
#[inline]
pub fn select_triple(entries: [&ChannelEntry; 3]) -> [u8; 3] {
    let [r, g, b] = entries;
    let all_shadow = r.shadow_candidate && g.shadow_candidate && b.shadow_candidate;
    let all_highlight = r.highlight_candidate && g.highlight_candidate && b.highlight_candidate;

    if all_shadow || all_highlight {
        [r.fine_value, g.fine_value, b.fine_value]
    } else {
        [r.normal_value, g.normal_value, b.normal_value]
    }
}

/// Transform an RGB triple.
#[inline]
pub fn transform_rgb(rgb: [u8; 3], lut: &ColorLut) -> [u8; 3] {
    select_triple([&lut[rgb[0]], &lut[rgb[1]], &lut[rgb[2]]])
}

/// Transform one pixel of any channel count into `dst`.
///
/// - 3 or more channels: the first three go through [`select_triple`], the
///   rest (alpha) are copied unchanged.
/// - 1 or 2 channels: the first channel is treated as the grey triple
///   `(v, v, v)`, whose channels always agree; a second channel is copied.
///
/// # Panics (debug only)
///
/// Debug-asserts that `src` and `dst` have the same length.
#[inline]
pub fn transform_pixel_into(src: &[u8], dst: &mut [u8], lut: &ColorLut) {
    debug_assert_eq!(src.len(), dst.len(), "pixel channel count mismatch");

    match src.len() {
        0 => {}
        1 | 2 => {
            dst[0] = transform_rgb([src[0]; 3], lut)[0];
            dst[1..].copy_from_slice(&src[1..]);
        }
        _ => {
            let rgb = transform_rgb([src[0], src[1], src[2]], lut);
            dst[..3].copy_from_slice(&rgb);
            dst[3..].copy_from_slice(&src[3..]);
        }
    }
}

/// Transform one pixel, returning a new channel vector.
///
/// # Example
///
/// ```
/// use md_palette::{transform_pixel, ColorLut, Profile};
///
/// let lut = ColorLut::new(Profile::SonMapEd, Profile::SKCollect, false);
/// assert_eq!(transform_pixel(&[0x20, 0x40, 0x60, 0x7F], &lut), vec![0x22, 0x44, 0x66, 0x7F]);
/// ```
pub fn transform_pixel(channels: &[u8], lut: &ColorLut) -> Vec<u8> {
    let mut out = vec![0; channels.len()];
    transform_pixel_into(channels, &mut out, lut);
    out
}
