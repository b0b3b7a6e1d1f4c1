//! Indexed-palette fast path.
//!
//! For indexed images only the colormap needs converting; pixel indices are
//! left alone. The per-entry rule is the same as for raster pixels.

use super::error::TransformError;
use super::pixel::transform_rgb;
use crate::lut::ColorLut;

/// Transform a list of palette entries.
pub fn transform_palette(entries: &[[u8; 3]], lut: &ColorLut) -> Vec<[u8; 3]> {
    entries.iter().map(|&rgb| transform_rgb(rgb, lut)).collect()
}

/// Transform a flat `[R, G, B, R, G, B, ...]` colormap in place.
///
/// # Errors
///
/// Returns [`TransformError::MalformedColormap`] if the length is not a
/// multiple of 3. The colormap is left untouched in that case.
pub fn transform_colormap(colormap: &mut [u8], lut: &ColorLut) -> Result<(), TransformError> {
    if colormap.len() % 3 != 0 {
        return Err(TransformError::MalformedColormap {
            len: colormap.len(),
        });
    }

    for rgb in colormap.chunks_exact_mut(3) {
        let out = transform_rgb([rgb[0], rgb[1], rgb[2]], lut);
        rgb.copy_from_slice(&out);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::profile::Profile;

    #[test]
    fn test_colormap_in_place() {
        let lut = ColorLut::new(Profile::SonMapEd, Profile::SKCollect, false);
        let mut colormap = vec![0x00, 0x20, 0x40, 0xE0, 0xFF, 0x10];
        transform_colormap(&mut colormap, &lut).unwrap();
        assert_eq!(colormap, vec![0x00, 0x22, 0x44, 0xEE, 0xEE, 0x00]);
    }

    #[test]
    fn test_colormap_rejects_partial_entry() {
        let lut = ColorLut::new(Profile::SonMapEd, Profile::SonMapEd, false);
        let mut colormap = vec![1, 2, 3, 4];
        let err = transform_colormap(&mut colormap, &lut).unwrap_err();
        assert_eq!(err, TransformError::MalformedColormap { len: 4 });
        assert_eq!(colormap, vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_entries_and_flat_colormap_agree() {
        let lut = ColorLut::new(Profile::Measured, Profile::SonMapEd, true);
        let entries = [[0x00, 0x1D, 0x34], [0xFF, 0xE4, 0x82], [0x10, 0xF0, 0x70]];
        let mut flat: Vec<u8> = entries.iter().flatten().copied().collect();

        let converted = transform_palette(&entries, &lut);
        transform_colormap(&mut flat, &lut).unwrap();

        let expected: Vec<u8> = converted.iter().flatten().copied().collect();
        assert_eq!(flat, expected);
    }

    #[test]
    fn test_empty_colormap() {
        let lut = ColorLut::new(Profile::SonMapEd, Profile::SonMapEd, false);
        let mut colormap: Vec<u8> = Vec::new();
        assert!(transform_colormap(&mut colormap, &lut).is_ok());
        assert!(transform_palette(&[], &lut).is_empty());
    }
}
