//! Nearest-level search over an ordered set of representable intensities.

/// Which of a profile's two level grids to quantize against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LevelGrid {
    /// The 8 levels available in ordinary rendering.
    Normal,
    /// The 15 levels available in shadow/highlight rendering.
    Fine,
}

/// Return the index of the level closest to `value`.
///
/// Levels are scanned in ascending order and the first minimum is kept,
/// so an input exactly halfway between two levels rounds to the lower one.
/// For `levels = [0x00, 0x20, ...]`, `0x10` maps to index 0.
///
/// # Panics
///
/// Panics if `levels` is empty. Level tables are compile-time constants,
/// so an empty slice is a programming error.
#[inline]
pub fn nearest_index(value: u8, levels: &[u8]) -> usize {
    assert!(
        !levels.is_empty(),
        "nearest_index: level table must not be empty"
    );

    let mut best = 0;
    let mut best_dist = u8::MAX as u16 + 1;
    for (i, &level) in levels.iter().enumerate() {
        let dist = (level as i16 - value as i16).unsigned_abs();
        // Strict comparison keeps the lower index on ties
        if dist < best_dist {
            best = i;
            best_dist = dist;
        }
    }
    best
}

/// Return the level value closest to `value`.
#[inline]
pub fn nearest_level(value: u8, levels: &[u8]) -> u8 {
    levels[nearest_index(value, levels)]
}
