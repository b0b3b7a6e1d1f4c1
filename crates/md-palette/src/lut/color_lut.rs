//! Composite per-byte lookup table.

use std::ops::Index;

use super::entry::ChannelEntry;
use crate::profile::{nearest_index, nearest_level, LevelGrid, Profile, FINE_MIDPOINT};

/// Convert a byte from one profile's grid to another's.
///
/// The value is quantized to the nearest `source` level, and that level's
/// *value* (not its index) is quantized again against `destination`.
/// With `source == destination` the second step is a no-op.
#[inline]
pub fn map_level(value: u8, source: Profile, destination: Profile, grid: LevelGrid) -> u8 {
    let src_value = nearest_level(value, source.levels(grid));
    nearest_level(src_value, destination.levels(grid))
}

/// Nearest normal-grid value of `profile` to `value`.
///
/// Used for the fade's white endpoint: white in SonMapEd is `0xE0`, not `0xFF`.
#[inline]
pub fn find_representable_color(value: u8, profile: Profile) -> u8 {
    nearest_level(value, profile.normal_levels())
}

/// Build the composite table for a profile pair.
///
/// Shorthand for [`ColorLut::new`].
pub fn build_lut(source: Profile, destination: Profile, shadow_highlight: bool) -> ColorLut {
    ColorLut::new(source, destination, shadow_highlight)
}

/// A fully materialized byte -> [`ChannelEntry`] table.
///
/// Built once per conversion pass and read-only afterwards; safe to share
/// across threads.
///
/// # Example
///
/// ```
/// use md_palette::{ColorLut, Profile};
///
/// let lut = ColorLut::new(Profile::SKCollect, Profile::SKCollect, false);
/// assert_eq!(lut[0x99].normal_value, 0x88);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorLut {
    source: Profile,
    destination: Profile,
    shadow_highlight: bool,
    entries: [ChannelEntry; 256],
}

impl ColorLut {
    /// Build the table for `source -> destination`.
    ///
    /// With `shadow_highlight` disabled, every entry has
    /// `fine_value == normal_value` and both candidate flags cleared.
    pub fn new(source: Profile, destination: Profile, shadow_highlight: bool) -> Self {
        let entries = std::array::from_fn(|v| {
            let v = v as u8;
            let normal_value = map_level(v, source, destination, LevelGrid::Normal);
            if !shadow_highlight {
                return ChannelEntry::normal_only(normal_value);
            }

            let fine_index = nearest_index(v, source.fine_levels());
            ChannelEntry {
                fine_value: map_level(v, source, destination, LevelGrid::Fine),
                normal_value,
                shadow_candidate: fine_index <= FINE_MIDPOINT,
                highlight_candidate: fine_index >= FINE_MIDPOINT,
                normal_aligned: fine_index % 2 == 0,
            }
        });

        Self {
            source,
            destination,
            shadow_highlight,
            entries,
        }
    }

    /// Build a normal-only table from an arbitrary byte mapping.
    ///
    /// Fade steps use this: they never take the shadow/highlight path.
    pub(crate) fn from_normal_fn(
        source: Profile,
        destination: Profile,
        mut f: impl FnMut(u8) -> u8,
    ) -> Self {
        let entries = std::array::from_fn(|v| ChannelEntry::normal_only(f(v as u8)));
        Self {
            source,
            destination,
            shadow_highlight: false,
            entries,
        }
    }

    /// Profile the input was authored against.
    #[inline]
    pub fn source(&self) -> Profile {
        self.source
    }

    /// Profile the output targets.
    #[inline]
    pub fn destination(&self) -> Profile {
        self.destination
    }

    /// Whether fine values and candidacy flags were computed.
    #[inline]
    pub fn shadow_highlight(&self) -> bool {
        self.shadow_highlight
    }

    /// Entry for a single byte.
    #[inline]
    pub fn entry(&self, value: u8) -> &ChannelEntry {
        &self.entries[value as usize]
    }

    /// All 256 entries, indexed by input byte.
    #[inline]
    pub fn entries(&self) -> &[ChannelEntry; 256] {
        &self.entries
    }
}

impl Index<u8> for ColorLut {
    type Output = ChannelEntry;

    #[inline]
    fn index(&self, value: u8) -> &ChannelEntry {
        self.entry(value)
    }
}
