//! Per-byte lookup result.

/// The lookup result for a single channel byte.
///
/// A [`ColorLut`](super::ColorLut) holds one entry per input byte. Whether a
/// pixel uses `fine_value` or `normal_value` is decided across all three
/// channels by [`select_triple`](crate::transform::select_triple), never per
/// channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChannelEntry {
    /// Destination value on the shadow/highlight grid.
    ///
    /// Equal to `normal_value` when shadow/highlight is disabled.
    pub fine_value: u8,
    /// Destination value on the normal grid.
    pub normal_value: u8,
    /// Source fine index is in the shadow half (`<= 7`).
    pub shadow_candidate: bool,
    /// Source fine index is in the highlight half (`>= 7`).
    pub highlight_candidate: bool,
    /// Source fine index is even, so the value also lies on the normal grid.
    ///
    /// Informational; always `true` when shadow/highlight is disabled.
    pub normal_aligned: bool,
}

impl ChannelEntry {
    /// Entry for a table built without shadow/highlight support.
    #[inline]
    pub fn normal_only(value: u8) -> Self {
        Self {
            fine_value: value,
            normal_value: value,
            shadow_candidate: false,
            highlight_candidate: false,
            normal_aligned: true,
        }
    }
}
