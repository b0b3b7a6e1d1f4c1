//! FadeFrames: the rendered frames of a palette fade.

use crate::transform::RasterLayout;

/// The rendered frames of a fade, in step order.
///
/// Every frame shares the layout of the unfaded input. The last frame is
/// the content that survives once the fade has played.
///
/// # Example
///
/// ```
/// use md_palette::{FadeFrames, RasterLayout};
///
/// let layout = RasterLayout::new(1, 1, 3);
/// let frames = FadeFrames::new(layout, vec![vec![0x22, 0x22, 0x22], vec![0, 0, 0]]);
///
/// assert_eq!(frames.len(), 2);
/// assert_eq!(frames.last(), Some(&[0u8, 0, 0][..]));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FadeFrames {
    layout: RasterLayout,
    frames: Vec<Vec<u8>>,
}

impl FadeFrames {
    /// Wrap rendered frames.
    ///
    /// # Panics (debug only)
    ///
    /// Debug-asserts that every frame matches `layout`.
    pub fn new(layout: RasterLayout, frames: Vec<Vec<u8>>) -> Self {
        debug_assert!(
            frames.iter().all(|f| f.len() == layout.byte_len()),
            "every frame must hold {} bytes",
            layout.byte_len()
        );
        Self { layout, frames }
    }

    /// Layout shared by all frames.
    #[inline]
    pub fn layout(&self) -> RasterLayout {
        self.layout
    }

    /// Number of frames.
    #[inline]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// Whether there are no frames.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Pixel data of frame `index`.
    #[inline]
    pub fn frame(&self, index: usize) -> Option<&[u8]> {
        self.frames.get(index).map(Vec::as_slice)
    }

    /// Final frame.
    #[inline]
    pub fn last(&self) -> Option<&[u8]> {
        self.frames.last().map(Vec::as_slice)
    }

    /// Frames in step order.
    pub fn iter(&self) -> impl Iterator<Item = &[u8]> {
        self.frames.iter().map(Vec::as_slice)
    }

    /// Take ownership of the frame buffers.
    pub fn into_frames(self) -> Vec<Vec<u8>> {
        self.frames
    }
}
