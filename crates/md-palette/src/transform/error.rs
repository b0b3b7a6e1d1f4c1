//! Error types for raster and palette transforms

use thiserror::Error;

/// Error type for malformed buffers handed to the transform engine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TransformError {
    /// Colormap length is not a multiple of 3
    #[error("colormap length {len} is not a multiple of 3")]
    MalformedColormap {
        /// Length of the rejected colormap in bytes
        len: usize,
    },

    /// Buffer length does not match the raster layout
    #[error("buffer holds {actual} bytes, layout requires {expected}")]
    BufferSize {
        /// Bytes implied by width * height * channels
        expected: usize,
        /// Bytes actually supplied
        actual: usize,
    },

    /// Pixel layout with no channels
    #[error("unsupported channel count: {channels}")]
    UnsupportedChannels {
        /// Rejected channel count
        channels: usize,
    },

    /// Tile with zero width or height
    #[error("tile dimensions must be non-zero")]
    EmptyTile,
}
