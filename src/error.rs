use std::path::PathBuf;

use md_palette::{MdError, ParseFadeModeError, ParseProfileError, TransformError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Invalid profile: {0}")]
    Profile(#[from] ParseProfileError),

    #[error("Invalid fade mode: {0}")]
    FadeMode(#[from] ParseFadeModeError),

    #[error("Tile size must be non-zero, got {width}x{height}")]
    ZeroTile { width: u32, height: u32 },
}

#[derive(Debug, Error)]
pub enum ImageError {
    #[error("PNG decode error: {0}")]
    Decode(#[from] png::DecodingError),

    #[error("PNG encode error: {0}")]
    Encode(#[from] png::EncodingError),

    #[error("Unsupported bit depth: {depth} (only 8-bit images are supported)")]
    UnsupportedBitDepth { depth: u8 },

    #[error("Indexed image has no PLTE chunk")]
    MissingPalette,

    #[error("Color error: {0}")]
    Color(#[from] MdError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<TransformError> for ImageError {
    fn from(e: TransformError) -> Self {
        ImageError::Color(MdError::from(e))
    }
}
