//! Calibration profiles and nearest-level search
//!
//! Each [`Profile`] owns two constant level tables: 8 normal levels and
//! 15 shadow/highlight levels. [`nearest_index`] quantizes a byte against
//! either table.

mod error;
mod levels;
mod profile;

pub use error::{ParseFadeModeError, ParseProfileError};
pub use levels::{nearest_index, nearest_level, LevelGrid};
pub use profile::{Profile, FINE_LEVELS, FINE_MIDPOINT, NORMAL_LEVELS};
