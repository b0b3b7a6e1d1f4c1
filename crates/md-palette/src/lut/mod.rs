//! Lookup-table construction
//!
//! A [`ColorLut`] combines a source profile, a destination profile and the
//! shadow/highlight flag into one table covering every input byte. The
//! transform engine only reads these tables; it never touches the level
//! constants directly.

mod color_lut;
mod entry;
mod error;

pub use color_lut::{build_lut, find_representable_color, map_level, ColorLut};
pub use entry::ChannelEntry;
pub use error::LutError;
