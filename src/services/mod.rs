pub mod converter;
pub mod fader;

pub use converter::{ConvertReport, ConverterService};
pub use fader::{frame_file_name, FaderService};
