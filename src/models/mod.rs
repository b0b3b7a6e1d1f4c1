pub mod config;
pub mod image_spec;
pub mod lut_dump;

pub use config::{
    AppConfig, ConfigSource, ConvertConfig, ConvertSettings, FadeConfig, FadeSettings,
    OutputConfig, DEFAULT_CONFIG_FILE,
};
pub use image_spec::{DecodedImage, PixelFormat};
pub use lut_dump::{LutDump, LutRow};
