use crate::error::ConfigError;
use md_palette::{FadeMode, Profile, TileSize};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Config file looked up in the working directory when none is named.
pub const DEFAULT_CONFIG_FILE: &str = "mdcolors.yaml";

/// Application configuration loaded from mdcolors.yaml
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
pub struct AppConfig {
    /// Defaults for `mdcolors convert`
    #[serde(default)]
    pub convert: ConvertConfig,

    /// Defaults for `mdcolors fade`
    #[serde(default)]
    pub fade: FadeConfig,

    /// Output file handling
    #[serde(default)]
    pub output: OutputConfig,
}

/// Color conversion defaults
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ConvertConfig {
    /// Profile the input was authored against
    #[serde(default = "default_profile")]
    pub source: String,

    /// Profile the output should use
    #[serde(default = "default_profile")]
    pub destination: String,

    /// Allow shadow/highlight colors
    #[serde(default)]
    pub shadow_highlight: bool,
}

impl Default for ConvertConfig {
    fn default() -> Self {
        Self {
            source: default_profile(),
            destination: default_profile(),
            shadow_highlight: false,
        }
    }
}

/// Palette fade defaults
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FadeConfig {
    #[serde(default = "default_profile")]
    pub source: String,

    #[serde(default = "default_profile")]
    pub destination: String,

    /// One of current-to-black, black-to-current, current-to-white,
    /// white-to-current
    #[serde(default = "default_fade_mode")]
    pub mode: String,

    /// Also write the endpoint frame
    #[serde(default)]
    pub include_endpoint: bool,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            source: default_profile(),
            destination: default_profile(),
            mode: default_fade_mode(),
            include_endpoint: false,
        }
    }
}

/// Output file handling
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct OutputConfig {
    /// Re-compress written PNGs with oxipng
    #[serde(default)]
    pub optimize: bool,

    /// Raster tile width in pixels
    #[serde(default = "default_tile_edge")]
    pub tile_width: u32,

    /// Raster tile height in pixels
    #[serde(default = "default_tile_edge")]
    pub tile_height: u32,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            optimize: false,
            tile_width: default_tile_edge(),
            tile_height: default_tile_edge(),
        }
    }
}

fn default_profile() -> String {
    Profile::default().key().to_string()
}

fn default_fade_mode() -> String {
    FadeMode::default().key().to_string()
}

fn default_tile_edge() -> u32 {
    TileSize::DEFAULT.width
}

/// Where the configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigSource {
    pub path: PathBuf,
    /// Named via `--config` or `CONFIG_FILE`; a missing file is an error
    pub explicit: bool,
}

impl ConfigSource {
    /// Resolve from the CLI flag, then `CONFIG_FILE`, then the default file.
    pub fn resolve(cli_path: Option<PathBuf>) -> Self {
        Self::resolve_with(cli_path, std::env::var("CONFIG_FILE").ok())
    }

    fn resolve_with(cli_path: Option<PathBuf>, env_path: Option<String>) -> Self {
        match cli_path.or_else(|| env_path.filter(|p| !p.is_empty()).map(PathBuf::from)) {
            Some(path) => Self {
                path,
                explicit: true,
            },
            None => Self {
                path: PathBuf::from(DEFAULT_CONFIG_FILE),
                explicit: false,
            },
        }
    }
}

/// Typed settings for one conversion run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConvertSettings {
    pub source: Profile,
    pub destination: Profile,
    pub shadow_highlight: bool,
    pub tile: TileSize,
    pub optimize: bool,
}

/// Typed settings for one fade run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeSettings {
    pub source: Profile,
    pub destination: Profile,
    pub mode: FadeMode,
    pub include_endpoint: bool,
    pub tile: TileSize,
    pub optimize: bool,
}

impl AppConfig {
    /// Load configuration from `source`.
    ///
    /// A missing default file yields the built-in defaults; a missing
    /// explicit file and any parse error fail.
    pub fn load(source: &ConfigSource) -> Result<Self, ConfigError> {
        let content = match std::fs::read_to_string(&source.path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !source.explicit => {
                tracing::info!(path = %source.path.display(), "No config file, using defaults");
                return Ok(Self::default());
            }
            Err(e) => {
                return Err(ConfigError::Io {
                    path: source.path.clone(),
                    source: e,
                })
            }
        };

        let config = Self::from_yaml(&content, &source.path)?;
        tracing::info!(path = %source.path.display(), "Loaded configuration");
        Ok(config)
    }

    /// Parse YAML text; `path` is only used in error messages.
    pub fn from_yaml(content: &str, path: &Path) -> Result<Self, ConfigError> {
        // An empty file deserializes to unit, not to an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Tile size from the output section.
    pub fn tile_size(&self) -> Result<TileSize, ConfigError> {
        let (width, height) = (self.output.tile_width, self.output.tile_height);
        if width == 0 || height == 0 {
            return Err(ConfigError::ZeroTile { width, height });
        }
        Ok(TileSize::new(width, height))
    }

    /// Resolve the convert section into typed settings.
    pub fn convert_settings(&self) -> Result<ConvertSettings, ConfigError> {
        Ok(ConvertSettings {
            source: self.convert.source.parse()?,
            destination: self.convert.destination.parse()?,
            shadow_highlight: self.convert.shadow_highlight,
            tile: self.tile_size()?,
            optimize: self.output.optimize,
        })
    }

    /// Resolve the fade section into typed settings.
    pub fn fade_settings(&self) -> Result<FadeSettings, ConfigError> {
        Ok(FadeSettings {
            source: self.fade.source.parse()?,
            destination: self.fade.destination.parse()?,
            mode: self.fade.mode.parse()?,
            include_endpoint: self.fade.include_endpoint,
            tile: self.tile_size()?,
            optimize: self.output.optimize,
        })
    }
}
