//! Configuration file handling for ascii-webcam.
//!
//! Loads configuration from `~/.config/ascii-webcam/config.toml` (platform
//! config dir) or a custom path.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default ASCII output width in characters.
pub const DEFAULT_WIDTH: u32 = 80;
/// Default refresh rate.
pub const DEFAULT_FPS: u32 = 30;
/// Default preset name.
pub const DEFAULT_PRESET: &str = "classic";
/// Default color scheme name.
pub const DEFAULT_SCHEME: &str = "true";
/// Largest accepted source width in pixels.
pub const MAX_SOURCE_WIDTH: u32 = 7680;
/// Largest accepted source height in pixels.
pub const MAX_SOURCE_HEIGHT: u32 = 4320;

/// Configuration file structure.
#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub display: DisplayConfig,
    #[serde(default)]
    pub source: SourceConfig,
}

#[derive(Debug, Deserialize, Default, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct RenderConfig {
    pub width: Option<u32>,
    pub height: Option<u32>,
    pub preset: Option<String>,
    pub scheme: Option<String>,
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct DisplayConfig {
    #[serde(default = "default_fps")]
    pub fps: u32,
    #[serde(default = "default_true")]
    pub status_bar: bool,
    #[serde(default)]
    pub fit_terminal: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            fps: DEFAULT_FPS,
            status_bar: true,
            fit_terminal: false,
        }
    }
}

#[derive(Debug, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct SourceConfig {
    /// Requested capture resolution
    #[serde(default = "default_source_width")]
    pub width: u32,
    #[serde(default = "default_source_height")]
    pub height: u32,
    /// Camera device index (None = test pattern)
    #[serde(default)]
    pub camera: Option<u32>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            width: default_source_width(),
            height: default_source_height(),
            camera: None,
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_fps() -> u32 {
    DEFAULT_FPS
}

fn default_source_width() -> u32 {
    640
}

fn default_source_height() -> u32 {
    480
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::Io {
                path: path.clone(),
                source: e,
            })?;
            let config = Self::parse(&content).map_err(|e| ConfigError::Parse {
                path: path.clone(),
                source: e,
            })?;
            log::debug!("Loaded config from {}", path.display());
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }

    /// Parse configuration from TOML text.
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{}': {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Get the default config file path.
pub fn default_path() -> PathBuf {
    dirs::config_dir()
        .map(|d| d.join("ascii-webcam").join("config.toml"))
        .unwrap_or_else(|| {
            let home = std::env::var("HOME").unwrap_or_else(|_| ".".to_string());
            PathBuf::from(home).join(".config/ascii-webcam/config.toml")
        })
}

/// Contents written by `config init`.
pub const DEFAULT_CONFIG_TOML: &str = r#"# ascii-webcam configuration

[render]
# Maximum output width in characters
width = 80
# Maximum output height in characters (omit to derive from width)
# height = 40
# Character preset: classic, blocks, simple, detailed, matrix, dots, lines
preset = "classic"
# Color scheme: true, neon, matrix, vintage, cyberpunk
scheme = "true"

[display]
# Target refresh rate (1-120)
fps = 30
# Show the status line
status_bar = true
# Follow the terminal size instead of the fixed width/height
fit_terminal = false

[source]
# Capture resolution (camera request or test pattern size)
width = 640
height = 480
# Camera device index; omit to show the test pattern
# camera = 0
"#;
