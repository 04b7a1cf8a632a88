//! Error types for configuration, frame conversion, and the viewer.

use std::path::PathBuf;

use crate::config::ConfigError;
use crate::source::CaptureError;

/// Errors raised by the converter.
///
/// Configuration errors surface when a converter is built or reconfigured,
/// never per frame. A failed call leaves the converter in its previous
/// valid state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
    /// Preset name not in the registry
    #[error("Unknown preset '{name}'. Available presets: {}", .valid.join(", "))]
    UnknownPreset {
        name: String,
        valid: Vec<&'static str>,
    },
    /// Color scheme name not in the registry
    #[error("Unknown color scheme '{name}'. Available schemes: {}", .valid.join(", "))]
    UnknownColorScheme {
        name: String,
        valid: Vec<&'static str>,
    },
    /// Target width or height is zero
    #[error("Invalid target {axis}: {value} (must be greater than 0)")]
    InvalidDimension { axis: &'static str, value: u32 },
    /// Frame cannot be converted (zero area, truncated buffer)
    #[error("Invalid input frame: {0}")]
    InvalidInput(String),
}

impl ConvertError {
    /// Whether this error comes from configuration rather than frame data.
    pub fn is_config_error(&self) -> bool {
        !matches!(self, ConvertError::InvalidInput(_))
    }
}

/// Top-level error for the viewer binary.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Convert(#[from] ConvertError),
    #[error(transparent)]
    Capture(#[from] CaptureError),
    #[error("Config file already exists: {}", .0.display())]
    ConfigExists(PathBuf),
    #[error("Terminal I/O error: {0}")]
    Io(#[from] std::io::Error),
}
