//! Merge command-line flags over the config file.

use super::args::Args;
use crate::config::{
    Config, DEFAULT_PRESET, DEFAULT_SCHEME, DEFAULT_WIDTH, MAX_SOURCE_HEIGHT, MAX_SOURCE_WIDTH,
};
use crate::converter::ConverterConfig;
use crate::error::ConvertError;

/// Effective runtime settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub converter: ConverterConfig,
    pub fps: u32,
    pub status_bar: bool,
    pub fit_terminal: bool,
    /// Requested capture resolution
    pub source_size: (u32, u32),
    /// Camera device index (None = test pattern)
    pub camera: Option<u32>,
}

/// Reject a source size outside `1..=MAX` on either axis.
fn check_source_size((width, height): (u32, u32)) -> Result<(u32, u32), ConvertError> {
    if width == 0 || width > MAX_SOURCE_WIDTH {
        return Err(ConvertError::InvalidDimension {
            axis: "source width",
            value: width,
        });
    }
    if height == 0 || height > MAX_SOURCE_HEIGHT {
        return Err(ConvertError::InvalidDimension {
            axis: "source height",
            value: height,
        });
    }
    Ok((width, height))
}

impl Settings {
    /// Flags win over file values, file values win over defaults.
    ///
    /// Fails with the converter's configuration error on an unknown preset
    /// or color scheme, or on a source size out of range.
    pub fn resolve(args: &Args, config: &Config) -> Result<Self, ConvertError> {
        let width = args.width.or(config.render.width).unwrap_or(DEFAULT_WIDTH);
        let height = args.height.or(config.render.height);
        let preset = args
            .preset
            .as_deref()
            .or(config.render.preset.as_deref())
            .unwrap_or(DEFAULT_PRESET);
        let scheme = args
            .scheme
            .as_deref()
            .or(config.render.scheme.as_deref())
            .unwrap_or(DEFAULT_SCHEME);

        Ok(Self {
            converter: ConverterConfig::from_names(width, height, preset, scheme)?,
            fps: args.fps.unwrap_or(config.display.fps).clamp(1, 120),
            status_bar: config.display.status_bar && !args.no_status,
            fit_terminal: args.fit_terminal || config.display.fit_terminal,
            source_size: check_source_size(
                args.source_size
                    .unwrap_or((config.source.width, config.source.height)),
            )?,
            camera: args.camera.or(config.source.camera),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::{ColorScheme, Preset};
    use clap::Parser;

    #[test]
    fn test_defaults() {
        let args = Args::parse_from(["ascii-webcam"]);
        let settings = Settings::resolve(&args, &Config::default()).unwrap();
        assert_eq!(settings.converter, ConverterConfig::default());
        assert_eq!(settings.fps, 30);
        assert!(settings.status_bar);
        assert!(!settings.fit_terminal);
        assert_eq!(settings.source_size, (640, 480));
    }

    #[test]
    fn test_cli_overrides_file() {
        let config = Config::parse("[render]\nwidth = 100\npreset = \"dots\"\nscheme = \"neon\"").unwrap();
        let args = Args::parse_from(["ascii-webcam", "-w", "60", "-s", "vintage"]);
        let settings = Settings::resolve(&args, &config).unwrap();
        assert_eq!(settings.converter.target.width, 60);
        assert_eq!(settings.converter.preset, Preset::Dots);
        assert_eq!(settings.converter.scheme, ColorScheme::Vintage);
    }

    #[test]
    fn test_no_status_flag_wins() {
        let args = Args::parse_from(["ascii-webcam", "--no-status"]);
        let settings = Settings::resolve(&args, &Config::default()).unwrap();
        assert!(!settings.status_bar);
    }

    #[test]
    fn test_unknown_names_from_file_fail() {
        let config = Config::parse("[render]\nscheme = \"sepia\"").unwrap();
        let args = Args::parse_from(["ascii-webcam"]);
        assert!(matches!(
            Settings::resolve(&args, &config),
            Err(ConvertError::UnknownColorScheme { .. })
        ));
    }

    #[test]
    fn test_zero_width_from_file_fails() {
        let config = Config::parse("[render]\nwidth = 0").unwrap();
        let args = Args::parse_from(["ascii-webcam"]);
        assert!(matches!(
            Settings::resolve(&args, &config),
            Err(ConvertError::InvalidDimension { axis: "width", .. })
        ));
    }

    #[test]
    fn test_oversized_source_from_file_fails() {
        let config = Config::parse("[source]\nwidth = 100000\nheight = 100000").unwrap();
        let args = Args::parse_from(["ascii-webcam"]);
        assert!(matches!(
            Settings::resolve(&args, &config),
            Err(ConvertError::InvalidDimension {
                axis: "source width",
                value: 100000
            })
        ));

        let config = Config::parse("[source]\nheight = 0").unwrap();
        assert!(matches!(
            Settings::resolve(&args, &config),
            Err(ConvertError::InvalidDimension { axis: "source height", .. })
        ));
    }

    #[test]
    fn test_largest_source_accepted() {
        let config = Config::parse("[source]\nwidth = 7680\nheight = 4320").unwrap();
        let args = Args::parse_from(["ascii-webcam"]);
        let settings = Settings::resolve(&args, &config).unwrap();
        assert_eq!(settings.source_size, (7680, 4320));
    }

    #[test]
    fn test_camera_from_cli_or_file() {
        let args = Args::parse_from(["ascii-webcam"]);
        assert_eq!(Settings::resolve(&args, &Config::default()).unwrap().camera, None);

        let config = Config::parse("[source]\ncamera = 2").unwrap();
        assert_eq!(Settings::resolve(&args, &config).unwrap().camera, Some(2));

        let args = Args::parse_from(["ascii-webcam", "--camera", "0"]);
        assert_eq!(Settings::resolve(&args, &config).unwrap().camera, Some(0));
    }
}
