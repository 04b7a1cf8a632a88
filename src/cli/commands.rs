//! Handlers for `--list-presets` and the config subcommand.

use std::path::Path;

use super::args::ConfigAction;
use super::settings::Settings;
use crate::ascii::{ColorScheme, Preset};
use crate::config::{default_path, DEFAULT_CONFIG_TOML};
use crate::error::AppError;

/// Text listing every preset with its glyphs and every color scheme.
pub fn presets_listing() -> String {
    let mut out = String::from("Available character presets:\n");
    for preset in Preset::ALL {
        let glyphs: String = preset.chars().iter().collect();
        out.push_str(&format!("  {:8} - Characters: {}\n", preset.name(), glyphs));
    }
    out.push_str("\nAvailable color schemes:\n");
    for scheme in ColorScheme::ALL {
        out.push_str(&format!("  {:9} - {}\n", scheme.name(), scheme.description()));
    }
    out
}

/// Print available presets and color schemes to stdout.
pub fn print_presets() {
    print!("{}", presets_listing());
}

/// Handle config subcommand actions.
pub fn handle_config_action(
    action: ConfigAction,
    settings: &Settings,
    path: Option<&Path>,
) -> Result<(), AppError> {
    let config_path = path.map(Path::to_path_buf).unwrap_or_else(default_path);

    match action {
        ConfigAction::Show => {
            let converter = &settings.converter;
            println!("Current configuration:");
            println!("  Width: {}", converter.target.width);
            match converter.target.height {
                Some(h) => println!("  Height: {}", h),
                None => println!("  Height: auto"),
            }
            println!("  Preset: {}", converter.preset);
            println!("  Color scheme: {}", converter.scheme);
            println!("  FPS: {}", settings.fps);
            println!(
                "  Status bar: {}",
                if settings.status_bar { "yes" } else { "no" }
            );
            println!(
                "  Fit terminal: {}",
                if settings.fit_terminal { "yes" } else { "no" }
            );
            let (src_w, src_h) = settings.source_size;
            match settings.camera {
                Some(index) => println!("  Source: camera {} at {}x{}", index, src_w, src_h),
                None => println!("  Source: test pattern {}x{}", src_w, src_h),
            }
            println!();

            if config_path.exists() {
                println!("Config file: {} (exists)", config_path.display());
            } else {
                println!("Config file: {} (not found)", config_path.display());
            }
            Ok(())
        }
        ConfigAction::Init => {
            if config_path.exists() {
                return Err(AppError::ConfigExists(config_path));
            }

            if let Some(parent) = config_path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&config_path, DEFAULT_CONFIG_TOML)?;

            println!("Created config file: {}", config_path.display());
            Ok(())
        }
    }
}
