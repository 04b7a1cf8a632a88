//! CLI argument parsing with clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::config::{MAX_SOURCE_HEIGHT, MAX_SOURCE_WIDTH};

/// Parse and validate framerate (1-120 fps)
fn parse_framerate(s: &str) -> Result<u32, String> {
    let fps: u32 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid framerate", s))?;
    if !(1..=120).contains(&fps) {
        return Err(format!(
            "Framerate must be between 1 and 120 fps, got {}",
            fps
        ));
    }
    Ok(fps)
}

/// Parse and validate resolution (WIDTHxHEIGHT format)
fn parse_resolution(s: &str) -> Result<(u32, u32), String> {
    let parts: Vec<&str> = s.split('x').collect();
    if parts.len() != 2 {
        return Err(format!(
            "Invalid resolution format '{}'. Use WIDTHxHEIGHT (e.g., 640x480)",
            s
        ));
    }
    let width: u32 = parts[0]
        .parse()
        .map_err(|_| format!("Invalid width '{}' in resolution", parts[0]))?;
    let height: u32 = parts[1]
        .parse()
        .map_err(|_| format!("Invalid height '{}' in resolution", parts[1]))?;
    if width == 0 || height == 0 {
        return Err("Resolution width and height must be greater than 0".to_string());
    }
    if width > MAX_SOURCE_WIDTH || height > MAX_SOURCE_HEIGHT {
        return Err(format!(
            "Resolution exceeds maximum supported ({}x{})",
            MAX_SOURCE_WIDTH, MAX_SOURCE_HEIGHT
        ));
    }
    Ok((width, height))
}

/// Parse a positive character count.
fn parse_cells(s: &str) -> Result<u32, String> {
    let n: u32 = s.parse().map_err(|_| format!("'{}' is not a valid number", s))?;
    if n == 0 {
        return Err("Value must be greater than 0".to_string());
    }
    Ok(n)
}

/// Real-time ASCII art video viewer in the terminal
#[derive(Parser, Debug)]
#[command(name = "ascii-webcam")]
#[command(version, about = "Real-time ASCII art video viewer in the terminal", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Width of ASCII output in characters (default: 80)
    #[arg(short, long, value_parser = parse_cells)]
    pub width: Option<u32>,

    /// Maximum height of ASCII output in characters
    #[arg(short = 'H', long, value_parser = parse_cells)]
    pub height: Option<u32>,

    /// Character preset (default: classic)
    #[arg(short, long)]
    pub preset: Option<String>,

    /// Color scheme (default: true)
    #[arg(short, long)]
    pub scheme: Option<String>,

    /// Target frames per second, 1-120 (default: 30)
    #[arg(long, value_parser = parse_framerate)]
    pub fps: Option<u32>,

    /// Capture resolution, WIDTHxHEIGHT (default: 640x480)
    #[arg(long, value_parser = parse_resolution)]
    pub source_size: Option<(u32, u32)>,

    /// Camera device index (default: show the test pattern)
    #[arg(long)]
    pub camera: Option<u32>,

    /// Size the output to the terminal and follow resizes
    #[arg(long)]
    pub fit_terminal: bool,

    /// Hide status line
    #[arg(long)]
    pub no_status: bool,

    /// List available presets and color schemes and exit
    #[arg(short, long)]
    pub list_presets: bool,

    /// Config file path
    #[arg(long, short)]
    pub config: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug, Clone)]
pub enum ConfigAction {
    /// Show current configuration
    Show,
    /// Create default config file
    Init,
}
