//! Command-line interface definitions and helpers.
//!
//! This module contains CLI argument parsing, settings resolution, and
//! subcommand handlers.

mod args;
mod commands;
mod settings;

pub use args::{Args, Command, ConfigAction};
pub use commands::{handle_config_action, presets_listing, print_presets};
pub use settings::Settings;
