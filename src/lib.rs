//! ascii-webcam library crate.
//!
//! Converts video frames into colorized character art for the terminal.
//! The conversion core is [`converter::AsciiConverter`]; the remaining
//! modules make up the terminal viewer around it.

pub mod ascii;
pub mod cli;
pub mod config;
pub mod converter;
pub mod error;
pub mod event_loop;
pub mod input;
pub mod source;
pub mod terminal;

pub use converter::{AsciiConverter, ConverterConfig};
pub use error::{AppError, ConvertError};
