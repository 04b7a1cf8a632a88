//! Terminal management - raw mode, screen painting, and the status line.

mod painter;
mod raw_mode;
mod status_bar;

pub use painter::Painter;
pub use raw_mode::RawModeGuard;
pub use status_bar::{FpsCounter, StatusBar};
