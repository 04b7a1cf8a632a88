//! Building blocks of the frame-to-ASCII pipeline.
//!
//! 1. **Dimensions** - plan the character grid with cell aspect correction
//! 2. **Downsampling** - box-filter the frame down to one sample per cell
//! 3. **Grayscale** - BT.601 luma per cell
//! 4. **Mapping** - quantize luma to an index into the active ramp
//! 5. **Color** - apply the selected color scheme
//! 6. **Rendering** - glyph grid or ANSI true-color rows
//!
//! [`crate::converter::AsciiConverter`] ties these together and owns the
//! scratch buffers.

mod charset;
mod color;
mod dimensions;
mod downsample;
mod frame;
mod grayscale;
mod mapping;
mod render;

pub use charset::{
    Preset, BLOCKS_CHARSET, CLASSIC_CHARSET, DETAILED_CHARSET, DOTS_CHARSET, LINES_CHARSET,
    MATRIX_CHARSET, SIMPLE_CHARSET,
};
pub use color::{CellColor, ColorScheme};
pub use dimensions::{
    calculate_dimensions, DimensionPlanner, TargetDims, CELL_ASPECT, DIMENSION_CACHE_CAPACITY,
    MIN_GRID_HEIGHT, MIN_GRID_WIDTH,
};
pub use downsample::{downsample, downsample_into};
pub use frame::AsciiFrame;
pub use grayscale::{luma, to_grayscale_into};
pub use mapping::{map_to_chars_into, map_to_indices_into, quantize};
pub use render::{push_fg, render_row, RowBuffers, ANSI_RESET};
