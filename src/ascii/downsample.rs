//! Area-averaging downsampler from frame pixels to grid cells.

use crate::source::Frame;

/// Pixel range `[start, end)` covered by cell `cell` along one axis.
///
/// Integer boundaries keep the mapping exact; every cell covers at least
/// one source pixel even when the grid is larger than the source.
#[inline]
fn cell_span(cell: u32, cells: u32, pixels: u32) -> (usize, usize) {
    let start = (cell as u64 * pixels as u64 / cells as u64) as u32;
    let end = ((cell as u64 + 1) * pixels as u64 / cells as u64) as u32;
    let start = start.min(pixels - 1);
    let end = end.max(start + 1).min(pixels);
    (start as usize, end as usize)
}

/// Downsample a frame into per-cell average samples.
///
/// Each output cell is the integer mean of the block of source pixels it
/// covers (box filter). Samples keep the frame's channel order; a fourth
/// (alpha) channel is dropped.
///
/// The buffer is cleared and refilled in row-major order. Its allocation
/// is kept, so repeated calls at a stable grid size do not allocate.
///
/// # Arguments
/// * `frame` - Source frame (3 or 4 bytes per pixel)
/// * `grid_width` - Output width in cells
/// * `grid_height` - Output height in cells
/// * `buffer` - Destination for `grid_width * grid_height` samples
///
/// # Returns
/// The number of samples written (0 for degenerate input).
pub fn downsample_into(
    frame: &Frame,
    grid_width: u32,
    grid_height: u32,
    buffer: &mut Vec<[u8; 3]>,
) -> usize {
    buffer.clear();

    let img_width = frame.width;
    let img_height = frame.height;

    if grid_width == 0
        || grid_height == 0
        || img_width == 0
        || img_height == 0
        || frame.data.len() < frame.expected_len()
    {
        return 0;
    }

    let output_size = grid_width as usize * grid_height as usize;
    buffer.reserve(output_size);

    let bpp = frame.bytes_per_pixel();
    let stride = img_width as usize * bpp;

    for cy in 0..grid_height {
        let (start_y, end_y) = cell_span(cy, grid_height, img_height);

        for cx in 0..grid_width {
            let (start_x, end_x) = cell_span(cx, grid_width, img_width);

            let mut sum = [0u64; 3];
            for py in start_y..end_y {
                let row = &frame.data[py * stride + start_x * bpp..py * stride + end_x * bpp];
                for px in row.chunks_exact(bpp) {
                    sum[0] += px[0] as u64;
                    sum[1] += px[1] as u64;
                    sum[2] += px[2] as u64;
                }
            }

            let count = ((end_x - start_x) * (end_y - start_y)) as u64;
            buffer.push([
                (sum[0] / count) as u8,
                (sum[1] / count) as u8,
                (sum[2] / count) as u8,
            ]);
        }
    }

    output_size
}

/// Allocating convenience wrapper around [`downsample_into`].
pub fn downsample(frame: &Frame, grid_width: u32, grid_height: u32) -> Vec<[u8; 3]> {
    let mut buffer = Vec::new();
    downsample_into(frame, grid_width, grid_height, &mut buffer);
    buffer
}
