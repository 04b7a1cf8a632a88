//! Luma (brightness) from color samples using ITU-R BT.601.

use crate::source::ChannelOrder;

/// BT.601 luma of one R, G, B triple.
///
/// Y = 0.299*R + 0.587*G + 0.114*B, in integer math with the coefficients
/// scaled by 1000. Truncates; white maps to exactly 255.
#[inline]
pub fn luma(rgb: [u8; 3]) -> u8 {
    let [r, g, b] = rgb;
    ((299 * r as u32 + 587 * g as u32 + 114 * b as u32) / 1000) as u8
}

/// Compute the luma of every sample into an existing buffer.
///
/// # Arguments
/// * `samples` - Downsampled cell samples
/// * `order` - Channel order of `samples`
/// * `buffer` - Cleared and refilled with one luma value per sample
///
/// # Returns
/// The number of values written.
pub fn to_grayscale_into(samples: &[[u8; 3]], order: ChannelOrder, buffer: &mut Vec<u8>) -> usize {
    buffer.clear();
    buffer.reserve(samples.len());

    match order {
        ChannelOrder::Rgb => buffer.extend(samples.iter().map(|&s| luma(s))),
        ChannelOrder::Bgr => buffer.extend(samples.iter().map(|&[b, g, r]| luma([r, g, b]))),
    }

    samples.len()
}
