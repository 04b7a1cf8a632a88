//! Brightness to ramp-index quantization.

/// Quantize one luma value to a ramp index.
///
/// `index = floor(luma / 255 * (levels - 1))`, computed in integers and
/// clamped to the last index. Luma 0 always maps to 0 and luma 255 always
/// maps to `levels - 1`.
#[inline]
pub fn quantize(luma: u8, levels: usize) -> usize {
    if levels <= 1 {
        return 0;
    }
    (luma as usize * (levels - 1) / 255).min(levels - 1)
}

/// Map luma values to ramp indices, reusing an existing buffer.
///
/// # Arguments
/// * `brightness` - Luma values (0-255), one per cell
/// * `levels` - Length of the active ramp (at most 256)
/// * `buffer` - Cleared and refilled with one index per cell
///
/// # Returns
/// The number of indices written.
pub fn map_to_indices_into(brightness: &[u8], levels: usize, buffer: &mut Vec<u8>) -> usize {
    debug_assert!(levels <= 256, "ramp longer than an index can address");
    buffer.clear();
    buffer.reserve(brightness.len());
    buffer.extend(brightness.iter().map(|&b| quantize(b, levels) as u8));
    brightness.len()
}

/// Look up glyphs for ramp indices, reusing an existing buffer.
///
/// An empty ramp yields spaces.
pub fn map_to_chars_into(indices: &[u8], charset: &[char], buffer: &mut Vec<char>) -> usize {
    buffer.clear();

    if charset.is_empty() {
        buffer.resize(indices.len(), ' ');
        return indices.len();
    }

    buffer.reserve(indices.len());
    let last = charset.len() - 1;
    buffer.extend(indices.iter().map(|&i| charset[(i as usize).min(last)]));
    indices.len()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ascii::Preset;

    #[test]
    fn test_extremes_for_every_preset() {
        for preset in Preset::ALL {
            let levels = preset.chars().len();
            assert_eq!(quantize(0, levels), 0, "{}", preset);
            assert_eq!(quantize(255, levels), levels - 1, "{}", preset);
        }
    }

    #[test]
    fn test_quantize_is_monotonic() {
        for levels in 2..=16 {
            let mut prev = 0;
            for b in 0..=255u8 {
                let idx = quantize(b, levels);
                assert!(idx >= prev);
                assert!(idx < levels);
                prev = idx;
            }
        }
    }

    #[test]
    fn test_quantize_midpoints() {
        // classic has 10 glyphs: 127 * 9 / 255 = 4
        assert_eq!(quantize(127, 10), 4);
        // matrix: anything below white is '0'
        assert_eq!(quantize(254, 2), 0);
        assert_eq!(quantize(76, 2), 0);
    }

    #[test]
    fn test_single_level_ramp_is_constant() {
        assert_eq!(quantize(0, 1), 0);
        assert_eq!(quantize(255, 1), 0);
    }

    #[test]
    fn test_map_to_chars_into() {
        let mut indices = Vec::new();
        map_to_indices_into(&[0, 255], 2, &mut indices);
        let mut chars = Vec::new();
        map_to_chars_into(&indices, &['0', '1'], &mut chars);
        assert_eq!(chars, vec!['0', '1']);
    }

    #[test]
    fn test_empty_charset_yields_spaces() {
        let mut chars = Vec::new();
        map_to_chars_into(&[0, 1, 2], &[], &mut chars);
        assert_eq!(chars, vec![' '; 3]);
    }
}
