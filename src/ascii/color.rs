//! Color schemes applied to downsampled cell colors.
//!
//! Scaling uses fixed-point tenths in `u32` (e.g. x1.4 is `v * 14 / 10`),
//! truncates, then clamps to 255 before narrowing back to `u8`. No scheme
//! can leave the 0..=255 range.

use crate::error::ConvertError;
use crate::source::ChannelOrder;

/// RGB color of one output cell.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CellColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl CellColor {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Channels as an `[r, g, b]` array.
    pub fn to_array(self) -> [u8; 3] {
        [self.r, self.g, self.b]
    }
}

/// Named color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorScheme {
    /// Colors as captured
    #[default]
    True,
    /// Brighter, more vibrant
    Neon,
    /// Green channel only
    Matrix,
    /// Warm sepia-like tones
    Vintage,
    /// Purple/pink hues
    Cyberpunk,
}

/// `v * tenths / 10`, clamped to 255.
#[inline(always)]
fn scale(v: u8, tenths: u32) -> u8 {
    (v as u32 * tenths / 10).min(255) as u8
}

impl ColorScheme {
    /// All schemes in registry order.
    pub const ALL: [ColorScheme; 5] = [
        ColorScheme::True,
        ColorScheme::Neon,
        ColorScheme::Matrix,
        ColorScheme::Vintage,
        ColorScheme::Cyberpunk,
    ];

    /// Registry name.
    pub fn name(&self) -> &'static str {
        match self {
            ColorScheme::True => "true",
            ColorScheme::Neon => "neon",
            ColorScheme::Matrix => "matrix",
            ColorScheme::Vintage => "vintage",
            ColorScheme::Cyberpunk => "cyberpunk",
        }
    }

    /// Short description for `--list-presets`.
    pub fn description(&self) -> &'static str {
        match self {
            ColorScheme::True => "True colors from the source",
            ColorScheme::Neon => "Brighter, more vibrant colors",
            ColorScheme::Matrix => "Green only, Matrix style",
            ColorScheme::Vintage => "Sepia-like tones",
            ColorScheme::Cyberpunk => "Purple/pink hues",
        }
    }

    /// Cycle to the next scheme, wrapping around.
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|s| s == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Names of every scheme, in registry order.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(ColorScheme::name).collect()
    }

    /// Look up a scheme by name.
    pub fn from_name(name: &str) -> Result<Self, ConvertError> {
        Self::ALL
            .iter()
            .copied()
            .find(|s| s.name() == name)
            .ok_or_else(|| ConvertError::UnknownColorScheme {
                name: name.to_string(),
                valid: Self::names(),
            })
    }

    /// Apply the scheme to a single R, G, B triple.
    #[inline]
    pub fn apply(&self, rgb: [u8; 3]) -> CellColor {
        let [r, g, b] = rgb;
        match self {
            ColorScheme::True => CellColor::new(r, g, b),
            ColorScheme::Neon => CellColor::new(scale(r, 14), scale(g, 14), scale(b, 12)),
            ColorScheme::Matrix => CellColor::new(0, scale(g, 15), 0),
            ColorScheme::Vintage => CellColor::new(scale(r, 12), scale(g, 12), scale(b, 8)),
            // Blue drives the red output and red drives the blue output.
            ColorScheme::Cyberpunk => CellColor::new(scale(b, 14), scale(g, 12), scale(r, 16)),
        }
    }

    /// Apply the scheme to one sample stored in `order`.
    #[inline]
    pub fn apply_sample(&self, sample: [u8; 3], order: ChannelOrder) -> CellColor {
        self.apply(order.to_rgb(sample))
    }

    /// Apply the scheme to a whole buffer of samples.
    ///
    /// The scheme is matched once and each arm runs its own loop, so the hot
    /// path has no per-cell dispatch. Output is bit-identical to calling
    /// [`apply_sample`](Self::apply_sample) on every cell.
    ///
    /// `buffer` is cleared and refilled; its allocation is kept.
    pub fn transform_into(
        &self,
        samples: &[[u8; 3]],
        order: ChannelOrder,
        buffer: &mut Vec<CellColor>,
    ) -> usize {
        buffer.clear();
        buffer.reserve(samples.len());

        match self {
            ColorScheme::True => {
                buffer.extend(samples.iter().map(|&s| {
                    let [r, g, b] = order.to_rgb(s);
                    CellColor::new(r, g, b)
                }));
            }
            ColorScheme::Neon => {
                buffer.extend(samples.iter().map(|&s| {
                    let [r, g, b] = order.to_rgb(s);
                    CellColor::new(scale(r, 14), scale(g, 14), scale(b, 12))
                }));
            }
            ColorScheme::Matrix => {
                buffer.extend(samples.iter().map(|&s| {
                    let [_, g, _] = order.to_rgb(s);
                    CellColor::new(0, scale(g, 15), 0)
                }));
            }
            ColorScheme::Vintage => {
                buffer.extend(samples.iter().map(|&s| {
                    let [r, g, b] = order.to_rgb(s);
                    CellColor::new(scale(r, 12), scale(g, 12), scale(b, 8))
                }));
            }
            ColorScheme::Cyberpunk => {
                buffer.extend(samples.iter().map(|&s| {
                    let [r, g, b] = order.to_rgb(s);
                    CellColor::new(scale(b, 14), scale(g, 12), scale(r, 16))
                }));
            }
        }

        samples.len()
    }
}

impl std::fmt::Display for ColorScheme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for ColorScheme {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}
