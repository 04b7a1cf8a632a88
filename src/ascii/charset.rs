//! Character ramp presets for ASCII rendering.
//!
//! Every ramp is ordered from darkest to lightest. Names and glyph
//! sequences are user-facing and must not change.

use crate::error::ConvertError;

/// Classic ASCII density ramp (10 levels).
pub const CLASSIC_CHARSET: &[char] = &[' ', '.', ':', '-', '=', '+', '*', '#', '%', '@'];

/// Unicode shade blocks (4 levels).
pub const BLOCKS_CHARSET: &[char] = &['░', '▒', '▓', '█'];

/// Minimal set for high contrast (4 levels).
pub const SIMPLE_CHARSET: &[char] = &[' ', '.', '*', '#'];

/// Finer-grained ramp with more gradual transitions (13 levels).
pub const DETAILED_CHARSET: &[char] = &[
    ' ', '.', '"', ',', ':', ';', '!', '~', '*', '=', '#', '$', '@',
];

/// Binary digits.
pub const MATRIX_CHARSET: &[char] = &['0', '1'];

/// Dot-based ramp (3 levels).
pub const DOTS_CHARSET: &[char] = &['·', '•', '●'];

/// Box-drawing line characters (11 levels).
pub const LINES_CHARSET: &[char] = &['─', '│', '┌', '┐', '└', '┘', '├', '┤', '┬', '┴', '┼'];

/// Named character ramp.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Preset {
    #[default]
    Classic,
    Blocks,
    Simple,
    Detailed,
    Matrix,
    Dots,
    Lines,
}

impl Preset {
    /// All presets in registry order.
    pub const ALL: [Preset; 7] = [
        Preset::Classic,
        Preset::Blocks,
        Preset::Simple,
        Preset::Detailed,
        Preset::Matrix,
        Preset::Dots,
        Preset::Lines,
    ];

    /// Glyphs for this preset, darkest first.
    pub fn chars(&self) -> &'static [char] {
        match self {
            Preset::Classic => CLASSIC_CHARSET,
            Preset::Blocks => BLOCKS_CHARSET,
            Preset::Simple => SIMPLE_CHARSET,
            Preset::Detailed => DETAILED_CHARSET,
            Preset::Matrix => MATRIX_CHARSET,
            Preset::Dots => DOTS_CHARSET,
            Preset::Lines => LINES_CHARSET,
        }
    }

    /// Registry name.
    pub fn name(&self) -> &'static str {
        match self {
            Preset::Classic => "classic",
            Preset::Blocks => "blocks",
            Preset::Simple => "simple",
            Preset::Detailed => "detailed",
            Preset::Matrix => "matrix",
            Preset::Dots => "dots",
            Preset::Lines => "lines",
        }
    }

    /// Cycle to the next preset, wrapping around.
    pub fn next(&self) -> Self {
        let idx = Self::ALL.iter().position(|p| p == self).unwrap_or(0);
        Self::ALL[(idx + 1) % Self::ALL.len()]
    }

    /// Names of every preset, in registry order.
    pub fn names() -> Vec<&'static str> {
        Self::ALL.iter().map(Preset::name).collect()
    }

    /// Look up a preset by name.
    pub fn from_name(name: &str) -> Result<Self, ConvertError> {
        Self::ALL
            .iter()
            .copied()
            .find(|p| p.name() == name)
            .ok_or_else(|| ConvertError::UnknownPreset {
                name: name.to_string(),
                valid: Self::names(),
            })
    }
}

impl std::fmt::Display for Preset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl std::str::FromStr for Preset {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_glyph_sequences_are_stable() {
        let glyphs = |p: Preset| p.chars().iter().collect::<String>();
        assert_eq!(glyphs(Preset::Classic), " .:-=+*#%@");
        assert_eq!(glyphs(Preset::Blocks), "░▒▓█");
        assert_eq!(glyphs(Preset::Simple), " .*#");
        assert_eq!(glyphs(Preset::Detailed), " .\",:;!~*=#$@");
        assert_eq!(glyphs(Preset::Matrix), "01");
        assert_eq!(glyphs(Preset::Dots), "·•●");
        assert_eq!(glyphs(Preset::Lines), "─│┌┐└┘├┤┬┴┼");
    }

    #[test]
    fn test_every_ramp_has_at_least_two_glyphs() {
        for preset in Preset::ALL {
            assert!(preset.chars().len() >= 2, "{} is too short", preset);
        }
    }

    #[test]
    fn test_names_round_trip() {
        for preset in Preset::ALL {
            assert_eq!(Preset::from_name(preset.name()), Ok(preset));
        }
    }

    #[test]
    fn test_unknown_name_lists_all_presets() {
        match Preset::from_name("bogus") {
            Err(ConvertError::UnknownPreset { name, valid }) => {
                assert_eq!(name, "bogus");
                assert_eq!(
                    valid,
                    vec!["classic", "blocks", "simple", "detailed", "matrix", "dots", "lines"]
                );
            }
            other => panic!("expected UnknownPreset, got {:?}", other),
        }
    }

    #[test]
    fn test_next_cycles_through_all() {
        let mut preset = Preset::Classic;
        for _ in 0..Preset::ALL.len() {
            preset = preset.next();
        }
        assert_eq!(preset, Preset::Classic);
        assert_eq!(Preset::Lines.next(), Preset::Classic);
    }

    #[test]
    fn test_default_is_classic() {
        assert_eq!(Preset::default(), Preset::Classic);
    }
}
