//! Frame-to-ASCII converter owning all per-frame scratch state.
//!
//! One [`AsciiConverter`] is built per configuration and fed one frame per
//! display tick. Scratch buffers are sized for the current grid and reused
//! until the planned grid dimensions change.
//!
//! The converter is not internally synchronized. A host converting on
//! several threads needs one converter per thread.

use crate::ascii::{
    self, AsciiFrame, CellColor, ColorScheme, DimensionPlanner, Preset, RowBuffers, TargetDims,
};
use crate::error::ConvertError;
use crate::source::Frame;

/// Converter settings, validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConverterConfig {
    pub target: TargetDims,
    pub preset: Preset,
    pub scheme: ColorScheme,
}

impl ConverterConfig {
    /// Validate settings given by name, as they arrive from the CLI or a
    /// config file.
    pub fn from_names(
        width: u32,
        height: Option<u32>,
        preset: &str,
        scheme: &str,
    ) -> Result<Self, ConvertError> {
        Ok(Self {
            target: TargetDims::new(width, height)?,
            preset: Preset::from_name(preset)?,
            scheme: ColorScheme::from_name(scheme)?,
        })
    }
}

impl Default for ConverterConfig {
    fn default() -> Self {
        Self {
            target: TargetDims {
                width: 80,
                height: None,
            },
            preset: Preset::default(),
            scheme: ColorScheme::default(),
        }
    }
}

/// Converts frames into colored character grids.
#[derive(Debug)]
pub struct AsciiConverter {
    config: ConverterConfig,
    planner: DimensionPlanner,
    /// Grid the scratch buffers are currently sized for
    grid: Option<(u32, u32)>,
    resized: Vec<[u8; 3]>,
    luma: Vec<u8>,
    indices: Vec<u8>,
    chars: Vec<char>,
    colors: Vec<CellColor>,
    rows: RowBuffers,
    reallocations: u64,
}

impl AsciiConverter {
    /// Create a converter from validated settings.
    pub fn new(config: ConverterConfig) -> Self {
        Self {
            config,
            planner: DimensionPlanner::new(),
            grid: None,
            resized: Vec::new(),
            luma: Vec::new(),
            indices: Vec::new(),
            chars: Vec::new(),
            colors: Vec::new(),
            rows: RowBuffers::new(),
            reallocations: 0,
        }
    }

    /// Create a converter from names, failing on unknown preset or scheme.
    ///
    /// # Example
    /// ```
    /// use ascii_webcam::converter::AsciiConverter;
    ///
    /// let converter = AsciiConverter::from_names(80, None, "classic", "true").unwrap();
    /// assert_eq!(converter.preset().name(), "classic");
    /// assert!(AsciiConverter::from_names(80, None, "bogus", "true").is_err());
    /// ```
    pub fn from_names(
        width: u32,
        height: Option<u32>,
        preset: &str,
        scheme: &str,
    ) -> Result<Self, ConvertError> {
        ConverterConfig::from_names(width, height, preset, scheme).map(Self::new)
    }

    pub fn preset(&self) -> Preset {
        self.config.preset
    }

    pub fn color_scheme(&self) -> ColorScheme {
        self.config.scheme
    }

    pub fn target(&self) -> TargetDims {
        self.config.target
    }

    /// Change the target grid size (e.g. after a terminal resize).
    ///
    /// Buffers are not touched here; they are resized on the next frame
    /// only if the planned grid actually changes.
    pub fn reconfigure(&mut self, width: u32, height: Option<u32>) -> Result<(), ConvertError> {
        let target = TargetDims::new(width, height)?;
        if target != self.config.target {
            log::debug!(
                "Target dimensions {}x{:?} -> {}x{:?}",
                self.config.target.width,
                self.config.target.height,
                target.width,
                target.height
            );
            self.config.target = target;
        }
        Ok(())
    }

    /// Switch the character ramp.
    pub fn set_preset(&mut self, preset: Preset) {
        if preset != self.config.preset {
            log::debug!("Preset {} -> {}", self.config.preset, preset);
            self.config.preset = preset;
        }
    }

    /// Switch the character ramp by name.
    pub fn set_preset_name(&mut self, name: &str) -> Result<(), ConvertError> {
        let preset = Preset::from_name(name)?;
        self.set_preset(preset);
        Ok(())
    }

    /// Switch the color scheme.
    pub fn set_color_scheme(&mut self, scheme: ColorScheme) {
        if scheme != self.config.scheme {
            log::debug!("Color scheme {} -> {}", self.config.scheme, scheme);
            self.config.scheme = scheme;
        }
    }

    /// Switch the color scheme by name.
    pub fn set_color_scheme_name(&mut self, name: &str) -> Result<(), ConvertError> {
        let scheme = ColorScheme::from_name(name)?;
        self.set_color_scheme(scheme);
        Ok(())
    }

    /// Grid size a source of `src_width` x `src_height` converts to.
    pub fn plan(&mut self, src_width: u32, src_height: u32) -> Result<(u32, u32), ConvertError> {
        self.planner.plan(src_width, src_height, self.config.target)
    }

    /// Grid the scratch buffers are currently sized for.
    pub fn grid_dims(&self) -> Option<(u32, u32)> {
        self.grid
    }

    /// How many times the scratch buffers were reallocated.
    pub fn reallocations(&self) -> u64 {
        self.reallocations
    }

    /// The memoizing dimension planner.
    pub fn planner(&self) -> &DimensionPlanner {
        &self.planner
    }

    /// Convert a frame into a glyph/color grid.
    ///
    /// The returned frame is a copy and stays valid after later calls.
    pub fn convert(&mut self, frame: &Frame) -> Result<AsciiFrame, ConvertError> {
        let (width, height) = self.prepare(frame)?;
        Ok(AsciiFrame::new(
            self.chars.clone(),
            self.colors.clone(),
            width,
            height,
        ))
    }

    /// Convert a frame into ANSI true-color text.
    ///
    /// One line per grid row, top to bottom, each ending with a reset.
    pub fn convert_ansi(&mut self, frame: &Frame) -> Result<String, ConvertError> {
        let (width, height) = self.prepare(frame)?;
        self.rows.ensure(width, height);
        self.rows.render(&self.chars, &self.colors, width);
        Ok(self.rows.join())
    }

    /// Run the pipeline into the scratch buffers.
    fn prepare(&mut self, frame: &Frame) -> Result<(u32, u32), ConvertError> {
        validate_frame(frame)?;

        let dims = self.plan(frame.width, frame.height)?;
        self.ensure_buffers(dims);
        let (width, height) = dims;

        let order = frame.format.channel_order();
        let glyphs = self.config.preset.chars();

        ascii::downsample_into(frame, width, height, &mut self.resized);
        ascii::to_grayscale_into(&self.resized, order, &mut self.luma);
        ascii::map_to_indices_into(&self.luma, glyphs.len(), &mut self.indices);
        ascii::map_to_chars_into(&self.indices, glyphs, &mut self.chars);
        self.config
            .scheme
            .transform_into(&self.resized, order, &mut self.colors);

        Ok(dims)
    }

    /// Reallocate the scratch buffers if the grid size changed.
    fn ensure_buffers(&mut self, dims: (u32, u32)) {
        if self.grid == Some(dims) {
            return;
        }

        let cells = dims.0 as usize * dims.1 as usize;
        log::debug!(
            "Reallocating scratch buffers for {}x{} grid ({} cells)",
            dims.0,
            dims.1,
            cells
        );

        self.resized = Vec::with_capacity(cells);
        self.luma = Vec::with_capacity(cells);
        self.indices = Vec::with_capacity(cells);
        self.chars = Vec::with_capacity(cells);
        self.colors = Vec::with_capacity(cells);
        self.grid = Some(dims);
        self.reallocations += 1;
    }
}

/// Reject frames the pipeline cannot read.
fn validate_frame(frame: &Frame) -> Result<(), ConvertError> {
    if frame.width == 0 || frame.height == 0 {
        return Err(ConvertError::InvalidInput(format!(
            "zero-area frame {}x{}",
            frame.width, frame.height
        )));
    }
    if frame.data.len() < frame.expected_len() {
        return Err(ConvertError::InvalidInput(format!(
            "frame buffer holds {} bytes, {}x{} {:?} needs {}",
            frame.data.len(),
            frame.width,
            frame.height,
            frame.format,
            frame.expected_len()
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::FrameFormat;

    fn solid(width: u32, height: u32, px: [u8; 3]) -> Frame {
        Frame::new(px.repeat((width * height) as usize), width, height, FrameFormat::Bgr)
    }

    fn scratch_ptrs(c: &AsciiConverter) -> [usize; 5] {
        [
            c.resized.as_ptr() as usize,
            c.luma.as_ptr() as usize,
            c.indices.as_ptr() as usize,
            c.chars.as_ptr() as usize,
            c.colors.as_ptr() as usize,
        ]
    }

    #[test]
    fn test_same_size_frames_reuse_buffers() {
        let mut converter = AsciiConverter::from_names(40, None, "classic", "neon").unwrap();
        converter.convert(&solid(320, 240, [10, 20, 30])).unwrap();
        let before = scratch_ptrs(&converter);
        converter.convert(&solid(320, 240, [200, 100, 50])).unwrap();
        converter.convert_ansi(&solid(320, 240, [0, 0, 0])).unwrap();
        assert_eq!(scratch_ptrs(&converter), before);
        assert_eq!(converter.reallocations(), 1);
    }

    #[test]
    fn test_new_grid_size_reallocates() {
        let mut converter = AsciiConverter::from_names(40, None, "classic", "true").unwrap();
        converter.convert(&solid(320, 240, [1, 1, 1])).unwrap();
        let before = scratch_ptrs(&converter);
        converter.convert(&solid(64, 64, [1, 1, 1])).unwrap();
        let after = scratch_ptrs(&converter);
        for (b, a) in before.iter().zip(after.iter()) {
            assert_ne!(b, a);
        }
        assert_eq!(converter.reallocations(), 2);
        assert_eq!(converter.grid_dims(), Some((40, 20)));
    }

    #[test]
    fn test_reconfigure_with_same_grid_keeps_buffers() {
        let mut converter = AsciiConverter::from_names(40, None, "classic", "true").unwrap();
        // 30x30 source caps the grid at 30 wide either way
        converter.convert(&solid(30, 30, [1, 1, 1])).unwrap();
        let before = scratch_ptrs(&converter);
        converter.reconfigure(50, None).unwrap();
        converter.convert(&solid(30, 30, [1, 1, 1])).unwrap();
        assert_eq!(scratch_ptrs(&converter), before);
    }

    #[test]
    fn test_reconfigure_changes_grid() {
        let mut converter = AsciiConverter::from_names(80, None, "classic", "true").unwrap();
        let frame = solid(640, 480, [1, 1, 1]);
        assert_eq!(converter.convert(&frame).unwrap().width, 80);
        converter.reconfigure(40, Some(10)).unwrap();
        let out = converter.convert(&frame).unwrap();
        assert_eq!((out.width, out.height), (26, 10));
    }

    #[test]
    fn test_failed_reconfigure_keeps_previous_config() {
        let mut converter = AsciiConverter::from_names(80, Some(24), "dots", "matrix").unwrap();
        assert!(converter.reconfigure(0, None).is_err());
        assert!(converter.set_preset_name("nope").is_err());
        assert!(converter.set_color_scheme_name("nope").is_err());
        assert_eq!(converter.target(), TargetDims::new(80, Some(24)).unwrap());
        assert_eq!(converter.preset(), Preset::Dots);
        assert_eq!(converter.color_scheme(), ColorScheme::Matrix);
    }

    #[test]
    fn test_bad_frame_leaves_buffers_intact() {
        let mut converter = AsciiConverter::from_names(40, None, "classic", "true").unwrap();
        let good = converter.convert(&solid(320, 240, [9, 9, 9])).unwrap();
        let before = scratch_ptrs(&converter);

        let empty = Frame::new(Vec::new(), 0, 240, FrameFormat::Bgr);
        assert!(matches!(
            converter.convert(&empty),
            Err(ConvertError::InvalidInput(_))
        ));
        let truncated = Frame::new(vec![0; 10], 320, 240, FrameFormat::Bgr);
        assert!(matches!(
            converter.convert(&truncated),
            Err(ConvertError::InvalidInput(_))
        ));

        assert_eq!(scratch_ptrs(&converter), before);
        assert_eq!(converter.chars, good.chars);
        assert_eq!(converter.grid_dims(), Some((40, 15)));
    }

    #[test]
    fn test_artifact_survives_next_convert() {
        let mut converter = AsciiConverter::from_names(20, None, "simple", "true").unwrap();
        let white = converter.convert(&solid(40, 40, [255, 255, 255])).unwrap();
        let _black = converter.convert(&solid(40, 40, [0, 0, 0])).unwrap();
        assert!(white.chars.iter().all(|&c| c == '#'));
        assert!(white.colors.iter().all(|&c| c == CellColor::new(255, 255, 255)));
    }

    #[test]
    fn test_planner_is_memoized_across_frames() {
        let mut converter = AsciiConverter::from_names(80, None, "classic", "true").unwrap();
        for _ in 0..5 {
            converter.convert(&solid(64, 48, [0, 0, 0])).unwrap();
        }
        assert_eq!(converter.planner().computations(), 1);
    }

    #[test]
    fn test_scheme_switch_applies_next_frame() {
        let mut converter = AsciiConverter::from_names(10, None, "classic", "true").unwrap();
        let frame = solid(20, 20, [0, 100, 0]);
        assert_eq!(converter.convert(&frame).unwrap().colors[0], CellColor::new(0, 100, 0));
        converter.set_color_scheme(ColorScheme::Matrix);
        assert_eq!(converter.convert(&frame).unwrap().colors[0], CellColor::new(0, 150, 0));
        assert_eq!(converter.reallocations(), 1);
    }
}
