//! Grid dimension planning with aspect-ratio correction.

use std::num::NonZeroUsize;

use lru::LruCache;

use crate::error::ConvertError;

/// Terminal cell aspect correction (cell width / cell height).
///
/// Terminal characters are roughly twice as tall as they are wide, so the
/// grid gets half as many rows as the source aspect ratio alone would give.
pub const CELL_ASPECT: f64 = 0.5;

/// Smallest grid width produced when the source is at least this wide.
pub const MIN_GRID_WIDTH: u32 = 10;

/// Smallest grid height produced when the source is at least this tall.
pub const MIN_GRID_HEIGHT: u32 = 5;

/// Number of distinct (source, target) pairs remembered.
pub const DIMENSION_CACHE_CAPACITY: usize = 32;

/// Target size requested by the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TargetDims {
    /// Maximum grid width in characters
    pub width: u32,
    /// Maximum grid height in characters (None = derive from width)
    pub height: Option<u32>,
}

impl TargetDims {
    /// Validate and build target dimensions.
    pub fn new(width: u32, height: Option<u32>) -> Result<Self, ConvertError> {
        if width == 0 {
            return Err(ConvertError::InvalidDimension {
                axis: "width",
                value: width,
            });
        }
        if height == Some(0) {
            return Err(ConvertError::InvalidDimension {
                axis: "height",
                value: 0,
            });
        }
        Ok(Self { width, height })
    }
}

/// Compute the output grid for a source frame.
///
/// The grid never exceeds the source resolution. It is clamped up to
/// [`MIN_GRID_WIDTH`] x [`MIN_GRID_HEIGHT`], except that the minimum never
/// lifts a dimension past the source's own size.
///
/// # Example
/// ```
/// use ascii_webcam::ascii::{calculate_dimensions, TargetDims};
///
/// let target = TargetDims::new(80, None).unwrap();
/// assert_eq!(calculate_dimensions(640, 480, target).unwrap(), (80, 30));
/// ```
pub fn calculate_dimensions(
    src_width: u32,
    src_height: u32,
    target: TargetDims,
) -> Result<(u32, u32), ConvertError> {
    if src_width == 0 || src_height == 0 {
        return Err(ConvertError::InvalidInput(format!(
            "zero-area source frame {}x{}",
            src_width, src_height
        )));
    }

    let aspect = src_height as f64 / src_width as f64;
    let max_width = target.width.min(src_width);

    let (width, height) = match target.height {
        None => {
            let height = (max_width as f64 * aspect * CELL_ASPECT).floor() as u32;
            (max_width, height)
        }
        Some(target_height) => {
            let height = target_height.min(src_height);
            let width_bound = (height as f64 / aspect / CELL_ASPECT).floor() as u32;
            (max_width.min(width_bound), height)
        }
    };

    let width = width.max(MIN_GRID_WIDTH.min(src_width)).min(src_width);
    let height = height.max(MIN_GRID_HEIGHT.min(src_height)).min(src_height);

    Ok((width, height))
}

type CacheKey = (u32, u32, TargetDims);

/// Capacity of the planner cache.
const CACHE_CAPACITY: NonZeroUsize = match NonZeroUsize::new(DIMENSION_CACHE_CAPACITY) {
    Some(n) => n,
    None => NonZeroUsize::MIN,
};

/// Memoizing front-end for [`calculate_dimensions`].
///
/// Holds at most [`DIMENSION_CACHE_CAPACITY`] entries and evicts the least
/// recently used one. In practice a run sees one or two source sizes.
#[derive(Debug)]
pub struct DimensionPlanner {
    cache: LruCache<CacheKey, (u32, u32)>,
    computations: u64,
}

impl Default for DimensionPlanner {
    fn default() -> Self {
        Self {
            cache: LruCache::new(CACHE_CAPACITY),
            computations: 0,
        }
    }
}

impl DimensionPlanner {
    pub fn new() -> Self {
        Self::default()
    }

    /// Plan the grid for a source size, reusing a cached answer if present.
    pub fn plan(
        &mut self,
        src_width: u32,
        src_height: u32,
        target: TargetDims,
    ) -> Result<(u32, u32), ConvertError> {
        let key = (src_width, src_height, target);
        if let Some(&dims) = self.cache.get(&key) {
            return Ok(dims);
        }

        let dims = calculate_dimensions(src_width, src_height, target)?;
        self.computations += 1;
        self.cache.put(key, dims);

        Ok(dims)
    }

    /// How many times the formula actually ran.
    pub fn computations(&self) -> u64 {
        self.computations
    }

    /// Number of cached entries.
    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}
