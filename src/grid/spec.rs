//! Slicing parameters.
//!
//! A [`SliceSpec`] names exactly one way of cutting an image. It is resolved
//! from the loose set of CLI options by [`SliceSpec::resolve`].

use crate::error::{Result, SliceError};

/// Default square slice size used when no other mode is requested.
pub const DEFAULT_SLICE_SIZE: u32 = 100;

/// How an image is partitioned into slices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SliceSpec {
    /// Explicit row and column count; slice size is derived to cover the image.
    Grid { rows: u32, cols: u32 },

    /// Explicit slice size in pixels.
    ///
    /// An omitted dimension spans the full image on that axis. Slices may be
    /// larger than the image, but the padding this adds is capped at
    /// [`MAX_PADDING_PIXELS`](super::MAX_PADDING_PIXELS).
    Dimensions {
        width: Option<u32>,
        height: Option<u32>,
    },

    /// Square slices of a fixed size. The image must be at least one slice
    /// wide and high.
    Square(u32),
}

impl SliceSpec {
    /// Resolve a spec from optional grid, dimension and square parameters.
    ///
    /// Dimensions win if either width or height is given, then grid mode if
    /// both rows and cols are given, then square mode with `slice_size`
    /// (falling back to [`DEFAULT_SLICE_SIZE`]).
    pub fn resolve(
        rows: Option<u32>,
        cols: Option<u32>,
        width: Option<u32>,
        height: Option<u32>,
        slice_size: Option<u32>,
    ) -> Result<Self> {
        if width.is_some() || height.is_some() {
            return Ok(SliceSpec::Dimensions { width, height });
        }

        match (rows, cols) {
            (Some(rows), Some(cols)) => Ok(SliceSpec::Grid { rows, cols }),
            (None, None) => Ok(SliceSpec::Square(
                slice_size.unwrap_or(DEFAULT_SLICE_SIZE),
            )),
            _ => Err(SliceError::InvalidArgument(
                "rows and cols must be given together".to_string(),
            )),
        }
    }

    /// Short name of the active mode, used in logs and summaries.
    pub const fn mode(&self) -> &'static str {
        match self {
            SliceSpec::Grid { .. } => "grid",
            SliceSpec::Dimensions { .. } => "dimensions",
            SliceSpec::Square(_) => "square",
        }
    }
}

impl Default for SliceSpec {
    fn default() -> Self {
        SliceSpec::Square(DEFAULT_SLICE_SIZE)
    }
}
