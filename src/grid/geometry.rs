//! Grid geometry.
//!
//! Pure arithmetic turning a source size and a [`SliceSpec`] into a grid of
//! equally sized cells, plus the crop box of every cell.
//!
//! For an image of `width x height`:
//!
//! ```text
//!   cols = ceil(width  / slice_width)
//!   rows = ceil(height / slice_height)
//!
//!   ┌──────┬──────┬───┐
//!   │  0   │  1   │ 2 │   ← last column is narrower than slice_width
//!   ├──────┼──────┼───┤
//!   │  3   │  4   │ 5 │
//!   ├──────┼──────┼───┤
//!   │  6   │  7   │ 8 │   ← last row is shorter than slice_height
//!   └──────┴──────┴───┘
//! ```
//!
//! Cells are indexed in row-major order: `idx = row * cols + col`.

use crate::error::{Result, SliceError};

use super::spec::SliceSpec;

/// Upper bound on blank pixels added by edge padding (256 Mi pixels).
pub const MAX_PADDING_PIXELS: u64 = 1 << 28;

// =============================================================================
// Cell Box
// =============================================================================

/// Pixel rectangle of one grid cell, clamped to the source image.
///
/// `right` and `bottom` are exclusive. At the last row or column the box
/// may be smaller than the nominal slice size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CellBox {
    pub left: u32,
    pub top: u32,
    pub right: u32,
    pub bottom: u32,
}

impl CellBox {
    pub fn width(&self) -> u32 {
        self.right - self.left
    }

    pub fn height(&self) -> u32 {
        self.bottom - self.top
    }
}

// =============================================================================
// Grid Geometry
// =============================================================================

/// Resolved grid layout for one slicing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridGeometry {
    /// Source image width in pixels
    pub image_width: u32,

    /// Source image height in pixels
    pub image_height: u32,

    /// Number of rows in the grid
    pub rows: u32,

    /// Number of columns in the grid
    pub cols: u32,

    /// Width of every slice (edge slices are padded up to it)
    pub slice_width: u32,

    /// Height of every slice (edge slices are padded up to it)
    pub slice_height: u32,
}

impl GridGeometry {
    /// Compute the grid for an image of `width x height`.
    ///
    /// # Errors
    ///
    /// Returns [`SliceError::InvalidArgument`] if the image is empty, if any
    /// requested count or size is zero, if a square slice is larger than the
    /// image, if the padded grid would not fit in `u32` pixels, or if padding
    /// would add more than [`MAX_PADDING_PIXELS`] blank pixels.
    pub fn compute(width: u32, height: u32, spec: &SliceSpec) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(SliceError::InvalidArgument(format!(
                "image dimensions must be positive, got {}x{}",
                width, height
            )));
        }

        let geometry = match *spec {
            SliceSpec::Grid { rows, cols } => {
                positive("rows", rows)?;
                positive("cols", cols)?;

                // Keep the requested counts: for some sizes ceil(width / slice_width)
                // falls short of `cols`, and the trailing cells are then pure padding.
                Self {
                    image_width: width,
                    image_height: height,
                    rows,
                    cols,
                    slice_width: width.div_ceil(cols),
                    slice_height: height.div_ceil(rows),
                }
            }
            SliceSpec::Dimensions {
                width: slice_width,
                height: slice_height,
            } => {
                if slice_width.is_none() && slice_height.is_none() {
                    return Err(SliceError::InvalidArgument(
                        "dimensions mode needs a slice width or height".to_string(),
                    ));
                }
                let slice_width = slice_width.unwrap_or(width);
                let slice_height = slice_height.unwrap_or(height);
                positive("slice width", slice_width)?;
                positive("slice height", slice_height)?;

                Self::from_slice_size(width, height, slice_width, slice_height)
            }
            SliceSpec::Square(size) => {
                positive("slice_size", size)?;
                if width < size || height < size {
                    return Err(SliceError::InvalidArgument(format!(
                        "Image dimensions ({}x{}) are smaller than slice_size ({}x{})",
                        width, height, size, size
                    )));
                }

                Self::from_slice_size(width, height, size, size)
            }
        };

        let (padded_width, padded_height) = geometry.padded_size()?;
        let padding = padded_width as u64 * padded_height as u64 - width as u64 * height as u64;
        if padding > MAX_PADDING_PIXELS {
            return Err(SliceError::InvalidArgument(format!(
                "slices of {}x{} pixels would pad a {}x{} image to {}x{}",
                geometry.slice_width,
                geometry.slice_height,
                width,
                height,
                padded_width,
                padded_height
            )));
        }

        Ok(geometry)
    }

    fn from_slice_size(width: u32, height: u32, slice_width: u32, slice_height: u32) -> Self {
        Self {
            image_width: width,
            image_height: height,
            rows: height.div_ceil(slice_height),
            cols: width.div_ceil(slice_width),
            slice_width,
            slice_height,
        }
    }

    /// Total number of cells.
    pub fn len(&self) -> usize {
        self.rows as usize * self.cols as usize
    }

    /// Always false for a computed geometry; provided for symmetry with [`len`](Self::len).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Size of the image obtained by reassembling every padded slice.
    pub fn padded_size(&self) -> Result<(u32, u32)> {
        let width = self.cols.checked_mul(self.slice_width);
        let height = self.rows.checked_mul(self.slice_height);

        match (width, height) {
            (Some(width), Some(height)) => Ok((width, height)),
            _ => Err(SliceError::InvalidArgument(format!(
                "grid of {}x{} slices of {}x{} pixels is too large",
                self.rows, self.cols, self.slice_width, self.slice_height
            ))),
        }
    }

    /// Crop box of the cell at `(row, col)`, clamped to the image.
    pub fn cell_box(&self, row: u32, col: u32) -> CellBox {
        let clamp = |value: u64, limit: u32| value.min(limit as u64) as u32;

        let sw = self.slice_width as u64;
        let sh = self.slice_height as u64;
        let (row, col) = (row as u64, col as u64);

        CellBox {
            left: clamp(col * sw, self.image_width),
            top: clamp(row * sh, self.image_height),
            right: clamp((col + 1) * sw, self.image_width),
            bottom: clamp((row + 1) * sh, self.image_height),
        }
    }

    /// Linear index of `(row, col)`.
    pub fn index_of(&self, row: u32, col: u32) -> usize {
        row as usize * self.cols as usize + col as usize
    }

    /// Iterate over `(row, col)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (u32, u32)> {
        let cols = self.cols;
        (0..self.rows).flat_map(move |row| (0..cols).map(move |col| (row, col)))
    }
}

/// Grid position `(row, col)` of a linear index in a grid of `cols` columns.
pub fn grid_position(index: usize, cols: u32) -> (u32, u32) {
    let cols = cols as usize;
    ((index / cols) as u32, (index % cols) as u32)
}

fn positive(name: &str, value: u32) -> Result<()> {
    if value == 0 {
        return Err(SliceError::InvalidArgument(format!(
            "{} must be positive",
            name
        )));
    }
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================
