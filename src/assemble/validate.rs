//! Consistency checks on a loaded slice set.

use crate::error::{Result, SliceError};

use super::loader::LoadedSlice;

/// Check that `slices` form a complete `rows x cols` grid of equal size.
///
/// `slices` must be sorted by index, as returned by
/// [`load_slices`](super::load_slices). The size of the first slice is the
/// reference for all others.
///
/// Returns the common `(width, height)`.
///
/// # Errors
///
/// - [`SliceError::InvalidArgument`] if `rows` or `cols` is zero
/// - [`SliceError::CountMismatch`] if there are not exactly `rows * cols` slices
/// - [`SliceError::SizeMismatch`] for the first slice with a different size
/// - [`SliceError::InvalidIndex`] if an index is repeated or outside the grid
pub fn validate_dimensions(slices: &[LoadedSlice], rows: u32, cols: u32) -> Result<(u32, u32)> {
    if rows == 0 || cols == 0 {
        return Err(SliceError::InvalidArgument(format!(
            "rows and cols must be positive, got {}x{}",
            rows, cols
        )));
    }

    let expected = rows as usize * cols as usize;
    if slices.len() != expected {
        return Err(SliceError::CountMismatch {
            expected,
            found: slices.len(),
            rows,
            cols,
        });
    }

    // `slices` is non-empty here since rows and cols are positive.
    let (width, height) = slices[0].dimensions();

    if let Some(slice) = slices.iter().find(|s| s.dimensions() != (width, height)) {
        let (w, h) = slice.dimensions();
        return Err(SliceError::SizeMismatch {
            index: slice.index,
            width: w,
            height: h,
            expected_width: width,
            expected_height: height,
        });
    }

    for (position, slice) in slices.iter().enumerate() {
        if slice.index >= expected {
            return Err(SliceError::InvalidIndex {
                index: slice.index,
                reason: format!("outside the {}x{} grid", rows, cols),
            });
        }
        if position > 0 && slices[position - 1].index == slice.index {
            return Err(SliceError::InvalidIndex {
                index: slice.index,
                reason: format!("also used by {}", slice.path.display()),
            });
        }
    }

    Ok((width, height))
}
