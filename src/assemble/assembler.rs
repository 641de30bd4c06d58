//! Compositing validated slices into one image.

use std::path::Path;

use image::{imageops, DynamicImage, RgbaImage};

use crate::error::{Result, SliceError};
use crate::grid::grid_position;

use super::loader::{load_slices, LoadedSlice};
use super::validate::validate_dimensions;

/// Load, validate and composite the slices in `dir`.
///
/// The result is always `cols * slice_width` by `rows * slice_height` RGBA,
/// including any padding added at slicing time. Saving it is up to the
/// caller.
pub fn assemble_image(
    dir: &Path,
    rows: u32,
    cols: u32,
    prefix: &str,
    extension: &str,
) -> Result<DynamicImage> {
    let slices = load_slices(dir, prefix, extension)?;
    let (slice_width, slice_height) = validate_dimensions(&slices, rows, cols)?;

    compose(&slices, rows, cols, slice_width, slice_height)
}

/// Paste `slices` onto a transparent canvas by their grid index.
///
/// Position comes from the index alone, so the order of `slices` does not
/// matter.
pub fn compose(
    slices: &[LoadedSlice],
    rows: u32,
    cols: u32,
    slice_width: u32,
    slice_height: u32,
) -> Result<DynamicImage> {
    let (width, height) = match (cols.checked_mul(slice_width), rows.checked_mul(slice_height)) {
        (Some(width), Some(height)) if cols > 0 => (width, height),
        _ => {
            return Err(SliceError::InvalidArgument(format!(
                "cannot assemble {}x{} slices of {}x{} pixels",
                rows, cols, slice_width, slice_height
            )))
        }
    };

    let mut canvas = RgbaImage::new(width, height);

    for slice in slices {
        let (row, col) = grid_position(slice.index, cols);
        let x = col as i64 * slice_width as i64;
        let y = row as i64 * slice_height as i64;

        imageops::replace(&mut canvas, &slice.image.to_rgba8(), x, y);
    }

    Ok(DynamicImage::ImageRgba8(canvas))
}
