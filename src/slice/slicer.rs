//! Cutting an image into a grid of equally sized slices.
//!
//! Edge cells that extend past the image are padded: the crop is pasted at
//! the origin of a blank slice in the source pixel layout, and the rest of
//! the slice keeps the layout's zero value (transparent where there is alpha).

use std::path::Path;

use image::{imageops, DynamicImage, ImageBuffer, Pixel};

use crate::error::Result;
use crate::format::open_image;
use crate::grid::{GridGeometry, SliceSpec};

// =============================================================================
// Slice
// =============================================================================

/// One cell of the grid.
#[derive(Debug, Clone)]
pub struct Slice {
    /// Row-major index, `row * cols + col`
    pub index: usize,

    /// Grid row (0-based, top to bottom)
    pub row: u32,

    /// Grid column (0-based, left to right)
    pub col: u32,

    /// Pixels, always `slice_width x slice_height`
    pub image: DynamicImage,
}

/// All slices of one image, in index order.
#[derive(Debug, Clone)]
pub struct SlicedSet {
    pub geometry: GridGeometry,
    pub slices: Vec<Slice>,
}

impl SlicedSet {
    pub fn len(&self) -> usize {
        self.slices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slice> {
        self.slices.iter()
    }
}

impl<'a> IntoIterator for &'a SlicedSet {
    type Item = &'a Slice;
    type IntoIter = std::slice::Iter<'a, Slice>;

    fn into_iter(self) -> Self::IntoIter {
        self.slices.iter()
    }
}

// =============================================================================
// Slicing
// =============================================================================

/// Open the image at `path` and slice it.
///
/// # Errors
///
/// - [`SliceError::NotFound`](crate::SliceError::NotFound) if `path` does not exist
/// - [`SliceError::Decode`](crate::SliceError::Decode) if it is not a valid image
/// - [`SliceError::InvalidArgument`](crate::SliceError::InvalidArgument) if `spec` is invalid for the image
pub fn slice_image(path: &Path, spec: &SliceSpec) -> Result<SlicedSet> {
    let image = open_image(path)?;
    slice_dynamic(&image, spec)
}

/// Slice an already decoded image.
pub fn slice_dynamic(image: &DynamicImage, spec: &SliceSpec) -> Result<SlicedSet> {
    let geometry = GridGeometry::compute(image.width(), image.height(), spec)?;

    let slices = geometry
        .cells()
        .map(|(row, col)| {
            let cell = geometry.cell_box(row, col);
            let crop = image.crop_imm(cell.left, cell.top, cell.width(), cell.height());

            Slice {
                index: geometry.index_of(row, col),
                row,
                col,
                image: pad_to(crop, geometry.slice_width, geometry.slice_height),
            }
        })
        .collect();

    Ok(SlicedSet { geometry, slices })
}

/// Pad `crop` to `width x height`, anchored at the top-left corner.
///
/// Pasting happens on the typed buffer so 16-bit and float layouts keep
/// their full precision.
fn pad_to(crop: DynamicImage, width: u32, height: u32) -> DynamicImage {
    use DynamicImage::*;

    if crop.width() == width && crop.height() == height {
        return crop;
    }

    match crop {
        ImageLuma8(src) => ImageLuma8(pad_buffer(&src, width, height)),
        ImageLumaA8(src) => ImageLumaA8(pad_buffer(&src, width, height)),
        ImageRgb8(src) => ImageRgb8(pad_buffer(&src, width, height)),
        ImageRgba8(src) => ImageRgba8(pad_buffer(&src, width, height)),
        ImageLuma16(src) => ImageLuma16(pad_buffer(&src, width, height)),
        ImageLumaA16(src) => ImageLumaA16(pad_buffer(&src, width, height)),
        ImageRgb16(src) => ImageRgb16(pad_buffer(&src, width, height)),
        ImageRgba16(src) => ImageRgba16(pad_buffer(&src, width, height)),
        ImageRgb32F(src) => ImageRgb32F(pad_buffer(&src, width, height)),
        ImageRgba32F(src) => ImageRgba32F(pad_buffer(&src, width, height)),
        other => ImageRgba8(pad_buffer(&other.to_rgba8(), width, height)),
    }
}

fn pad_buffer<P: Pixel>(
    src: &ImageBuffer<P, Vec<P::Subpixel>>,
    width: u32,
    height: u32,
) -> ImageBuffer<P, Vec<P::Subpixel>> {
    let mut padded = ImageBuffer::new(width, height);
    imageops::replace(&mut padded, src, 0, 0);
    padded
}
