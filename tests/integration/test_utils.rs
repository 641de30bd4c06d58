//! Test utilities for integration tests.
//!
//! Helpers for generating synthetic images and slice directories.

use std::path::{Path, PathBuf};

use image::{DynamicImage, GenericImageView, Rgba, RgbaImage};

// =============================================================================
// Synthetic Images
// =============================================================================

/// An RGBA image where every pixel encodes its own coordinates.
///
/// Red/green hold the low bytes of x/y and blue holds their high bits, so
/// pixels are distinct for images up to 4096 pixels wide and high.
pub fn coordinate_image(width: u32, height: u32) -> DynamicImage {
    DynamicImage::ImageRgba8(RgbaImage::from_fn(width, height, |x, y| {
        Rgba([
            (x & 0xFF) as u8,
            (y & 0xFF) as u8,
            (((x >> 8) << 4) | (y >> 8)) as u8,
            255,
        ])
    }))
}

/// Save a coordinate image as PNG at `dir/name` and return its path.
pub fn write_source_image(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let path = dir.join(name);
    coordinate_image(width, height).save(&path).unwrap();
    path
}

// =============================================================================
// Slice Directories
// =============================================================================

/// Colors used for the four standard slices.
pub const SLICE_COLORS: [[u8; 4]; 4] = [
    [255, 0, 0, 255],
    [0, 255, 0, 255],
    [0, 0, 255, 255],
    [255, 255, 0, 255],
];

/// Write solid-color RGBA slices named `{prefix}_{index}.png`.
pub fn write_solid_slices(dir: &Path, prefix: &str, sizes: &[(u32, u32)]) -> Vec<PathBuf> {
    sizes
        .iter()
        .enumerate()
        .map(|(index, &(width, height))| {
            let color = SLICE_COLORS[index % SLICE_COLORS.len()];
            let path = dir.join(format!("{}_{}.png", prefix, index));
            RgbaImage::from_pixel(width, height, Rgba(color))
                .save(&path)
                .unwrap();
            path
        })
        .collect()
}

/// Four 100x150 slices forming a 2x2 grid.
pub fn write_sample_slices(dir: &Path) -> Vec<PathBuf> {
    write_solid_slices(dir, "slice", &[(100, 150); 4])
}

/// Four slices where index 2 is 10 pixels narrower.
pub fn write_inconsistent_slices(dir: &Path) -> Vec<PathBuf> {
    write_solid_slices(dir, "slice", &[(100, 150), (100, 150), (90, 150), (100, 150)])
}

// =============================================================================
// Assertions
// =============================================================================

/// Assert that `actual` matches `expected` over the `width x height` region.
pub fn assert_region_eq(actual: &DynamicImage, expected: &DynamicImage, width: u32, height: u32) {
    for y in 0..height {
        for x in 0..width {
            assert_eq!(
                actual.get_pixel(x, y),
                expected.get_pixel(x, y),
                "pixel mismatch at ({}, {})",
                x,
                y
            );
        }
    }
}

/// Sorted file names in `dir`.
pub fn file_names(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    names
}
