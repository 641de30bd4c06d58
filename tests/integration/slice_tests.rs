//! Slicing integration tests.
//!
//! Tests verify:
//! - Grid, dimensions and square modes produce the expected grid
//! - Edge slices are padded with transparent pixels
//! - Written file names are zero-padded and sort in index order
//! - Missing and invalid source files are reported

use std::fs;

use image::{GenericImageView, Rgba};

use gridslice::{slice_image, write_slices, SliceError, SliceSpec};

use super::test_utils::{coordinate_image, file_names, write_source_image};

// =============================================================================
// Modes
// =============================================================================

#[test]
fn test_grid_mode_250x350() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source_image(dir.path(), "source.png", 250, 350);

    let set = slice_image(&source, &SliceSpec::Grid { rows: 2, cols: 2 }).unwrap();

    assert_eq!(set.len(), 4);
    for slice in &set {
        assert_eq!(slice.image.dimensions(), (125, 175));
    }
}

#[test]
fn test_dimensions_mode_with_padding() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source_image(dir.path(), "source.png", 250, 350);
    let spec = SliceSpec::Dimensions {
        width: Some(100),
        height: Some(100),
    };

    let set = slice_image(&source, &spec).unwrap();

    assert_eq!((set.geometry.rows, set.geometry.cols), (4, 3));
    assert_eq!(set.len(), 12);

    // Last cell covers x 200..250, y 300..350 and is padded to 100x100.
    let last = &set.slices[11].image;
    assert_eq!(last.dimensions(), (100, 100));
    assert_eq!(last.get_pixel(0, 0), Rgba([200, 300u32 as u8, 1, 255]));
    assert_eq!(last.get_pixel(49, 49)[3], 255);
    assert_eq!(last.get_pixel(50, 0), Rgba([0, 0, 0, 0]));
    assert_eq!(last.get_pixel(0, 50), Rgba([0, 0, 0, 0]));
}

#[test]
fn test_dimensions_mode_width_only() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source_image(dir.path(), "source.png", 120, 40);
    let spec = SliceSpec::Dimensions {
        width: Some(50),
        height: None,
    };

    let set = slice_image(&source, &spec).unwrap();

    assert_eq!((set.geometry.rows, set.geometry.cols), (1, 3));
    assert!(set.iter().all(|s| s.image.dimensions() == (50, 40)));
}

#[test]
fn test_square_mode_rejects_small_image() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source_image(dir.path(), "small.png", 50, 200);

    let result = slice_image(&source, &SliceSpec::Square(100));
    assert!(matches!(result, Err(SliceError::InvalidArgument(_))));
}

// =============================================================================
// Source Errors
// =============================================================================

#[test]
fn test_missing_source() {
    let dir = tempfile::tempdir().unwrap();
    let result = slice_image(&dir.path().join("missing.png"), &SliceSpec::Square(10));
    assert!(matches!(result, Err(SliceError::NotFound(_))));
}

#[test]
fn test_invalid_source() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("fake.png");
    fs::write(&path, b"this is not a png").unwrap();

    let result = slice_image(&path, &SliceSpec::Square(10));
    assert!(matches!(result, Err(SliceError::Decode { .. })));
}

// =============================================================================
// Writing
// =============================================================================

#[test]
fn test_written_names_four_slices() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source_image(dir.path(), "source.png", 40, 40);
    let output = dir.path().join("out");

    let set = slice_image(&source, &SliceSpec::Grid { rows: 2, cols: 2 }).unwrap();
    write_slices(&set, &output, "slice", "png").unwrap();

    assert_eq!(
        file_names(&output),
        vec!["slice_0.png", "slice_1.png", "slice_2.png", "slice_3.png"]
    );
}

#[test]
fn test_written_names_are_zero_padded() {
    let dir = tempfile::tempdir().unwrap();
    let source = write_source_image(dir.path(), "source.png", 60, 20);
    let output = dir.path().join("out");

    let set = slice_image(&source, &SliceSpec::Grid { rows: 2, cols: 6 }).unwrap();
    let paths = write_slices(&set, &output, "tile", "bmp").unwrap();

    let names = file_names(&output);
    assert_eq!(names.len(), 12);
    assert_eq!(names[0], "tile_00.bmp");
    assert_eq!(names[11], "tile_11.bmp");

    // Returned paths are in index order, which is also name order.
    let returned: Vec<String> = paths
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    assert_eq!(returned, names);
}

#[test]
fn test_written_slices_decode_to_slice_size() {
    let dir = tempfile::tempdir().unwrap();
    let output = dir.path().join("out");
    let image = coordinate_image(33, 21);

    let set = gridslice::slice_dynamic(&image, &SliceSpec::Square(10)).unwrap();
    let paths = write_slices(&set, &output, "slice", "webp").unwrap();

    for path in paths {
        let reopened = image::open(&path).unwrap();
        assert_eq!(reopened.dimensions(), (10, 10));
    }
}
