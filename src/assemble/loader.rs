//! Discovering and decoding slice files.
//!
//! A slice file is recognized purely by name: `{prefix}_{digits}.{ext}`.
//! The digits are the grid index. Other files in the directory are ignored.

use std::fs;
use std::path::{Path, PathBuf};

use image::DynamicImage;
use regex::Regex;

use crate::error::{Result, SliceError};
use crate::format::{open_image, validate_extension};
use crate::slice::validate_prefix;

/// A decoded slice together with the index recovered from its file name.
#[derive(Debug, Clone)]
pub struct LoadedSlice {
    pub index: usize,
    pub path: PathBuf,
    pub image: DynamicImage,
}

impl LoadedSlice {
    pub fn dimensions(&self) -> (u32, u32) {
        (self.image.width(), self.image.height())
    }
}

/// Build the file name pattern for `prefix` and a normalized `extension`.
///
/// The prefix and extension are matched literally; the index is captured
/// as group 1.
pub fn slice_pattern(prefix: &str, extension: &str) -> Result<Regex> {
    let pattern = format!(
        r"^{}_(\d+)\.{}$",
        regex::escape(prefix),
        regex::escape(extension)
    );

    Regex::new(&pattern)
        .map_err(|e| SliceError::InvalidArgument(format!("invalid slice pattern: {}", e)))
}

/// Parse the grid index out of a file name.
///
/// Returns `Ok(None)` for names that are not slices.
///
/// # Errors
///
/// Returns [`SliceError::InvalidArgument`] if the name matches but its
/// index does not fit in `usize`.
pub fn parse_slice_index(pattern: &Regex, file_name: &str) -> Result<Option<usize>> {
    let Some(digits) = pattern.captures(file_name).and_then(|caps| caps.get(1)) else {
        return Ok(None);
    };

    digits.as_str().parse().map(Some).map_err(|_| {
        SliceError::InvalidArgument(format!(
            "slice index in '{}' is too large",
            file_name
        ))
    })
}

/// Load every slice in `dir` named `{prefix}_{index}.{extension}`.
///
/// The result is sorted by index.
///
/// # Errors
///
/// - [`SliceError::NotADirectory`] if `dir` is missing or not a directory
/// - [`SliceError::UnsupportedFormat`] if `extension` is not supported
/// - [`SliceError::InvalidArgument`] if a matching name carries an index
///   too large for `usize`
/// - [`SliceError::Decode`] if a matching file is not a valid image
/// - [`SliceError::NoSlicesFound`] if no file matches
pub fn load_slices(dir: &Path, prefix: &str, extension: &str) -> Result<Vec<LoadedSlice>> {
    if !dir.is_dir() {
        return Err(SliceError::NotADirectory(dir.to_path_buf()));
    }

    let extension = validate_extension(extension)?;
    validate_prefix(prefix)?;
    let pattern = slice_pattern(prefix, &extension)?;

    let mut slices = Vec::new();
    for entry in fs::read_dir(dir).map_err(|e| SliceError::io(dir, e))? {
        let entry = entry.map_err(|e| SliceError::io(dir, e))?;
        let path = entry.path();
        if !path.is_file() {
            continue;
        }

        let file_name = entry.file_name();
        let Some(name) = file_name.to_str() else {
            continue;
        };
        let Some(index) = parse_slice_index(&pattern, name)? else {
            continue;
        };

        let image = open_image(&path)?;
        slices.push(LoadedSlice { index, path, image });
    }

    if slices.is_empty() {
        return Err(SliceError::NoSlicesFound {
            dir: dir.to_path_buf(),
            pattern: format!("{}_<index>.{}", prefix, extension),
        });
    }

    slices.sort_by_key(|slice| slice.index);
    Ok(slices)
}
