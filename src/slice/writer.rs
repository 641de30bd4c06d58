//! Persisting slices.
//!
//! Slices are written flat into one directory as `{prefix}_{index}.{ext}`.
//! The index is zero-padded to the digit count of the total number of
//! slices, so lexicographic order of the file names is index order.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{Result, SliceError};
use crate::format::{save_image, validate_extension};

use super::slicer::SlicedSet;

/// Default file name prefix for slices.
pub const DEFAULT_PREFIX: &str = "slice";

/// Digits needed to write every index of `count` slices at the same width.
pub fn pad_width(count: usize) -> usize {
    count.to_string().len()
}

/// File name of the slice at `index`, padded to `width` digits.
pub fn slice_filename(prefix: &str, index: usize, width: usize, extension: &str) -> String {
    format!("{}_{:0width$}.{}", prefix, index, extension, width = width)
}

/// Reject prefixes that would place slices outside the target directory.
pub fn validate_prefix(prefix: &str) -> Result<()> {
    if prefix.contains(['/', '\\']) || prefix == "." || prefix == ".." {
        return Err(SliceError::InvalidArgument(format!(
            "prefix must be a plain file name component, got '{}'",
            prefix
        )));
    }
    Ok(())
}

/// Write every slice of `set` into `output_dir`.
///
/// The directory and its parents are created if needed. Returned paths are
/// in slice index order.
///
/// Writes are not transactional: a failure part way through leaves the
/// slices written so far in place.
pub fn write_slices(
    set: &SlicedSet,
    output_dir: &Path,
    prefix: &str,
    extension: &str,
) -> Result<Vec<PathBuf>> {
    validate_prefix(prefix)?;
    let extension = validate_extension(extension)?;

    fs::create_dir_all(output_dir).map_err(|e| SliceError::io(output_dir, e))?;

    let width = pad_width(set.len());
    let mut paths = Vec::with_capacity(set.len());

    for slice in set {
        let path = output_dir.join(slice_filename(prefix, slice.index, width, &extension));
        save_image(&slice.image, &path, &extension)?;
        paths.push(path);
    }

    Ok(paths)
}
