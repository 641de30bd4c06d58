use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, SliceError>;

/// Errors that can occur while slicing or assembling images.
///
/// Every variant is terminal for the operation that produced it. Nothing
/// is retried internally; the caller decides how to present the failure.
#[derive(Debug, Error)]
pub enum SliceError {
    /// A size, count or option combination is invalid
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The source image does not exist
    #[error("Image file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The slice directory is missing or is not a directory
    #[error("Not a directory: {}", .0.display())]
    NotADirectory(PathBuf),

    /// A file could not be decoded as an image
    #[error("Failed to open image {}: {source}", .path.display())]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// An image could not be encoded to disk
    #[error("Failed to write image {}: {source}", .path.display())]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    /// Filesystem error while creating or listing a directory
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Extension is not one of the supported image formats
    #[error("Unsupported image format: '{extension}'. Supported formats: {supported}")]
    UnsupportedFormat {
        extension: String,
        supported: String,
    },

    /// No file in the directory matched the slice naming pattern
    #[error("No valid slices found in {} matching {pattern}", .dir.display())]
    NoSlicesFound { dir: PathBuf, pattern: String },

    /// Number of loaded slices differs from rows x cols
    #[error("Expected {expected} slices ({rows}x{cols} grid), found {found}")]
    CountMismatch {
        expected: usize,
        found: usize,
        rows: u32,
        cols: u32,
    },

    /// A slice differs in size from the first slice
    #[error(
        "Slice {index} has inconsistent dimensions: {width}x{height}, expected {expected_width}x{expected_height}"
    )]
    SizeMismatch {
        index: usize,
        width: u32,
        height: u32,
        expected_width: u32,
        expected_height: u32,
    },

    /// A slice index does not identify a unique cell of the grid
    #[error("Invalid slice index {index}: {reason}")]
    InvalidIndex { index: usize, reason: String },
}

impl SliceError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        SliceError::Io {
            path: path.into(),
            source,
        }
    }
}
