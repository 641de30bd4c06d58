//! Extension validation.
//!
//! Slice and output files are identified by extension alone. The accepted
//! set is fixed; anything else is rejected before any file is touched.

use crate::error::{Result, SliceError};

/// Extensions accepted for slices and assembled output, sorted.
pub const SUPPORTED_EXTENSIONS: [&str; 7] = ["bmp", "gif", "jpeg", "jpg", "png", "tiff", "webp"];

/// Normalize and validate an extension.
///
/// Leading dots are stripped and the result is lowercased, so `".PNG"`,
/// `"png"` and `"Png"` all normalize to `"png"`.
///
/// # Errors
///
/// Returns [`SliceError::UnsupportedFormat`] naming the offending value and
/// the full supported set.
pub fn validate_extension(extension: &str) -> Result<String> {
    let normalized = extension.trim_start_matches('.').to_lowercase();

    if SUPPORTED_EXTENSIONS.contains(&normalized.as_str()) {
        Ok(normalized)
    } else {
        Err(SliceError::UnsupportedFormat {
            extension: extension.to_string(),
            supported: supported_extensions(),
        })
    }
}

/// Comma-separated list of supported extensions.
pub fn supported_extensions() -> String {
    SUPPORTED_EXTENSIONS.join(", ")
}
