//! Codec lookup and image file I/O.
//!
//! Pixel decoding and encoding is delegated to the `image` crate. This module
//! only maps a normalized extension to an [`ImageFormat`] and makes sure the
//! pixel layout handed to an encoder is one it accepts.

use std::borrow::Cow;
use std::path::Path;

use image::{ColorType, DynamicImage, ImageFormat, ImageReader};

use crate::error::{Result, SliceError};

use super::extension::validate_extension;

/// Normalized extension to codec.
const FORMAT_TABLE: [(&str, ImageFormat); 7] = [
    ("bmp", ImageFormat::Bmp),
    ("gif", ImageFormat::Gif),
    ("jpeg", ImageFormat::Jpeg),
    ("jpg", ImageFormat::Jpeg),
    ("png", ImageFormat::Png),
    ("tiff", ImageFormat::Tiff),
    ("webp", ImageFormat::WebP),
];

/// Look up the codec for an extension, validating it first.
pub fn image_format(extension: &str) -> Result<ImageFormat> {
    let extension = validate_extension(extension)?;

    FORMAT_TABLE
        .iter()
        .find(|(ext, _)| *ext == extension)
        .map(|(_, format)| *format)
        .ok_or_else(|| SliceError::UnsupportedFormat {
            extension,
            supported: super::extension::supported_extensions(),
        })
}

/// Open and decode an image file.
///
/// The format is guessed from the file content, so a misnamed file still
/// decodes.
///
/// # Errors
///
/// - [`SliceError::NotFound`] if `path` does not exist
/// - [`SliceError::Decode`] if the file cannot be read or decoded
pub fn open_image(path: &Path) -> Result<DynamicImage> {
    if !path.exists() {
        return Err(SliceError::NotFound(path.to_path_buf()));
    }

    let decode_error = |source| SliceError::Decode {
        path: path.to_path_buf(),
        source,
    };

    ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| decode_error(image::ImageError::IoError(e)))?
        .decode()
        .map_err(decode_error)
}

/// Encode `image` to `path` using the codec for `extension`.
pub fn save_image(image: &DynamicImage, path: &Path, extension: &str) -> Result<()> {
    let format = image_format(extension)?;

    encodable(image, format)
        .save_with_format(path, format)
        .map_err(|source| SliceError::Encode {
            path: path.to_path_buf(),
            source,
        })
}

/// Convert `image` to a pixel layout `format` can encode, borrowing when
/// no conversion is needed.
///
/// JPEG has no alpha channel and falls back to 8-bit RGB; every other
/// format falls back to 8-bit RGBA.
pub fn encodable(image: &DynamicImage, format: ImageFormat) -> Cow<'_, DynamicImage> {
    if supports_color(format, image.color()) {
        return Cow::Borrowed(image);
    }

    match format {
        ImageFormat::Jpeg => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
        _ => Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8())),
    }
}

fn supports_color(format: ImageFormat, color: ColorType) -> bool {
    use ColorType::*;

    match format {
        ImageFormat::Png => matches!(color, L8 | La8 | Rgb8 | Rgba8 | L16 | La16 | Rgb16 | Rgba16),
        ImageFormat::Jpeg => matches!(color, L8 | Rgb8),
        ImageFormat::Gif => matches!(color, Rgb8 | Rgba8),
        ImageFormat::Bmp | ImageFormat::WebP => matches!(color, L8 | La8 | Rgb8 | Rgba8),
        ImageFormat::Tiff => matches!(color, L8 | Rgb8 | Rgba8 | L16 | Rgb16 | Rgba16),
        _ => matches!(color, Rgba8),
    }
}
