//! Image formats.
//!
//! - [`validate_extension`]: normalize an extension against the fixed supported set
//! - [`image_format`]: map a normalized extension to its codec
//! - [`open_image`] / [`save_image`]: file I/O through the `image` crate

mod codec;
mod extension;

pub use codec::{encodable, image_format, open_image, save_image};
pub use extension::{supported_extensions, validate_extension, SUPPORTED_EXTENSIONS};
