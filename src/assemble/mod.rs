//! Assembly pipeline: slice directory → validated slices → one image.
//!
//! ```text
//! ┌──────────────┐    ┌─────────────────────┐    ┌──────────────┐
//! │ load_slices  │ →  │ validate_dimensions │ →  │   compose    │
//! │ (by name)    │    │ (count, size, idx)  │    │ (RGBA canvas)│
//! └──────────────┘    └─────────────────────┘    └──────────────┘
//! ```
//!
//! The grid shape is not stored with the slices; `rows` and `cols` must be
//! supplied by the caller.

mod assembler;
mod loader;
mod validate;

pub use assembler::{assemble_image, compose};
pub use loader::{load_slices, parse_slice_index, slice_pattern, LoadedSlice};
pub use validate::validate_dimensions;
