//! Slicing pipeline: image file → grid of padded slices → files on disk.
//!
//! ```text
//! ┌──────────────┐    ┌──────────────┐    ┌──────────────────┐
//! │  open_image  │ →  │ slice_image  │ →  │   write_slices   │
//! │  (decode)    │    │ (crop + pad) │    │ prefix_NN.ext    │
//! └──────────────┘    └──────────────┘    └──────────────────┘
//! ```

mod slicer;
mod writer;

pub use slicer::{slice_dynamic, slice_image, Slice, SlicedSet};
pub use writer::{pad_width, slice_filename, validate_prefix, write_slices, DEFAULT_PREFIX};
