//! # gridslice
//!
//! Split a raster image into a regular grid of equally sized slices, and
//! put a directory of such slices back together.
//!
//! ## Features
//!
//! - **Three slicing modes**: explicit rows/columns, explicit slice size, or
//!   fixed square slices
//! - **Uniform slices**: ragged edge cells are padded to the common size
//! - **Deterministic names**: `{prefix}_{index}.{ext}` with zero-padded,
//!   row-major indices that sort lexicographically
//! - **Checked reassembly**: slice count and sizes are validated against the
//!   expected grid before compositing
//!
//! ## Architecture
//!
//! - [`grid`] - Grid geometry and slicing modes
//! - [`mod@format`] - Supported extensions and codec lookup
//! - [`slice`] - Cropping, padding and writing slices
//! - [`assemble`] - Loading, validating and compositing slices
//! - [`config`] / [`commands`] - CLI configuration and command runners
//!
//! ## Example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use gridslice::{assemble_image, save_image, slice_image, write_slices, SliceSpec};
//!
//! fn main() -> gridslice::Result<()> {
//!     let spec = SliceSpec::Grid { rows: 2, cols: 3 };
//!     let set = slice_image(Path::new("photo.png"), &spec)?;
//!     write_slices(&set, Path::new("tiles"), "slice", "png")?;
//!
//!     let image = assemble_image(Path::new("tiles"), 2, 3, "slice", "png")?;
//!     save_image(&image, Path::new("photo_out.png"), "png")?;
//!     Ok(())
//! }
//! ```

pub mod assemble;
pub mod commands;
pub mod config;
pub mod error;
pub mod format;
pub mod grid;
pub mod slice;

// Re-export commonly used types
pub use assemble::{assemble_image, compose, load_slices, validate_dimensions, LoadedSlice};
pub use commands::{run_assemble, run_slice, AssembleSummary, SliceSummary};
pub use config::{AssembleConfig, Cli, Command, OutputFormat, SliceConfig};
pub use error::{Result, SliceError};
pub use format::{image_format, open_image, save_image, validate_extension, SUPPORTED_EXTENSIONS};
pub use grid::{CellBox, GridGeometry, SliceSpec};
pub use slice::{pad_width, slice_dynamic, slice_filename, slice_image, write_slices, Slice, SlicedSet};
