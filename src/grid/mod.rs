//! Grid geometry shared by the slicer and the assembler.
//!
//! - [`SliceSpec`]: which of the three slicing modes is active
//! - [`GridGeometry`]: rows, columns and slice size for one image
//! - [`CellBox`]: crop rectangle of a single cell

mod geometry;
mod spec;

pub use geometry::{grid_position, CellBox, GridGeometry, MAX_PADDING_PIXELS};
pub use spec::{SliceSpec, DEFAULT_SLICE_SIZE};
