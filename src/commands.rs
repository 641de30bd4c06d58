//! Command runners.
//!
//! These tie the slicing and assembly pipelines to a parsed configuration,
//! log progress, and return a serializable summary. The pipelines
//! themselves never log; everything user-facing happens here or in the
//! binary.

use std::path::PathBuf;

use serde::Serialize;
use tracing::{debug, info};

use crate::assemble::assemble_image;
use crate::config::{AssembleConfig, OutputFormat, SliceConfig};
use crate::error::Result;
use crate::format::save_image;
use crate::slice::{slice_image, write_slices};

// =============================================================================
// Slice
// =============================================================================

/// Outcome of a slice command.
#[derive(Debug, Clone, Serialize)]
pub struct SliceSummary {
    pub source: PathBuf,
    pub output_dir: PathBuf,
    pub mode: &'static str,
    pub rows: u32,
    pub cols: u32,
    pub slice_width: u32,
    pub slice_height: u32,
    pub files: Vec<PathBuf>,
}

impl SliceSummary {
    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(self),
            OutputFormat::Text => Ok(format!(
                "Successfully sliced image into {} pieces ({}x{} grid of {}x{})\nSlices saved in: {}",
                self.files.len(),
                self.rows,
                self.cols,
                self.slice_width,
                self.slice_height,
                self.output_dir.display()
            )),
        }
    }
}

/// Slice `config.image` and write the slices to `config.output_dir`.
pub fn run_slice(config: &SliceConfig) -> Result<SliceSummary> {
    config.validate()?;
    let spec = config.slice_spec()?;

    info!(
        "Slicing {} ({} mode)",
        config.image.display(),
        spec.mode()
    );

    let set = slice_image(&config.image, &spec)?;
    let geometry = set.geometry;

    debug!(
        "Grid: {}x{} cells of {}x{} pixels from a {}x{} image",
        geometry.rows,
        geometry.cols,
        geometry.slice_width,
        geometry.slice_height,
        geometry.image_width,
        geometry.image_height
    );

    let files = write_slices(&set, &config.output_dir, &config.prefix, &config.extension)?;
    for path in &files {
        debug!("Wrote {}", path.display());
    }

    info!(
        "Wrote {} slices to {}",
        files.len(),
        config.output_dir.display()
    );

    Ok(SliceSummary {
        source: config.image.clone(),
        output_dir: config.output_dir.clone(),
        mode: spec.mode(),
        rows: geometry.rows,
        cols: geometry.cols,
        slice_width: geometry.slice_width,
        slice_height: geometry.slice_height,
        files,
    })
}

// =============================================================================
// Assemble
// =============================================================================

/// Outcome of an assemble command.
#[derive(Debug, Clone, Serialize)]
pub struct AssembleSummary {
    pub output: PathBuf,
    pub rows: u32,
    pub cols: u32,
    pub slices: usize,
    pub width: u32,
    pub height: u32,
}

impl AssembleSummary {
    pub fn render(&self, format: OutputFormat) -> serde_json::Result<String> {
        match format {
            OutputFormat::Json => serde_json::to_string_pretty(self),
            OutputFormat::Text => Ok(format!(
                "Successfully assembled image saved to: {} ({}x{})",
                self.output.display(),
                self.width,
                self.height
            )),
        }
    }
}

/// Assemble the slices in `config.slice_dir` and save to `config.output_path`.
///
/// The output extension is checked before any slice is read, and nothing
/// is written if loading or validation fails.
pub fn run_assemble(config: &AssembleConfig) -> Result<AssembleSummary> {
    config.validate()?;
    let output_extension = config.output_extension()?;

    info!(
        "Assembling {}x{} grid from {}",
        config.rows,
        config.cols,
        config.slice_dir.display()
    );

    let image = assemble_image(
        &config.slice_dir,
        config.rows,
        config.cols,
        &config.prefix,
        &config.extension,
    )?;

    save_image(&image, &config.output_path, &output_extension)?;

    info!(
        "Saved {}x{} image to {}",
        image.width(),
        image.height(),
        config.output_path.display()
    );

    Ok(AssembleSummary {
        output: config.output_path.clone(),
        rows: config.rows,
        cols: config.cols,
        slices: config.rows as usize * config.cols as usize,
        width: image.width(),
        height: image.height(),
    })
}
