//! Command-line configuration for gridslice.
//!
//! Options can also be set through environment variables with the
//! `GRIDSLICE_` prefix:
//!
//! - `GRIDSLICE_PREFIX` - Slice file name prefix (default: slice)
//! - `GRIDSLICE_EXTENSION` - Slice file extension (default: png)
//! - `GRIDSLICE_SLICE_SIZE` - Square slice size in pixels (default: 100)
//! - `GRIDSLICE_FORMAT` - Report format, `text` or `json` (default: text)
//!
//! # Example
//!
//! ```text
//! gridslice slice photo.png tiles/ --rows 2 --cols 3
//! gridslice assemble tiles/ photo_out.png --rows 2 --cols 3
//! ```

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::error::{Result, SliceError};
use crate::format::validate_extension;
use crate::grid::{SliceSpec, DEFAULT_SLICE_SIZE};
use crate::slice::{validate_prefix, DEFAULT_PREFIX};

/// Default slice file extension.
pub const DEFAULT_EXTENSION: &str = "png";

// =============================================================================
// CLI Arguments
// =============================================================================

/// gridslice - Slice images into a grid of tiles and put them back together.
#[derive(Parser, Debug, Clone)]
#[command(name = "gridslice")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn into_command(self) -> Command {
        self.command
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Slice an image into smaller pieces.
    Slice(SliceConfig),

    /// Assemble slices back into a complete image.
    Assemble(AssembleConfig),
}

impl Command {
    pub fn verbose(&self) -> bool {
        match self {
            Command::Slice(config) => config.verbose,
            Command::Assemble(config) => config.verbose,
        }
    }
}

/// How command results are reported on stdout.
#[derive(ValueEnum, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// Pretty-printed JSON
    Json,
}

// =============================================================================
// Slice Command
// =============================================================================

#[derive(Args, Debug, Clone)]
pub struct SliceConfig {
    /// Image to slice.
    pub image: PathBuf,

    /// Directory to write slices into (created if missing).
    pub output_dir: PathBuf,

    /// Number of rows in the grid (grid mode, requires --cols).
    #[arg(short, long)]
    pub rows: Option<u32>,

    /// Number of columns in the grid (grid mode, requires --rows).
    #[arg(short, long)]
    pub cols: Option<u32>,

    /// Slice width in pixels (dimensions mode).
    ///
    /// Without --height, each slice spans the full image height.
    #[arg(short = 'W', long)]
    pub width: Option<u32>,

    /// Slice height in pixels (dimensions mode).
    ///
    /// Without --width, each slice spans the full image width.
    #[arg(short = 'H', long)]
    pub height: Option<u32>,

    /// Size of each square slice in pixels, used when no grid or
    /// dimensions are given.
    #[arg(short, long, env = "GRIDSLICE_SLICE_SIZE")]
    pub slice_size: Option<u32>,

    /// Prefix for slice file names.
    #[arg(short, long, default_value = DEFAULT_PREFIX, env = "GRIDSLICE_PREFIX")]
    pub prefix: String,

    /// File extension (and format) of the written slices.
    #[arg(short, long, default_value = DEFAULT_EXTENSION, env = "GRIDSLICE_EXTENSION")]
    pub extension: String,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "GRIDSLICE_FORMAT")]
    pub format: OutputFormat,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl SliceConfig {
    /// Create a config with default naming for `image` and `output_dir`.
    pub fn new(image: impl Into<PathBuf>, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            image: image.into(),
            output_dir: output_dir.into(),
            rows: None,
            cols: None,
            width: None,
            height: None,
            slice_size: None,
            prefix: DEFAULT_PREFIX.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            format: OutputFormat::Text,
            verbose: false,
        }
    }

    /// Resolve the slicing mode from the given options.
    pub fn slice_spec(&self) -> Result<SliceSpec> {
        SliceSpec::resolve(
            self.rows,
            self.cols,
            self.width,
            self.height,
            self.slice_size,
        )
    }

    /// Validate options that can be checked without opening the image.
    pub fn validate(&self) -> Result<()> {
        validate_extension(&self.extension)?;
        validate_prefix(&self.prefix)?;

        match self.slice_spec()? {
            SliceSpec::Grid { rows, cols } if rows == 0 || cols == 0 => Err(
                SliceError::InvalidArgument("rows and cols must be positive".to_string()),
            ),
            SliceSpec::Dimensions { width, height }
                if width == Some(0) || height == Some(0) =>
            {
                Err(SliceError::InvalidArgument(
                    "slice width and height must be positive".to_string(),
                ))
            }
            SliceSpec::Square(0) => Err(SliceError::InvalidArgument(
                "slice_size must be positive".to_string(),
            )),
            _ => Ok(()),
        }
    }
}

// =============================================================================
// Assemble Command
// =============================================================================

#[derive(Args, Debug, Clone)]
pub struct AssembleConfig {
    /// Directory containing the slices.
    pub slice_dir: PathBuf,

    /// Path of the assembled image; its extension selects the format.
    pub output_path: PathBuf,

    /// Number of rows in the original image grid.
    #[arg(short, long)]
    pub rows: u32,

    /// Number of columns in the original image grid.
    #[arg(short, long)]
    pub cols: u32,

    /// Prefix used in slice file names.
    #[arg(short, long, default_value = DEFAULT_PREFIX, env = "GRIDSLICE_PREFIX")]
    pub prefix: String,

    /// File extension of the slice images.
    #[arg(short, long, default_value = DEFAULT_EXTENSION, env = "GRIDSLICE_EXTENSION")]
    pub extension: String,

    /// Report format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text, env = "GRIDSLICE_FORMAT")]
    pub format: OutputFormat,

    /// Enable verbose logging (debug level).
    #[arg(short, long, default_value_t = false)]
    pub verbose: bool,
}

impl AssembleConfig {
    /// Create a config with default naming for a `rows x cols` grid.
    pub fn new(
        slice_dir: impl Into<PathBuf>,
        output_path: impl Into<PathBuf>,
        rows: u32,
        cols: u32,
    ) -> Self {
        Self {
            slice_dir: slice_dir.into(),
            output_path: output_path.into(),
            rows,
            cols,
            prefix: DEFAULT_PREFIX.to_string(),
            extension: DEFAULT_EXTENSION.to_string(),
            format: OutputFormat::Text,
            verbose: false,
        }
    }

    /// Normalized extension of the output path.
    pub fn output_extension(&self) -> Result<String> {
        output_extension(&self.output_path)
    }

    /// Validate options that can be checked without reading any slice.
    pub fn validate(&self) -> Result<()> {
        if self.rows == 0 || self.cols == 0 {
            return Err(SliceError::InvalidArgument(format!(
                "rows and cols must be positive, got {}x{}",
                self.rows, self.cols
            )));
        }
        self.output_extension()?;
        validate_extension(&self.extension)?;
        validate_prefix(&self.prefix)
    }
}

/// Normalized extension of `path`, validated against the supported set.
pub fn output_extension(path: &Path) -> Result<String> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or_default();

    validate_extension(extension)
}

// =============================================================================
// Tests
// =============================================================================
