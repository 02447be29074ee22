// File: crates/plots-core/src/error.rs
// Summary: Error type shared by accumulation, rendering and persistence.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised while building, rendering or persisting a graph.
#[derive(Error, Debug)]
pub enum PlotError {
    /// Filesystem failure, tagged with the path being touched.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Raw data could not be serialized or parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Skia refused to allocate a surface or encode output.
    #[error("render error: {0}")]
    Render(String),

    /// The figure suffix does not map to a known backend.
    #[error("unsupported figure format '{0}' (expected .pdf or .png)")]
    UnsupportedFormat(String),

    /// x and y sequences passed to an accumulation call differ in length.
    #[error("series '{series}': {xs} x values but {ys} y values")]
    LengthMismatch { series: String, xs: usize, ys: usize },

    /// Axis limits must be finite and distinct.
    #[error("invalid {axis} limits ({min}, {max})")]
    InvalidLimits { axis: &'static str, min: f64, max: f64 },

    /// Axes index outside the figure's panel list.
    #[error("figure has {len} axes, index {index} is out of range")]
    NoSuchAxes { index: usize, len: usize },

    /// The viewer could not show the figure.
    #[error("display error: {0}")]
    Display(String),
}

impl PlotError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }
}

pub type Result<T> = std::result::Result<T, PlotError>;
