// File: crates/plots-core/src/lib.rs
// Summary: Core library entry point; named series graphs rendered to PDF/PNG with collision-free persistence.

pub mod axes;
pub mod axis;
pub mod diagram;
pub mod error;
pub mod figure;
pub mod geometry;
pub mod graph;
pub mod grid;
pub mod palette;
pub mod scale;
pub mod series;
pub mod text;
pub mod theme;
pub mod types;
pub mod view;
pub mod viewer;

pub use axes::{Axes, LegendLoc, Line2D, PlotStyle};
pub use diagram::{next_free_path, Diagram, OutputDirs};
pub use error::{PlotError, Result};
pub use figure::{Figure, FigureFormat};
pub use graph::{CommitOptions, CommitOutcome, Disposition, Graph};
pub use palette::Palette;
pub use series::{Series, SeriesMap};
pub use theme::Theme;
pub use view::ViewLimits;
pub use viewer::{default_viewer, PreviewViewer, Viewer};
#[cfg(feature = "window")]
pub use viewer::WindowViewer;
