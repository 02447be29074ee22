// File: crates/plots-core/src/graph.rs
// Summary: Multi-series graph: accumulate named (x, y) data, then commit to a rendered figure.
// Notes:
// - Accumulation and commit are separate phases. Nothing stops a second commit;
//   each saving commit writes a new pair of artifacts instead of updating the last.
// - Series colors come from the palette in insertion order and wrap after the ninth.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::axes::{Axes, LegendLoc, Line2D, PlotStyle};
use crate::axis::check_limits;
use crate::diagram::{Diagram, OutputDirs};
use crate::error::{PlotError, Result};
use crate::figure::Figure;
use crate::palette::Palette;
use crate::series::{Series, SeriesMap};
use crate::theme::Theme;
use crate::types::{ASPECT_RATIO_SIZEUP, DEFAULT_ASPECT_RATIO, FIGURE_SUFFIX};
use crate::viewer::{default_viewer, Viewer};

/// Width of the horizontal reference line at y = 0, in points.
pub const ZERO_LINE_WIDTH: f32 = 0.5;

/// What `commit` does with the finished figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Disposition {
    /// Write the raw snapshot and the figure to the output directories.
    #[default]
    Save,
    /// Hand the figure to the graph's viewer.
    Display,
}

/// Rendering and output settings for one commit.
#[derive(Clone, Debug)]
pub struct CommitOptions {
    /// (width, height); the figure is `ASPECT_RATIO_SIZEUP` times this, in inches.
    pub aspect_ratio: (f32, f32),
    pub x_label: String,
    pub y_label: String,
    /// Markers joined by lines when true, plain lines otherwise.
    pub do_points: bool,
    pub disposition: Disposition,
    pub grid_linewidth: f32,
    pub curve_linewidth: f32,
    pub x_lims: Option<(f64, f64)>,
    pub y_lims: Option<(f64, f64)>,
    /// File suffix of the saved figure (".pdf" or ".png").
    pub figure_suffix: String,
    pub theme: Theme,
    pub palette: Palette,
}

impl Default for CommitOptions {
    fn default() -> Self {
        Self {
            aspect_ratio: DEFAULT_ASPECT_RATIO,
            x_label: String::new(),
            y_label: String::new(),
            do_points: true,
            disposition: Disposition::Save,
            grid_linewidth: 1.0,
            curve_linewidth: 1.0,
            x_lims: None,
            y_lims: None,
            figure_suffix: FIGURE_SUFFIX.to_string(),
            theme: Theme::default(),
            palette: Palette::default(),
        }
    }
}

impl CommitOptions {
    /// Figure size in inches.
    pub fn figure_size(&self) -> (f32, f32) {
        (ASPECT_RATIO_SIZEUP * self.aspect_ratio.0, ASPECT_RATIO_SIZEUP * self.aspect_ratio.1)
    }
}

/// Result of a commit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommitOutcome {
    Saved { data: PathBuf, figure: PathBuf },
    Displayed,
}

pub struct Graph {
    name: String,
    series: SeriesMap,
    dirs: Option<OutputDirs>,
    viewer: Box<dyn Viewer>,
}

impl fmt::Debug for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Graph")
            .field("name", &self.name)
            .field("series", &self.series)
            .field("dirs", &self.dirs)
            .finish_non_exhaustive()
    }
}

impl Graph {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), series: SeriesMap::new(), dirs: None, viewer: default_viewer() }
    }

    /// Persist under `dirs` instead of the shared default directories.
    pub fn with_output_dirs(mut self, dirs: OutputDirs) -> Self {
        self.dirs = Some(dirs);
        self
    }

    pub fn with_viewer(mut self, viewer: Box<dyn Viewer>) -> Self {
        self.viewer = viewer;
        self
    }

    /// Rebuild a graph from a raw snapshot written by a previous commit.
    pub fn from_raw(name: impl Into<String>, path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|e| PlotError::io(path, e))?;
        let series: SeriesMap = serde_json::from_str(&text)?;
        let mut graph = Self::new(name);
        graph.series = series;
        Ok(graph)
    }

    pub fn series(&self) -> &SeriesMap { &self.series }

    pub fn get(&self, name: &str) -> Option<&Series> { self.series.get(name) }

    /// Append one sample to `name`, creating the series if needed.
    pub fn add_point(&mut self, name: &str, x: f64, y: f64) {
        self.series.get_or_create(name).push(x, y);
    }

    /// Append parallel sequences to `name`, creating the series if needed.
    /// Mismatched lengths are rejected and nothing is appended.
    pub fn add_points(&mut self, name: &str, xs: &[f64], ys: &[f64]) -> Result<()> {
        if xs.len() != ys.len() {
            return Err(PlotError::LengthMismatch { series: name.to_string(), xs: xs.len(), ys: ys.len() });
        }
        self.series.get_or_create(name).extend(name, xs, ys)
    }

    /// Bulk-load a whole series; same extend-or-create semantics as `add_points`.
    pub fn add_series(&mut self, name: &str, xs: &[f64], ys: &[f64]) -> Result<()> {
        self.add_points(name, xs, ys)
    }

    /// Draw every series onto `axes` (no output side effects).
    /// Bad limits are reported before `axes` is touched.
    pub fn draw_into(&self, opts: &CommitOptions, axes: &mut Axes) -> Result<()> {
        if let Some((lo, hi)) = opts.x_lims {
            check_limits("x", lo, hi)?;
        }
        if let Some((lo, hi)) = opts.y_lims {
            check_limits("y", lo, hi)?;
        }

        axes.grid(opts.grid_linewidth);
        axes.axhline(0.0, opts.theme.zero_line, ZERO_LINE_WIDTH);

        if opts.palette.wraps_for(self.series.len()) {
            tracing::warn!(
                graph = %self.name,
                series = self.series.len(),
                colors = opts.palette.len(),
                "more series than palette colors; colors repeat"
            );
        }

        let style = if opts.do_points { PlotStyle::LinePoints } else { PlotStyle::Line };
        for (i, (name, series)) in self.series.iter().enumerate() {
            axes.plot(Line2D {
                label: name.to_string(),
                xs: series.xs().to_vec(),
                ys: series.ys().to_vec(),
                color: opts.palette.color(i),
                style,
                linewidth: opts.curve_linewidth,
            });
        }

        axes.set_xlabel(opts.x_label.as_str());
        axes.set_ylabel(opts.y_label.as_str());
        axes.legend(LegendLoc::UpperRight);

        if let Some((lo, hi)) = opts.x_lims {
            axes.set_xlim(lo, hi)?;
        }
        if let Some((lo, hi)) = opts.y_lims {
            axes.set_ylim(lo, hi)?;
        }
        Ok(())
    }

    /// Render onto a fresh single-panel figure, then save or display it.
    pub fn commit(&self, opts: &CommitOptions) -> Result<CommitOutcome> {
        let mut figure = Figure::new(opts.figure_size());
        figure.theme = opts.theme;
        self.commit_into(opts, &mut figure, 0)
    }

    /// Render onto panel `axes` of an existing figure, then save or display the whole figure.
    pub fn commit_into(&self, opts: &CommitOptions, figure: &mut Figure, axes: usize) -> Result<CommitOutcome> {
        tracing::debug!(graph = %self.name, series = self.series.len(), axes, "committing graph");
        self.draw_into(opts, figure.axes_mut(axes)?)?;

        match opts.disposition {
            Disposition::Save => {
                let dirs = match &self.dirs {
                    Some(d) => d,
                    None => OutputDirs::shared()?,
                };
                let data = dirs.safe_datapoint_write(&self.name, &self.series)?;
                let figure = dirs.safe_figure_write(&self.name, &opts.figure_suffix, figure)?;
                Ok(CommitOutcome::Saved { data, figure })
            }
            Disposition::Display => {
                self.viewer.show(&self.name, figure)?;
                Ok(CommitOutcome::Displayed)
            }
        }
    }
}

impl Diagram for Graph {
    fn name(&self) -> &str { &self.name }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_graph_keeps_its_name() {
        let g = Graph::new("loss");
        assert_eq!(g.name(), "loss");
        assert!(g.series().is_empty());
    }

    #[test]
    fn clear_leaves_series_in_place() {
        let mut g = Graph::new("g");
        g.add_point("a", 1.0, 2.0);
        g.clear();
        assert_eq!(g.get("a").map(Series::len), Some(1));
    }

    #[test]
    fn figure_size_scales_aspect_ratio() {
        let opts = CommitOptions::default();
        assert_eq!(opts.figure_size(), (12.0, 9.0));
    }

    #[test]
    fn mismatched_points_leave_graph_untouched() {
        let mut g = Graph::new("g");
        let err = g.add_points("a", &[1.0, 2.0], &[1.0]).unwrap_err();
        assert!(matches!(err, PlotError::LengthMismatch { xs: 2, ys: 1, .. }));
        assert!(g.get("a").is_none());
    }

    #[test]
    fn draw_into_styles_by_do_points() {
        let mut g = Graph::new("g");
        g.add_series("a", &[0.0, 1.0], &[1.0, 0.0]).unwrap();

        let mut axes = Axes::new(crate::geometry::RectF::from_ltrb(0.0, 0.0, 1.0, 1.0));
        let opts = CommitOptions { do_points: false, x_label: "t".into(), ..CommitOptions::default() };
        g.draw_into(&opts, &mut axes).unwrap();

        assert_eq!(axes.lines[0].style, PlotStyle::Line);
        assert_eq!(axes.x_axis.label.as_deref(), Some("t"));
        assert_eq!(axes.y_axis.label, None);
        assert_eq!(axes.hlines.len(), 1);
        assert_eq!(axes.grid, Some(1.0));
        assert_eq!(axes.legend, Some(LegendLoc::UpperRight));
    }

    #[test]
    fn bad_limits_surface_as_errors() {
        let g = Graph::new("g");
        let mut axes = Axes::new(crate::geometry::RectF::from_ltrb(0.0, 0.0, 1.0, 1.0));
        let opts = CommitOptions { x_lims: Some((0.0, 1.0)), y_lims: Some((2.0, 2.0)), ..CommitOptions::default() };
        assert!(matches!(g.draw_into(&opts, &mut axes), Err(PlotError::InvalidLimits { axis: "y", .. })));
        // nothing was drawn or fixed before the error
        assert!(axes.hlines.is_empty() && axes.lines.is_empty());
        assert_eq!(axes.grid, None);
        assert_eq!(axes.x_axis.limits, None);
    }
}
