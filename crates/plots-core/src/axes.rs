// File: crates/plots-core/src/axes.rs
// Summary: Retained drawing state of one plot panel (grid, reference lines, curves, labels, legend).

use skia_safe as skia;

use crate::axis::Axis;
use crate::error::Result;
use crate::geometry::RectF;
use crate::view::ViewLimits;

/// How a curve is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlotStyle {
    /// Polyline only.
    Line,
    /// Polyline with a point marker on every sample.
    LinePoints,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Line2D {
    pub label: String,
    pub xs: Vec<f64>,
    pub ys: Vec<f64>,
    pub color: skia::Color,
    pub style: PlotStyle,
    pub linewidth: f32,
}

/// Full-width horizontal reference line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HLine {
    pub y: f64,
    pub color: skia::Color,
    pub linewidth: f32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LegendLoc {
    UpperRight,
    UpperLeft,
    LowerLeft,
    LowerRight,
}

#[derive(Clone, Debug)]
pub struct Axes {
    /// Panel cell as fractions of the figure (0..1, top-left origin).
    pub cell: RectF,
    pub grid: Option<f32>,
    pub hlines: Vec<HLine>,
    pub lines: Vec<Line2D>,
    pub x_axis: Axis,
    pub y_axis: Axis,
    pub legend: Option<LegendLoc>,
}

impl Axes {
    pub fn new(cell: RectF) -> Self {
        Self {
            cell,
            grid: None,
            hlines: Vec::new(),
            lines: Vec::new(),
            x_axis: Axis::new(),
            y_axis: Axis::new(),
            legend: None,
        }
    }

    /// Enable grid lines at major ticks.
    pub fn grid(&mut self, linewidth: f32) {
        self.grid = Some(linewidth.max(0.0));
    }

    pub fn axhline(&mut self, y: f64, color: skia::Color, linewidth: f32) {
        self.hlines.push(HLine { y, color, linewidth });
    }

    pub fn plot(&mut self, line: Line2D) {
        self.lines.push(line);
    }

    pub fn set_xlabel(&mut self, label: impl Into<String>) { self.x_axis.set_label(label); }
    pub fn set_ylabel(&mut self, label: impl Into<String>) { self.y_axis.set_label(label); }

    pub fn set_xlim(&mut self, min: f64, max: f64) -> Result<()> { self.x_axis.set_limits("x", min, max) }
    pub fn set_ylim(&mut self, min: f64, max: f64) -> Result<()> { self.y_axis.set_limits("y", min, max) }

    pub fn legend(&mut self, loc: LegendLoc) {
        self.legend = Some(loc);
    }

    /// Data extents over all finite curve samples; reference lines count toward Y.
    pub fn data_bounds(&self) -> (Option<(f64, f64)>, Option<(f64, f64)>) {
        let mut x: Option<(f64, f64)> = None;
        let mut y: Option<(f64, f64)> = None;
        let grow = |acc: &mut Option<(f64, f64)>, v: f64| {
            *acc = Some(match *acc {
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
                None => (v, v),
            });
        };
        for line in &self.lines {
            for (&px, &py) in line.xs.iter().zip(&line.ys) {
                if !px.is_finite() || !py.is_finite() { continue; }
                grow(&mut x, px);
                grow(&mut y, py);
            }
        }
        for h in &self.hlines {
            if h.y.is_finite() { grow(&mut y, h.y); }
        }
        (x, y)
    }

    pub fn view_limits(&self) -> ViewLimits {
        let (x, y) = self.data_bounds();
        ViewLimits::resolve(x, y, self.x_axis.limits, self.y_axis.limits)
    }

    /// Entries shown in the legend, in plotting order (unlabeled curves skipped).
    pub fn legend_entries(&self) -> impl Iterator<Item = &Line2D> {
        self.lines.iter().filter(|l| !l.label.is_empty())
    }
}
