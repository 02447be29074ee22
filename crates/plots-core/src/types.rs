// File: crates/plots-core/src/types.rs
// Summary: Shared constants (figure sizing, fonts, output layout).

/// Multiplier applied to an aspect ratio to get the figure size in inches.
pub const ASPECT_RATIO_SIZEUP: f32 = 3.0;
/// Default (width, height) aspect ratio of a committed graph.
pub const DEFAULT_ASPECT_RATIO: (f32, f32) = (4.0, 3.0);
/// PDF user-space units per inch.
pub const POINTS_PER_INCH: f32 = 72.0;
/// Raster resolution used for PNG output and on-screen previews.
pub const DEFAULT_DPI: f32 = 100.0;
/// Padding kept around the drawn content when cropping tightly, in inches.
pub const TIGHT_PAD_INCHES: f32 = 0.1;

/// Directory (under the output root) receiving rendered figures.
pub const FIGURES_DIR: &str = "plots";
/// Directory (under the output root) receiving raw data snapshots.
pub const RAW_DIR: &str = "raw";
/// Default figure suffix; selects the vector PDF backend.
pub const FIGURE_SUFFIX: &str = ".pdf";
/// Suffix of raw data snapshots.
pub const RAW_SUFFIX: &str = ".json";

/// Base font size for tick labels and legend entries, in points.
pub const FONT_SIZE: f32 = 10.0;
/// Font size for axis labels, in points.
pub const LABEL_FONT_SIZE: f32 = 11.0;

/// Convert a size in inches to points.
#[inline]
pub fn inches_to_points(inches: f32) -> f32 {
    inches * POINTS_PER_INCH
}
