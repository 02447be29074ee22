// File: crates/plots-core/src/figure.rs
// Summary: Figure (page of axes panels) and its Skia rendering to PDF, RGBA and PNG.

use std::path::Path;

use skia_safe as skia;

use crate::axes::{Axes, LegendLoc, Line2D, PlotStyle};
use crate::error::{PlotError, Result};
use crate::geometry::{clamp, RectF};
use crate::grid::{format_tick, nice_ticks, TARGET_TICKS};
use crate::scale::LinearScale;
use crate::text::{Anchor, TextShaper};
use crate::theme::Theme;
use crate::types::{inches_to_points, DEFAULT_DPI, FONT_SIZE, LABEL_FONT_SIZE, POINTS_PER_INCH, TIGHT_PAD_INCHES};
use crate::view::ViewLimits;

const TICK_LEN: f32 = 3.5;
const TICK_PAD: f32 = 3.5;
// Matches the tight-crop padding so a single panel crops to exactly the figure size.
const CELL_PAD: f32 = TIGHT_PAD_INCHES * POINTS_PER_INCH;
const FRAME_WIDTH: f32 = 0.8;
const MARKER_RADIUS: f32 = 2.0;
const LEGEND_PAD: f32 = 5.0;
const LEGEND_HANDLE: f32 = 20.0;

/// Output backend chosen from a file suffix.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FigureFormat {
    Pdf,
    Png,
}

impl FigureFormat {
    /// Accepts ".pdf"/"pdf"/".png"/"png", case-insensitively.
    pub fn from_suffix(suffix: &str) -> Result<Self> {
        match suffix.trim_start_matches('.').to_ascii_lowercase().as_str() {
            "pdf" => Ok(Self::Pdf),
            "png" => Ok(Self::Png),
            _ => Err(PlotError::UnsupportedFormat(suffix.to_string())),
        }
    }
}

#[derive(Clone, Debug)]
pub struct Figure {
    pub width_in: f32,
    pub height_in: f32,
    pub dpi: f32,
    pub theme: Theme,
    axes: Vec<Axes>,
}

impl Figure {
    /// Single panel covering the whole figure. Size is (width, height) in inches.
    pub fn new(size_in: (f32, f32)) -> Self {
        Self::subplots(size_in, 1, 1)
    }

    /// `rows x cols` grid of panels, indexed row-major.
    pub fn subplots(size_in: (f32, f32), rows: usize, cols: usize) -> Self {
        let (rows, cols) = (rows.max(1), cols.max(1));
        let mut axes = Vec::with_capacity(rows * cols);
        for r in 0..rows {
            for c in 0..cols {
                axes.push(Axes::new(RectF::from_ltrb(
                    c as f32 / cols as f32,
                    r as f32 / rows as f32,
                    (c + 1) as f32 / cols as f32,
                    (r + 1) as f32 / rows as f32,
                )));
            }
        }
        Self {
            width_in: size_in.0.max(0.1),
            height_in: size_in.1.max(0.1),
            dpi: DEFAULT_DPI,
            theme: Theme::default(),
            axes,
        }
    }

    pub fn axes_len(&self) -> usize { self.axes.len() }

    pub fn axes(&self, index: usize) -> Result<&Axes> {
        let len = self.axes.len();
        self.axes.get(index).ok_or(PlotError::NoSuchAxes { index, len })
    }

    pub fn axes_mut(&mut self, index: usize) -> Result<&mut Axes> {
        let len = self.axes.len();
        self.axes.get_mut(index).ok_or(PlotError::NoSuchAxes { index, len })
    }

    /// Page size in points.
    pub fn size_points(&self) -> (f32, f32) {
        (inches_to_points(self.width_in), inches_to_points(self.height_in))
    }

    /// Raster size at the figure dpi.
    pub fn pixel_size(&self) -> (i32, i32) {
        ((self.width_in * self.dpi).round().max(1.0) as i32, (self.height_in * self.dpi).round().max(1.0) as i32)
    }

    /// Page rectangle in points: the full figure, or the drawn content plus padding.
    pub fn page_rect(&self, shaper: &TextShaper, tight: bool) -> RectF {
        let (w, h) = self.size_points();
        let full = RectF::from_ltwh(0.0, 0.0, w, h);
        if !tight || self.axes.is_empty() {
            return full;
        }
        let content = self
            .axes
            .iter()
            .map(|ax| layout_panel(ax, full, shaper).content)
            .reduce(|a, b| a.union(&b))
            .unwrap_or(full);
        content.outset(inches_to_points(TIGHT_PAD_INCHES))
    }

    /// Paint every panel in page coordinates (points, figure origin).
    pub fn paint(&self, canvas: &skia::Canvas, shaper: &TextShaper) {
        let (w, h) = self.size_points();
        let full = RectF::from_ltwh(0.0, 0.0, w, h);
        for ax in &self.axes {
            let layout = layout_panel(ax, full, shaper);
            draw_panel(canvas, shaper, &self.theme, ax, &layout);
        }
    }

    /// Vector PDF of the figure; `tight` crops the page to the drawn content.
    pub fn to_pdf_bytes(&self, tight: bool) -> Result<Vec<u8>> {
        let shaper = TextShaper::new();
        let page = self.page_rect(&shaper, tight);
        let mut bytes: Vec<u8> = Vec::new();
        {
            let document = skia::pdf::new_document(&mut bytes, None);
            let mut on_page = document.begin_page((page.width(), page.height()), None);
            {
                let canvas = on_page.canvas();
                canvas.translate((-page.left, -page.top));
                fill_background(canvas, &page, self.theme.background);
                self.paint(canvas, &shaper);
            }
            on_page.end_page().close();
        }
        if bytes.is_empty() {
            return Err(PlotError::Render("PDF backend produced no output".into()));
        }
        Ok(bytes)
    }

    /// Render the full figure scaled to fit `width x height` pixels.
    /// Returns (pixels, width, height, stride) with RGBA8 unpremultiplied pixels.
    pub fn render_to_rgba8(&self, width: i32, height: i32) -> Result<(Vec<u8>, i32, i32, usize)> {
        let shaper = TextShaper::new();
        let page = self.page_rect(&shaper, false);
        let mut surface = self.rasterize(&shaper, page, width, height)?;
        let info = skia::ImageInfo::new(
            (width, height),
            skia::ColorType::RGBA8888,
            skia::AlphaType::Unpremul,
            None,
        );
        let stride = width as usize * 4;
        let mut pixels = vec![0u8; stride * height as usize];
        if !surface.read_pixels(&info, &mut pixels, stride, (0, 0)) {
            return Err(PlotError::Render("failed to read back raster pixels".into()));
        }
        Ok((pixels, width, height, stride))
    }

    /// PNG at the figure dpi; `tight` crops to the drawn content.
    pub fn to_png_bytes(&self, tight: bool) -> Result<Vec<u8>> {
        let shaper = TextShaper::new();
        let page = self.page_rect(&shaper, tight);
        let scale = self.dpi / POINTS_PER_INCH;
        let w = (page.width() * scale).round().max(1.0) as i32;
        let h = (page.height() * scale).round().max(1.0) as i32;
        let mut surface = self.rasterize(&shaper, page, w, h)?;

        let image = surface.image_snapshot();
        #[allow(deprecated)]
        let data = image
            .encode_to_data(skia::EncodedImageFormat::PNG)
            .ok_or_else(|| PlotError::Render("encode PNG failed".into()))?;
        Ok(data.as_bytes().to_vec())
    }

    /// Encode in `format` and write to `path` (parent directories must exist).
    pub fn save(&self, path: impl AsRef<Path>, format: FigureFormat, tight: bool) -> Result<()> {
        let bytes = match format {
            FigureFormat::Pdf => self.to_pdf_bytes(tight)?,
            FigureFormat::Png => self.to_png_bytes(tight)?,
        };
        let path = path.as_ref();
        std::fs::write(path, bytes).map_err(|e| PlotError::io(path, e))
    }

    fn rasterize(&self, shaper: &TextShaper, page: RectF, width: i32, height: i32) -> Result<skia::Surface> {
        if width <= 0 || height <= 0 {
            return Err(PlotError::Render(format!("invalid raster size {width}x{height}")));
        }
        let mut surface = skia::surfaces::raster_n32_premul((width, height))
            .ok_or_else(|| PlotError::Render("failed to create raster surface".into()))?;
        let canvas = surface.canvas();
        canvas.clear(self.theme.background);
        let s = (width as f32 / page.width()).min(height as f32 / page.height());
        canvas.scale((s, s));
        canvas.translate((-page.left, -page.top));
        self.paint(canvas, shaper);
        Ok(surface)
    }
}

// ---- layout -----------------------------------------------------------------

struct PanelLayout {
    plot: RectF,
    view: ViewLimits,
    x_ticks: Vec<(f64, String)>,
    y_ticks: Vec<(f64, String)>,
    x_tick_h: f32,
    y_tick_w: f32,
    label_h: f32,
    content: RectF,
}

fn tick_labels(lo: f64, hi: f64) -> Vec<(f64, String)> {
    let (ticks, step) = nice_ticks(lo, hi, TARGET_TICKS);
    ticks.into_iter().map(|t| (t, format_tick(t, step))).collect()
}

fn layout_panel(ax: &Axes, page: RectF, shaper: &TextShaper) -> PanelLayout {
    let view = ax.view_limits();
    let x_ticks = tick_labels(view.x_min, view.x_max);
    let y_ticks = tick_labels(view.y_min, view.y_max);

    let x_tick_w = x_ticks.iter().map(|(_, s)| shaper.measure(s, FONT_SIZE).0).fold(0.0f32, f32::max);
    let x_tick_h = if x_ticks.is_empty() { 0.0 } else { shaper.measure("0", FONT_SIZE).1 };
    let y_tick_w = y_ticks.iter().map(|(_, s)| shaper.measure(s, FONT_SIZE).0).fold(0.0f32, f32::max);
    let label_h = shaper.measure("Xg", LABEL_FONT_SIZE).1;

    let mut left = TICK_LEN + TICK_PAD + y_tick_w;
    if ax.y_axis.label.is_some() { left += TICK_PAD + label_h; }
    let mut bottom = TICK_LEN + TICK_PAD + x_tick_h;
    if ax.x_axis.label.is_some() { bottom += TICK_PAD + label_h; }
    let top = FONT_SIZE * 0.6;
    let right = (x_tick_w * 0.5).max(FONT_SIZE * 0.6);

    let cell = RectF::from_ltrb(
        page.left + ax.cell.left * page.width(),
        page.top + ax.cell.top * page.height(),
        page.left + ax.cell.right * page.width(),
        page.top + ax.cell.bottom * page.height(),
    );
    let inner = cell.outset(-CELL_PAD);
    let plot = RectF::from_ltrb(
        inner.left + left,
        inner.top + top,
        (inner.right - right).max(inner.left + left + 1.0),
        (inner.bottom - bottom).max(inner.top + top + 1.0),
    );
    let content = RectF::from_ltrb(plot.left - left, plot.top - top, plot.right + right, plot.bottom + bottom);

    PanelLayout { plot, view, x_ticks, y_ticks, x_tick_h, y_tick_w, label_h, content }
}

// ---- helpers ----------------------------------------------------------------

fn fill_background(canvas: &skia::Canvas, page: &RectF, color: skia::Color) {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_style(skia::paint::Style::Fill);
    canvas.draw_rect(page.to_skia(), &paint);
}

fn stroke(color: skia::Color, width: f32) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Stroke);
    paint.set_stroke_width(width);
    paint
}

fn fill(color: skia::Color) -> skia::Paint {
    let mut paint = skia::Paint::default();
    paint.set_color(color);
    paint.set_anti_alias(true);
    paint.set_style(skia::paint::Style::Fill);
    paint
}

fn draw_panel(canvas: &skia::Canvas, shaper: &TextShaper, theme: &Theme, ax: &Axes, layout: &PanelLayout) {
    let plot = layout.plot;
    let sx = LinearScale::new(layout.view.x_min, layout.view.x_max, plot.left, plot.right);
    let sy = LinearScale::new(layout.view.y_min, layout.view.y_max, plot.bottom, plot.top);

    canvas.draw_rect(plot.to_skia(), &fill(theme.panel));

    canvas.save();
    canvas.clip_rect(plot.to_skia(), skia::ClipOp::Intersect, true);

    if let Some(width) = ax.grid {
        let grid = stroke(theme.grid, width);
        for (x, _) in &layout.x_ticks {
            let px = sx.to_px(*x);
            canvas.draw_line((px, plot.top), (px, plot.bottom), &grid);
        }
        for (y, _) in &layout.y_ticks {
            let py = sy.to_px(*y);
            canvas.draw_line((plot.left, py), (plot.right, py), &grid);
        }
    }

    for h in &ax.hlines {
        if !sy.contains(h.y) { continue; }
        let py = sy.to_px(h.y);
        canvas.draw_line((plot.left, py), (plot.right, py), &stroke(h.color, h.linewidth));
    }

    for line in &ax.lines {
        draw_curve(canvas, line, &sx, &sy);
    }
    canvas.restore();

    // Frame and ticks
    canvas.draw_rect(plot.to_skia(), &stroke(theme.frame, FRAME_WIDTH));
    let tick = stroke(theme.tick, FRAME_WIDTH);
    for (x, label) in &layout.x_ticks {
        let px = sx.to_px(*x);
        canvas.draw_line((px, plot.bottom), (px, plot.bottom + TICK_LEN), &tick);
        let cy = plot.bottom + TICK_LEN + TICK_PAD + layout.x_tick_h * 0.5;
        shaper.draw(canvas, label, px, cy, FONT_SIZE, theme.tick_label, Anchor::Center);
    }
    for (y, label) in &layout.y_ticks {
        let py = sy.to_px(*y);
        canvas.draw_line((plot.left - TICK_LEN, py), (plot.left, py), &tick);
        shaper.draw(canvas, label, plot.left - TICK_LEN - TICK_PAD, py, FONT_SIZE, theme.tick_label, Anchor::Right);
    }

    // Axis labels
    if let Some(label) = &ax.x_axis.label {
        let cy = plot.bottom + TICK_LEN + TICK_PAD + layout.x_tick_h + TICK_PAD + layout.label_h * 0.5;
        shaper.draw(canvas, label, (plot.left + plot.right) * 0.5, cy, LABEL_FONT_SIZE, theme.axis_label, Anchor::Center);
    }
    if let Some(label) = &ax.y_axis.label {
        let cx = plot.left - TICK_LEN - TICK_PAD - layout.y_tick_w - TICK_PAD - layout.label_h * 0.5;
        shaper.draw_vertical(canvas, label, cx, (plot.top + plot.bottom) * 0.5, LABEL_FONT_SIZE, theme.axis_label);
    }

    if let Some(loc) = ax.legend {
        draw_legend(canvas, shaper, theme, ax, plot, loc);
    }
}

fn draw_curve(canvas: &skia::Canvas, line: &Line2D, sx: &LinearScale, sy: &LinearScale) {
    let mut paint = stroke(line.color, line.linewidth);
    paint.set_stroke_cap(skia::paint::Cap::Round);

    // Non-finite samples split the polyline.
    let mut run: Vec<skia::Point> = Vec::new();
    let flush = |run: &mut Vec<skia::Point>| {
        if run.len() >= 2 {
            canvas.draw_points(skia::canvas::PointMode::Polygon, &run[..], &paint);
        }
        run.clear();
    };
    for (&x, &y) in line.xs.iter().zip(&line.ys) {
        if x.is_finite() && y.is_finite() {
            run.push(skia::Point::new(sx.to_px(x), sy.to_px(y)));
        } else {
            flush(&mut run);
        }
    }
    flush(&mut run);

    if line.style == PlotStyle::LinePoints {
        let marker = fill(line.color);
        let radius = MARKER_RADIUS.max(line.linewidth);
        for (&x, &y) in line.xs.iter().zip(&line.ys) {
            if x.is_finite() && y.is_finite() {
                canvas.draw_circle((sx.to_px(x), sy.to_px(y)), radius, &marker);
            }
        }
    }
}

fn draw_legend(canvas: &skia::Canvas, shaper: &TextShaper, theme: &Theme, ax: &Axes, plot: RectF, loc: LegendLoc) {
    let entries: Vec<&Line2D> = ax.legend_entries().collect();
    if entries.is_empty() {
        tracing::debug!("legend requested but no labeled curves");
        return;
    }
    let row_h = FONT_SIZE * 1.4;
    let text_w = entries.iter().map(|l| shaper.measure(&l.label, FONT_SIZE).0).fold(0.0f32, f32::max);
    let w = LEGEND_PAD * 3.0 + LEGEND_HANDLE + text_w;
    let h = LEGEND_PAD * 2.0 + row_h * entries.len() as f32;
    let inset = LEGEND_PAD;
    let (left, top) = match loc {
        LegendLoc::UpperRight => (plot.right - inset - w, plot.top + inset),
        LegendLoc::UpperLeft => (plot.left + inset, plot.top + inset),
        LegendLoc::LowerLeft => (plot.left + inset, plot.bottom - inset - h),
        LegendLoc::LowerRight => (plot.right - inset - w, plot.bottom - inset - h),
    };
    let left = clamp(left, plot.left, plot.right.max(plot.left));
    let top = clamp(top, plot.top, plot.bottom.max(plot.top));
    let frame = RectF::from_ltwh(left, top, w, h);

    canvas.draw_rect(frame.to_skia(), &fill(theme.legend_background));
    canvas.draw_rect(frame.to_skia(), &stroke(theme.legend_border, FRAME_WIDTH));

    for (i, line) in entries.iter().enumerate() {
        let cy = top + LEGEND_PAD + row_h * (i as f32 + 0.5);
        let x0 = left + LEGEND_PAD;
        let x1 = x0 + LEGEND_HANDLE;
        canvas.draw_line((x0, cy), (x1, cy), &stroke(line.color, line.linewidth));
        if line.style == PlotStyle::LinePoints {
            canvas.draw_circle(((x0 + x1) * 0.5, cy), MARKER_RADIUS.max(line.linewidth), &fill(line.color));
        }
        shaper.draw(canvas, &line.label, x1 + LEGEND_PAD, cy, FONT_SIZE, theme.legend_text, Anchor::Left);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suffix_selects_backend() {
        assert_eq!(FigureFormat::from_suffix(".pdf").unwrap(), FigureFormat::Pdf);
        assert_eq!(FigureFormat::from_suffix("PNG").unwrap(), FigureFormat::Png);
        assert!(matches!(FigureFormat::from_suffix(".svg"), Err(PlotError::UnsupportedFormat(_))));
    }

    #[test]
    fn subplots_are_row_major() {
        let fig = Figure::subplots((8.0, 4.0), 2, 3);
        assert_eq!(fig.axes_len(), 6);
        let third = fig.axes(2).unwrap();
        assert!((third.cell.left - 2.0 / 3.0).abs() < 1e-6);
        assert_eq!(third.cell.top, 0.0);
        assert_eq!(fig.axes(3).unwrap().cell.top, 0.5);
        assert!(matches!(fig.axes(6), Err(PlotError::NoSuchAxes { index: 6, len: 6 })));
    }

    #[test]
    fn sizes_follow_inches() {
        let fig = Figure::new((12.0, 9.0));
        assert_eq!(fig.size_points(), (864.0, 648.0));
        assert_eq!(fig.pixel_size(), (1200, 900));
    }
}
