// File: crates/plots-core/src/view.rs
// Visible data ranges for a panel: explicit limits, else autoscaled data extents.

/// Fraction of the data span added on each side when autoscaling.
pub const AUTOSCALE_MARGIN: f64 = 0.05;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewLimits {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Default for ViewLimits {
    fn default() -> Self {
        Self { x_min: 0.0, x_max: 1.0, y_min: 0.0, y_max: 1.0 }
    }
}

impl ViewLimits {
    /// Combine per-axis data extents `(min, max)` with optional fixed limits.
    /// An axis with neither data nor limits views `[0, 1]`.
    pub fn resolve(
        x_data: Option<(f64, f64)>,
        y_data: Option<(f64, f64)>,
        x_fixed: Option<(f64, f64)>,
        y_fixed: Option<(f64, f64)>,
    ) -> Self {
        let (x_min, x_max) = x_fixed.or(x_data.map(padded)).unwrap_or((0.0, 1.0));
        let (y_min, y_max) = y_fixed.or(y_data.map(padded)).unwrap_or((0.0, 1.0));
        Self { x_min, x_max, y_min, y_max }
    }
}

fn padded((lo, hi): (f64, f64)) -> (f64, f64) {
    let clamp = |v: f64| v.clamp(-f64::MAX, f64::MAX);
    if (hi - lo).abs() < 1e-12 {
        let half = if lo == 0.0 { 0.5 } else { lo.abs() * AUTOSCALE_MARGIN };
        return (clamp(lo - half), clamp(hi + half));
    }
    // halved span stays finite even when hi - lo would not
    let m = (hi * 0.5 - lo * 0.5) * (2.0 * AUTOSCALE_MARGIN);
    (clamp(lo - m), clamp(hi + m))
}
