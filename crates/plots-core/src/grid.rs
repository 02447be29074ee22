// File: crates/plots-core/src/grid.rs
// Summary: Tick placement and tick label formatting for grid lines.

/// Approximate number of major ticks per axis.
pub const TARGET_TICKS: usize = 6;

/// Step from the 1/2/2.5/5 x 10^n family closest above `span / target`.
pub fn nice_step(span: f64, target: usize) -> f64 {
    round_step(span.abs() / target.max(1) as f64)
}

fn round_step(raw: f64) -> f64 {
    if !raw.is_finite() || raw <= 0.0 {
        return 1.0;
    }
    let mag = 10f64.powf(raw.log10().floor());
    let norm = raw / mag;
    let nice = if norm <= 1.0 {
        1.0
    } else if norm <= 2.0 {
        2.0
    } else if norm <= 2.5 {
        2.5
    } else if norm <= 5.0 {
        5.0
    } else {
        10.0
    };
    nice * mag
}

/// Multiples of a nice step lying inside `[min, max]` (order-insensitive).
/// Non-finite bounds yield no ticks.
pub fn nice_ticks(min: f64, max: f64, target: usize) -> (Vec<f64>, f64) {
    let target = target.max(1);
    if !min.is_finite() || !max.is_finite() {
        return (Vec::new(), 1.0);
    }
    let (lo, hi) = if min <= max { (min, max) } else { (max, min) };
    // divide before subtracting so spans wider than f64::MAX stay finite
    let t = target as f64;
    let raw = hi / t - lo / t;
    let step = if raw.is_finite() { round_step(raw) } else { round_step(hi / t * 0.5 - lo / t * 0.5) * 2.0 };
    if !step.is_finite() {
        return (Vec::new(), 1.0);
    }
    let eps = step * 1e-9;
    let first = (lo / step).ceil();
    let last = (hi / step + 1e-9).floor();
    if !(last - first).is_finite() || last - first > (4 * target) as f64 {
        return (Vec::new(), step);
    }
    let (first, last) = (first as i64, last as i64);
    let ticks = (first..=last)
        .map(|k| {
            let v = k as f64 * step;
            // avoid "-0"
            if v.abs() < eps { 0.0 } else { v }
        })
        .collect();
    (ticks, step)
}

/// Render a tick value with as many decimals as `step` needs.
pub fn format_tick(value: f64, step: f64) -> String {
    let abs = value.abs();
    if abs != 0.0 && (abs >= 1e6 || abs < 1e-4) {
        return format!("{value:.1e}");
    }
    let decimals = step_decimals(step);
    let s = format!("{value:.decimals$}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Fewest decimals that represent `step` exactly (capped at 10).
fn step_decimals(step: f64) -> usize {
    let step = step.abs();
    (0..10)
        .find(|&d| {
            let scaled = step * 10f64.powi(d as i32);
            (scaled - scaled.round()).abs() < 1e-6 * scaled.max(1.0)
        })
        .unwrap_or(10)
}
