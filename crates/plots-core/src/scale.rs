// File: crates/plots-core/src/scale.rs
// Summary: Linear data-to-page transforms for the X and Y axes of a panel.

/// Maps a data interval onto a span of page coordinates.
/// For Y, pass `(bottom, top)` as the pixel span so larger values draw higher.
#[derive(Clone, Copy, Debug)]
pub struct LinearScale {
    pub vmin: f64,
    pub vmax: f64,
    pub px_start: f32,
    pub px_end: f32,
}

impl LinearScale {
    pub fn new(vmin: f64, vmax: f64, px_start: f32, px_end: f32) -> Self {
        let mut s = Self { vmin, vmax, px_start, px_end };
        if (s.vmax - s.vmin).abs() < 1e-12 { s.vmax = s.vmin + 1.0; }
        s
    }

    #[inline]
    pub fn to_px(&self, v: f64) -> f32 {
        // halved so intervals wider than f64::MAX do not overflow
        let t = (v * 0.5 - self.vmin * 0.5) / (self.vmax * 0.5 - self.vmin * 0.5);
        self.px_start + t as f32 * (self.px_end - self.px_start)
    }

    /// Whether `v` falls inside the data interval (either orientation).
    pub fn contains(&self, v: f64) -> bool {
        let (lo, hi) = if self.vmin <= self.vmax { (self.vmin, self.vmax) } else { (self.vmax, self.vmin) };
        v >= lo && v <= hi
    }
}
