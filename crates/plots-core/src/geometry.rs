// File: crates/plots-core/src/geometry.rs
// Summary: Lightweight rectangle math in points (PDF user space).

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn from_ltrb(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self { left, top, right, bottom }
    }
    pub fn from_ltwh(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self { left, top, right: left + width, bottom: top + height }
    }
    pub fn width(&self) -> f32 { self.right - self.left }
    pub fn height(&self) -> f32 { self.bottom - self.top }

    /// Smallest rectangle containing both.
    pub fn union(&self, other: &RectF) -> RectF {
        RectF {
            left: self.left.min(other.left),
            top: self.top.min(other.top),
            right: self.right.max(other.right),
            bottom: self.bottom.max(other.bottom),
        }
    }

    /// Grow (positive) or shrink (negative) on every side.
    pub fn outset(&self, by: f32) -> RectF {
        RectF { left: self.left - by, top: self.top - by, right: self.right + by, bottom: self.bottom + by }
    }

    pub fn to_skia(&self) -> skia::Rect {
        skia::Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}

#[inline]
pub fn clamp<T: PartialOrd>(v: T, lo: T, hi: T) -> T {
    if v < lo { lo } else if v > hi { hi } else { v }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn union_covers_both() {
        let a = RectF::from_ltrb(0.0, 0.0, 10.0, 10.0);
        let b = RectF::from_ltwh(-5.0, 4.0, 3.0, 20.0);
        assert_eq!(a.union(&b), RectF::from_ltrb(-5.0, 0.0, 10.0, 24.0));
        assert_eq!(a.outset(2.0).width(), 14.0);
    }
}
