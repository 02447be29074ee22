// File: crates/plots-core/src/palette.rs
// Summary: Fixed, cyclable series palette.
// Series past the end of the palette wrap around to the first color.

use skia_safe as skia;

/// Series colors in assignment order: r, g, b, lime, darkviolet, gold, cyan, magenta, firebrick.
pub const SERIES_RGB: [(u8, u8, u8); 9] = [
    (255, 0, 0),
    (0, 128, 0),
    (0, 0, 255),
    (0, 255, 0),
    (148, 0, 211),
    (255, 215, 0),
    (0, 255, 255),
    (255, 0, 255),
    (178, 34, 34),
];

#[derive(Clone, Debug, PartialEq)]
pub struct Palette {
    colors: Vec<skia::Color>,
}

impl Palette {
    pub fn new(colors: Vec<skia::Color>) -> Self {
        Self { colors }
    }

    pub fn len(&self) -> usize { self.colors.len() }

    pub fn is_empty(&self) -> bool { self.colors.is_empty() }

    /// Color for the `index`-th series. Wraps past the end; black when empty.
    pub fn color(&self, index: usize) -> skia::Color {
        if self.colors.is_empty() {
            return skia::Color::BLACK;
        }
        self.colors[index % self.colors.len()]
    }

    /// True when `count` series need more colors than the palette holds.
    pub fn wraps_for(&self, count: usize) -> bool {
        count > self.colors.len()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new(SERIES_RGB.iter().map(|&(r, g, b)| skia::Color::from_rgb(r, g, b)).collect())
    }
}
