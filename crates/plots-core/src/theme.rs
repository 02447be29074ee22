// File: crates/plots-core/src/theme.rs
// Summary: Light/Dark theming for figure chrome (series colors come from the palette).

use skia_safe as skia;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub panel: skia::Color,
    pub frame: skia::Color,
    pub grid: skia::Color,
    pub zero_line: skia::Color,
    pub tick: skia::Color,
    pub tick_label: skia::Color,
    pub axis_label: skia::Color,
    pub legend_background: skia::Color,
    pub legend_border: skia::Color,
    pub legend_text: skia::Color,
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            panel: skia::Color::from_argb(255, 255, 255, 255),
            frame: skia::Color::from_argb(255, 0, 0, 0),
            grid: skia::Color::from_argb(255, 0xb0, 0xb0, 0xb0),
            zero_line: skia::Color::from_argb(255, 0, 0, 0),
            tick: skia::Color::from_argb(255, 0, 0, 0),
            tick_label: skia::Color::from_argb(255, 0, 0, 0),
            axis_label: skia::Color::from_argb(255, 0, 0, 0),
            legend_background: skia::Color::from_argb(204, 255, 255, 255),
            legend_border: skia::Color::from_argb(255, 0xcc, 0xcc, 0xcc),
            legend_text: skia::Color::from_argb(255, 0, 0, 0),
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            panel: skia::Color::from_argb(255, 24, 24, 28),
            frame: skia::Color::from_argb(255, 180, 180, 190),
            grid: skia::Color::from_argb(255, 60, 60, 66),
            zero_line: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            tick_label: skia::Color::from_argb(255, 210, 210, 220),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            legend_background: skia::Color::from_argb(204, 30, 30, 34),
            legend_border: skia::Color::from_argb(255, 90, 90, 100),
            legend_text: skia::Color::from_argb(255, 235, 235, 245),
        }
    }
}

impl Default for Theme {
    fn default() -> Self { Self::light() }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    for t in presets() { if t.name.eq_ignore_ascii_case(name) { return t; } }
    Theme::light()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive_with_fallback() {
        assert_eq!(find("DARK").name, "dark");
        assert_eq!(find("nope").name, "light");
    }
}
