// File: crates/aqchart-core/src/theme.rs
// Summary: Light/Dark theming for chart, legend and navigator colors, plus the category palette.

use skia_safe as skia;

/// Ten-colour categorical palette (category10).
pub const CATEGORY10: [skia::Color; 10] = [
    skia::Color::new(0xff1f77b4),
    skia::Color::new(0xffff7f0e),
    skia::Color::new(0xff2ca02c),
    skia::Color::new(0xffd62728),
    skia::Color::new(0xff9467bd),
    skia::Color::new(0xff8c564b),
    skia::Color::new(0xffe377c2),
    skia::Color::new(0xff7f7f7f),
    skia::Color::new(0xffbcbd22),
    skia::Color::new(0xff17becf),
];

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Theme {
    pub name: &'static str,
    pub background: skia::Color,
    pub grid: skia::Color,
    pub axis_line: skia::Color,
    pub axis_label: skia::Color,
    pub tick: skia::Color,
    pub hover_dot: skia::Color,
    pub navigator_fill: skia::Color,
    pub navigator_stroke: skia::Color,
    pub indicator_fill: skia::Color,
    pub button_fill: skia::Color,
    pub button_text: skia::Color,
    pub palette: [skia::Color; 10],
}

impl Theme {
    pub fn light() -> Self {
        Self {
            name: "light",
            background: skia::Color::from_argb(255, 255, 255, 255),
            grid: skia::Color::from_argb(255, 230, 230, 235),
            axis_line: skia::Color::from_argb(255, 60, 60, 70),
            axis_label: skia::Color::from_argb(255, 20, 20, 30),
            tick: skia::Color::from_argb(255, 100, 100, 110),
            hover_dot: skia::Color::from_argb(255, 40, 40, 40),
            navigator_fill: skia::Color::from_argb(255, 0xbb, 0xbb, 0xbb),
            navigator_stroke: skia::Color::from_argb(255, 0xca, 0xca, 0xca),
            indicator_fill: skia::Color::from_argb(255, 255, 255, 255),
            button_fill: skia::Color::from_argb(255, 238, 238, 242),
            button_text: skia::Color::from_argb(255, 20, 20, 30),
            palette: CATEGORY10,
        }
    }

    pub fn dark() -> Self {
        Self {
            name: "dark",
            background: skia::Color::from_argb(255, 18, 18, 20),
            grid: skia::Color::from_argb(255, 40, 40, 45),
            axis_line: skia::Color::from_argb(255, 180, 180, 190),
            axis_label: skia::Color::from_argb(255, 235, 235, 245),
            tick: skia::Color::from_argb(255, 150, 150, 160),
            hover_dot: skia::Color::from_argb(255, 255, 230, 70),
            navigator_fill: skia::Color::from_argb(255, 48, 48, 54),
            navigator_stroke: skia::Color::from_argb(255, 80, 80, 90),
            indicator_fill: skia::Color::from_argb(255, 28, 28, 32),
            button_fill: skia::Color::from_argb(255, 44, 44, 50),
            button_text: skia::Color::from_argb(255, 235, 235, 245),
            palette: CATEGORY10,
        }
    }

    /// Colour of the category at display position `index`.
    pub fn category_color(&self, index: usize) -> skia::Color {
        self.palette[index % self.palette.len()]
    }
}

/// Return a list of built-in theme presets.
pub fn presets() -> Vec<Theme> {
    vec![Theme::light(), Theme::dark()]
}

/// Find a theme by its `name`, falling back to light.
pub fn find(name: &str) -> Theme {
    presets()
        .into_iter()
        .find(|t| t.name.eq_ignore_ascii_case(name))
        .unwrap_or_else(Theme::light)
}
