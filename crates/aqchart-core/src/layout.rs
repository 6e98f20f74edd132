// File: crates/aqchart-core/src/layout.rs
// Summary: Where each interactive region sits on the surface, and pointer hit-testing against them.

use crate::config::ChartConfig;
use crate::geometry::{Point, Rect};

/// Legend row height in pixels.
pub const LEGEND_ROW: f64 = 20.0;
const BUTTON_WIDTH: f64 = 80.0;
const BUTTON_HEIGHT: f64 = 22.0;
const BUTTON_GAP: f64 = 6.0;

/// What a surface position lands on. Positions are local to the region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Target {
    Plot(Point),
    Navigator(Point),
    Legend(usize),
    HideAll,
    ShowAll,
    ResetZoom,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Button {
    HideAll,
    ShowAll,
    ResetZoom,
}

impl Button {
    pub const ALL: [Button; 3] = [Button::HideAll, Button::ShowAll, Button::ResetZoom];

    pub fn label(&self) -> &'static str {
        match self {
            Button::HideAll => "Hide all",
            Button::ShowAll => "Show all",
            Button::ResetZoom => "Reset zoom",
        }
    }

    fn target(&self) -> Target {
        match self {
            Button::HideAll => Target::HideAll,
            Button::ShowAll => Target::ShowAll,
            Button::ResetZoom => Target::ResetZoom,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Layout {
    pub surface: Rect,
    pub plot: Rect,
    pub navigator: Rect,
    pub legend: Rect,
    /// One row per category, in display order.
    pub legend_rows: Vec<Rect>,
    pub buttons: Vec<(Button, Rect)>,
}

impl Layout {
    pub fn new(config: &ChartConfig, categories: usize) -> Self {
        let (w, h) = config.surface_size();
        let legend = config.legend_rect();
        // first row sits below the date readout
        let legend_rows = (0..categories)
            .map(|i| {
                Rect::from_xywh(legend.x, legend.y + LEGEND_ROW * (i as f64 + 1.0) + 6.0, legend.width, LEGEND_ROW)
            })
            .collect::<Vec<_>>();
        let buttons_top = legend_rows
            .last()
            .map(|r| r.bottom())
            .unwrap_or(legend.y + LEGEND_ROW + 6.0)
            + 2.0 * BUTTON_GAP;
        let buttons = Button::ALL
            .iter()
            .enumerate()
            .map(|(i, b)| {
                let y = buttons_top + i as f64 * (BUTTON_HEIGHT + BUTTON_GAP);
                (*b, Rect::from_xywh(legend.x + 60.0, y, BUTTON_WIDTH, BUTTON_HEIGHT))
            })
            .collect();
        Self {
            surface: Rect::from_size(w, h),
            plot: config.plot_rect(),
            navigator: config.navigator_rect(),
            legend,
            legend_rows,
            buttons,
        }
    }

    /// Resolve a surface position. Buttons and legend rows win over the panel;
    /// the navigator and plot report local coordinates.
    pub fn locate(&self, p: Point) -> Option<Target> {
        if let Some((b, _)) = self.buttons.iter().find(|(_, r)| r.contains(p)) {
            return Some(b.target());
        }
        if let Some(i) = self.legend_rows.iter().position(|r| r.contains(p)) {
            return Some(Target::Legend(i));
        }
        if self.navigator.contains(p) {
            return Some(Target::Navigator(self.navigator.to_local(p)));
        }
        if self.plot.contains(p) {
            return Some(Target::Plot(self.plot.to_local(p)));
        }
        None
    }
}
