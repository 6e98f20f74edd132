// File: crates/aqchart-core/src/types.rs
// Summary: Shared types and constants (chart area sizes, margins).

use serde::{Deserialize, Serialize};

/// Default main chart area width in pixels (plot + margins).
pub const CHART_AREA_WIDTH: f64 = 1000.0;
/// Default main chart area height in pixels (plot + margins).
pub const CHART_AREA_HEIGHT: f64 = 400.0;

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }

    /// Margins around the main plot.
    pub const fn main() -> Self {
        Self::new(50, 20, 20, 50)
    }

    /// Margins around the navigator preview.
    pub const fn preview() -> Self {
        Self::new(50, 20, 20, 15)
    }
}

impl Default for Insets {
    fn default() -> Self {
        Self::main()
    }
}
