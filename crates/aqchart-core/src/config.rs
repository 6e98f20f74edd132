// File: crates/aqchart-core/src/config.rs
// Summary: Chart layout configuration (plot size, margins, navigator ratio, zoom extent, theme).

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{ChartError, Result};
use crate::geometry::Rect;
use crate::types::{Insets, CHART_AREA_HEIGHT, CHART_AREA_WIDTH};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    /// Main plot width, excluding margins.
    pub width: f64,
    /// Main plot height, excluding margins.
    pub height: f64,
    pub margin: Insets,
    pub preview_margin: Insets,
    /// Main plot size divided by navigator size.
    pub preview_ratio: f64,
    pub legend_width: f64,
    /// Allowed zoom factors, `[min, max]`.
    pub scale_extent: (f64, f64),
    pub theme: String,
}

impl Default for ChartConfig {
    fn default() -> Self {
        let margin = Insets::main();
        Self {
            width: CHART_AREA_WIDTH - margin.hsum() as f64,
            height: CHART_AREA_HEIGHT - margin.vsum() as f64,
            margin,
            preview_margin: Insets::preview(),
            preview_ratio: 2.5,
            legend_width: 200.0,
            scale_extent: (1.0, 10.0),
            theme: "light".to_string(),
        }
    }
}

impl ChartConfig {
    /// Load a JSON5 config file; missing keys take their defaults.
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        let config: Self = json5::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !(self.width > 0.0 && self.height > 0.0) {
            return Err(ChartError::Config(format!(
                "plot size must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if !(self.preview_ratio >= 1.0) {
            return Err(ChartError::Config(format!(
                "preview_ratio must be >= 1, got {}",
                self.preview_ratio
            )));
        }
        let (lo, hi) = self.scale_extent;
        if !(lo >= 1.0 && hi >= lo && hi.is_finite()) {
            return Err(ChartError::Config(format!(
                "scale_extent must satisfy 1 <= min <= max, got [{lo}, {hi}]"
            )));
        }
        if self.legend_width < 0.0 {
            return Err(ChartError::Config("legend_width must be non-negative".into()));
        }
        Ok(())
    }

    pub fn navigator_size(&self) -> (f64, f64) {
        (self.width / self.preview_ratio, self.height / self.preview_ratio)
    }

    /// Main chart area (plot + margins).
    pub fn chart_area(&self) -> Rect {
        Rect::from_size(
            self.width + self.margin.hsum() as f64,
            self.height + self.margin.vsum() as f64,
        )
    }

    /// Main plot in surface coordinates.
    pub fn plot_rect(&self) -> Rect {
        Rect::from_xywh(self.margin.left as f64, self.margin.top as f64, self.width, self.height)
    }

    /// Navigator plot in surface coordinates, below the main chart area.
    pub fn navigator_rect(&self) -> Rect {
        let (nw, nh) = self.navigator_size();
        Rect::from_xywh(
            self.preview_margin.left as f64,
            self.chart_area().height + self.preview_margin.top as f64,
            nw,
            nh,
        )
    }

    /// Legend panel to the right of the main chart area.
    pub fn legend_rect(&self) -> Rect {
        let area = self.chart_area();
        Rect::from_xywh(area.width, 0.0, self.legend_width, self.surface_size().1)
    }

    /// Whole drawing surface.
    pub fn surface_size(&self) -> (f64, f64) {
        let area = self.chart_area();
        let nav = self.navigator_rect();
        (area.width + self.legend_width, nav.bottom() + self.preview_margin.bottom as f64)
    }
}
