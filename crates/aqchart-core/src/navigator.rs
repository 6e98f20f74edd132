// File: crates/aqchart-core/src/navigator.rs
// Summary: Two-way mapping between the main transform and the navigator's viewport indicator.

use crate::config::ChartConfig;
use crate::geometry::{clamp, Point, Rect};
use crate::transform::ZoomTransform;

/// Navigator geometry: its size and how many main-plot pixels one navigator pixel spans.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Navigator {
    pub width: f64,
    pub height: f64,
    pub ratio: f64,
}

impl Navigator {
    pub fn new(width: f64, height: f64, ratio: f64) -> Self {
        Self { width, height, ratio }
    }

    pub fn from_config(config: &ChartConfig) -> Self {
        let (width, height) = config.navigator_size();
        Self::new(width, height, config.preview_ratio)
    }

    /// Indicator for a main transform: the main viewport's inverse image,
    /// shrunk into navigator pixels.
    pub fn indicator(&self, t: &ZoomTransform) -> Rect {
        Rect::from_xywh(
            t.invert_x(0.0) / self.ratio,
            t.invert_y(0.0) / self.ratio,
            self.width / t.k,
            self.height / t.k,
        )
    }

    /// Clamp a proposed indicator origin so the indicator stays inside the navigator.
    pub fn clamp_origin(&self, k: f64, origin: Point) -> Point {
        let max_x = (self.width - self.width / k).max(0.0);
        let max_y = (self.height - self.height / k).max(0.0);
        Point::new(clamp(origin.x, 0.0, max_x), clamp(origin.y, 0.0, max_y))
    }

    /// Main transform that puts the indicator's top-left at `origin` at the current scale.
    pub fn transform_for_origin(&self, k: f64, origin: Point) -> ZoomTransform {
        let o = self.clamp_origin(k, origin);
        ZoomTransform::IDENTITY
            .scale(k)
            .translate(-o.x * self.ratio, -o.y * self.ratio)
    }
}

/// An in-progress indicator drag; remembers where inside the indicator it was grabbed.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct IndicatorDrag {
    pub grab: Point,
}

impl IndicatorDrag {
    /// Starts only when the press lands on the indicator.
    pub fn begin(navigator: &Navigator, t: &ZoomTransform, press: Point) -> Option<Self> {
        let rect = navigator.indicator(t);
        rect.contains(press)
            .then(|| Self { grab: Point::new(press.x - rect.x, press.y - rect.y) })
    }

    pub fn origin_for(&self, pointer: Point) -> Point {
        Point::new(pointer.x - self.grab.x, pointer.y - self.grab.y)
    }
}
