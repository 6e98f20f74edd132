// File: crates/aqchart-core/src/transform.rs
// Summary: Zoom/pan transform of the main plot and the constraint that keeps it inside the data.

use crate::geometry::{Point, Rect};
use crate::scale::LinearScale;

/// Screen = base * k + (x, y).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomTransform {
    pub k: f64,
    pub x: f64,
    pub y: f64,
}

impl Default for ZoomTransform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomTransform {
    pub const IDENTITY: Self = Self { k: 1.0, x: 0.0, y: 0.0 };

    pub const fn new(k: f64, x: f64, y: f64) -> Self {
        Self { k, x, y }
    }

    /// Compose a uniform scale on the right (translation is untouched).
    pub fn scale(&self, k: f64) -> Self {
        Self { k: self.k * k, ..*self }
    }

    /// Compose a translation expressed in base units.
    pub fn translate(&self, x: f64, y: f64) -> Self {
        Self { k: self.k, x: self.x + self.k * x, y: self.y + self.k * y }
    }

    #[inline] pub fn apply_x(&self, x: f64) -> f64 { x * self.k + self.x }
    #[inline] pub fn apply_y(&self, y: f64) -> f64 { y * self.k + self.y }
    #[inline] pub fn invert_x(&self, x: f64) -> f64 { (x - self.x) / self.k }
    #[inline] pub fn invert_y(&self, y: f64) -> f64 { (y - self.y) / self.k }

    pub fn apply(&self, p: Point) -> Point {
        Point::new(self.apply_x(p.x), self.apply_y(p.y))
    }

    pub fn invert(&self, p: Point) -> Point {
        Point::new(self.invert_x(p.x), self.invert_y(p.y))
    }

    /// Scale whose domain is what the transformed range now shows.
    pub fn rescale_x(&self, scale: &LinearScale) -> LinearScale {
        let (r0, r1) = scale.range();
        scale.with_domain((scale.invert(self.invert_x(r0)), scale.invert(self.invert_x(r1))))
    }

    pub fn rescale_y(&self, scale: &LinearScale) -> LinearScale {
        let (r0, r1) = scale.range();
        scale.with_domain((scale.invert(self.invert_y(r0)), scale.invert(self.invert_y(r1))))
    }

    /// Base-coordinate rectangle visible through a viewport of `width` x `height`.
    pub fn visible_window(&self, width: f64, height: f64) -> Rect {
        Rect::from_xywh(
            self.invert_x(0.0),
            self.invert_y(0.0),
            width / self.k,
            height / self.k,
        )
    }
}

/// Scale extent plus the viewport whose content must stay covered.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoomConstraint {
    pub width: f64,
    pub height: f64,
    pub min_scale: f64,
    pub max_scale: f64,
}

impl ZoomConstraint {
    pub fn new(width: f64, height: f64, scale_extent: (f64, f64)) -> Self {
        Self { width, height, min_scale: scale_extent.0, max_scale: scale_extent.1 }
    }

    /// Clamp k to the extent, then pin the translation so the visible window
    /// never slides past the data's top-left or bottom-right edge.
    pub fn constrain(&self, t: ZoomTransform) -> ZoomTransform {
        let k = if t.k.is_finite() {
            t.k.clamp(self.min_scale, self.max_scale)
        } else {
            self.min_scale
        };
        let x = pin_axis(t.x, k, self.width);
        let y = pin_axis(t.y, k, self.height);
        ZoomTransform { k, x, y }
    }

    /// Scale by `factor` keeping the screen point `center` fixed.
    pub fn zoom_at(&self, t: ZoomTransform, center: Point, factor: f64) -> ZoomTransform {
        if !factor.is_finite() || factor <= 0.0 {
            return self.constrain(t);
        }
        let k1 = (t.k * factor).clamp(self.min_scale, self.max_scale);
        let base = t.invert(center);
        self.constrain(ZoomTransform {
            k: k1,
            x: center.x - base.x * k1,
            y: center.y - base.y * k1,
        })
    }

    pub fn pan_by(&self, t: ZoomTransform, dx: f64, dy: f64) -> ZoomTransform {
        self.constrain(ZoomTransform { k: t.k, x: t.x + dx, y: t.y + dy })
    }
}

fn pin_axis(mut t: f64, k: f64, extent: f64) -> f64 {
    if !t.is_finite() || t > 0.0 {
        t = 0.0;
    }
    if t.abs() / k + extent / k > extent {
        t = -(extent * k - extent);
    }
    t
}
