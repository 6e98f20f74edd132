// File: crates/aqchart-core/src/scale.rs
// Summary: Linear domain -> range scales for time (X) and level (Y), main and navigator pairs.

use crate::config::ChartConfig;
use crate::dataset::{Dataset, Record};
use crate::geometry::Point;

/// Logical X coordinate (milliseconds since epoch).
pub type Logical = f64;
/// Value Y coordinate (reading level).
pub type Value = f64;

/// Continuous linear mapping from a data domain onto a pixel range.
/// A zero-width domain maps everything onto the middle of the range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub const fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) { self.domain }
    pub fn range(&self) -> (f64, f64) { self.range }

    pub fn with_domain(&self, domain: (f64, f64)) -> Self {
        Self { domain, range: self.range }
    }

    #[inline]
    pub fn apply(&self, v: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = d1 - d0;
        if span == 0.0 || !span.is_finite() {
            return (r0 + r1) * 0.5;
        }
        r0 + (v - d0) / span * (r1 - r0)
    }

    #[inline]
    pub fn invert(&self, px: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        let span = r1 - r0;
        if span == 0.0 {
            return (d0 + d1) * 0.5;
        }
        d0 + (px - r0) / span * (d1 - d0)
    }
}

/// A time scale and a value scale sharing one output rectangle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScalePair {
    pub x: LinearScale,
    pub y: LinearScale,
}

impl ScalePair {
    /// Y range is flipped so larger levels sit higher on screen.
    pub fn new(time: (Logical, Logical), level: (Value, Value), width: f64, height: f64) -> Self {
        Self {
            x: LinearScale::new(time, (0.0, width)),
            y: LinearScale::new(level, (height, 0.0)),
        }
    }

    #[inline]
    pub fn project(&self, r: &Record) -> Point {
        Point::new(self.x.apply(r.time()), self.y.apply(r.level))
    }
}

/// Main (full resolution) and navigator (compressed) scales over the same domains.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Scales {
    pub main: ScalePair,
    pub navigator: ScalePair,
}

impl Scales {
    pub fn from_dataset(dataset: &Dataset, config: &ChartConfig) -> Self {
        let (time, level) = domains(dataset.records());
        let (nw, nh) = config.navigator_size();
        Self {
            main: ScalePair::new(time, level, config.width, config.height),
            navigator: ScalePair::new(time, level, nw, nh),
        }
    }
}

/// Time extent and `0..max(level)` over all records; `(0, 0)` for both when empty.
pub fn domains(records: &[Record]) -> ((Logical, Logical), (Value, Value)) {
    if records.is_empty() {
        return ((0.0, 0.0), (0.0, 0.0));
    }
    let mut t_min = f64::INFINITY;
    let mut t_max = f64::NEG_INFINITY;
    let mut v_max = f64::NEG_INFINITY;
    for r in records {
        let t = r.time();
        t_min = t_min.min(t);
        t_max = t_max.max(t);
        v_max = v_max.max(r.level);
    }
    ((t_min, t_max), (0.0, v_max))
}
