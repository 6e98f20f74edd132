// File: crates/aqchart-core/src/view.rs
// First-class view state and the reducer that applies input events to it.

use std::collections::BTreeSet;

use crate::chart::Chart;
use crate::geometry::Point;
use crate::hit::{Hit, HitIndex};
use crate::navigator::IndicatorDrag;
use crate::selection::LegendState;
use crate::transform::ZoomTransform;

/// Input events, in the local coordinates of the region they happened over.
#[derive(Clone, Debug, PartialEq)]
pub enum Event {
    LegendClick(String),
    HideAll,
    ShowAll,
    ResetZoom,
    /// Pointer over the plot (plot-local, zoomed screen coordinates).
    PointerMove(Point),
    PointerLeave,
    PlotClick(Point),
    /// A zoom/pan gesture began.
    ZoomStart,
    Zoom { center: Point, factor: f64 },
    Pan { dx: f64, dy: f64 },
    ZoomTo(ZoomTransform),
    /// Navigator-local pointer positions.
    NavigatorPress(Point),
    NavigatorDrag(Point),
    NavigatorRelease,
}

#[derive(Clone, Debug, PartialEq)]
pub struct ViewState {
    pub transform: ZoomTransform,
    pub legend: LegendState,
    /// Record under the pointer, if any.
    pub hover: Option<usize>,
    /// Category drawn in the navigator.
    pub preview: Option<String>,
    pub drag: Option<IndicatorDrag>,
}

impl ViewState {
    /// Identity transform, every category enabled.
    pub fn initial(chart: &Chart) -> Self {
        Self {
            transform: ZoomTransform::IDENTITY,
            legend: LegendState::new(chart.dataset.category_ids()),
            hover: None,
            preview: None,
            drag: None,
        }
    }

    pub fn enabled(&self) -> &BTreeSet<String> {
        self.legend.enabled()
    }

    pub fn single_selected(&self) -> Option<&str> {
        self.legend.single_selected()
    }

    /// Apply one event. Pure: the input state is left untouched.
    pub fn reduce(&self, chart: &Chart, hits: &HitIndex, event: &Event) -> ViewState {
        let mut next = self.clone();
        match event {
            Event::LegendClick(id) => {
                next.legend.click(id);
                next.after_selection(chart);
            }
            Event::HideAll => {
                next.legend.hide_all();
                next.after_selection(chart);
            }
            Event::ShowAll => {
                next.legend.show_all();
                next.after_selection(chart);
            }
            Event::ResetZoom => {
                next.transform = ZoomTransform::IDENTITY;
                next.hover = None;
            }
            Event::PointerMove(p) => match self.pick(chart, hits, *p) {
                Some(hit) => {
                    next.hover = Some(hit.record);
                    next.preview = chart.dataset.record(hit.record).map(|r| r.category_id.clone());
                }
                None => next.hover = None,
            },
            Event::PointerLeave => next.hover = None,
            Event::PlotClick(p) => {
                let category = self
                    .pick(chart, hits, *p)
                    .and_then(|hit| chart.dataset.record(hit.record))
                    .map(|r| r.category_id.clone());
                if let Some(id) = category {
                    next.legend.click_point(&id);
                    next.after_selection(chart);
                }
            }
            Event::ZoomStart => next.hover = None,
            Event::Zoom { center, factor } => {
                next.transform = chart.constraint.zoom_at(self.transform, *center, *factor);
                next.hover = None;
            }
            Event::Pan { dx, dy } => {
                next.transform = chart.constraint.pan_by(self.transform, *dx, *dy);
                next.hover = None;
            }
            Event::ZoomTo(t) => {
                next.transform = chart.constraint.constrain(*t);
                next.hover = None;
            }
            Event::NavigatorPress(p) => {
                next.drag = IndicatorDrag::begin(&chart.navigator, &self.transform, *p);
            }
            Event::NavigatorDrag(p) => {
                if let Some(drag) = self.drag {
                    let t = chart
                        .navigator
                        .transform_for_origin(self.transform.k, drag.origin_for(*p));
                    next.transform = chart.constraint.constrain(t);
                    next.hover = None;
                }
            }
            Event::NavigatorRelease => next.drag = None,
        }
        next
    }

    /// Nearest shown record under a plot-local pointer position.
    pub fn pick(&self, chart: &Chart, hits: &HitIndex, p: Point) -> Option<Hit> {
        if !chart.plot_bounds().contains(p) {
            return None;
        }
        hits.nearest(self.transform.invert(p))
    }

    fn after_selection(&mut self, chart: &Chart) {
        let enabled = self.legend.enabled();
        if let Some(r) = self.hover.and_then(|i| chart.dataset.record(i)) {
            if !enabled.contains(&r.category_id) {
                self.hover = None;
            }
        }
        if enabled.len() == 1 {
            self.preview = enabled.iter().next().cloned();
        }
    }
}
