// File: crates/aqchart-core/src/chart.rs
// Summary: Chart (immutable data + geometry) and Session (view state, hit index, event dispatch, rendering).

use std::collections::BTreeSet;
use std::path::Path;

use crate::config::ChartConfig;
use crate::dataset::Dataset;
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::hit::HitIndex;
use crate::layout::{Layout, Target};
use crate::navigator::Navigator;
use crate::render;
use crate::scale::Scales;
use crate::scene::{self, Scene};
use crate::theme::{self, Theme};
use crate::transform::ZoomConstraint;
use crate::view::{Event, ViewState};

/// Everything fixed for the lifetime of a session.
pub struct Chart {
    pub config: ChartConfig,
    pub dataset: Dataset,
    pub scales: Scales,
    pub constraint: ZoomConstraint,
    pub navigator: Navigator,
    pub layout: Layout,
    pub theme: Theme,
}

impl Chart {
    pub fn new(dataset: Dataset, config: ChartConfig) -> Result<Self> {
        config.validate()?;
        if dataset.is_empty() {
            tracing::warn!("chart built over an empty dataset; nothing will be plotted");
        }
        let scales = Scales::from_dataset(&dataset, &config);
        let constraint = ZoomConstraint::new(config.width, config.height, config.scale_extent);
        let navigator = Navigator::from_config(&config);
        let layout = Layout::new(&config, dataset.categories().len());
        let theme = theme::find(&config.theme);
        Ok(Self { config, dataset, scales, constraint, navigator, layout, theme })
    }

    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = theme;
        self
    }

    /// Plot rectangle in plot-local coordinates.
    pub fn plot_bounds(&self) -> Rect {
        Rect::from_size(self.config.width, self.config.height)
    }

    /// Hit index over the records of `enabled` categories, projected through the base scales.
    pub fn build_hit_index(&self, enabled: &BTreeSet<String>) -> HitIndex {
        let scales = &self.scales.main;
        let points = self
            .dataset
            .categories()
            .iter()
            .filter(|c| enabled.contains(&c.id))
            .flat_map(|c| c.points.iter().copied())
            .filter_map(|i| self.dataset.record(i).map(|r| (i, scales.project(r))));
        HitIndex::build(points, self.plot_bounds())
    }
}

/// A running chart: current view state plus the hit index for its enabled set.
pub struct Session {
    chart: Chart,
    state: ViewState,
    hits: HitIndex,
    indexed: BTreeSet<String>,
}

impl Session {
    pub fn new(chart: Chart) -> Self {
        let state = ViewState::initial(&chart);
        let indexed = state.enabled().clone();
        let hits = chart.build_hit_index(&indexed);
        Self { chart, state, hits, indexed }
    }

    pub fn chart(&self) -> &Chart { &self.chart }
    pub fn state(&self) -> &ViewState { &self.state }
    pub fn hits(&self) -> &HitIndex { &self.hits }

    /// Apply an event; the hit index is rebuilt only when the enabled set changed.
    pub fn dispatch(&mut self, event: Event) {
        self.state = self.state.reduce(&self.chart, &self.hits, &event);
        if self.state.enabled() != &self.indexed {
            self.indexed = self.state.enabled().clone();
            self.hits = self.chart.build_hit_index(&self.indexed);
        }
    }

    /// Translate a press at a surface position into events.
    pub fn press_at(&mut self, p: Point) -> Option<Target> {
        let target = self.chart.layout.locate(p)?;
        match target {
            Target::Legend(i) => {
                if let Some(c) = self.chart.dataset.categories().get(i) {
                    let id = c.id.clone();
                    self.dispatch(Event::LegendClick(id));
                }
            }
            Target::HideAll => self.dispatch(Event::HideAll),
            Target::ShowAll => self.dispatch(Event::ShowAll),
            Target::ResetZoom => self.dispatch(Event::ResetZoom),
            Target::Navigator(local) => self.dispatch(Event::NavigatorPress(local)),
            Target::Plot(_) => self.dispatch(Event::ZoomStart),
        }
        Some(target)
    }

    pub fn scene(&self) -> Scene {
        scene::build(&self.chart, &self.state)
    }

    pub fn render_png_bytes(&self) -> Result<Vec<u8>> {
        render::png_bytes(&self.scene())
    }

    pub fn render_to_png(&self, path: impl AsRef<Path>) -> Result<()> {
        render::write_png(&self.scene(), path)
    }

    /// RGBA8 pixels, width, height, row stride.
    pub fn render_to_rgba8(&self) -> Result<(Vec<u8>, u32, u32, usize)> {
        render::rgba8(&self.scene())
    }
}
