// File: crates/aqchart-core/src/scene.rs
// Summary: Pure projection of (Chart, ViewState) into backend-agnostic draw commands.
// Notes:
// - No caching or accumulated state: the same inputs always yield the same Scene.

use skia_safe as skia;

use crate::chart::Chart;
use crate::dataset::{Category, Record};
use crate::geometry::{Point, Rect};
use crate::grid::{format_time, linspace, time_tick_count};
use crate::layout::LEGEND_ROW;
use crate::scale::LinearScale;
use crate::view::ViewState;

const DISABLED_ALPHA: u8 = 51;
const LINE_WIDTH: f32 = 1.5;
const HOVER_LINE_WIDTH: f32 = 3.0;
const HOVER_DOT_RADIUS: f64 = 5.0;
const Y_TITLE: &str = "Pollution levels (µg/m³). Temp (°C).";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Align {
    Start,
    Middle,
    End,
}

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    Rect {
        rect: Rect,
        fill: Option<skia::Color>,
        stroke: Option<skia::Color>,
    },
    /// Disconnected runs of one series.
    Polyline {
        segments: Vec<Vec<Point>>,
        color: skia::Color,
        width: f32,
        clip: Option<Rect>,
    },
    Line {
        from: Point,
        to: Point,
        color: skia::Color,
        width: f32,
    },
    Circle {
        center: Point,
        radius: f64,
        color: skia::Color,
        clip: Option<Rect>,
    },
    Text {
        origin: Point,
        text: String,
        size: f32,
        color: skia::Color,
        bold: bool,
        align: Align,
        /// Degrees, clockwise, about `origin`.
        rotate: f32,
    },
}

#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    pub width: i32,
    pub height: i32,
    pub background: skia::Color,
    pub commands: Vec<DrawCommand>,
}

impl Scene {
    /// Polylines in draw order; handy for inspecting what is plotted.
    pub fn polylines(&self) -> impl Iterator<Item = &Vec<Vec<Point>>> {
        self.commands.iter().filter_map(|c| match c {
            DrawCommand::Polyline { segments, .. } => Some(segments),
            _ => None,
        })
    }
}

pub fn build(chart: &Chart, state: &ViewState) -> Scene {
    let (w, h) = chart.config.surface_size();
    let mut out = Vec::new();

    draw_main(chart, state, &mut out);
    draw_legend(chart, state, &mut out);
    draw_navigator(chart, state, &mut out);

    Scene {
        width: w.ceil() as i32,
        height: h.ceil() as i32,
        background: chart.theme.background,
        commands: out,
    }
}

fn text(origin: Point, s: impl Into<String>, size: f32, color: skia::Color, align: Align) -> DrawCommand {
    DrawCommand::Text { origin, text: s.into(), size, color, bold: false, align, rotate: 0.0 }
}

/// Split a series into runs at missing readings.
fn segments<'a>(
    points: impl Iterator<Item = &'a Record>,
    mut project: impl FnMut(&Record) -> Point,
) -> Vec<Vec<Point>> {
    let mut runs = Vec::new();
    let mut run = Vec::new();
    for r in points {
        if r.has_reading() {
            run.push(project(r));
        } else if !run.is_empty() {
            runs.push(std::mem::take(&mut run));
        }
    }
    if !run.is_empty() {
        runs.push(run);
    }
    runs
}

fn draw_main(chart: &Chart, state: &ViewState, out: &mut Vec<DrawCommand>) {
    let theme = &chart.theme;
    let plot = chart.layout.plot;
    let t = state.transform;
    let sx = t.rescale_x(&chart.scales.main.x);
    let sy = t.rescale_y(&chart.scales.main.y);
    let has_data = !chart.dataset.is_empty();

    // grid + tick labels
    let n = time_tick_count(plot.width, plot.height);
    for (i, px) in linspace(0.0, plot.width, n).into_iter().enumerate() {
        let x = plot.x + px;
        out.push(DrawCommand::Line {
            from: Point::new(x, plot.y),
            to: Point::new(x, plot.bottom() + 6.0),
            color: theme.grid,
            width: 1.0,
        });
        if has_data && i % 2 == 0 {
            let label = format_time(sx.invert(px), "%b %d");
            out.push(text(Point::new(x, plot.bottom() + 22.0), label, 11.0, theme.tick, Align::Middle));
        }
    }
    for py in linspace(0.0, plot.height, 6) {
        let y = plot.y + py;
        out.push(DrawCommand::Line {
            from: Point::new(plot.x - 7.0, y),
            to: Point::new(plot.right(), y),
            color: theme.grid,
            width: 1.0,
        });
        if has_data {
            let label = format!("{:.0}", sy.invert(py));
            out.push(text(Point::new(plot.x - 10.0, y + 4.0), label, 11.0, theme.tick, Align::End));
        }
    }

    // axes
    out.push(DrawCommand::Line {
        from: Point::new(plot.x, plot.bottom()),
        to: Point::new(plot.right(), plot.bottom()),
        color: theme.axis_line,
        width: 1.0,
    });
    out.push(DrawCommand::Line {
        from: Point::new(plot.x, plot.y),
        to: Point::new(plot.x, plot.bottom()),
        color: theme.axis_line,
        width: 1.0,
    });
    out.push(DrawCommand::Text {
        origin: Point::new(plot.x - chart.config.margin.left as f64 + 14.0, plot.y + plot.height * 0.5),
        text: Y_TITLE.to_string(),
        size: 12.0,
        color: theme.axis_label,
        bold: false,
        align: Align::Middle,
        rotate: -90.0,
    });

    // series
    let hovered = state
        .hover
        .and_then(|i| chart.dataset.record(i))
        .map(|r| r.category_id.as_str());
    for (i, c) in chart.dataset.categories().iter().enumerate() {
        if !state.legend.is_enabled(&c.id) {
            continue;
        }
        let runs = segments(chart.dataset.points_of(c), |r| {
            Point::new(plot.x + sx.apply(r.time()), plot.y + sy.apply(r.level))
        });
        out.push(DrawCommand::Polyline {
            segments: runs,
            color: theme.category_color(i),
            width: if hovered == Some(c.id.as_str()) { HOVER_LINE_WIDTH } else { LINE_WIDTH },
            clip: Some(plot),
        });
    }

    if let Some(r) = state.hover.and_then(|i| chart.dataset.record(i)) {
        let base = chart.scales.main.project(r);
        let at = t.apply(base);
        out.push(DrawCommand::Circle {
            center: Point::new(plot.x + at.x, plot.y + at.y),
            radius: HOVER_DOT_RADIUS,
            color: theme.hover_dot,
            clip: Some(plot),
        });
    }
}

fn draw_legend(chart: &Chart, state: &ViewState, out: &mut Vec<DrawCommand>) {
    let theme = &chart.theme;
    let legend = chart.layout.legend;
    let hovered = state.hover.and_then(|i| chart.dataset.record(i));

    if let Some(r) = hovered {
        out.push(DrawCommand::Text {
            origin: Point::new(legend.x + 40.0, legend.y + LEGEND_ROW),
            text: r.date.format("%Y-%b-%d").to_string(),
            size: 20.0,
            color: theme.axis_label,
            bold: true,
            align: Align::Start,
            rotate: 0.0,
        });
    }

    let categories = chart.dataset.categories();
    for (i, (c, row)) in categories.iter().zip(&chart.layout.legend_rows).enumerate() {
        let alpha = if state.legend.is_enabled(&c.id) { 255 } else { DISABLED_ALPHA };
        let baseline = row.y + 14.0;
        if let Some(r) = hovered {
            let value = chart.dataset.values().readout(r.time_key(), &c.id);
            out.push(text(Point::new(row.x, baseline), value, 12.0, theme.axis_label.with_a(alpha), Align::Start));
        }
        out.push(DrawCommand::Rect {
            rect: Rect::from_xywh(row.x + 60.0, row.y + 4.0, 12.0, 12.0),
            fill: Some(theme.category_color(i).with_a(alpha)),
            stroke: None,
        });
        out.push(text(Point::new(row.x + 80.0, baseline), c.name.clone(), 12.0, theme.axis_label.with_a(alpha), Align::Start));
    }

    for (b, rect) in &chart.layout.buttons {
        out.push(DrawCommand::Rect { rect: *rect, fill: Some(theme.button_fill), stroke: Some(theme.grid) });
        out.push(text(
            Point::new(rect.x + rect.width * 0.5, rect.y + 15.0),
            b.label(),
            12.0,
            theme.button_text,
            Align::Middle,
        ));
    }
}

fn draw_navigator(chart: &Chart, state: &ViewState, out: &mut Vec<DrawCommand>) {
    let theme = &chart.theme;
    let nav = chart.layout.navigator;
    let scales = &chart.scales.navigator;

    out.push(DrawCommand::Rect { rect: nav, fill: Some(theme.navigator_fill), stroke: Some(theme.navigator_stroke) });
    let ind = chart.navigator.indicator(&state.transform);
    out.push(DrawCommand::Rect {
        rect: Rect::from_xywh(nav.x + ind.x, nav.y + ind.y, ind.width, ind.height),
        fill: Some(theme.indicator_fill),
        stroke: Some(theme.navigator_stroke),
    });

    if let Some((i, c)) = preview_category(chart, state) {
        let runs = segments(chart.dataset.points_of(c), |r| {
            let p = scales.project(r);
            Point::new(nav.x + p.x, nav.y + p.y)
        });
        out.push(DrawCommand::Polyline { segments: runs, color: theme.category_color(i), width: 1.0, clip: Some(nav) });
    }

    if chart.dataset.is_empty() {
        return;
    }
    end_labels(&scales.x, |v, px, first| {
        let align = if first { Align::Start } else { Align::End };
        text(Point::new(nav.x + px, nav.bottom() + 14.0), format_time(v, "%d/%m/%Y"), 10.0, theme.tick, align)
    }, out);
    end_labels(&scales.y, |v, py, _| {
        text(Point::new(nav.x - 6.0, nav.y + py + 4.0), format!("{}", v.round()), 10.0, theme.tick, Align::End)
    }, out);
}

fn preview_category<'a>(chart: &'a Chart, state: &ViewState) -> Option<(usize, &'a Category)> {
    let id = state.preview.as_deref()?;
    let i = chart.dataset.category_index(id)?;
    chart.dataset.categories().get(i).map(|c| (i, c))
}

/// Labels only at the two domain ends.
fn end_labels(
    scale: &LinearScale,
    mut label: impl FnMut(f64, f64, bool) -> DrawCommand,
    out: &mut Vec<DrawCommand>,
) {
    let (d0, d1) = scale.domain();
    out.push(label(d0, scale.apply(d0), true));
    out.push(label(d1, scale.apply(d1), false));
}
