// File: crates/aqchart-core/tests/layout.rs
// Purpose: Surface hit-testing and press routing through the session.

mod common;

use aqchart_core::{Point, Rect, Target};
use common::{co_no2, session};

fn center(r: Rect) -> Point {
    Point::new(r.x + r.width * 0.5, r.y + r.height * 0.5)
}

#[test]
fn regions_resolve_to_targets_with_local_coordinates() {
    let s = session(co_no2());
    let layout = &s.chart().layout;

    assert_eq!(layout.legend_rows.len(), 2);
    assert!(layout.plot.right() <= layout.legend.x);
    assert!(layout.plot.bottom() < layout.navigator.y);

    let p = Point::new(layout.plot.x + 10.0, layout.plot.y + 5.0);
    assert_eq!(layout.locate(p), Some(Target::Plot(Point::new(10.0, 5.0))));

    let n = Point::new(layout.navigator.x + 3.0, layout.navigator.y + 4.0);
    assert_eq!(layout.locate(n), Some(Target::Navigator(Point::new(3.0, 4.0))));

    assert_eq!(layout.locate(center(layout.legend_rows[1])), Some(Target::Legend(1)));
    let targets: Vec<_> = layout.buttons.iter().map(|(_, r)| layout.locate(center(*r))).collect();
    assert_eq!(targets, [Some(Target::HideAll), Some(Target::ShowAll), Some(Target::ResetZoom)]);

    // margin left of the plot
    assert_eq!(layout.locate(Point::new(5.0, layout.plot.y + 5.0)), None);
}

#[test]
fn press_routes_legend_and_buttons() {
    let mut s = session(co_no2());
    let row = s.chart().layout.legend_rows[0];
    let hide = s.chart().layout.buttons[0].1;
    let show = s.chart().layout.buttons[1].1;

    assert_eq!(s.press_at(center(row)), Some(Target::Legend(0)));
    assert_eq!(s.state().single_selected(), Some("1"));

    s.press_at(center(hide));
    assert!(s.state().enabled().is_empty());
    assert!(s.hits().is_empty());

    s.press_at(center(show));
    assert_eq!(s.state().enabled().len(), 2);
    assert_eq!(s.hits().len(), 6);
}
