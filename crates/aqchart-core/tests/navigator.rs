// File: crates/aqchart-core/tests/navigator.rs
// Purpose: Indicator <-> main transform synchronisation and drag clamping.

mod common;

use aqchart_core::{Chart, ChartConfig, Event, Navigator, Point, ZoomTransform};
use common::{session, three_series};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

#[test]
fn indicator_round_trips_to_the_same_transform() {
    let cfg = ChartConfig::default();
    let nav = Navigator::from_config(&cfg);
    let chart = Chart::new(three_series(), cfg.clone()).unwrap();

    for &k in &[1.0, 1.5, 2.0, 3.7, 10.0] {
        for &fx in &[0.0, 0.25, 0.5, 1.0] {
            for &fy in &[0.0, 0.4, 1.0] {
                let tx = -(cfg.width * k - cfg.width) * fx;
                let ty = -(cfg.height * k - cfg.height) * fy;
                let t = chart.constraint.constrain(ZoomTransform::new(k, tx, ty));

                let ind = nav.indicator(&t);
                assert!(close(ind.width, nav.width / k));
                assert!(close(ind.height, nav.height / k));

                let back = nav.transform_for_origin(t.k, ind.origin());
                assert_eq!(back.k, t.k);
                assert!(close(back.x, t.x), "k={k} tx {} vs {}", back.x, t.x);
                assert!(close(back.y, t.y), "k={k} ty {} vs {}", back.y, t.y);
            }
        }
    }
}

#[test]
fn identity_indicator_covers_whole_navigator() {
    let nav = Navigator::from_config(&ChartConfig::default());
    let ind = nav.indicator(&ZoomTransform::IDENTITY);
    assert_eq!((ind.x, ind.y), (0.0, 0.0));
    assert!(close(ind.width, nav.width));
    assert!(close(ind.height, nav.height));
}

#[test]
fn drag_origin_is_clamped_to_navigator() {
    let nav = Navigator::from_config(&ChartConfig::default());
    let k = 4.0;
    let o = nav.clamp_origin(k, Point::new(-50.0, 10_000.0));
    assert_eq!(o.x, 0.0);
    assert!(close(o.y, nav.height - nav.height / k));

    let t = nav.transform_for_origin(k, Point::new(10_000.0, -3.0));
    assert!(close(t.x, -(nav.width - nav.width / k) * nav.ratio * k));
    assert_eq!(t.y, 0.0);
}

#[test]
fn dragging_the_indicator_pans_the_main_view() {
    let mut s = session(three_series());
    let center = Point::new(s.chart().config.width / 2.0, s.chart().config.height / 2.0);
    s.dispatch(Event::Zoom { center, factor: 2.0 });
    let k = s.state().transform.k;
    assert!(close(k, 2.0));

    let before = s.chart().navigator.indicator(&s.state().transform);
    let grab = Point::new(before.x + 3.0, before.y + 2.0);
    s.dispatch(Event::NavigatorPress(grab));
    assert!(s.state().drag.is_some());

    s.dispatch(Event::NavigatorDrag(grab.offset(10.0, 5.0)));
    let after = s.chart().navigator.indicator(&s.state().transform);
    assert!(close(after.x, before.x + 10.0));
    assert!(close(after.y, before.y + 5.0));
    assert_eq!(s.state().transform.k, k);

    // far past the edge: pinned, never an error
    s.dispatch(Event::NavigatorDrag(Point::new(-1000.0, -1000.0)));
    let pinned = s.chart().navigator.indicator(&s.state().transform);
    assert!(close(pinned.x, 0.0) && close(pinned.y, 0.0));

    s.dispatch(Event::NavigatorRelease);
    assert!(s.state().drag.is_none());
    let t = s.state().transform;
    s.dispatch(Event::NavigatorDrag(Point::new(50.0, 50.0)));
    assert_eq!(s.state().transform, t);
}

#[test]
fn press_outside_indicator_does_not_start_drag() {
    let mut s = session(three_series());
    let center = Point::new(0.0, 0.0);
    s.dispatch(Event::Zoom { center, factor: 5.0 });
    let ind = s.chart().navigator.indicator(&s.state().transform);
    s.dispatch(Event::NavigatorPress(Point::new(ind.right() + 20.0, ind.bottom() + 20.0)));
    assert!(s.state().drag.is_none());
}
