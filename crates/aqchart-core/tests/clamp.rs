// File: crates/aqchart-core/tests/clamp.rs
// Purpose: Gesture-produced transforms never show anything outside the data rectangle.

mod common;

use aqchart_core::{ChartConfig, Event, Point, ZoomConstraint, ZoomTransform};
use common::{session, three_series};

const EPS: f64 = 1e-9;

fn within_data(t: &ZoomTransform, w: f64, h: f64) -> bool {
    t.x <= EPS
        && t.y <= EPS
        && t.x.abs() / t.k + w / t.k <= w + EPS
        && t.y.abs() / t.k + h / t.k <= h + EPS
}

#[test]
fn constrain_pins_translation_and_scale() {
    let cfg = ChartConfig::default();
    let c = ZoomConstraint::new(cfg.width, cfg.height, cfg.scale_extent);

    let t = c.constrain(ZoomTransform::new(2.0, -5000.0, -5000.0));
    assert_eq!(t.x, -(cfg.width * 2.0 - cfg.width));
    assert_eq!(t.y, -(cfg.height * 2.0 - cfg.height));

    let t = c.constrain(ZoomTransform::new(0.2, 40.0, 40.0));
    assert_eq!(t.k, 1.0);
    assert_eq!((t.x, t.y), (0.0, 0.0));

    let t = c.constrain(ZoomTransform::new(50.0, 0.0, 0.0));
    assert_eq!(t.k, 10.0);
}

#[test]
fn gesture_grid_stays_inside_data() {
    let cfg = ChartConfig::default();
    let (w, h) = (cfg.width, cfg.height);
    let c = ZoomConstraint::new(w, h, cfg.scale_extent);

    let centers = [Point::new(0.0, 0.0), Point::new(w / 3.0, h / 2.0), Point::new(w, h)];
    let factors = [0.5, 1.1, 2.0, 4.0, 30.0];
    let pans = [(-400.0, 0.0), (250.0, -90.0), (5000.0, 5000.0), (-5000.0, -5000.0)];

    for center in centers {
        for factor in factors {
            let mut t = c.zoom_at(ZoomTransform::IDENTITY, center, factor);
            assert!(within_data(&t, w, h), "zoom {factor} at {center:?} -> {t:?}");
            for (dx, dy) in pans {
                t = c.pan_by(t, dx, dy);
                assert!(within_data(&t, w, h), "pan ({dx},{dy}) -> {t:?}");
                t = c.zoom_at(t, center, 1.0 / factor);
                assert!(within_data(&t, w, h), "unzoom -> {t:?}");
            }
        }
    }
}

#[test]
fn zoom_keeps_point_under_cursor() {
    let cfg = ChartConfig::default();
    let c = ZoomConstraint::new(cfg.width, cfg.height, cfg.scale_extent);
    let center = Point::new(cfg.width / 2.0, cfg.height / 2.0);
    let t = c.zoom_at(ZoomTransform::IDENTITY, center, 3.0);
    let base = t.invert(center);
    assert!((base.x - center.x).abs() < 1e-9);
    assert!((base.y - center.y).abs() < 1e-9);
}

#[test]
fn session_events_respect_clamp_and_reset() {
    let mut s = session(three_series());
    let (w, h) = (s.chart().config.width, s.chart().config.height);
    s.dispatch(Event::ZoomStart);
    s.dispatch(Event::Zoom { center: Point::new(w, h), factor: 6.0 });
    s.dispatch(Event::Pan { dx: -10_000.0, dy: 10_000.0 });
    assert!(within_data(&s.state().transform, w, h));
    s.dispatch(Event::ZoomTo(ZoomTransform::new(3.0, 500.0, -1e9)));
    assert!(within_data(&s.state().transform, w, h));

    s.dispatch(Event::ResetZoom);
    assert_eq!(s.state().transform, ZoomTransform::IDENTITY);
}

#[test]
fn rescaled_domain_matches_visible_window() {
    let s = session(three_series());
    let chart = s.chart();
    let t = chart.constraint.constrain(ZoomTransform::new(2.0, -200.0, -100.0));
    let x = t.rescale_x(&chart.scales.main.x);
    let window = t.visible_window(chart.config.width, chart.config.height);
    let (d0, d1) = x.domain();
    assert!((d0 - chart.scales.main.x.invert(window.x)).abs() < 1e-3);
    assert!((d1 - chart.scales.main.x.invert(window.right())).abs() < 1e-3);
}
