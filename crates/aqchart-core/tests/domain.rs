// File: crates/aqchart-core/tests/domain.rs
// Purpose: Main and navigator scales span every record (min..max date, 0..max level).

mod common;

use aqchart_core::scale::domains;
use aqchart_core::{Chart, ChartConfig, Dataset};
use common::{co_no2, day, three_series};

#[test]
fn scales_cover_all_records() {
    for ds in [co_no2(), three_series()] {
        let min_t = ds.records().iter().map(|r| r.time()).fold(f64::INFINITY, f64::min);
        let max_t = ds.records().iter().map(|r| r.time()).fold(f64::NEG_INFINITY, f64::max);
        let max_v = ds.records().iter().map(|r| r.level).fold(f64::NEG_INFINITY, f64::max);

        let chart = Chart::new(ds, ChartConfig::default()).unwrap();
        for pair in [chart.scales.main, chart.scales.navigator] {
            assert_eq!(pair.x.domain(), (min_t, max_t));
            assert_eq!(pair.y.domain(), (0.0, max_v));
        }
    }
}

#[test]
fn main_and_navigator_differ_only_in_range() {
    let chart = Chart::new(co_no2(), ChartConfig::default()).unwrap();
    let cfg = &chart.config;
    let (nw, nh) = cfg.navigator_size();
    assert_eq!(chart.scales.main.x.range(), (0.0, cfg.width));
    assert_eq!(chart.scales.main.y.range(), (cfg.height, 0.0));
    assert_eq!(chart.scales.navigator.x.range(), (0.0, nw));
    assert_eq!(chart.scales.navigator.y.range(), (nh, 0.0));
    assert!((cfg.width / nw - 2.5).abs() < 1e-12);
}

#[test]
fn first_and_last_dates_land_on_plot_edges() {
    let chart = Chart::new(co_no2(), ChartConfig::default()).unwrap();
    let x = chart.scales.main.x;
    let t0 = day(1).and_utc().timestamp_millis() as f64;
    let t2 = day(3).and_utc().timestamp_millis() as f64;
    assert_eq!(x.apply(t0), 0.0);
    assert!((x.apply(t2) - chart.config.width).abs() < 1e-9);
    // top of the value domain is the top of the plot
    assert!(chart.scales.main.y.apply(40.0).abs() < 1e-9);
}

#[test]
fn empty_dataset_has_degenerate_domain() {
    assert_eq!(domains(&[]), ((0.0, 0.0), (0.0, 0.0)));
    let chart = Chart::new(Dataset::empty(), ChartConfig::default()).unwrap();
    // degenerate domains map to the middle of the range instead of NaN
    let mid = chart.scales.main.x.apply(123.0);
    assert!((mid - chart.config.width / 2.0).abs() < 1e-9);
}
