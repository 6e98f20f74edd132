// File: crates/aqchart-core/tests/config.rs
// Purpose: Config defaults, JSON5 loading and validation.

use aqchart_core::{ChartConfig, ChartError};

#[test]
fn defaults_match_a_1000_by_400_chart_area() {
    let cfg = ChartConfig::default();
    assert_eq!(cfg.chart_area().width, 1000.0);
    assert_eq!(cfg.chart_area().height, 400.0);
    assert_eq!(cfg.navigator_size(), (930.0 / 2.5, 330.0 / 2.5));
    assert_eq!(cfg.scale_extent, (1.0, 10.0));
    cfg.validate().expect("defaults are valid");
    let (w, h) = cfg.surface_size();
    assert_eq!(w, 1200.0);
    assert!(h > 400.0 + cfg.navigator_size().1);
}

#[test]
fn loads_partial_json5_file() {
    let dir = std::path::PathBuf::from("target/test_out");
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("chart_config.json5");
    std::fs::write(&path, "{ // smaller plot\n width: 600, height: 240, theme: 'dark', }").unwrap();

    let cfg = ChartConfig::load_from_file(&path).expect("load");
    assert_eq!(cfg.width, 600.0);
    assert_eq!(cfg.height, 240.0);
    assert_eq!(cfg.theme, "dark");
    assert_eq!(cfg.preview_ratio, 2.5);
}

#[test]
fn rejects_invalid_values() {
    let bad = [
        ChartConfig { width: 0.0, ..ChartConfig::default() },
        ChartConfig { preview_ratio: 0.5, ..ChartConfig::default() },
        ChartConfig { scale_extent: (2.0, 1.0), ..ChartConfig::default() },
        ChartConfig { scale_extent: (0.5, 4.0), ..ChartConfig::default() },
    ];
    for cfg in bad {
        assert!(matches!(cfg.validate(), Err(ChartError::Config(_))), "{cfg:?}");
    }
}

#[test]
fn theme_lookup_ignores_case_and_falls_back_to_light() {
    assert_eq!(aqchart_core::theme::find("Dark").name, "dark");
    assert_eq!(aqchart_core::theme::find("DARK").name, "dark");
    assert_eq!(aqchart_core::theme::find("neon").name, "light");
}
