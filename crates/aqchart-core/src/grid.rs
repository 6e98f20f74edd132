// File: crates/aqchart-core/src/grid.rs
// Summary: Simple grid/tick layout helpers.

use chrono::DateTime;

pub fn linspace(start: f64, end: f64, steps: usize) -> Vec<f64> {
    if steps < 2 { return vec![start, end]; }
    let step = (end - start) / (steps as f64 - 1.0);
    (0..steps).map(|i| start + step * i as f64).collect()
}

/// Number of time ticks for a plot, proportional to its aspect ratio.
pub fn time_tick_count(width: f64, height: f64) -> usize {
    (((width + 2.0) / (height + 2.0)) * 5.0).round().max(2.0) as usize
}

/// Format an epoch-milliseconds value with a chrono format string.
pub fn format_time(ms: f64, fmt: &str) -> String {
    DateTime::from_timestamp_millis(ms.round() as i64)
        .map(|d| d.format(fmt).to_string())
        .unwrap_or_default()
}
