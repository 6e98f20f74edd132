// File: crates/aqchart-core/tests/common/mod.rs
// Purpose: Shared fixtures for the integration tests.

#![allow(dead_code)]

use aqchart_core::{Chart, ChartConfig, Dataset, Record, Session};
use chrono::{NaiveDate, NaiveDateTime};

pub fn day(d: u32) -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2016, 1, d).unwrap().and_hms_opt(0, 0, 0).unwrap()
}

/// Two categories ("CO" id 1, "NO2" id 2), three dates each.
pub fn co_no2() -> Dataset {
    Dataset::from_records(vec![
        Record::new(day(1), 12.0, "1", "CO"),
        Record::new(day(1), 30.0, "2", "NO2"),
        Record::new(day(2), 18.0, "1", "CO"),
        Record::new(day(2), 25.0, "2", "NO2"),
        Record::new(day(3), 9.0, "1", "CO"),
        Record::new(day(3), 40.0, "2", "NO2"),
    ])
}

/// Three categories over ten days with varied levels.
pub fn three_series() -> Dataset {
    let mut out = Vec::new();
    for d in 1..=10u32 {
        let f = d as f64;
        out.push(Record::new(day(d), 10.0 + f, "1", "CO"));
        out.push(Record::new(day(d), 50.0 - 2.0 * f, "2", "NO2"));
        out.push(Record::new(day(d), 5.0 + (f * 0.7).sin() * 3.0, "7", "Temperature"));
    }
    Dataset::from_records(out)
}

pub fn session(dataset: Dataset) -> Session {
    Session::new(Chart::new(dataset, ChartConfig::default()).expect("valid chart"))
}
