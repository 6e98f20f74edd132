// File: crates/aqchart-core/src/loader.rs
// Summary: CSV loading into a `Dataset` (date, level, type id, type name per row).

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use std::io::Read;
use std::path::Path;

use crate::dataset::{Dataset, Record};
use crate::error::{ChartError, Result};

const DATE_COLUMNS: &[&str] = &["date", "datetime", "time", "timestamp"];
const LEVEL_COLUMNS: &[&str] = &["level", "value"];
const ID_COLUMNS: &[&str] = &["typeid", "type_id", "categoryid", "category_id"];
const NAME_COLUMNS: &[&str] = &["typename", "type_name", "categoryname", "category_name"];

/// Load a readings CSV from disk.
pub fn load_csv(path: impl AsRef<Path>) -> Result<Dataset> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)?;
    let dataset = read_csv(file)?;
    tracing::info!(
        "loaded {} records in {} categories from {}",
        dataset.len(),
        dataset.categories().len(),
        path.display()
    );
    Ok(dataset)
}

/// Parse a readings CSV from any reader. Header names are matched case-insensitively.
pub fn read_csv<R: Read>(reader: R) -> Result<Dataset> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = rdr
        .headers()?
        .iter()
        .map(|h| h.to_lowercase())
        .collect::<Vec<_>>();
    tracing::debug!("CSV headers: {:?}", headers);

    let idx = |names: &[&str], column: &'static str| -> Result<usize> {
        headers
            .iter()
            .position(|h| names.contains(&h.as_str()))
            .ok_or(ChartError::MissingColumn(column))
    };
    let i_date = idx(DATE_COLUMNS, "date")?;
    let i_level = idx(LEVEL_COLUMNS, "level")?;
    let i_id = idx(ID_COLUMNS, "typeId")?;
    let i_name = idx(NAME_COLUMNS, "typeName")?;

    let mut out = Vec::new();
    for (n, rec) in rdr.records().enumerate() {
        let rec = rec?;
        let row = n + 1;
        let field = |i: usize| rec.get(i).unwrap_or("");

        let raw_date = field(i_date);
        let date = parse_date(raw_date)
            .ok_or_else(|| ChartError::InvalidDate { row, value: raw_date.to_string() })?;
        let raw_level = field(i_level);
        let level = raw_level
            .parse::<f64>()
            .ok()
            .filter(|v| v.is_finite())
            .ok_or_else(|| ChartError::InvalidLevel { row, value: raw_level.to_string() })?;

        out.push(Record::new(date, level, field(i_id), field(i_name)));
    }
    Ok(Dataset::from_records(out))
}

/// Accepts RFC 3339, ISO dates with optional time, compact `YYYYMMDD`, US `m/d/Y`,
/// and integer epochs of at least nine digits (seconds, or milliseconds above 1e12).
pub fn parse_date(s: &str) -> Option<NaiveDateTime> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }
    if s.len() == 8 && s.bytes().all(|b| b.is_ascii_digit()) {
        return NaiveDate::parse_from_str(s, "%Y%m%d").ok()?.and_hms_opt(0, 0, 0);
    }
    // shorter integers (a bare year) are not dates
    if s.len() < 9 && s.parse::<i64>().is_ok() {
        return None;
    }
    if let Ok(n) = s.parse::<i64>() {
        let dt = if n > 10_i64.pow(12) {
            DateTime::from_timestamp_millis(n)
        } else {
            DateTime::from_timestamp(n, 0)
        };
        return dt.map(|d| d.naive_utc());
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.naive_utc());
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%d %H:%M"] {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return Some(dt);
        }
    }
    for fmt in ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"] {
        if let Ok(d) = NaiveDate::parse_from_str(s, fmt) {
            return d.and_hms_opt(0, 0, 0);
        }
    }
    None
}
