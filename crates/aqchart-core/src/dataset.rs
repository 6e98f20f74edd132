// File: crates/aqchart-core/src/dataset.rs
// Summary: Immutable record set grouped into categories, plus the date -> category -> level index.
// Notes:
// - Built once after load. Interaction never mutates it; which categories are
//   shown lives in `ViewState`.

use chrono::NaiveDateTime;
use std::cmp::Ordering;
use std::collections::HashMap;

/// One observation: a category's level at a point in time.
#[derive(Clone, Debug, PartialEq)]
pub struct Record {
    pub date: NaiveDateTime,
    pub level: f64,
    pub category_id: String,
    pub category_name: String,
}

impl Record {
    pub fn new(
        date: NaiveDateTime,
        level: f64,
        category_id: impl Into<String>,
        category_name: impl Into<String>,
    ) -> Self {
        Self { date, level, category_id: category_id.into(), category_name: category_name.into() }
    }

    /// Milliseconds since the Unix epoch; the X coordinate fed to time scales.
    #[inline]
    pub fn time(&self) -> f64 {
        self.date.and_utc().timestamp_millis() as f64
    }

    #[inline]
    pub fn time_key(&self) -> i64 {
        self.date.and_utc().timestamp_millis()
    }

    /// Zero levels are gaps in the source data, not measurements.
    #[inline]
    pub fn has_reading(&self) -> bool {
        self.level != 0.0
    }
}

/// A named series: indices into `Dataset::records`, ordered by date.
#[derive(Clone, Debug)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub points: Vec<usize>,
}

/// Date -> (category id -> level), for constant-time hover readouts.
#[derive(Clone, Debug, Default)]
pub struct ValueIndex {
    by_date: HashMap<i64, HashMap<String, f64>>,
}

impl ValueIndex {
    fn build(records: &[Record]) -> Self {
        let mut by_date: HashMap<i64, HashMap<String, f64>> = HashMap::new();
        for r in records {
            by_date.entry(r.time_key()).or_default().insert(r.category_id.clone(), r.level);
        }
        Self { by_date }
    }

    pub fn level(&self, time_key: i64, category_id: &str) -> Option<f64> {
        self.by_date.get(&time_key).and_then(|m| m.get(category_id)).copied()
    }

    /// Readout text for a cell; zero and missing both read "N.A.".
    pub fn readout(&self, time_key: i64, category_id: &str) -> String {
        match self.level(time_key, category_id) {
            Some(v) if v != 0.0 => format_level(v),
            _ => "N.A.".to_string(),
        }
    }

    pub fn dates(&self) -> usize {
        self.by_date.len()
    }
}

fn format_level(v: f64) -> String {
    if v.fract() == 0.0 { format!("{}", v as i64) } else { format!("{v}") }
}

#[derive(Clone, Debug, Default)]
pub struct Dataset {
    records: Vec<Record>,
    categories: Vec<Category>,
    by_id: HashMap<String, usize>,
    values: ValueIndex,
}

impl Dataset {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Group records by category id. Categories are ordered numerically when
    /// every id parses as an integer, lexicographically otherwise; each
    /// category takes the display name of its first record.
    pub fn from_records(records: Vec<Record>) -> Self {
        let mut order: Vec<String> = Vec::new();
        let mut groups: HashMap<String, Vec<usize>> = HashMap::new();
        for (i, r) in records.iter().enumerate() {
            let entry = groups.entry(r.category_id.clone()).or_insert_with(|| {
                order.push(r.category_id.clone());
                Vec::new()
            });
            entry.push(i);
        }

        let numeric = order.iter().all(|id| id.trim().parse::<i64>().is_ok());
        order.sort_by(|a, b| compare_ids(a, b, numeric));

        let mut categories = Vec::with_capacity(order.len());
        let mut by_id = HashMap::with_capacity(order.len());
        for id in order {
            let mut points = groups.remove(&id).unwrap_or_default();
            // stable: equal dates keep file order
            points.sort_by_key(|&i| records[i].time_key());
            let name = points
                .first()
                .map(|&i| records[i].category_name.clone())
                .unwrap_or_else(|| id.clone());
            by_id.insert(id.clone(), categories.len());
            categories.push(Category { id, name, points });
        }

        let values = ValueIndex::build(&records);
        Self { records, categories, by_id, values }
    }

    pub fn records(&self) -> &[Record] { &self.records }
    pub fn record(&self, index: usize) -> Option<&Record> { self.records.get(index) }
    pub fn categories(&self) -> &[Category] { &self.categories }
    pub fn values(&self) -> &ValueIndex { &self.values }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
    pub fn len(&self) -> usize { self.records.len() }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.by_id.get(id).map(|&i| &self.categories[i])
    }

    /// Position of a category in display order (drives colour and legend row).
    pub fn category_index(&self, id: &str) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn category_ids(&self) -> Vec<String> {
        self.categories.iter().map(|c| c.id.clone()).collect()
    }

    /// Records of a category in date order.
    pub fn points_of<'a>(&'a self, category: &'a Category) -> impl Iterator<Item = &'a Record> + 'a {
        category.points.iter().map(move |&i| &self.records[i])
    }
}

fn compare_ids(a: &str, b: &str, numeric: bool) -> Ordering {
    if numeric {
        let pa = a.trim().parse::<i64>().unwrap_or_default();
        let pb = b.trim().parse::<i64>().unwrap_or_default();
        pa.cmp(&pb).then_with(|| a.cmp(b))
    } else {
        a.cmp(b)
    }
}
