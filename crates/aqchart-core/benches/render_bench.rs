use aqchart_core::{Chart, ChartConfig, Dataset, Record, Result, Session};
use chrono::{Duration, NaiveDate};
use criterion::{criterion_group, criterion_main, Criterion, black_box};

fn build_session(days: usize) -> Session {
    let start = NaiveDate::from_ymd_opt(2016, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    let mut records = Vec::with_capacity(days * 4);
    for d in 0..days {
        let date = start + Duration::days(d as i64);
        let t = d as f64;
        records.push(Record::new(date, 20.0 + (t * 0.05).sin() * 10.0, "1", "CO"));
        records.push(Record::new(date, 40.0 + (t * 0.03).cos() * 15.0, "2", "NO2"));
        records.push(Record::new(date, 30.0 + (t * 0.07).sin() * 5.0, "3", "O3"));
        records.push(Record::new(date, 12.0 + (t * 0.017).sin() * 12.0, "4", "Temperature"));
    }
    Session::new(Chart::new(Dataset::from_records(records), ChartConfig::default()).unwrap())
}

fn bench_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("render_png_bytes");
    for &days in &[366usize, 3_660usize] {
        group.bench_function(format!("days_{days}"), |b| {
            let session = build_session(days);
            b.iter(|| -> Result<()> {
                let bytes = session.render_png_bytes()?;
                black_box(bytes);
                Ok(())
            });
        });
    }
    group.finish();
}

criterion_group!(benches, bench_render);
criterion_main!(benches);
