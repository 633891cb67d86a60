//! Filter and report throughput over synthetic trip data.
//!
//! Run with: `cargo bench --bench reports`

use chrono::{Duration, Month, NaiveDate, Weekday};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

use bikeshare_stats::execution::{ExecutionOptions, ReportEngine};
use bikeshare_stats::processing::{apply_filters, DayFilter, MonthFilter};
use bikeshare_stats::stats::compute_all_reports;
use bikeshare_stats::types::{DatasetColumns, TripDataSet, TripRecord};

/// `n` trips spread over the first half of 2017, cycling through 40 stations.
fn synthetic_dataset(n: usize) -> TripDataSet {
    let origin = NaiveDate::from_ymd_opt(2017, 1, 1)
        .and_then(|d| d.and_hms_opt(0, 0, 0))
        .unwrap();
    let records = (0..n)
        .map(|i| {
            let start_time = origin + Duration::minutes((i as i64 * 37) % (181 * 24 * 60));
            let duration_seconds = 60.0 + (i % 1800) as f64;
            TripRecord {
                start_time,
                end_time: start_time + Duration::seconds(duration_seconds as i64),
                duration_seconds,
                start_station: format!("Station {}", i % 40),
                end_station: format!("Station {}", (i * 7) % 40),
                user_type: if i % 5 == 0 { "Customer" } else { "Subscriber" }.to_string(),
                gender: (i % 9 != 0).then(|| if i % 3 == 0 { "Female" } else { "Male" }.to_string()),
                birth_year: (i % 11 != 0).then_some(1950 + (i % 50) as i32),
            }
        })
        .collect();
    TripDataSet::new(DatasetColumns::all(), records)
}

fn bench_filters(c: &mut Criterion) {
    let ds = synthetic_dataset(100_000);
    let mut group = c.benchmark_group("filter");
    for (name, month, day) in [
        ("all", MonthFilter::All, DayFilter::All),
        ("month", MonthFilter::Only(Month::March), DayFilter::All),
        ("month_day", MonthFilter::Only(Month::March), DayFilter::Only(Weekday::Mon)),
    ] {
        group.bench_function(name, |b| b.iter(|| apply_filters(black_box(&ds), month, day)));
    }
    group.finish();
}

fn bench_reports(c: &mut Criterion) {
    let parallel = ReportEngine::new(ExecutionOptions::default()).unwrap();
    let sequential = ReportEngine::sequential();

    let mut group = c.benchmark_group("reports");
    for n in [1_000usize, 10_000, 100_000] {
        let ds = synthetic_dataset(n);
        group.bench_with_input(BenchmarkId::new("compute_all_reports", n), &ds, |b, ds| {
            b.iter(|| compute_all_reports(black_box(ds)))
        });
        group.bench_with_input(BenchmarkId::new("engine_sequential", n), &ds, |b, ds| {
            b.iter(|| sequential.compute_all(black_box(ds)))
        });
        group.bench_with_input(BenchmarkId::new("engine_parallel", n), &ds, |b, ds| {
            b.iter(|| parallel.compute_all(black_box(ds)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_filters, bench_reports);
criterion_main!(benches);
