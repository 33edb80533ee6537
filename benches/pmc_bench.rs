// ABOUTME: Criterion benchmarks for PMC projection and weekly aggregation
// ABOUTME: Measures decay-loop cost across horizons and roll-up cost across record counts
//
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Criterion benchmarks for the PMC engine.
//!
//! The projection loop is O(days past the anchor); UI date pickers cap that
//! at a few years, so the horizon sweep covers up to five years.

#![allow(clippy::missing_docs_in_private_items, missing_docs)]
#![allow(clippy::unwrap_used, clippy::cast_precision_loss)]

use chrono::{Duration, NaiveDate};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use pmc_engine::aggregator::{week_bounds, WeeklyAggregator};
use pmc_engine::models::ActivityRecord;
use pmc_engine::projector::PmcProjector;
use pmc_engine::series::build_series;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 1, 6).unwrap()
}

/// Ninety days of recorded riding, every other day
fn sample_series() -> Vec<pmc_engine::models::TrainingLoadPoint> {
    let observations: Vec<(NaiveDate, f64)> = (0..45_i64)
        .map(|i| (base_date() + Duration::days(i * 2), 55.0 + (i * 13 % 60) as f64))
        .collect();
    build_series(&observations).unwrap()
}

fn generate_records(count: usize) -> Vec<ActivityRecord> {
    (0..count)
        .map(|index| ActivityRecord {
            date: base_date() + Duration::days((index % 56) as i64),
            tss: Some(45.0 + (index * 17 % 90) as f64),
            duration_seconds: 1800 + (index as u64 * 137) % 7200,
            distance_meters: Some(8000.0 + (index * 251 % 40_000) as f64),
            average_power: Some(150.0 + (index * 7 % 120) as f64),
            elevation_gain_meters: Some((index * 31 % 900) as f64),
        })
        .collect()
}

fn bench_projection(c: &mut Criterion) {
    let projector = PmcProjector::new();
    let series = sample_series();
    let last = series.last().unwrap().date;

    let mut group = c.benchmark_group("projection");
    for horizon_days in [7_i64, 30, 365, 1825] {
        group.bench_with_input(
            BenchmarkId::new("decay_horizon_days", horizon_days),
            &horizon_days,
            |b, &days| {
                let target = last + Duration::days(days);
                b.iter(|| projector.project(black_box(&series), black_box(target)));
            },
        );
    }
    group.finish();
}

fn bench_project_range(c: &mut Criterion) {
    let projector = PmcProjector::new();
    let series = sample_series();
    let start = series.last().unwrap().date;

    c.bench_function("projection/eight_week_range", |b| {
        let end = start + Duration::days(55);
        b.iter(|| projector.project_range(black_box(&series), black_box(start), black_box(end)));
    });
}

fn bench_weekly_aggregation(c: &mut Criterion) {
    let aggregator = WeeklyAggregator::new();
    let series = sample_series();

    let mut group = c.benchmark_group("aggregation");
    for count in [50_usize, 200, 500] {
        let records = generate_records(count);
        let (ws, we) = week_bounds(base_date() + Duration::days(21));
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(
            BenchmarkId::new("aggregate_week", count),
            &records,
            |b, records| {
                b.iter(|| {
                    aggregator.aggregate_week(
                        black_box(records),
                        black_box(&series),
                        black_box(ws),
                        black_box(we),
                    )
                });
            },
        );
    }
    group.finish();
}

fn bench_series_build(c: &mut Criterion) {
    let observations: Vec<(NaiveDate, f64)> = (0..730_i64)
        .map(|i| (base_date() + Duration::days(i), 40.0 + (i * 11 % 80) as f64))
        .collect();

    c.bench_function("series/build_two_years_daily", |b| {
        b.iter(|| build_series(black_box(&observations)).unwrap());
    });
}

criterion_group!(
    benches,
    bench_projection,
    bench_project_range,
    bench_weekly_aggregation,
    bench_series_build
);
criterion_main!(benches);
