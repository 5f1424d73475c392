//! Benchmarks for the hot path of a validation run: key index construction,
//! reference-row projection, and masked comparison over a full session worth
//! of bars.

use std::hint::black_box;

use criterion::{Criterion, Throughput, criterion_group, criterion_main};

use indicator_validator::app::models::{
    AlignedSeries, Bar, ReferenceColumn, ReferenceData, ReferenceRow,
};
use indicator_validator::app::services::aligner::SeriesAligner;
use indicator_validator::app::services::bar_index::TemporalKeyIndex;
use indicator_validator::app::services::comparison::ComparisonEngine;

const BAR_COUNT: usize = 10_000;
const MINUTES_PER_DAY: usize = 390;

/// Synthetic minute bars spanning several sessions
fn synthetic_bars(count: usize) -> Vec<Bar> {
    (0..count)
        .map(|i| {
            let day = (i / MINUTES_PER_DAY) as i32;
            let minute = (i % MINUTES_PER_DAY) as i32;
            let price = 100.0 + (i as f64 * 0.01).sin();
            Bar {
                index: i,
                date: 20240101 + day,
                time: 930 + minute,
                open: price,
                high: price + 0.5,
                low: price - 0.5,
                close: price + 0.1,
                volume: 1000.0 + i as f64,
            }
        })
        .collect()
}

/// Reference rows over the same keys, with a gap every tenth row
fn synthetic_reference(bars: &[Bar]) -> ReferenceData {
    let rows = bars
        .iter()
        .map(|bar| ReferenceRow {
            date: bar.date,
            time: bar.time,
            values: vec![if bar.index % 10 == 9 {
                None
            } else {
                Some(bar.close * 0.997)
            }],
        })
        .collect();

    ReferenceData {
        columns: vec![ReferenceColumn {
            name: "TGT_115".to_string(),
            column: Some(2),
        }],
        rows,
    }
}

/// Aligned series pair with matching gaps and a small systematic offset
fn synthetic_series_pair(count: usize) -> (AlignedSeries, AlignedSeries) {
    let reference = AlignedSeries {
        name: "TGT_115".to_string(),
        values: (0..count)
            .map(|i| {
                if i % 10 == 9 {
                    None
                } else {
                    Some(100.0 + (i as f64 * 0.01).sin())
                }
            })
            .collect(),
    };
    let computed = AlignedSeries {
        name: "TGT_115".to_string(),
        values: reference
            .values
            .iter()
            .map(|v| v.map(|x| x + 0.0001))
            .collect(),
    };
    (reference, computed)
}

fn index_benchmarks(c: &mut Criterion) {
    let bars = synthetic_bars(BAR_COUNT);

    let mut group = c.benchmark_group("index");
    group.throughput(Throughput::Elements(bars.len() as u64));
    group.bench_function("build_10k", |b| {
        b.iter(|| black_box(TemporalKeyIndex::build(black_box(&bars))));
    });
    group.finish();
}

fn alignment_benchmarks(c: &mut Criterion) {
    let bars = synthetic_bars(BAR_COUNT);
    let index = TemporalKeyIndex::build(&bars);
    let reference = synthetic_reference(&bars);
    let aligner = SeriesAligner::new();

    let mut group = c.benchmark_group("align");
    group.throughput(Throughput::Elements(reference.rows.len() as u64));
    group.bench_function("project_10k", |b| {
        b.iter(|| black_box(aligner.align(black_box(&index), black_box(&reference))));
    });
    group.finish();
}

fn comparison_benchmarks(c: &mut Criterion) {
    let (reference, computed) = synthetic_series_pair(BAR_COUNT);
    let engine = ComparisonEngine::new();

    let mut group = c.benchmark_group("compare");
    group.throughput(Throughput::Elements(reference.len() as u64));
    group.bench_function("masked_stats_10k", |b| {
        b.iter(|| black_box(engine.compare(black_box(&reference), black_box(&computed))));
    });
    group.finish();
}

criterion_group!(
    benches,
    index_benchmarks,
    alignment_benchmarks,
    comparison_benchmarks
);
criterion_main!(benches);
