//! Performance benchmarks for the Attendance Engine.
//!
//! The aggregator is a linear pass over one month of records, so a full
//! month should aggregate in well under a microsecond and large batches
//! should scale linearly.
//!
//! Run with: `cargo bench`
//! HTML reports are generated in `target/criterion/`

use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use attendance_engine::aggregation::summarize_month;
use attendance_engine::models::{AttendanceRecord, AttendanceStatus};

use chrono::{Duration, NaiveDate, NaiveDateTime};

/// Creates one month's worth of records: weekday work, one paid-leave day
/// per week.
fn create_month(record_count: usize) -> Vec<AttendanceRecord> {
    let base = NaiveDate::from_ymd_opt(2025, 4, 1).unwrap();

    (0..record_count)
        .map(|i| {
            let date = base + Duration::days((i % 30) as i64);
            if i % 7 == 5 {
                AttendanceRecord {
                    date,
                    clock_in: None,
                    clock_out: None,
                    break_time: "00:00".to_string(),
                    status: AttendanceStatus::PaidLeave,
                }
            } else {
                let clock_in = NaiveDateTime::new(
                    date,
                    chrono::NaiveTime::from_hms_opt(9, 0, 0).unwrap(),
                );
                AttendanceRecord {
                    date,
                    clock_in: Some(clock_in),
                    clock_out: Some(clock_in + Duration::hours(9)),
                    break_time: "01:00".to_string(),
                    status: AttendanceStatus::NormalWork,
                }
            }
        })
        .collect()
}

fn bench_single_month(c: &mut Criterion) {
    let records = create_month(22);

    c.bench_function("summarize_one_month", |b| {
        b.iter(|| summarize_month(black_box(&records)))
    });
}

fn bench_batch_sizes(c: &mut Criterion) {
    let mut group = c.benchmark_group("summarize_batches");

    for size in [100, 1_000, 10_000] {
        let records = create_month(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &records, |b, records| {
            b.iter(|| summarize_month(black_box(records)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_single_month, bench_batch_sizes);
criterion_main!(benches);
