//! Benchmarks for slot grid computation.
//!
//! Run with: `cargo bench -p slot-engine`

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use slot_engine::{compute_slots, Interval, TimeOfDay};

fn t(minutes: i64) -> TimeOfDay {
    TimeOfDay::from_minutes(minutes).unwrap()
}

/// Back-to-back 20 minute bookings with 10 minute gaps across 07:00-22:00.
fn busy_day(count: usize) -> Vec<Interval> {
    (0..count as i64)
        .map(|i| {
            let start = 420 + (i * 30) % 900;
            Interval::new(t(start), t(start + 20)).unwrap()
        })
        .collect()
}

fn bench_full_day(c: &mut Criterion) {
    let booked = busy_day(20);
    c.bench_function("full_day_60min", |b| {
        b.iter(|| compute_slots(black_box(t(420)), black_box(t(1320)), 60, black_box(&booked)))
    });
}

fn bench_booking_scaling(c: &mut Criterion) {
    let mut group = c.benchmark_group("booking_scaling");
    for count in [0usize, 10, 50, 200] {
        let booked = busy_day(count);
        group.throughput(Throughput::Elements(count as u64));
        group.bench_with_input(BenchmarkId::from_parameter(count), &booked, |b, booked| {
            b.iter(|| compute_slots(t(0), t(1439), 45, black_box(booked)))
        });
    }
    group.finish();
}

criterion_group!(benches, bench_full_day, bench_booking_scaling);
criterion_main!(benches);
