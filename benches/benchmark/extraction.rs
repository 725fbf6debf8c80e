use crate::common::{composed_chain, configure_criterion, plain_chain};
use criterion::{criterion_group, BenchmarkId, Criterion};
use status_rail::{extract_code, Status};
use std::hint::black_box;

pub fn bench_extract_code(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction/extract_code");

    for depth in [0, 4, 16, 64] {
        let err = plain_chain(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &err, |b, err| {
            b.iter(|| black_box(extract_code(&**err)))
        });
    }

    group.finish();
}

pub fn bench_status_from_error(c: &mut Criterion) {
    let mut group = c.benchmark_group("extraction/status_from_error");

    for depth in [1, 8, 32] {
        let err = composed_chain(depth);
        group.bench_with_input(BenchmarkId::from_parameter(depth), &err, |b, err| {
            b.iter(|| black_box(Status::from_error(&**err)))
        });
    }

    group.finish();
}

criterion_group! {
    name = extraction_benches;
    config = configure_criterion();
    targets = bench_extract_code, bench_status_from_error
}
