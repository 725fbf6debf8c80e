use crate::common::{configure_criterion, invalid_place, plain_chain};
use criterion::{criterion_group, BenchmarkId, Criterion};
use status_rail::{errorf, wrapf, ComposeConfig};
use std::hint::black_box;

pub fn bench_compose_vs_plain(c: &mut Criterion) {
    c.bench_function("compose/errorf", |b| {
        b.iter(|| black_box(errorf!("failed to parse place name, {}", invalid_place())))
    });

    c.bench_function("compose/wrapf_baseline", |b| {
        b.iter(|| black_box(wrapf!("failed to parse place name, {}", invalid_place())))
    });
}

pub fn bench_deep_walk(c: &mut Criterion) {
    let mut group = c.benchmark_group("compose/deep_walk");
    let config = ComposeConfig::deep();

    for depth in [1, 4, 16] {
        group.bench_with_input(BenchmarkId::from_parameter(depth), &depth, |b, &depth| {
            b.iter_batched(
                || wrapf!("handler: {}", plain_chain(depth)),
                |formatted| black_box(config.compose(formatted)),
                criterion::BatchSize::SmallInput,
            )
        });
    }

    group.finish();
}

criterion_group! {
    name = compose_benches;
    config = configure_criterion();
    targets = bench_compose_vs_plain, bench_deep_walk
}
