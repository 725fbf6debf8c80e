use criterion::criterion_main;

mod common;
mod compose;
mod extraction;

criterion_main!(core::core_benches, compose::compose_benches, extraction::extraction_benches);
