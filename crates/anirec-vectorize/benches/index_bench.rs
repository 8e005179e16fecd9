use anirec_vectorize::build_index;
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use test_fixtures::synthetic_catalog;

fn bench_build_index(c: &mut Criterion) {
    let mut group = c.benchmark_group("build_index");
    for n in [100usize, 1_000] {
        let catalog = synthetic_catalog(n);
        group.bench_with_input(BenchmarkId::from_parameter(n), &catalog, |b, cat| {
            b.iter(|| build_index(cat.clone()))
        });
    }
    group.finish();
}

fn bench_search(c: &mut Criterion) {
    let index = build_index(synthetic_catalog(1_000));
    c.bench_function("search_top_10", |b| {
        b.iter(|| index.search("robot pilot space war", 10))
    });
}

criterion_group!(benches, bench_build_index, bench_search);
criterion_main!(benches);
