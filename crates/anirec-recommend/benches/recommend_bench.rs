use anirec_core::config::AnirecConfig;
use anirec_recommend::{recommend, RecommendationEngine};
use anirec_vectorize::build_index;
use criterion::{criterion_group, criterion_main, Criterion};
use test_fixtures::synthetic_catalog;

fn bench_rank(c: &mut Criterion) {
    let index = build_index(synthetic_catalog(1_000));
    let favorites = vec!["Title 1".to_string(), "Title 42".to_string(), "Title 500".to_string()];

    c.bench_function("rank_3_favorites_1000_items", |b| {
        b.iter(|| recommend(&favorites, 10, &index))
    });
}

fn bench_engine(c: &mut Criterion) {
    let mut engine = RecommendationEngine::new(synthetic_catalog(1_000), AnirecConfig::default());
    let favorites = vec!["Title 7".to_string()];

    c.bench_function("engine_recommend_top_10", |b| {
        b.iter(|| engine.recommend(&favorites, 10).unwrap())
    });
}

criterion_group!(benches, bench_rank, bench_engine);
criterion_main!(benches);
