use anirec_core::models::{Catalog, Item};
use anirec_vectorize::build_index;
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "robot", "pilot", "space", "school", "romance", "ninja", "village", "war", "magic", "the",
    "and", "of", "x", "dragon",
];

fn description() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(WORDS), 0..8).prop_map(|w| w.join(" "))
}

fn catalog() -> impl Strategy<Value = Catalog> {
    prop::collection::vec(description(), 0..12).prop_map(|descs| {
        descs
            .into_iter()
            .enumerate()
            .map(|(i, d)| Item::new(format!("T{i}"), d))
            .collect()
    })
}

proptest! {
    #[test]
    fn similarity_is_symmetric(cat in catalog()) {
        let sim = build_index(cat).similarity().clone();
        for i in 0..sim.len() {
            for j in 0..sim.len() {
                prop_assert_eq!(sim.get(i, j).to_bits(), sim.get(j, i).to_bits());
            }
        }
    }

    #[test]
    fn similarity_in_unit_range(cat in catalog()) {
        let idx = build_index(cat);
        let sim = idx.similarity();
        for i in 0..sim.len() {
            for &v in sim.row(i) {
                prop_assert!((0.0..=1.0).contains(&v), "value {} out of range", v);
            }
        }
    }

    #[test]
    fn empty_rows_have_zero_similarity(cat in catalog()) {
        let idx = build_index(cat);
        let weights = idx.model().weights();
        let sim = idx.similarity();
        for i in 0..sim.len() {
            if weights.row_is_zero(i) {
                prop_assert!(sim.row(i).iter().all(|&v| v == 0.0));
            }
        }
    }

    #[test]
    fn diagonal_is_row_maximum(cat in catalog()) {
        let idx = build_index(cat);
        let sim = idx.similarity();
        for i in 0..sim.len() {
            let diag = sim.get(i, i);
            prop_assert!(sim.row(i).iter().all(|&v| v <= diag));
        }
    }

    #[test]
    fn build_is_deterministic(cat in catalog()) {
        let a = build_index(cat.clone());
        let b = build_index(cat);
        prop_assert_eq!(a.similarity(), b.similarity());
        prop_assert_eq!(a.stats(), b.stats());
    }
}
