use anirec_core::models::{Catalog, Item};
use anirec_recommend::recommend;
use anirec_vectorize::build_index;
use proptest::prelude::*;

const WORDS: &[&str] = &[
    "robot", "pilot", "space", "school", "romance", "ninja", "village", "war", "magic", "the",
];

fn catalog() -> impl Strategy<Value = Catalog> {
    // Titles come from a small pool so duplicates occur.
    prop::collection::vec(
        (
            0usize..8,
            prop::collection::vec(prop::sample::select(WORDS), 0..6),
        ),
        1..12,
    )
    .prop_map(|rows| {
        rows.into_iter()
            .map(|(t, words)| Item::new(format!("T{t}"), words.join(" ")))
            .collect()
    })
}

fn favorites() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec((0usize..10).prop_map(|t| format!("T{t}")), 0..4)
}

proptest! {
    #[test]
    fn never_recommends_a_favorite(cat in catalog(), favs in favorites(), k in 0usize..15) {
        let index = build_index(cat);
        for rec in recommend(&favs, k, &index) {
            prop_assert!(!favs.contains(&rec.title));
        }
    }

    #[test]
    fn length_is_min_of_k_and_eligible(cat in catalog(), favs in favorites(), k in 0usize..15) {
        let index = build_index(cat.clone());
        let recs = recommend(&favs, k, &index);
        let matched = favs.iter().any(|f| index.title_index().contains(f));
        let eligible = cat.items().iter().filter(|i| !favs.contains(&i.title)).count();
        let expected = if matched { k.min(eligible) } else { 0 };
        prop_assert_eq!(recs.len(), expected);
    }

    #[test]
    fn empty_favorites_are_empty(cat in catalog(), k in 0usize..15) {
        let index = build_index(cat);
        let none: Vec<String> = Vec::new();
        prop_assert!(recommend(&none, k, &index).is_empty());
    }

    #[test]
    fn sorted_descending_with_row_tie_break(cat in catalog(), favs in favorites(), k in 0usize..15) {
        let index = build_index(cat);
        let recs = recommend(&favs, k, &index);
        for w in recs.windows(2) {
            prop_assert!(w[0].score > w[1].score || (w[0].score == w[1].score && w[0].row < w[1].row));
        }
        for (i, r) in recs.iter().enumerate() {
            prop_assert_eq!(r.rank, i + 1);
        }
    }

    #[test]
    fn idempotent(cat in catalog(), favs in favorites(), k in 0usize..15) {
        let index = build_index(cat);
        prop_assert_eq!(recommend(&favs, k, &index), recommend(&favs, k, &index));
    }
}
