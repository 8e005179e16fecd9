use anirec_core::models::*;
use proptest::prelude::*;

#[test]
fn content_hash_changes_with_description() {
    let a = Catalog::new(vec![Item::new("A", "robots fight in space")]);
    let b = Catalog::new(vec![Item::new("A", "robots fight on earth")]);
    assert_ne!(a.content_hash(), b.content_hash());
}

#[test]
fn content_hash_depends_on_row_order() {
    let a = Catalog::new(vec![Item::new("A", "x"), Item::new("B", "y")]);
    let b = Catalog::new(vec![Item::new("B", "y"), Item::new("A", "x")]);
    assert_ne!(a.content_hash(), b.content_hash());
}

#[test]
fn content_hash_separates_fields() {
    let a = Catalog::new(vec![Item::new("ab", "c")]);
    let b = Catalog::new(vec![Item::new("a", "bc")]);
    assert_ne!(a.content_hash(), b.content_hash());
}

#[test]
fn content_hash_ignores_attributes() {
    let a = Catalog::new(vec![Item::new("A", "x").with_attribute("Genre", "Action")]);
    let b = Catalog::new(vec![Item::new("A", "x")]);
    assert_eq!(a.content_hash(), b.content_hash());
}

#[test]
fn head_is_clamped() {
    let catalog: Catalog = (0..3).map(|i| Item::new(format!("T{i}"), "")).collect();
    assert_eq!(catalog.head(5).len(), 3);
    assert_eq!(catalog.head(2).len(), 2);
    assert!(Catalog::empty().head(5).is_empty());
}

#[test]
fn description_excerpt_respects_char_boundaries() {
    let item = Item::new("Shingeki", "進撃の巨人");
    assert_eq!(item.description_excerpt(3), "進撃の");
    assert_eq!(item.description_excerpt(10), "進撃の巨人");
    assert_eq!(Item::new("Empty", "").description_excerpt(5), "");
}

#[test]
fn recommendation_set_titles_in_rank_order() {
    let set = RecommendationSet {
        recommendations: vec![
            Recommendation {
                rank: 1,
                row: 2,
                title: "B".into(),
                description: String::new(),
                score: 1.0,
                explanation: None,
            },
            Recommendation {
                rank: 2,
                row: 0,
                title: "C".into(),
                description: String::new(),
                score: 0.0,
                explanation: None,
            },
        ],
        provider: "tfidf".into(),
        unknown_favorites: vec![],
    };
    assert_eq!(set.titles(), vec!["B", "C"]);
    assert_eq!(set.len(), 2);
}

proptest! {
    #[test]
    fn prop_content_hash_deterministic(titles in proptest::collection::vec("[a-z]{1,8}", 0..10)) {
        let items: Vec<Item> = titles.iter().map(|t| Item::new(t.clone(), t.to_uppercase())).collect();
        let a = Catalog::new(items.clone());
        let b = Catalog::new(items);
        prop_assert_eq!(a.content_hash(), b.content_hash());
    }
}
