//! Favorite-based ranking.
//!
//! Scores are the sum of the favorites' similarity rows. Every row of a
//! matched favorite, and every row sharing a title with any supplied
//! favorite, is excluded. Candidates are sorted by score descending with a
//! stable sort, so equal scores keep catalog order.

use std::collections::HashSet;

use anirec_core::models::{Catalog, Recommendation};
use anirec_vectorize::{SimilarityIndex, SimilarityMatrix, TitleIndex};

/// Rank against a built index. See [`rank`].
pub fn recommend<S: AsRef<str>>(
    favorites: &[S],
    top_n: usize,
    index: &SimilarityIndex,
) -> Vec<Recommendation> {
    rank(
        favorites,
        top_n,
        index.similarity(),
        index.title_index(),
        index.catalog(),
    )
}

/// Rank the catalog against `favorites` using `similarity`.
///
/// Returns at most `top_n` items, most similar first. The result is empty
/// when `favorites` is empty, `top_n` is zero, or no favorite is in
/// `titles`. Unknown favorites contribute nothing. Candidates with a zero
/// score are still eligible.
///
/// Rows beyond `similarity.len()` are never ranked; callers pair a matrix
/// with the catalog it was built from.
pub fn rank<S: AsRef<str>>(
    favorites: &[S],
    top_n: usize,
    similarity: &SimilarityMatrix,
    titles: &TitleIndex,
    catalog: &Catalog,
) -> Vec<Recommendation> {
    if favorites.is_empty() || top_n == 0 {
        return Vec::new();
    }

    let n = similarity.len().min(catalog.len());
    let matched: Vec<usize> = favorites
        .iter()
        .filter_map(|f| titles.get(f.as_ref()))
        .filter(|&row| row < n)
        .collect();
    if matched.is_empty() {
        return Vec::new();
    }

    let mut scores = vec![0.0f64; n];
    for &row in &matched {
        for (acc, v) in scores.iter_mut().zip(similarity.row(row)) {
            *acc += v;
        }
    }

    let favorite_titles: HashSet<&str> = favorites.iter().map(AsRef::as_ref).collect();
    let excluded: HashSet<usize> = matched.iter().copied().collect();

    let mut candidates: Vec<(usize, f64)> = scores
        .into_iter()
        .enumerate()
        .filter(|(row, _)| !excluded.contains(row))
        .filter(|(row, _)| {
            catalog
                .get(*row)
                .is_some_and(|item| !favorite_titles.contains(item.title.as_str()))
        })
        .collect();
    candidates.sort_by(|a, b| b.1.total_cmp(&a.1));
    candidates.truncate(top_n);

    candidates
        .into_iter()
        .enumerate()
        .filter_map(|(i, (row, score))| {
            let item = catalog.get(row)?;
            Some(Recommendation {
                rank: i + 1,
                row,
                title: item.title.clone(),
                description: item.description.clone(),
                score,
                explanation: None,
            })
        })
        .collect()
}

/// Favorites that are not in the title index, in input order, deduplicated.
pub fn unknown_favorites<S: AsRef<str>>(favorites: &[S], titles: &TitleIndex) -> Vec<String> {
    let mut seen = HashSet::new();
    favorites
        .iter()
        .map(AsRef::as_ref)
        .filter(|f| !titles.contains(f) && seen.insert(*f))
        .map(str::to_string)
        .collect()
}
