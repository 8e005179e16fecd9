//! Prompt construction and text excerpts.

use anirec_core::constants::{MAX_PROMPT_DESCRIPTION_CHARS, MAX_PROMPT_FAVORITES, PITCH_FALLBACK_CHARS};
use anirec_core::models::{Item, Recommendation};

pub const EXPLAIN_SYSTEM_PROMPT: &str =
    "You are an anime expert. In two sentences, explain why this anime would suit the viewer.";

pub const PITCH_SYSTEM_PROMPT: &str =
    "Write a two-sentence hook that makes people want to watch this anime.";

/// The first `max_chars` characters of `text`, never splitting a character.
pub fn excerpt(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte, _)) => &text[..byte],
        None => text,
    }
}

/// Description excerpt used when no pitch can be generated.
pub fn fallback_pitch(item: &Item) -> String {
    item.description_excerpt(PITCH_FALLBACK_CHARS).to_string()
}

/// Prompt for explaining one recommendation. At most three favorites and
/// the first 300 characters of the description are included.
pub fn explain_prompt(recommendation: &Recommendation, favorites: &[String]) -> String {
    let favorites: Vec<&str> = favorites
        .iter()
        .take(MAX_PROMPT_FAVORITES)
        .map(String::as_str)
        .collect();
    format!(
        "Favorites: {}\nRecommended: {}\nSynopsis: {}",
        favorites.join(", "),
        recommendation.title,
        excerpt(&recommendation.description, MAX_PROMPT_DESCRIPTION_CHARS)
    )
}

/// Prompt for pitching one item, including its extra attributes.
pub fn pitch_prompt(item: &Item) -> String {
    let mut prompt = format!("Anime: {}\n", item.title);
    for (key, value) in &item.attributes {
        prompt.push_str(&format!("{key}: {value}\n"));
    }
    prompt.push_str(&format!(
        "Synopsis: {}",
        excerpt(&item.description, MAX_PROMPT_DESCRIPTION_CHARS)
    ));
    prompt
}
