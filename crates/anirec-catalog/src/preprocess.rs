//! Cell normalization applied while loading.

/// Missing or blank description cells become the empty string.
pub fn normalize_description(cell: Option<&str>) -> String {
    match cell {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => String::new(),
    }
}

/// Titles are trimmed; a blank title yields `None`.
pub fn normalize_title(cell: Option<&str>) -> Option<String> {
    let title = cell?.trim();
    (!title.is_empty()).then(|| title.to_string())
}

/// Split a comma-separated genre cell into trimmed, non-empty genres.
pub fn split_genres(cell: &str) -> impl Iterator<Item = &str> {
    cell.split(',').map(str::trim).filter(|g| !g.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn descriptions() {
        assert_eq!(normalize_description(None), "");
        assert_eq!(normalize_description(Some("   ")), "");
        assert_eq!(normalize_description(Some(" A story. ")), " A story. ");
    }

    #[test]
    fn titles() {
        assert_eq!(normalize_title(Some("  Naruto ")), Some("Naruto".to_string()));
        assert_eq!(normalize_title(Some("  ")), None);
        assert_eq!(normalize_title(None), None);
    }

    #[test]
    fn genres() {
        let genres: Vec<&str> = split_genres("Action, Sci-Fi,, Mecha ").collect();
        assert_eq!(genres, vec!["Action", "Sci-Fi", "Mecha"]);
        assert_eq!(split_genres("").count(), 0);
    }
}
