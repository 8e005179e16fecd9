//! Text rendering for command output.

use std::io::Write;

use anirec_catalog::CatalogStats;
use anirec_core::models::{IndexStats, Item, Recommendation};

const DESCRIPTION_PREVIEW_CHARS: usize = 200;

fn preview(text: &str) -> String {
    match text.char_indices().nth(DESCRIPTION_PREVIEW_CHARS) {
        Some((byte, _)) => format!("{}...", &text[..byte]),
        None => text.to_string(),
    }
}

pub fn write_recommendations<W: Write>(
    out: &mut W,
    recommendations: &[Recommendation],
    verbose: bool,
) -> std::io::Result<()> {
    for rec in recommendations {
        writeln!(out, "{:>2}. {} ({:.3})", rec.rank, rec.title, rec.score)?;
        if verbose && !rec.description.is_empty() {
            writeln!(out, "    {}", preview(&rec.description))?;
        }
        if let Some(explanation) = &rec.explanation {
            writeln!(out, "    > {explanation}")?;
        }
    }
    Ok(())
}

pub fn write_key_terms<W: Write>(out: &mut W, terms: &[&str]) -> std::io::Result<()> {
    if terms.is_empty() {
        return Ok(());
    }
    writeln!(out, "    key terms: {}", terms.join(", "))
}

pub fn write_items<W: Write>(out: &mut W, items: &[Item]) -> std::io::Result<()> {
    for (row, item) in items.iter().enumerate() {
        writeln!(out, "[{row}] {}", item.title)?;
        for (key, value) in &item.attributes {
            writeln!(out, "    {key}: {value}")?;
        }
        if !item.description.is_empty() {
            writeln!(out, "    {}", preview(&item.description))?;
        }
    }
    Ok(())
}

pub fn write_stats<W: Write>(
    out: &mut W,
    catalog: &CatalogStats,
    index: &IndexStats,
) -> std::io::Result<()> {
    writeln!(out, "items:              {}", catalog.total_items)?;
    writeln!(out, "unique genres:      {}", catalog.unique_genres())?;
    writeln!(out, "empty synopses:     {}", catalog.empty_descriptions)?;
    writeln!(out, "duplicate titles:   {}", catalog.duplicate_titles)?;
    writeln!(out, "vocabulary size:    {}", index.vocabulary_size)?;
    writeln!(out, "non-zero weights:   {}", index.non_zero_weights)?;
    writeln!(out, "content hash:       {}", index.content_hash)?;
    Ok(())
}
