//! Command handlers shared by the one-shot subcommands and the menu.

use std::io::Write;
use std::path::Path;

use anirec_catalog::{load_catalog, CatalogStats};
use anirec_core::config::{AnirecConfig, CliOverrides};
use anirec_core::constants::VERSION;
use anirec_explain::{create_explainer, model_overview};
use anirec_recommend::RecommendationEngine;
use anyhow::{Context, Result};
use tracing::debug;

use crate::output;

/// Highest-weighted synopsis terms shown under each search hit.
const KEY_TERMS: usize = 5;

/// Resolve configuration: defaults, optional TOML file, env, then CLI flags.
pub fn load_config(path: Option<&Path>, overrides: &CliOverrides) -> Result<AnirecConfig> {
    let config = AnirecConfig::load(path, Some(overrides)).with_context(|| match path {
        Some(p) => format!("invalid configuration in {}", p.display()),
        None => "invalid configuration".to_string(),
    })?;
    debug!(catalog = %config.catalog.path, explain = %config.explain.provider, "configuration resolved");
    Ok(config)
}

/// Load the catalog and build the engine.
///
/// With `explain` set, the configured explainer is attached; when the
/// configured provider is `none`, the offline template explainer is used.
pub fn build_engine(config: AnirecConfig, explain: bool) -> Result<RecommendationEngine> {
    let catalog = load_catalog(&config.catalog.path, &config.catalog)
        .with_context(|| format!("failed to load catalog {}", config.catalog.path))?;

    let mut explain_config = config.explain.clone();
    let engine = RecommendationEngine::new(catalog, config);
    if !explain {
        return Ok(engine);
    }

    if explain_config.provider == "none" {
        explain_config.provider = "template".to_string();
    }
    Ok(match create_explainer(&explain_config) {
        Some(explainer) => engine.with_explainer(explainer),
        None => engine,
    })
}

/// Split a comma-separated list of titles, trimming blanks away.
pub fn parse_favorites(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn recommend<W: Write>(
    engine: &mut RecommendationEngine,
    favorites: &[String],
    top_n: Option<usize>,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let top_n = top_n.unwrap_or(engine.config().recommend.default_top_n);
    let set = engine.recommend_explained(favorites, top_n)?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &set)?;
        writeln!(out)?;
        return Ok(());
    }

    if !set.unknown_favorites.is_empty() {
        writeln!(out, "Unknown titles: {}", set.unknown_favorites.join(", "))?;
    }
    if set.is_empty() {
        writeln!(out, "No recommendations available (check the titles you entered).")?;
        return Ok(());
    }
    writeln!(out, "Recommendations based on: {}", favorites.join(", "))?;
    output::write_recommendations(out, &set.recommendations, false)?;
    Ok(())
}

pub fn search<W: Write>(
    engine: &RecommendationEngine,
    query: &str,
    top_k: Option<usize>,
    json: bool,
    out: &mut W,
) -> Result<()> {
    let top_k = top_k.unwrap_or(engine.config().recommend.search_top_k);
    let hits = engine.search(query, top_k)?;

    if json {
        serde_json::to_writer_pretty(&mut *out, &hits)?;
        writeln!(out)?;
    } else if hits.is_empty() {
        writeln!(out, "No matches for \"{query}\".")?;
    } else {
        let index = engine.index();
        for hit in &hits {
            output::write_recommendations(out, std::slice::from_ref(hit), true)?;
            let terms: Vec<&str> = index
                .model()
                .top_terms(hit.row, KEY_TERMS)
                .into_iter()
                .map(|(term, _)| term)
                .collect();
            output::write_key_terms(out, &terms)?;
        }
    }
    Ok(())
}

pub fn head<W: Write>(engine: &RecommendationEngine, n: usize, out: &mut W) -> Result<()> {
    let index = engine.index();
    output::write_items(out, index.catalog().head(n))?;
    Ok(())
}

pub fn stats<W: Write>(engine: &RecommendationEngine, json: bool, out: &mut W) -> Result<()> {
    let index = engine.index();
    let catalog_stats = CatalogStats::compute(index.catalog(), &engine.config().catalog.genre_column);
    let index_stats = index.stats();

    if json {
        let report = serde_json::json!({
            "catalog": catalog_stats,
            "index": index_stats,
        });
        serde_json::to_writer_pretty(&mut *out, &report)?;
        writeln!(out)?;
    } else {
        output::write_stats(out, &catalog_stats, &index_stats)?;
    }
    Ok(())
}

/// Print a pitch for `title`. Unknown titles are reported, not failed.
pub fn pitch<W: Write>(engine: &mut RecommendationEngine, title: &str, out: &mut W) -> Result<()> {
    match engine.pitch(title) {
        Some(text) if text.is_empty() => writeln!(out, "{title} has no synopsis to pitch.")?,
        Some(text) => writeln!(out, "{title}: {text}")?,
        None => writeln!(out, "Unknown title: {title}")?,
    }
    Ok(())
}

pub fn about<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "anirec {VERSION}")?;
    writeln!(out, "{}", model_overview())?;
    Ok(())
}
