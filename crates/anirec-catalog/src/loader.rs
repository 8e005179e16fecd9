//! CSV catalog loader.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use anirec_core::config::CatalogConfig;
use anirec_core::errors::CatalogError;
use anirec_core::models::{Catalog, Item};
use tracing::{info, warn};

use crate::preprocess::{normalize_description, normalize_title};

/// Load a catalog from a CSV file with a header row.
///
/// The title and description columns are taken from `config`; every other
/// non-empty cell is kept as an item attribute under its header name.
pub fn load_catalog<P: AsRef<Path>>(path: P, config: &CatalogConfig) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| CatalogError::Io {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let catalog = read_catalog(file, config)?;
    info!(
        path = %path.display(),
        items = catalog.len(),
        hash = %catalog.content_hash(),
        "catalog loaded"
    );
    Ok(catalog)
}

/// Read a catalog from any CSV source.
pub fn read_catalog<R: Read>(source: R, config: &CatalogConfig) -> Result<Catalog, CatalogError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(source);

    let headers = reader
        .headers()
        .map_err(|e| CatalogError::Parse {
            line: 1,
            message: format!("failed to read headers: {e}"),
        })?
        .clone();

    let column = |name: &str| {
        headers
            .iter()
            .position(|h| h.trim() == name)
            .ok_or_else(|| CatalogError::MissingColumn {
                column: name.to_string(),
                available: headers.iter().collect::<Vec<_>>().join(", "),
            })
    };
    let title_idx = column(&config.title_column)?;
    let description_idx = column(&config.description_column)?;

    let mut items = Vec::new();
    let mut skipped = 0usize;
    let mut line = 1u64;

    for result in reader.records() {
        line += 1;
        let record = result.map_err(|e| CatalogError::Parse {
            line: e.position().map(|p| p.line()).unwrap_or(line),
            message: e.to_string(),
        })?;
        if let Some(pos) = record.position() {
            line = pos.line();
        }

        let Some(title) = normalize_title(record.get(title_idx)) else {
            warn!(line, "row without a title skipped");
            skipped += 1;
            continue;
        };

        let mut item = Item::new(title, normalize_description(record.get(description_idx)));
        for (idx, (header, value)) in headers.iter().zip(record.iter()).enumerate() {
            if idx == title_idx || idx == description_idx {
                continue;
            }
            let value = value.trim();
            if !value.is_empty() {
                item = item.with_attribute(header.trim(), value);
            }
        }
        items.push(item);
    }

    if skipped > 0 {
        warn!(skipped, "catalog rows skipped");
    }
    Ok(Catalog::new(items))
}
