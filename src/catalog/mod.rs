//! Video catalog loading
//!
//! Parses the plain-text catalog format (`title | id | tag, tag`) into a
//! [`VideoLibrary`] and defines the lookup seam the player depends on.

mod parser;
mod traits;

pub use parser::{parse_catalog_str, CatalogError};
pub use traits::VideoCatalog;

use crate::model::VideoLibrary;
use anyhow::{Context, Result};
use std::path::Path;

/// Catalog bundled with the binary, used when no `--catalog` is given
const DEFAULT_CATALOG: &str = include_str!("../../data/videos.txt");

/// Parse a catalog file from disk
///
/// # Arguments
/// * `path` - Path to a text file with one `title | id | tags` entry per line
pub fn parse_catalog(path: &Path) -> Result<VideoLibrary> {
    log::info!("Parsing video catalog from {:?}", path);
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to open video catalog: {:?}", path))?;

    let library = parse_catalog_str(&text)
        .with_context(|| format!("Invalid video catalog: {:?}", path))?;

    log::info!("Loaded catalog: {} videos", library.video_count());
    Ok(library)
}

/// The bundled five-video catalog
pub fn default_catalog() -> VideoLibrary {
    match parse_catalog_str(DEFAULT_CATALOG) {
        Ok(library) => library,
        Err(e) => {
            log::warn!("Bundled catalog is invalid: {}", e);
            VideoLibrary::new()
        }
    }
}
