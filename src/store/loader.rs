// src/store/loader.rs
use super::types::EntryTable;
use crate::core::error::{AppError, Result};
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Json,
    Toml,
}

impl CatalogFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase)
            .as_deref()
        {
            Some("json") => Ok(Self::Json),
            Some("toml") => Ok(Self::Toml),
            _ => Err(AppError::Catalog(format!(
                "Unsupported catalog format: {}",
                path.display()
            ))),
        }
    }
}

/// Parse a catalog whose root is a key → text map.
pub fn parse_catalog(content: &str, format: CatalogFormat) -> Result<EntryTable> {
    match format {
        CatalogFormat::Json => serde_json::from_str(content)
            .map_err(|e| AppError::Catalog(format!("JSON: {}", e))),
        CatalogFormat::Toml => {
            toml::from_str(content).map_err(|e| AppError::Catalog(format!("TOML: {}", e)))
        }
    }
}

pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<EntryTable> {
    let path = path.as_ref();
    let format = CatalogFormat::from_path(path)?;
    let content = std::fs::read_to_string(path)?;

    let table = parse_catalog(&content, format)
        .map_err(|e| AppError::Catalog(format!("{} ({})", e, path.display())))?;

    log::debug!("Loaded {} entries from {}", table.len(), path.display());
    Ok(table)
}
