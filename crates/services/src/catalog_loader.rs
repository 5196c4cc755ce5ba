//! The single I/O boundary of the app: catalog JSON in, validated `Catalog` out.

use std::fs;
use std::path::Path;

use quiz_core::model::{Catalog, CatalogDraft};

use crate::error::CatalogLoadError;

/// Parses and validates a catalog from a JSON string.
///
/// # Errors
///
/// Returns `CatalogLoadError::Parse` for malformed JSON and
/// `CatalogLoadError::Invalid` when the parsed draft fails validation.
pub fn load_catalog_from_str(json: &str) -> Result<Catalog, CatalogLoadError> {
    let draft: CatalogDraft = serde_json::from_str(json)?;
    Ok(draft.validate()?)
}

/// Reads, parses, and validates a catalog from a JSON file.
///
/// # Errors
///
/// Returns `CatalogLoadError::Io` when the file cannot be read, plus the
/// parse/validation errors of [`load_catalog_from_str`].
pub fn load_catalog_from_path(path: &Path) -> Result<Catalog, CatalogLoadError> {
    let json = fs::read_to_string(path)?;
    load_catalog_from_str(&json)
}
