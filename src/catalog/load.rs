use std::fs;
use std::path::Path;

use serde::Deserialize;

use super::{Book, CatalogError};

/// On-disk catalog encodings, picked from the file extension.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(super) enum Format {
    /// A bare JSON array of books, as served by `GET /books`.
    Json,
    /// A TOML document with an optional `[[books]]` array.
    Toml,
}

impl Format {
    pub(super) fn from_path(path: &Path) -> Self {
        let is_json = path
            .extension()
            .and_then(|s| s.to_str())
            .map(|ext| ext.eq_ignore_ascii_case("json"))
            .unwrap_or(false);
        if is_json { Self::Json } else { Self::Toml }
    }
}

#[derive(Deserialize, Default)]
#[serde(default)]
struct TomlCatalog {
    books: Vec<Book>,
}

/// Read the catalog at `path`, preserving file order.
pub fn load(path: &Path) -> Result<Vec<Book>, CatalogError> {
    let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let books = parse(&text, Format::from_path(path))?;
    log::debug!("loaded {} books from {}", books.len(), path.display());
    Ok(books)
}

pub(super) fn parse(text: &str, format: Format) -> Result<Vec<Book>, CatalogError> {
    match format {
        Format::Json => Ok(serde_json::from_str(text)?),
        Format::Toml => {
            let catalog: TomlCatalog = toml::from_str(text)?;
            Ok(catalog.books)
        }
    }
}
