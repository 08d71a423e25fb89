use std::path::PathBuf;

/// Errors raised while reading a catalog file.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// The file could not be read.
    #[error("failed to read catalog {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The file is not a valid TOML catalog.
    #[error("invalid TOML catalog: {0}")]
    Toml(#[from] toml::de::Error),

    /// The file is not a valid JSON catalog.
    #[error("invalid JSON catalog: {0}")]
    Json(#[from] serde_json::Error),
}
