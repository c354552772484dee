//! Catalogue loading errors.

/// Errors that can occur while loading a catalogue.
#[derive(Debug, thiserror::Error)]
pub enum CatalogueError {
    /// Catalogue file could not be read
    #[error("failed to read catalogue: {0}")]
    Io(#[from] std::io::Error),

    /// Catalogue is not valid JSON or has the wrong shape
    #[error("invalid catalogue JSON: {0}")]
    Json(#[from] serde_json::Error),
}
