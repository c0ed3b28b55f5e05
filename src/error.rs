use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while loading map content from structured data sources.
#[derive(Debug, Error)]
pub enum MapError {
    /// A coordinate string did not match the `{x, y}` encoding
    #[error("malformed coordinate string: {raw:?}")]
    Parse { raw: String },

    #[error("data source not found: {id}")]
    DataSourceNotFound { id: String },

    /// A required park field was absent or unparseable
    #[error("park source {id} is missing required field `{field}`")]
    MalformedPark { id: String, field: String },

    #[error("character source {id} has {found} sample points, need at least 4")]
    InsufficientSamplePoints { id: String, found: usize },

    /// The source exists but its top-level shape is wrong
    #[error("data source {id} is malformed: expected {expected}")]
    MalformedSource { id: String, expected: &'static str },

    #[error("failed to read {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("data source {id} is not valid JSON")]
    Json {
        id: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type Result<T> = std::result::Result<T, MapError>;
