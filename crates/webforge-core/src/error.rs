use std::path::PathBuf;
use thiserror::Error;

/// Core error type for webforge configuration loading.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to read manifest at {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse manifest at {path}: {source}")]
    ManifestParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Plugin '{plugin}' has more than one entry file: {first} and {second}")]
    DuplicatePluginEntry {
        plugin: String,
        first: PathBuf,
        second: PathBuf,
    },

    #[error("Plugin name '{0}' is reserved for the application entry")]
    ReservedEntryName(String),

    #[error("Project root not found from {start}")]
    ProjectNotFound { start: PathBuf },
}
