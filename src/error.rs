//! Error type shared by the library. The binary wraps it in `anyhow` for
//! context.

use std::path::PathBuf;

use thiserror::Error;

/// Failures raised while loading configuration or menu data, or when a view
/// target cannot be found.
#[derive(Error, Debug)]
pub enum MenuError {
    /// No data source produced a menu; the session cannot start.
    #[error("no menu data available")]
    MissingData,

    /// The container the menu renders into is not in the document.
    #[error("container not found: {0}")]
    MissingContainer(String),

    /// The search input is not in the document, so search is disabled.
    #[error("search input not found: {0}")]
    MissingInput(String),

    /// A config or menu file could not be read.
    #[error("failed to read {path}")]
    Load {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A menu document is not valid JSON for the menu contract.
    #[error("failed to parse {path}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The config file is malformed or the home directory is unknown.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Result alias using [`MenuError`].
pub type Result<T> = std::result::Result<T, MenuError>;
