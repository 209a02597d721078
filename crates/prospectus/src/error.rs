//! Error types for the site model.

use std::path::PathBuf;

use prospectus_core::TimerError;

/// Result type alias for site model operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while configuring or driving the page.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// File I/O error.
    #[error("Failed to read site config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML parse error.
    #[error("Site config parse error: {0}")]
    Parse(#[from] toml::de::Error),

    /// TOML serialization error.
    #[error("Site config serialization error: {0}")]
    Serialize(#[from] toml::ser::Error),

    /// The configuration parsed but violates a constraint.
    #[error("Invalid site config: {0}")]
    InvalidConfig(String),

    /// An index did not address an existing slide or navigation item.
    #[error("Index {index} out of range for {len} entries")]
    OutOfRange { index: usize, len: usize },

    /// The page declares no sections to track.
    #[error("At least one page section must be declared")]
    NoSections,

    /// A section id that the page does not declare.
    #[error("Unknown section '{0}'")]
    UnknownSection(String),

    /// Timer bookkeeping error.
    #[error(transparent)]
    Timer(#[from] TimerError),
}

impl Error {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a config constraint error.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        Self::InvalidConfig(message.into())
    }
}
