//! Error types for the formation calendar.

use std::path::PathBuf;

use thiserror::Error;

/// Errors that can occur while building profiles, loading config, or exporting.
///
/// Deriving and serializing events never fail; only the boundaries do.
#[derive(Error, Debug)]
pub enum CalendarError {
    #[error("Invalid date '{0}'. Expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Profile error: {0}")]
    Profile(String),

    #[error("Could not export to {}: {source}", path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for formation calendar operations.
pub type CalendarResult<T> = Result<T, CalendarError>;
