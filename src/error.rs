//! Error types for news-sieve.
//!
//! This module defines the error types returned by configuration loading.
//! Pipeline outcomes (accepted/rejected articles) are domain results, not
//! errors, and live in [`crate::record`](crate::record).

/// Error type for configuration operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Reading a configuration file failed.
    #[error("config file error: {0}")]
    ConfigIo(#[from] std::io::Error),

    /// Parsing configuration JSON failed.
    #[error("config parse error: {0}")]
    ConfigParse(#[from] serde_json::Error),
}

/// Result type alias for fallible operations.
pub type Result<T> = std::result::Result<T, Error>;
