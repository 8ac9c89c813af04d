//! Errors at the I/O edges of the renderer.
//!
//! Rendering itself cannot fail; only reading configuration and writing the
//! finished document can.

use std::path::PathBuf;

/// Failure while loading configuration or writing output.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// Configuration file could not be read
    #[error("failed to read config {}: {source}", .path.display())]
    ReadConfig {
        /// File that was requested
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
    /// Configuration file is not valid TOML for [`crate::SiteConfig`]
    #[error("failed to parse config {}: {source}", .path.display())]
    ParseConfig {
        /// File that was parsed
        path: PathBuf,
        /// Parser error with location
        #[source]
        source: toml::de::Error,
    },
    /// Rendered document could not be written
    #[error("failed to write {}: {source}", .path.display())]
    WriteOutput {
        /// Destination file
        path: PathBuf,
        /// Underlying I/O error
        #[source]
        source: std::io::Error,
    },
}

/// Result alias for fallible site operations.
pub type Result<T> = std::result::Result<T, SiteError>;
