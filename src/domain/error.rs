//! Error types for the Memberdesk plugin.
//!
//! This module defines the centralized error type [`MemberdeskError`] and a type alias
//! [`Result`] used throughout the plugin. All variants derive their `Error`
//! implementation through `thiserror`.

use thiserror::Error;

/// The main error type for Memberdesk operations.
///
/// Covers the failure modes of the initial member fetch (transport status and
/// payload decoding) as well as local configuration, theme and I/O problems.
#[derive(Debug, Error)]
pub enum MemberdeskError {
    /// The member source answered with a non-success HTTP status.
    ///
    /// Zellij also reports transport failures (DNS, TLS, refused connections)
    /// through this path with a 4xx status.
    #[error("member source returned HTTP {status}")]
    Http {
        /// Status code reported by the host.
        status: u16,
    },

    /// The user did not grant the web access permission.
    #[error("web access permission was denied")]
    PermissionDenied,

    /// The member payload could not be decoded as a list of records.
    #[error("malformed member payload: {0}")]
    Payload(#[from] serde_json::Error),

    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme parsing failed.
    #[error("Theme error: {0}")]
    Theme(String),

    /// Configuration is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// A specialized `Result` type for Memberdesk operations.
pub type Result<T> = std::result::Result<T, MemberdeskError>;
