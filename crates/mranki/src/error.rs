//! Error types for the mranki crate.
//!
//! The two failures callers usually need to tell apart are
//! [`Error::ConnectionRefused`] (Anki is not running, or AnkiConnect is not
//! installed) and [`Error::Anki`] (AnkiConnect processed the request and
//! reported a named failure, e.g. a duplicate note).
//!
//! # Example
//!
//! ```no_run
//! use mranki::{AnkiClient, Error};
//!
//! # async fn example() {
//! let client = AnkiClient::new();
//!
//! match client.decks().names().await {
//!     Ok(decks) => println!("Found {} decks", decks.len()),
//!     Err(Error::ConnectionRefused) => {
//!         eprintln!("Please start Anki with AnkiConnect installed");
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # }
//! ```

use thiserror::Error;

/// The error type for AnkiConnect operations.
#[derive(Debug, Error)]
pub enum Error {
    /// HTTP/network error from reqwest.
    ///
    /// Typically indicates network issues unrelated to Anki.
    /// For connection issues, see [`Error::ConnectionRefused`].
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// AnkiConnect returned an error message.
    ///
    /// The message string contains the remote failure verbatim. Common
    /// messages include:
    /// - "cannot create note because it is a duplicate"
    /// - "deck was not found"
    /// - "model was not found"
    #[error("AnkiConnect error: {0}")]
    Anki(String),

    /// Response carried neither a result nor an error.
    ///
    /// This is unexpected for a result-bearing action and may indicate an
    /// AnkiConnect bug.
    #[error("AnkiConnect returned empty response")]
    EmptyResponse,

    /// JSON serialization/deserialization error.
    ///
    /// May occur if AnkiConnect returns unexpected data formats.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Connection refused - Anki is likely not running.
    ///
    /// This error occurs when:
    /// - Anki is not running
    /// - The AnkiConnect add-on is not installed
    /// - AnkiConnect is configured on a different port
    #[error("Could not connect to Anki. Is Anki running with AnkiConnect installed?")]
    ConnectionRefused,
}

/// A specialized Result type for AnkiConnect operations.
pub type Result<T> = std::result::Result<T, Error>;
