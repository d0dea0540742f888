//! Error types for mranki-engine.
//!
//! Errors from engine workflows fall into two categories:
//!
//! 1. **Client errors**: Wrapped from the underlying [`mranki::Error`] type
//! 2. **Workflow errors**: Specific to engine operations (e.g. AnkiConnect
//!    unreachable before setup, a media call with no source)
//!
//! # Example
//!
//! ```no_run
//! use mranki_engine::{Engine, Error};
//!
//! # async fn example() {
//! let engine = Engine::new();
//!
//! match engine.setup().ensure_structure().await {
//!     Ok(report) => println!("{} decks created", report.created.len()),
//!     Err(Error::AnkiUnavailable) => {
//!         eprintln!("Is Anki running?");
//!     }
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! # }
//! ```

use std::fmt;

/// Result type for mranki-engine operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during engine operations.
///
/// Engine errors wrap lower-level client errors and add workflow-specific
/// error variants for common failure cases.
#[derive(Debug)]
pub enum Error {
    /// An error from the underlying mranki client.
    Client(mranki::Error),

    /// AnkiConnect did not answer the availability probe.
    ///
    /// Raised before any mutation is attempted; nothing has been created.
    AnkiUnavailable,

    /// A media store was requested with no data, path or url.
    MissingMediaSource,

    /// An I/O error occurred.
    Io(std::io::Error),
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Client(e) => Some(e),
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Client(e) => write!(f, "{}", e),
            Error::AnkiUnavailable => write!(
                f,
                "cannot reach AnkiConnect; ensure Anki is running with the add-on enabled"
            ),
            Error::MissingMediaSource => {
                write!(f, "storing media requires one of data, path or url")
            }
            Error::Io(e) => write!(f, "I/O error: {}", e),
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<mranki::Error> for Error {
    fn from(err: mranki::Error) -> Self {
        Error::Client(err)
    }
}
