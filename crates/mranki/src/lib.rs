//! An async Rust client for the AnkiConnect API, scoped to the operations
//! the MRCPsych flashcard toolchain needs.
//!
//! This crate provides type-safe access to deck, note, media, model and
//! sync actions, allowing the study-workflow crates to drive a locally
//! running Anki from Rust.
//!
//! # Quick Start
//!
//! ```no_run
//! use mranki::AnkiClient;
//!
//! # async fn example() -> mranki::Result<()> {
//! // Create a client with default settings (localhost:8765)
//! let client = AnkiClient::new();
//!
//! // Check that AnkiConnect is running
//! let version = client.misc().version().await?;
//! println!("AnkiConnect version: {}", version);
//! # Ok(())
//! # }
//! ```
//!
//! # Client Configuration
//!
//! Use the builder pattern for custom configuration:
//!
//! ```no_run
//! use std::time::Duration;
//! use mranki::AnkiClient;
//!
//! let client = AnkiClient::builder()
//!     .url("http://localhost:8765")
//!     .timeout(Duration::from_secs(60))
//!     .build();
//! ```
//!
//! # Action Groups
//!
//! Operations are organized into groups accessible from the client:
//!
//! - [`AnkiClient::decks()`] - List, create, and inspect decks
//! - [`AnkiClient::notes()`] - Add and find notes, singly or in batches
//! - [`AnkiClient::media()`] - Store media files
//! - [`AnkiClient::models()`] - List note types
//! - [`AnkiClient::misc()`] - Version probe and AnkiWeb sync
//!
//! # Requirements
//!
//! - Anki must be running with the [AnkiConnect](https://ankiweb.net/shared/info/2055492159) add-on installed
//! - By default, the client connects to `http://127.0.0.1:8765`

pub mod actions;
pub mod client;
pub mod error;
mod request;
pub mod types;

pub use client::{AnkiClient, ClientBuilder};
pub use error::{Error, Result};
pub use types::{DeckStats, DuplicateScope, Note, NoteBuilder, NoteOptions, StoreMediaParams};
