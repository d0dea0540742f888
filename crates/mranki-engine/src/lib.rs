//! MRCPsych study workflows over AnkiConnect.
//!
//! This crate sits on top of the [`mranki`] client library. While `mranki`
//! provides 1:1 API bindings, `mranki-engine` combines them into the three
//! workflows the flashcard pipeline needs: card submission, one-shot deck
//! setup, and pre-submission content validation.
//!
//! # Quick Start
//!
//! ```no_run
//! use mranki_engine::{Card, Engine, validate};
//!
//! # async fn example() -> mranki_engine::Result<()> {
//! let engine = Engine::new();
//!
//! let card = Card::basic(
//!     "MRCPsych::Paper A::Pharmacology",
//!     "[Paper A - Pharmacology] What class of drug is clozapine?",
//!     "Atypical (second-generation) antipsychotic",
//! )
//! .tags(["mrcpsych", "paper-a"]);
//!
//! // Validation is pure and needs no connection
//! assert!(validate::validate_card(&card).is_empty());
//!
//! // Submission talks to AnkiConnect
//! let note_id = engine.submit().add_card(&card).await?;
//!
//! // Direct client access when needed
//! let version = engine.client().misc().version().await?;
//! # Ok(())
//! # }
//! ```

mod card;
mod error;

pub mod setup;
pub mod submit;
pub mod validate;

pub use card::Card;
pub use error::{Error, Result};

// Re-export mranki types for convenience
pub use mranki::{
    AnkiClient, ClientBuilder, DeckStats, DuplicateScope, Note, NoteBuilder, NoteOptions,
    StoreMediaParams,
};

use setup::SetupEngine;
use submit::SubmitEngine;

/// Workflow engine for the MRCPsych flashcard pipeline.
///
/// The engine wraps an [`AnkiClient`] and provides access to the workflow
/// modules that combine multiple API calls into cohesive operations.
///
/// # Example
///
/// ```no_run
/// use mranki_engine::Engine;
///
/// # async fn example() -> mranki_engine::Result<()> {
/// // Create with default client settings
/// let engine = Engine::new();
///
/// // Or with a custom client
/// let client = mranki_engine::AnkiClient::builder()
///     .url("http://localhost:8765")
///     .build();
/// let engine = Engine::from_client(client);
///
/// let report = engine.setup().ensure_structure().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Engine {
    client: AnkiClient,
}

impl Engine {
    /// Create a new engine with default client settings.
    ///
    /// Connects to AnkiConnect at `http://127.0.0.1:8765`.
    pub fn new() -> Self {
        Self {
            client: AnkiClient::new(),
        }
    }

    /// Create an engine from an existing client.
    pub fn from_client(client: AnkiClient) -> Self {
        Self { client }
    }

    /// Get a reference to the underlying client.
    ///
    /// Use this for direct API access when workflows don't cover your use
    /// case.
    pub fn client(&self) -> &AnkiClient {
        &self.client
    }

    /// Access card submission workflows.
    ///
    /// Deck-ensuring note creation, batches, and media embedding.
    pub fn submit(&self) -> SubmitEngine<'_> {
        SubmitEngine::new(&self.client)
    }

    /// Access deck setup workflows.
    ///
    /// Idempotent creation of the fixed MRCPsych deck hierarchy.
    pub fn setup(&self) -> SetupEngine<'_> {
        SetupEngine::new(&self.client)
    }
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}
