//! Deck-related AnkiConnect actions.
//!
//! # Example
//!
//! ```no_run
//! use mranki::AnkiClient;
//!
//! # async fn example() -> mranki::Result<()> {
//! let client = AnkiClient::new();
//!
//! // List all decks
//! let decks = client.decks().names().await?;
//!
//! // Create a deck (hierarchical names use ::)
//! let deck_id = client.decks().create("MRCPsych::Paper A").await?;
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

use serde::Serialize;

use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::DeckStats;

/// Provides access to deck-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::decks()`].
#[derive(Debug)]
pub struct DeckActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
struct CreateDeckParams<'a> {
    deck: &'a str,
}

#[derive(Serialize)]
struct GetDeckStatsParams<'a> {
    decks: &'a [&'a str],
}

impl<'a> DeckActions<'a> {
    /// Get all deck names.
    pub async fn names(&self) -> Result<Vec<String>> {
        self.client.invoke_without_params("deckNames").await
    }

    /// Create a new deck.
    ///
    /// Returns the ID of the created deck. If a deck with the same name
    /// already exists, returns the ID of the existing deck.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use mranki::AnkiClient;
    /// # async fn example() -> mranki::Result<()> {
    /// let client = AnkiClient::new();
    /// let deck_id = client.decks().create("MRCPsych::Paper A::Genetics").await?;
    /// println!("Created deck with ID: {}", deck_id);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn create(&self, name: &str) -> Result<i64> {
        self.client
            .invoke("createDeck", CreateDeckParams { deck: name })
            .await
    }

    /// Get statistics for multiple decks.
    ///
    /// Returns a map from deck ID (as string) to deck statistics.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use mranki::AnkiClient;
    /// # async fn example() -> mranki::Result<()> {
    /// let client = AnkiClient::new();
    /// let stats = client.decks().stats(&["MRCPsych::Paper A::Pharmacology"]).await?;
    /// for (_, stat) in stats {
    ///     println!("{}: {} cards due", stat.name, stat.review_count);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn stats(&self, decks: &[&str]) -> Result<HashMap<String, DeckStats>> {
        self.client
            .invoke("getDeckStats", GetDeckStatsParams { decks })
            .await
    }
}
