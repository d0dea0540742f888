//! Deck-related types.

use serde::Deserialize;

/// Statistics for a deck.
///
/// Note: The deck ID is provided as the key in the HashMap returned by
/// [`DeckActions::stats()`](crate::actions::DeckActions::stats), not as a
/// field here.
#[derive(Debug, Clone, Deserialize)]
pub struct DeckStats {
    /// The deck name.
    pub name: String,
    /// Number of new cards.
    #[serde(default, alias = "newCount", alias = "new_count")]
    pub new_count: i64,
    /// Number of cards in learning.
    #[serde(default, alias = "learnCount", alias = "learn_count")]
    pub learn_count: i64,
    /// Number of cards due for review.
    #[serde(default, alias = "reviewCount", alias = "review_count")]
    pub review_count: i64,
    /// Total number of cards in the deck.
    #[serde(default, alias = "totalInDeck", alias = "total_in_deck")]
    pub total_in_deck: i64,
}
