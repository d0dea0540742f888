//! The flashcard value type shared by submission and validation.

use serde::{Deserialize, Serialize};

/// A candidate flashcard.
///
/// Transient input to validation and submission; nothing here is persisted
/// by this system. For a cloze card, `front` holds the cloze text
/// (`{{c1::...}}` markup) and `back` the optional extra shown after reveal.
///
/// Deserializes from the JSON shape card-producing callers emit; `back`,
/// `tags` and the flags may be omitted there.
///
/// # Example
///
/// ```
/// use mranki_engine::Card;
///
/// let card = Card::basic(
///     "MRCPsych::Paper A::Pharmacology",
///     "[Paper A - Pharmacology] What is the mechanism of action of clozapine?",
///     "D2 antagonist with high 5-HT2A affinity",
/// )
/// .tags(["mrcpsych", "paper-a", "pharmacology"]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Card {
    /// Target deck name, e.g. `MRCPsych::Paper A::Pharmacology`.
    pub deck: String,
    /// Question text, or cloze text for cloze cards.
    pub front: String,
    /// Answer text, or the extra field for cloze cards.
    #[serde(default)]
    pub back: String,
    /// Tags to attach to the note.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Whether this card uses the Cloze note type.
    #[serde(default, alias = "is_cloze")]
    pub cloze: bool,
    /// Whether the duplicate policy should admit this card anyway.
    #[serde(default)]
    pub allow_duplicate: bool,
}

impl Card {
    /// Create a front/back card.
    pub fn basic(
        deck: impl Into<String>,
        front: impl Into<String>,
        back: impl Into<String>,
    ) -> Self {
        Self {
            deck: deck.into(),
            front: front.into(),
            back: back.into(),
            tags: Vec::new(),
            cloze: false,
            allow_duplicate: false,
        }
    }

    /// Create a cloze-deletion card.
    ///
    /// `text` should carry `{{c1::...}}` markup; `extra` may be empty.
    pub fn cloze(
        deck: impl Into<String>,
        text: impl Into<String>,
        extra: impl Into<String>,
    ) -> Self {
        Self {
            deck: deck.into(),
            front: text.into(),
            back: extra.into(),
            tags: Vec::new(),
            cloze: true,
            allow_duplicate: false,
        }
    }

    /// Add tags to the card.
    pub fn tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Let the duplicate policy admit this card even if one like it exists.
    pub fn allow_duplicate(mut self, allow: bool) -> Self {
        self.allow_duplicate = allow;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserializes_minimal_caller_shape() {
        let card: Card = serde_json::from_str(
            r#"{"deck": "MRCPsych::Paper A::Genetics", "front": "[Paper A] Q"}"#,
        )
        .unwrap();
        assert_eq!(card.deck, "MRCPsych::Paper A::Genetics");
        assert_eq!(card.back, "");
        assert!(card.tags.is_empty());
        assert!(!card.cloze);
        assert!(!card.allow_duplicate);
    }

    #[test]
    fn test_accepts_is_cloze_alias() {
        let card: Card = serde_json::from_str(
            r#"{"deck": "d", "front": "{{c1::x}}", "is_cloze": true}"#,
        )
        .unwrap();
        assert!(card.cloze);
    }
}
