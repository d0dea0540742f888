//! Card submission workflows.
//!
//! This module turns [`Card`]s into AnkiConnect notes: it makes sure target
//! decks exist, maps front/back onto the field names each note type expects,
//! and applies the deck-scoped duplicate policy.
//!
//! # Example
//!
//! ```no_run
//! use mranki_engine::{Card, Engine};
//!
//! # async fn example() -> mranki_engine::Result<()> {
//! let engine = Engine::new();
//!
//! let card = Card::basic(
//!     "MRCPsych::Paper A::Pharmacology",
//!     "[Paper A - Pharmacology] What class of drug is clozapine?",
//!     "Atypical (second-generation) antipsychotic",
//! )
//! .tags(["mrcpsych", "paper-a", "pharmacology"]);
//!
//! match engine.submit().add_card(&card).await? {
//!     Some(id) => println!("Created note {}", id),
//!     None => println!("Rejected as a duplicate"),
//! }
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;
use std::path::Path;

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD as BASE64;
use mranki::{AnkiClient, DeckStats, DuplicateScope, Note, NoteBuilder, StoreMediaParams};

use crate::card::Card;
use crate::error::{Error, Result};

/// The note type used for front/back cards.
pub const BASIC_MODEL: &str = "Basic";

/// The note type used for cloze-deletion cards.
pub const CLOZE_MODEL: &str = "Cloze";

/// Prefix applied to media filenames stored by this toolchain.
const MEDIA_PREFIX: &str = "mrcpsych_";

/// Submission workflow engine.
#[derive(Debug)]
pub struct SubmitEngine<'a> {
    client: &'a AnkiClient,
}

impl<'a> SubmitEngine<'a> {
    pub(crate) fn new(client: &'a AnkiClient) -> Self {
        Self { client }
    }

    /// Create a deck if it does not already exist.
    ///
    /// Returns `Some(id)` when the deck was created, `None` when it was
    /// already present. The read-then-create window is not atomic; no
    /// concurrent writers are assumed.
    pub async fn ensure_deck(&self, name: &str) -> Result<Option<i64>> {
        let decks = self.client.decks().names().await?;
        if decks.iter().any(|d| d == name) {
            return Ok(None);
        }
        Ok(Some(self.client.decks().create(name).await?))
    }

    /// Add a single flashcard.
    ///
    /// Ensures the target deck exists, then submits one note using the
    /// Cloze or Basic note type according to the card's cloze flag.
    /// Returns `Some(id)`, or `None` when the duplicate policy rejected it.
    pub async fn add_card(&self, card: &Card) -> Result<Option<i64>> {
        let model = if card.cloze { CLOZE_MODEL } else { BASIC_MODEL };
        self.add_note(
            &card.deck,
            &card.front,
            &card.back,
            model,
            &card.tags,
            card.allow_duplicate,
        )
        .await
    }

    /// Add a single note with an explicit note type.
    ///
    /// Like [`add_card`](Self::add_card), but for note types beyond the two
    /// the card model distinguishes, e.g. `"Basic (and reversed card)"`.
    /// The Cloze model maps front/back to its `Text`/`Extra` fields; every
    /// other model uses `Front`/`Back`.
    pub async fn add_note(
        &self,
        deck: &str,
        front: &str,
        back: &str,
        model: &str,
        tags: &[String],
        allow_duplicate: bool,
    ) -> Result<Option<i64>> {
        self.ensure_deck(deck).await?;
        let note = build_note(deck, front, back, model, tags, allow_duplicate);
        Ok(self.client.notes().add(note).await?)
    }

    /// Add a batch of flashcards in a single `addNotes` call.
    ///
    /// Every referenced deck is ensured first (each unique name once, in
    /// first-seen order). Returns note IDs positionally aligned with the
    /// input; `None` marks a card the duplicate policy rejected.
    pub async fn add_cards(&self, cards: &[Card]) -> Result<Vec<Option<i64>>> {
        if cards.is_empty() {
            return Ok(Vec::new());
        }

        let existing = self.client.decks().names().await?;
        let mut ensured: Vec<&str> = existing.iter().map(String::as_str).collect();
        for card in cards {
            if !ensured.contains(&card.deck.as_str()) {
                self.client.decks().create(&card.deck).await?;
                ensured.push(&card.deck);
            }
        }

        let notes: Vec<Note> = cards
            .iter()
            .map(|card| {
                let model = if card.cloze { CLOZE_MODEL } else { BASIC_MODEL };
                build_note(
                    &card.deck,
                    &card.front,
                    &card.back,
                    model,
                    &card.tags,
                    card.allow_duplicate,
                )
            })
            .collect();

        Ok(self.client.notes().add_many(&notes).await?)
    }

    /// Store a media file in Anki's media folder.
    ///
    /// Exactly one of `data`, `path` or `url` should be given; when several
    /// are, data wins over path, path over url. Raw bytes are base64-encoded
    /// before transmission; a local path is resolved to an absolute one.
    /// With no source at all this fails before any network call.
    ///
    /// Returns the stored filename.
    pub async fn store_media(
        &self,
        filename: &str,
        data: Option<&[u8]>,
        path: Option<&Path>,
        url: Option<&str>,
    ) -> Result<String> {
        let params = if let Some(bytes) = data {
            StoreMediaParams::from_base64(filename, BASE64.encode(bytes))
        } else if let Some(path) = path {
            let resolved = path.canonicalize()?;
            StoreMediaParams::from_path(filename, resolved.to_string_lossy())
        } else if let Some(url) = url {
            StoreMediaParams::from_url(filename, url)
        } else {
            return Err(Error::MissingMediaSource);
        };

        Ok(self.client.media().store(params.delete_existing(true)).await?)
    }

    /// Add a flashcard with an embedded image.
    ///
    /// Stores the image under a `mrcpsych_`-prefixed filename, appends an
    /// `<img>` reference to the front unless one is already present, then
    /// delegates to [`add_card`](Self::add_card).
    pub async fn add_card_with_image(
        &self,
        card: &Card,
        image_path: &Path,
    ) -> Result<Option<i64>> {
        let name = image_path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| {
                Error::Io(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    "image path has no file name",
                ))
            })?;

        let stored = self
            .store_media(&format!("{MEDIA_PREFIX}{name}"), None, Some(image_path), None)
            .await?;

        let mut card = card.clone();
        if !card.front.contains("<img") {
            card.front = format!("{}<br><img src=\"{}\">", card.front, stored);
        }

        self.add_card(&card).await
    }

    /// Find notes matching an Anki search query.
    pub async fn find_notes(&self, query: &str) -> Result<Vec<i64>> {
        Ok(self.client.notes().find(query).await?)
    }

    /// Trigger a sync with AnkiWeb.
    pub async fn sync(&self) -> Result<()> {
        Ok(self.client.misc().sync().await?)
    }

    /// Get statistics for a deck.
    pub async fn deck_stats(&self, deck: &str) -> Result<HashMap<String, DeckStats>> {
        Ok(self.client.decks().stats(&[deck]).await?)
    }
}

/// Map a card's content onto the field names the model requires.
fn build_note(
    deck: &str,
    front: &str,
    back: &str,
    model: &str,
    tags: &[String],
    allow_duplicate: bool,
) -> Note {
    let mut builder = NoteBuilder::new(deck, model);
    builder = if model == CLOZE_MODEL {
        builder.field("Text", front).field("Extra", back)
    } else {
        builder.field("Front", front).field("Back", back)
    };
    builder
        .tags(tags.iter().cloned())
        .allow_duplicate(allow_duplicate)
        .duplicate_scope(DuplicateScope::Deck)
        .build()
}
