//! Types for AnkiConnect requests and responses.

mod deck;
mod media;
mod note;

pub use deck::DeckStats;
pub use media::StoreMediaParams;
pub use note::{DuplicateScope, Note, NoteBuilder, NoteOptions};
