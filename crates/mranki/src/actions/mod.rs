//! Action groups for the AnkiConnect operations this toolchain uses.
//!
//! Each group borrows the client and is obtained through an accessor on
//! [`AnkiClient`](crate::AnkiClient), e.g. `client.decks().names()`.

mod decks;
mod media;
mod misc;
mod models;
mod notes;

pub use decks::DeckActions;
pub use media::MediaActions;
pub use misc::MiscActions;
pub use models::ModelActions;
pub use notes::NoteActions;
