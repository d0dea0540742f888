//! Note-related AnkiConnect actions.
//!
//! # Example
//!
//! ```no_run
//! use mranki::{AnkiClient, NoteBuilder};
//!
//! # async fn example() -> mranki::Result<()> {
//! let client = AnkiClient::new();
//!
//! let note = NoteBuilder::new("MRCPsych::Paper A::Pharmacology", "Basic")
//!     .field("Front", "[Paper A - Pharmacology] What is the mechanism of clozapine?")
//!     .field("Back", "D2 antagonist with high 5-HT2A affinity")
//!     .tag("mrcpsych")
//!     .tag("paper-a")
//!     .build();
//!
//! if let Some(note_id) = client.notes().add(note).await? {
//!     println!("Created note: {}", note_id);
//! }
//! # Ok(())
//! # }
//! ```

use serde::Serialize;

use crate::client::AnkiClient;
use crate::error::Result;
use crate::types::Note;

/// Provides access to note-related AnkiConnect operations.
///
/// Obtained via [`AnkiClient::notes()`].
#[derive(Debug)]
pub struct NoteActions<'a> {
    pub(crate) client: &'a AnkiClient,
}

#[derive(Serialize)]
struct AddNoteParams {
    note: Note,
}

#[derive(Serialize)]
struct AddNotesParams<'a> {
    notes: &'a [Note],
}

#[derive(Serialize)]
struct FindNotesParams<'a> {
    query: &'a str,
}

impl<'a> NoteActions<'a> {
    /// Add a new note.
    ///
    /// Returns `Some(id)` on success, or `None` when the duplicate policy
    /// rejected the note. Use
    /// [`NoteBuilder::allow_duplicate()`](crate::NoteBuilder::allow_duplicate)
    /// to override the policy.
    pub async fn add(&self, note: Note) -> Result<Option<i64>> {
        self.client
            .invoke_nullable("addNote", AddNoteParams { note })
            .await
    }

    /// Add multiple notes in a single call.
    ///
    /// Returns note IDs positionally aligned with the input; an entry is
    /// `None` when that note could not be created (e.g. duplicate).
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use mranki::{AnkiClient, NoteBuilder};
    /// # async fn example() -> mranki::Result<()> {
    /// let client = AnkiClient::new();
    ///
    /// let notes = vec![
    ///     NoteBuilder::new("MRCPsych::Paper A::Psychology", "Basic")
    ///         .field("Front", "Q1").field("Back", "A1").build(),
    ///     NoteBuilder::new("MRCPsych::Paper A::Psychology", "Basic")
    ///         .field("Front", "Q2").field("Back", "A2").build(),
    /// ];
    ///
    /// let ids = client.notes().add_many(&notes).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn add_many(&self, notes: &[Note]) -> Result<Vec<Option<i64>>> {
        self.client
            .invoke("addNotes", AddNotesParams { notes })
            .await
    }

    /// Find notes matching a query.
    ///
    /// Returns a list of note IDs.
    ///
    /// # Query Syntax
    ///
    /// Uses Anki's search syntax:
    /// - `deck:DeckName` - notes in a specific deck
    /// - `tag:TagName` - notes with a specific tag
    /// - `"exact phrase"` - exact phrase match
    /// - `-tag:excluded` - exclude notes with a tag
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use mranki::AnkiClient;
    /// # async fn example() -> mranki::Result<()> {
    /// let client = AnkiClient::new();
    /// let notes = client.notes().find("deck:MRCPsych tag:high-yield").await?;
    /// println!("Found {} notes", notes.len());
    /// # Ok(())
    /// # }
    /// ```
    pub async fn find(&self, query: &str) -> Result<Vec<i64>> {
        self.client
            .invoke("findNotes", FindNotesParams { query })
            .await
    }
}
