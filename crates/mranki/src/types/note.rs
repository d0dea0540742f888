//! Note-related types.

use std::collections::HashMap;

use serde::Serialize;

/// A new note to be added to Anki.
///
/// Use [`NoteBuilder`] for a more ergonomic way to construct notes.
///
/// # Field Values
///
/// Field values are HTML. If you need literal `<` or `>`, use `&lt;` and
/// `&gt;`. Field names are case-sensitive and must match the model's field
/// names exactly (`Front`/`Back` for Basic-style models, `Text`/`Extra` for
/// Cloze).
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// The deck to add the note to.
    pub deck_name: String,
    /// The note type (model) name.
    pub model_name: String,
    /// Field values, keyed by field name.
    pub fields: HashMap<String, String>,
    /// Tags for the note.
    pub tags: Vec<String>,
    /// Options for duplicate handling.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<NoteOptions>,
}

/// Options for adding notes.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteOptions {
    /// Allow duplicate notes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub allow_duplicate: Option<bool>,
    /// Scope for duplicate checking.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duplicate_scope: Option<DuplicateScope>,
}

/// Scope for duplicate note checking.
#[derive(Debug, Clone, Copy, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DuplicateScope {
    /// Check for duplicates within the target deck only.
    Deck,
    /// Check for duplicates across the entire collection.
    DeckRoot,
}

/// Builder for creating notes with a fluent API.
///
/// # Example
///
/// ```
/// use mranki::NoteBuilder;
///
/// let note = NoteBuilder::new("MRCPsych::Paper A::Neuroscience", "Basic")
///     .field("Front", "[Paper A - Neuroscience] Which lobe houses Broca's area?")
///     .field("Back", "Frontal lobe")
///     .tag("mrcpsych")
///     .tag("paper-a")
///     .build();
/// ```
#[derive(Debug, Clone, Default)]
pub struct NoteBuilder {
    deck_name: String,
    model_name: String,
    fields: HashMap<String, String>,
    tags: Vec<String>,
    options: Option<NoteOptions>,
}

impl NoteBuilder {
    /// Create a new note builder.
    ///
    /// # Arguments
    ///
    /// * `deck` - The deck name to add the note to
    /// * `model` - The note type (model) name
    pub fn new(deck: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            deck_name: deck.into(),
            model_name: model.into(),
            ..Default::default()
        }
    }

    /// Set a field value.
    ///
    /// Field names are case-sensitive and must match the model exactly.
    pub fn field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.fields.insert(name.into(), value.into());
        self
    }

    /// Add a tag to the note.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Add multiple tags to the note.
    pub fn tags(mut self, tags: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.tags.extend(tags.into_iter().map(Into::into));
        self
    }

    /// Allow duplicate notes.
    pub fn allow_duplicate(mut self, allow: bool) -> Self {
        self.options
            .get_or_insert_with(NoteOptions::default)
            .allow_duplicate = Some(allow);
        self
    }

    /// Set the duplicate checking scope.
    pub fn duplicate_scope(mut self, scope: DuplicateScope) -> Self {
        self.options
            .get_or_insert_with(NoteOptions::default)
            .duplicate_scope = Some(scope);
        self
    }

    /// Build the note.
    pub fn build(self) -> Note {
        Note {
            deck_name: self.deck_name,
            model_name: self.model_name,
            fields: self.fields,
            tags: self.tags,
            options: self.options,
        }
    }
}
