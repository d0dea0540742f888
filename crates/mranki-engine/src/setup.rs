//! One-shot deck structure setup.
//!
//! The MRCPsych study workflow files cards into a fixed two-level hierarchy
//! under a single top-level deck. This module creates whatever part of that
//! hierarchy is missing and leaves the rest untouched, so running it again
//! is always safe.

use mranki::AnkiClient;
use serde::Serialize;

use crate::card::Card;
use crate::error::{Error, Result};

/// The fixed deck hierarchy, parents before children.
pub const DECK_STRUCTURE: [&str; 13] = [
    "MRCPsych",
    "MRCPsych::Paper A",
    "MRCPsych::Paper A::Neuroscience",
    "MRCPsych::Paper A::Psychology",
    "MRCPsych::Paper A::Pharmacology",
    "MRCPsych::Paper A::Genetics",
    "MRCPsych::Paper B",
    "MRCPsych::Paper B::General Adult",
    "MRCPsych::Paper B::Old Age",
    "MRCPsych::Paper B::Child & Adolescent",
    "MRCPsych::Paper B::Psychotherapy",
    "MRCPsych::Paper B::Critical Review",
    "MRCPsych::Paper B::Service Organization",
];

/// Report of a deck setup run.
#[derive(Debug, Clone, Default, Serialize)]
pub struct SetupReport {
    /// Decks created by this run, in creation order.
    pub created: Vec<String>,
    /// Decks that already existed, in list order.
    pub skipped: Vec<String>,
}

/// Setup workflow engine.
#[derive(Debug)]
pub struct SetupEngine<'a> {
    client: &'a AnkiClient,
}

impl<'a> SetupEngine<'a> {
    pub(crate) fn new(client: &'a AnkiClient) -> Self {
        Self { client }
    }

    /// Ensure the full MRCPsych deck hierarchy exists.
    ///
    /// Aborts with [`Error::AnkiUnavailable`] before touching anything when
    /// AnkiConnect cannot be reached. Otherwise walks [`DECK_STRUCTURE`] in
    /// order, creating each missing deck; a deck that already exists is
    /// recorded as skipped, never an error.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # use mranki_engine::Engine;
    /// # async fn example() -> mranki_engine::Result<()> {
    /// let engine = Engine::new();
    /// let report = engine.setup().ensure_structure().await?;
    /// println!(
    ///     "{} created, {} already existed",
    ///     report.created.len(),
    ///     report.skipped.len()
    /// );
    /// # Ok(())
    /// # }
    /// ```
    pub async fn ensure_structure(&self) -> Result<SetupReport> {
        if !self.client.is_available().await {
            return Err(Error::AnkiUnavailable);
        }

        let existing = self.client.decks().names().await?;
        let mut report = SetupReport::default();

        for deck in DECK_STRUCTURE {
            if existing.iter().any(|d| d == deck) {
                report.skipped.push(deck.to_string());
            } else {
                self.client.decks().create(deck).await?;
                report.created.push(deck.to_string());
            }
        }

        Ok(report)
    }

    /// Add two sample cards (one Basic, one Cloze) for manual verification.
    ///
    /// Both are tagged `sample` so they can be found and deleted once the
    /// setup has been checked in Anki. Returns the note IDs positionally
    /// (Basic first); a failure here never undoes deck creation.
    pub async fn add_samples(&self) -> Result<Vec<Option<i64>>> {
        let submit = crate::submit::SubmitEngine::new(self.client);

        let basic = Card::basic(
            "MRCPsych::Paper A::Pharmacology",
            "[Paper A - Pharmacology] [SAMPLE] What class of drug is clozapine?",
            "Atypical (second-generation) antipsychotic\n\
             • D2/5-HT2A antagonist\n\
             • Only drug licensed for treatment-resistant schizophrenia",
        )
        .tags(["mrcpsych", "paper-a", "pharmacology", "sample", "clozapine"]);

        let cloze = Card::cloze(
            "MRCPsych::Paper A::Pharmacology",
            "[SAMPLE] Clozapine requires {{c1::weekly}} blood monitoring for the first \
             {{c2::18 weeks}} due to risk of {{c3::agranulocytosis}}",
            "Risk highest in first 6 months. ANC must be >1500/mm³ to continue.",
        )
        .tags(["mrcpsych", "paper-a", "pharmacology", "sample", "clozapine"]);

        let mut ids = Vec::with_capacity(2);
        ids.push(submit.add_card(&basic).await?);
        ids.push(submit.add_card(&cloze).await?);
        Ok(ids)
    }
}
