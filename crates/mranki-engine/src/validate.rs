//! Content policy validation for MRCPsych flashcards.
//!
//! Cards are checked against a fixed, ordered list of formatting rules
//! before submission; every violated rule is reported, not just the first.
//! Validation is pure: no I/O, same card in, same violations out.
//!
//! # Example
//!
//! ```
//! use mranki_engine::{Card, validate};
//!
//! let card = Card::basic(
//!     "MRCPsych::Paper A::Pharmacology",
//!     "[Paper A - Pharmacology] What is the mechanism of action of clozapine?",
//!     "D2 antagonist with high 5-HT2A affinity",
//! )
//! .tags(["mrcpsych", "paper-a", "pharmacology"]);
//!
//! assert!(validate::validate_card(&card).is_empty());
//! ```

use std::collections::BTreeMap;
use std::sync::LazyLock;

use regex_lite::Regex;
use thiserror::Error;

use crate::card::Card;

/// The closed set of decks cards may target.
pub const VALID_DECKS: [&str; 10] = [
    "MRCPsych::Paper A::Neuroscience",
    "MRCPsych::Paper A::Psychology",
    "MRCPsych::Paper A::Pharmacology",
    "MRCPsych::Paper A::Genetics",
    "MRCPsych::Paper B::General Adult",
    "MRCPsych::Paper B::Old Age",
    "MRCPsych::Paper B::Child & Adolescent",
    "MRCPsych::Paper B::Psychotherapy",
    "MRCPsych::Paper B::Critical Review",
    "MRCPsych::Paper B::Service Organization",
];

/// Phrases that indicate a card invites an enumerated answer and should be
/// split into atomic cards instead.
const ENUMERATION_PHRASES: [&str; 10] = [
    "list all",
    "list the",
    "name all",
    "name the",
    "what are the",
    "what are all",
    "enumerate",
    "give all",
    "describe all",
    "mention all",
];

/// Tag every card must carry.
const REQUIRED_TAG: &str = "mrcpsych";

/// At least one of these paper tags must be present.
const PAPER_TAGS: [&str; 2] = ["paper-a", "paper-b"];

/// The primary answer (first line of the back) may have at most this many
/// words.
const MAX_ANSWER_WORDS: usize = 25;

/// Context prefixes a non-cloze front must carry.
static PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[Paper A|\[Paper B|\[Critical Review\]").expect("valid regex"));

/// A single leading bullet marker on the primary answer line.
static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[•\-*]\s*").expect("valid regex"));

/// A violated content rule.
///
/// The Display form starts with the stable rule code (also available via
/// [`code()`](Violation::code)) followed by a human-readable explanation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Violation {
    /// Non-cloze front lacks a bracketed context prefix.
    #[error("MISSING_PREFIX: Card must start with [Paper A - Topic] or [Paper B - Topic]")]
    MissingPrefix,

    /// Front invites an enumerated answer.
    #[error("ENUMERATION: Contains '{phrase}' - split into atomic cards")]
    Enumeration {
        /// The first matching phrase.
        phrase: &'static str,
    },

    /// Primary answer exceeds the word limit.
    #[error("ANSWER_TOO_LONG: Primary answer has {words} words (max 25)")]
    AnswerTooLong {
        /// Actual word count of the primary answer.
        words: usize,
    },

    /// The `mrcpsych` tag is missing.
    #[error("MISSING_TAG: Must include 'mrcpsych' tag")]
    MissingExamTag,

    /// Neither paper tag is present.
    #[error("MISSING_TAG: Must include 'paper-a' or 'paper-b' tag")]
    MissingPaperTag,

    /// Deck is not in [`VALID_DECKS`].
    #[error("INVALID_DECK: '{deck}' is not a valid deck. Use one of: {}", VALID_DECKS.join(", "))]
    InvalidDeck {
        /// The offending deck name.
        deck: String,
    },

    /// Cloze card without cloze markup.
    #[error("INVALID_CLOZE: Cloze card must contain {{{{c1::...}}}} deletions")]
    InvalidCloze,

    /// Front is empty after trimming.
    #[error("EMPTY_FRONT: Card front cannot be empty")]
    EmptyFront,

    /// Back is empty after trimming on a non-cloze card.
    #[error("EMPTY_BACK: Card back cannot be empty (except for cloze cards)")]
    EmptyBack,
}

impl Violation {
    /// The stable rule code, e.g. `MISSING_PREFIX`.
    pub fn code(&self) -> &'static str {
        match self {
            Violation::MissingPrefix => "MISSING_PREFIX",
            Violation::Enumeration { .. } => "ENUMERATION",
            Violation::AnswerTooLong { .. } => "ANSWER_TOO_LONG",
            Violation::MissingExamTag | Violation::MissingPaperTag => "MISSING_TAG",
            Violation::InvalidDeck { .. } => "INVALID_DECK",
            Violation::InvalidCloze => "INVALID_CLOZE",
            Violation::EmptyFront => "EMPTY_FRONT",
            Violation::EmptyBack => "EMPTY_BACK",
        }
    }
}

/// Validate a single flashcard against the content rules.
///
/// Every rule is checked on every call; the returned list preserves rule
/// order. An empty list means the card passed.
pub fn validate_card(card: &Card) -> Vec<Violation> {
    let mut violations = Vec::new();

    // Rule 1: context prefix required (for non-cloze cards)
    if !card.cloze && !PREFIX_RE.is_match(&card.front) {
        violations.push(Violation::MissingPrefix);
    }

    // Rule 2: no enumeration (single concept only); first hit wins
    let front_lower = card.front.to_lowercase();
    if let Some(phrase) = ENUMERATION_PHRASES
        .into_iter()
        .find(|p| front_lower.contains(p))
    {
        violations.push(Violation::Enumeration { phrase });
    }

    // Rule 3: primary answer length
    if !card.back.is_empty() {
        let first_line = card.back.lines().next().unwrap_or("").trim();
        let primary = BULLET_RE.replace(first_line, "");
        let words = primary.split_whitespace().count();
        if words > MAX_ANSWER_WORDS {
            violations.push(Violation::AnswerTooLong { words });
        }
    }

    // Rule 4: required tags, case-insensitive
    let tags_lower: Vec<String> = card.tags.iter().map(|t| t.to_lowercase()).collect();
    if !tags_lower.iter().any(|t| t == REQUIRED_TAG) {
        violations.push(Violation::MissingExamTag);
    }
    if !PAPER_TAGS
        .iter()
        .any(|p| tags_lower.iter().any(|t| t == p))
    {
        violations.push(Violation::MissingPaperTag);
    }

    // Rule 5: valid deck
    if !VALID_DECKS.contains(&card.deck.as_str()) {
        violations.push(Violation::InvalidDeck {
            deck: card.deck.clone(),
        });
    }

    // Rule 6: cloze format
    if card.cloze && !card.front.contains("{{c") {
        violations.push(Violation::InvalidCloze);
    }

    // Rule 7: empty content
    if card.front.trim().is_empty() {
        violations.push(Violation::EmptyFront);
    }
    if card.back.trim().is_empty() && !card.cloze {
        violations.push(Violation::EmptyBack);
    }

    violations
}

/// Validate a batch of cards.
///
/// Returns a map from zero-based position to that card's violations;
/// positions with no violations are omitted.
pub fn validate_batch(cards: &[Card]) -> BTreeMap<usize, Vec<Violation>> {
    let mut results = BTreeMap::new();
    for (i, card) in cards.iter().enumerate() {
        let violations = validate_card(card);
        if !violations.is_empty() {
            results.insert(i, violations);
        }
    }
    results
}

/// Format a human-readable validation report.
pub fn format_report(cards: &[Card], violations: &BTreeMap<usize, Vec<Violation>>) -> String {
    if violations.is_empty() {
        return format!("✓ All {} cards passed validation", cards.len());
    }

    let mut lines = vec![format!(
        "✗ {}/{} cards failed validation:\n",
        violations.len(),
        cards.len()
    )];

    for (&idx, card_violations) in violations {
        let front = cards.get(idx).map(|c| c.front.as_str()).unwrap_or("");
        lines.push(format!("Card {}: {}", idx + 1, front_preview(front)));
        for violation in card_violations {
            lines.push(format!("  - {}", violation));
        }
        lines.push(String::new());
    }

    lines.join("\n")
}

/// First 50 characters of the front, with an ellipsis when truncated.
fn front_preview(front: &str) -> String {
    if front.chars().count() > 50 {
        let head: String = front.chars().take(50).collect();
        format!("{}...", head)
    } else {
        front.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_card() -> Card {
        Card::basic(
            "MRCPsych::Paper A::Pharmacology",
            "[Paper A - Pharmacology] What is the mechanism of action of clozapine?",
            "D2 antagonist with high 5-HT2A affinity",
        )
        .tags(["mrcpsych", "paper-a", "pharmacology"])
    }

    #[test]
    fn test_valid_card_has_no_violations() {
        assert!(validate_card(&valid_card()).is_empty());
    }

    #[test]
    fn test_validation_is_deterministic() {
        let card = Card::basic("Wrong Deck", "List all the side effects of lithium", "")
            .tags(["pharmacology"]);
        assert_eq!(validate_card(&card), validate_card(&card));
    }

    #[test]
    fn test_missing_prefix() {
        let mut card = valid_card();
        card.front = "What is the half-life of lithium?".to_string();
        let violations = validate_card(&card);
        assert!(violations.contains(&Violation::MissingPrefix));
    }

    #[test]
    fn test_critical_review_prefix_accepted() {
        let mut card = valid_card();
        card.front = "[Critical Review] What does NNT stand for?".to_string();
        card.deck = "MRCPsych::Paper B::Critical Review".to_string();
        card.tags = vec!["mrcpsych".into(), "paper-b".into()];
        assert!(validate_card(&card).is_empty());
    }

    #[test]
    fn test_cloze_card_skips_prefix_rule() {
        let card = Card::cloze(
            "MRCPsych::Paper A::Pharmacology",
            "Lithium toxicity occurs above {{c1::1.5}} mmol/L",
            "",
        )
        .tags(["mrcpsych", "paper-a"]);
        assert!(validate_card(&card).is_empty());
    }

    #[test]
    fn test_enumeration_detected() {
        let mut card = valid_card();
        card.front = "[Paper A - Pharmacology] List all the side effects".to_string();
        let violations = validate_card(&card);
        assert_eq!(
            violations,
            vec![Violation::Enumeration { phrase: "list all" }]
        );
        assert!(violations[0].to_string().contains("list all"));
    }

    #[test]
    fn test_enumeration_reports_first_phrase_only() {
        let mut card = valid_card();
        // Contains both "list all" and "what are the"; only the first
        // phrase in scan order is reported
        card.front =
            "[Paper A - Pharmacology] List all features and what are the risks?".to_string();
        assert_eq!(
            validate_card(&card),
            vec![Violation::Enumeration { phrase: "list all" }]
        );
    }

    #[test]
    fn test_enumeration_case_insensitive() {
        let mut card = valid_card();
        card.front = "[Paper A - Pharmacology] What Are The features of NMS?".to_string();
        let violations = validate_card(&card);
        assert_eq!(
            violations,
            vec![Violation::Enumeration {
                phrase: "what are the"
            }]
        );
    }

    #[test]
    fn test_answer_length_boundary() {
        let mut card = valid_card();

        card.back = vec!["word"; 25].join(" ");
        assert!(validate_card(&card).is_empty());

        card.back = vec!["word"; 26].join(" ");
        assert_eq!(
            validate_card(&card),
            vec![Violation::AnswerTooLong { words: 26 }]
        );
    }

    #[test]
    fn test_answer_length_only_counts_first_line() {
        let mut card = valid_card();
        let long_tail = vec!["word"; 40].join(" ");
        card.back = format!("Short answer\n{}", long_tail);
        assert!(validate_card(&card).is_empty());
    }

    #[test]
    fn test_answer_length_strips_bullet_marker() {
        let mut card = valid_card();
        // 26 words behind a bullet; the marker itself must not count
        card.back = format!("• {}", vec!["word"; 26].join(" "));
        assert_eq!(
            validate_card(&card),
            vec![Violation::AnswerTooLong { words: 26 }]
        );

        card.back = format!("- {}", vec!["word"; 25].join(" "));
        assert!(validate_card(&card).is_empty());
    }

    #[test]
    fn test_tags_match_case_insensitively() {
        let mut card = valid_card();
        card.tags = vec!["Mrcpsych".into(), "Paper-A".into()];
        assert!(validate_card(&card).is_empty());
    }

    #[test]
    fn test_missing_tags_are_independent_violations() {
        let mut card = valid_card();
        card.tags = vec!["pharmacology".into()];
        let violations = validate_card(&card);
        assert_eq!(
            violations,
            vec![Violation::MissingExamTag, Violation::MissingPaperTag]
        );
        assert!(violations.iter().all(|v| v.code() == "MISSING_TAG"));
    }

    #[test]
    fn test_invalid_deck_lists_all_options() {
        let mut card = valid_card();
        card.deck = "Nonexistent::Deck".to_string();
        let violations = validate_card(&card);
        assert_eq!(violations.len(), 1);
        assert_eq!(violations[0].code(), "INVALID_DECK");
        let message = violations[0].to_string();
        for deck in VALID_DECKS {
            assert!(message.contains(deck), "message should list {}", deck);
        }
    }

    #[test]
    fn test_parent_deck_is_not_a_valid_target() {
        let mut card = valid_card();
        card.deck = "MRCPsych::Paper A".to_string();
        assert_eq!(validate_card(&card)[0].code(), "INVALID_DECK");
    }

    #[test]
    fn test_cloze_markup_required_on_cloze_cards() {
        let card = Card::cloze("MRCPsych::Paper A::Pharmacology", "no cloze markup", "")
            .tags(["mrcpsych", "paper-a"]);
        assert_eq!(validate_card(&card), vec![Violation::InvalidCloze]);
    }

    #[test]
    fn test_cloze_card_may_have_empty_back() {
        let card = Card::cloze("MRCPsych::Paper A::Pharmacology", "{{c1::x}}", "")
            .tags(["mrcpsych", "paper-a"]);
        let violations = validate_card(&card);
        assert!(!violations.contains(&Violation::EmptyBack));
        assert!(!violations.contains(&Violation::InvalidCloze));
        assert!(violations.is_empty());
    }

    #[test]
    fn test_empty_front_and_back() {
        let card = Card::basic("MRCPsych::Paper A::Genetics", "   ", "")
            .tags(["mrcpsych", "paper-a"]);
        let violations = validate_card(&card);
        assert!(violations.contains(&Violation::MissingPrefix));
        assert!(violations.contains(&Violation::EmptyFront));
        assert!(violations.contains(&Violation::EmptyBack));
    }

    #[test]
    fn test_batch_omits_clean_positions() {
        let bad = Card::basic("Wrong Deck", "List all side effects", "").tags(["pharmacology"]);
        let cards = vec![valid_card(), bad, valid_card()];

        let results = validate_batch(&cards);
        assert_eq!(results.len(), 1);
        let violations = results.get(&1).unwrap();
        assert!(violations.iter().any(|v| v.code() == "ENUMERATION"));
        assert!(violations.iter().any(|v| v.code() == "INVALID_DECK"));
        assert!(violations.iter().any(|v| v.code() == "EMPTY_BACK"));
    }

    #[test]
    fn test_report_all_passed() {
        let cards = vec![valid_card(), valid_card()];
        let report = format_report(&cards, &validate_batch(&cards));
        assert_eq!(report, "✓ All 2 cards passed validation");
    }

    #[test]
    fn test_report_truncates_long_fronts() {
        let mut card = valid_card();
        card.front = format!("[Paper A - Pharmacology] {}", "x".repeat(60));
        card.tags.clear();
        let cards = vec![card];

        let report = format_report(&cards, &validate_batch(&cards));
        assert!(report.starts_with("✗ 1/1 cards failed validation:"));
        assert!(report.contains("Card 1: "));
        assert!(report.contains("..."));
        assert!(report.contains("  - MISSING_TAG"));
        // preview is capped at 50 chars plus the ellipsis
        let preview_line = report
            .lines()
            .find(|l| l.starts_with("Card 1:"))
            .unwrap()
            .trim_start_matches("Card 1: ");
        assert_eq!(preview_line.chars().count(), 53);
    }
}
