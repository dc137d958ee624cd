//! Card values.
//!
//! A `Card` is immutable once loaded. Two cards of the same kind with the same
//! text are the same card: equality, ordering and hashing ignore watermarks
//! and draw/play counts.

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

/// Identifier of a card within one game's `CardRegistry`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// Prompt ("black") or response ("white") card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum CardKind {
    Prompt,
    Response,
}

impl std::fmt::Display for CardKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CardKind::Prompt => f.write_str("prompt"),
            CardKind::Response => f.write_str("response"),
        }
    }
}

/// A prompt or response card.
///
/// ## Example
///
/// ```
/// use party_cards::cards::{Card, CardKind};
///
/// let prompt = Card::prompt("Make a haiku.", 2, 3).with_watermark("base");
/// assert_eq!(prompt.kind(), CardKind::Prompt);
/// assert_eq!(prompt.draw_count(), 2);
/// assert_eq!(prompt.play_count(), 3);
///
/// let response = Card::response("A balanced breakfast.");
/// assert_eq!(response.play_count(), 0);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Card {
    text: String,
    kind: CardKind,
    #[serde(default)]
    watermark: BTreeSet<String>,
    #[serde(default)]
    draw_count: u32,
    #[serde(default)]
    play_count: u32,
}

impl Card {
    /// Create a prompt card. A play count of zero is raised to one.
    #[must_use]
    pub fn prompt(text: impl Into<String>, draw_count: u32, play_count: u32) -> Self {
        Self {
            text: text.into(),
            kind: CardKind::Prompt,
            watermark: BTreeSet::new(),
            draw_count,
            play_count: play_count.max(1),
        }
    }

    /// Create a response card.
    #[must_use]
    pub fn response(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: CardKind::Response,
            watermark: BTreeSet::new(),
            draw_count: 0,
            play_count: 0,
        }
    }

    /// Tag the card with a provenance watermark. Empty marks are ignored.
    #[must_use]
    pub fn with_watermark(mut self, mark: impl Into<String>) -> Self {
        let mark = mark.into();
        if !mark.is_empty() {
            self.watermark.insert(mark);
        }
        self
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn kind(&self) -> CardKind {
        self.kind
    }

    #[must_use]
    pub fn is_prompt(&self) -> bool {
        self.kind == CardKind::Prompt
    }

    #[must_use]
    pub fn watermark(&self) -> &BTreeSet<String> {
        &self.watermark
    }

    /// Extra response cards dealt to every player when this prompt comes up.
    #[must_use]
    pub fn draw_count(&self) -> u32 {
        self.draw_count
    }

    /// Response cards each player must submit. Zero for response cards.
    #[must_use]
    pub fn play_count(&self) -> u32 {
        self.play_count
    }

    /// Merge another copy's watermarks into this card.
    pub(crate) fn absorb(&mut self, duplicate: &Card) {
        self.watermark.extend(duplicate.watermark.iter().cloned());
    }
}

impl PartialEq for Card {
    fn eq(&self, other: &Self) -> bool {
        self.kind == other.kind && self.text == other.text
    }
}

impl Eq for Card {}

impl Hash for Card {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.kind.hash(state);
        self.text.hash(state);
    }
}

impl PartialOrd for Card {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Card {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.text.cmp(&other.text).then(self.kind.cmp(&other.kind))
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_id() {
        let id = CardId::new(42);
        assert_eq!(id.raw(), 42);
        assert_eq!(format!("{}", id), "Card(42)");
    }

    #[test]
    fn test_prompt_play_count_at_least_one() {
        let card = Card::prompt("Why?", 0, 0);
        assert_eq!(card.play_count(), 1);
        assert_eq!(card.draw_count(), 0);
        assert!(card.is_prompt());
    }

    #[test]
    fn test_equality_is_by_text_and_kind() {
        let a = Card::prompt("Same", 0, 1).with_watermark("A");
        let b = Card::prompt("Same", 2, 3).with_watermark("B");
        let c = Card::response("Same");

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_absorb_merges_watermarks() {
        let mut a = Card::response("Bees?").with_watermark("CAH");
        let b = Card::response("Bees?").with_watermark("PAX").with_watermark("CAH");

        a.absorb(&b);

        let marks: Vec<_> = a.watermark().iter().map(String::as_str).collect();
        assert_eq!(marks, vec!["CAH", "PAX"]);
    }

    #[test]
    fn test_empty_watermark_ignored() {
        let card = Card::response("x").with_watermark("");
        assert!(card.watermark().is_empty());
    }

    #[test]
    fn test_ordering_by_text() {
        let mut cards = vec![Card::response("b"), Card::response("a"), Card::response("c")];
        cards.sort();
        let texts: Vec<_> = cards.iter().map(Card::text).collect();
        assert_eq!(texts, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_card_serialization() {
        let card = Card::prompt("_ + _ = _", 2, 3).with_watermark("base");
        let json = serde_json::to_string(&card).unwrap();
        let back: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, back);
        assert_eq!(back.draw_count(), 2);
        assert_eq!(back.watermark().len(), 1);
    }
}
