//! Ordered, de-duplicated card collections.

use rustc_hash::FxHashMap;

use super::card::Card;

/// Cards in first-seen order with no two sharing the same text.
///
/// Inserting a card whose text is already present merges its watermarks
/// into the existing entry instead of adding a second copy.
///
/// ```
/// use party_cards::cards::{Card, CardSet};
///
/// let mut set = CardSet::new();
/// assert!(set.insert(Card::response("Bees?").with_watermark("A")));
/// assert!(!set.insert(Card::response("Bees?").with_watermark("B")));
///
/// assert_eq!(set.len(), 1);
/// assert_eq!(set.as_slice()[0].watermark().len(), 2);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardSet {
    cards: Vec<Card>,
    index: FxHashMap<String, usize>,
}

impl CardSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a card. Returns `false` if the text was already present.
    pub fn insert(&mut self, card: Card) -> bool {
        if let Some(&at) = self.index.get(card.text()) {
            self.cards[at].absorb(&card);
            return false;
        }
        self.index.insert(card.text().to_owned(), self.cards.len());
        self.cards.push(card);
        true
    }

    /// Add every card from an iterator. Returns how many were new.
    pub fn extend<'a>(&mut self, cards: impl IntoIterator<Item = &'a Card>) -> usize {
        cards.into_iter().filter(|c| self.insert((*c).clone())).count()
    }

    #[must_use]
    pub fn get(&self, text: &str) -> Option<&Card> {
        self.index.get(text).map(|&at| &self.cards[at])
    }

    #[must_use]
    pub fn contains(&self, text: &str) -> bool {
        self.index.contains_key(text)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Card] {
        &self.cards
    }
}

impl FromIterator<Card> for CardSet {
    fn from_iter<I: IntoIterator<Item = Card>>(iter: I) -> Self {
        let mut set = CardSet::new();
        for card in iter {
            set.insert(card);
        }
        set
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keeps_first_seen_order() {
        let set: CardSet = ["c", "a", "b", "a"].into_iter().map(Card::response).collect();
        let texts: Vec<_> = set.iter().map(Card::text).collect();
        assert_eq!(texts, vec!["c", "a", "b"]);
    }

    #[test]
    fn test_duplicate_keeps_first_metadata() {
        let mut set = CardSet::new();
        set.insert(Card::prompt("Pick two.", 0, 2));
        set.insert(Card::prompt("Pick two.", 2, 3).with_watermark("X"));

        let card = set.get("Pick two.").unwrap();
        assert_eq!(card.play_count(), 2);
        assert_eq!(card.draw_count(), 0);
        assert!(card.watermark().contains("X"));
    }

    #[test]
    fn test_extend_counts_new_cards() {
        let mut set = CardSet::new();
        set.insert(Card::response("one"));

        let more = vec![Card::response("one"), Card::response("two")];
        assert_eq!(set.extend(&more), 1);
        assert_eq!(set.len(), 2);
        assert!(set.contains("two"));
    }
}
