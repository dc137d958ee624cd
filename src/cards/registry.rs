//! Card storage for a single game.
//!
//! The `CardRegistry` owns every card a game was built with and hands out
//! `CardId`s for them. Piles, hands and plays only ever hold ids.

use super::card::{Card, CardId, CardKind};

/// Cards loaded into a game, addressed by `CardId`.
///
/// ## Example
///
/// ```
/// use party_cards::cards::{Card, CardKind, CardRegistry};
///
/// let mut registry = CardRegistry::new();
/// let id = registry.register(Card::response("Bees?"));
///
/// assert_eq!(registry.get(id).unwrap().text(), "Bees?");
/// assert_eq!(registry.count(CardKind::Response), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: Vec<Card>,
    prompts: usize,
}

impl CardRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a card and return its freshly assigned ID.
    pub fn register(&mut self, card: Card) -> CardId {
        let id = CardId::new(self.cards.len() as u32);
        if card.is_prompt() {
            self.prompts += 1;
        }
        self.cards.push(card);
        id
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(id.raw() as usize)
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        (id.raw() as usize) < self.cards.len()
    }

    /// Number of registered cards of one kind.
    #[must_use]
    pub fn count(&self, kind: CardKind) -> usize {
        match kind {
            CardKind::Prompt => self.prompts,
            CardKind::Response => self.cards.len() - self.prompts,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// IDs of every card of one kind, in registration order.
    pub fn ids(&self, kind: CardKind) -> impl Iterator<Item = CardId> + '_ {
        self.cards
            .iter()
            .enumerate()
            .filter(move |(_, c)| c.kind() == kind)
            .map(|(i, _)| CardId::new(i as u32))
    }

    /// Forget every card.
    pub fn clear(&mut self) {
        self.cards.clear();
        self.prompts = 0;
    }
}
