//! Draw and discard piles for one card kind.
//!
//! The top of a pile is the last element of its `Vec`. When the draw pile
//! runs out, the discard pile is swapped in and shuffled.

use log::debug;
use serde::{Deserialize, Serialize};

use crate::cards::{CardId, CardKind};
use crate::core::error::ConditionError;
use crate::core::rng::GameRng;

/// A draw pile and its discard pile.
///
/// ## Usage
///
/// ```
/// use party_cards::cards::{CardId, CardKind};
/// use party_cards::core::GameRng;
/// use party_cards::piles::CardPile;
///
/// let mut rng = GameRng::new(7);
/// let mut pile = CardPile::new(CardKind::Response, vec![CardId::new(0), CardId::new(1)]);
///
/// let a = pile.draw(&mut rng).unwrap();
/// let b = pile.draw(&mut rng).unwrap();
/// pile.discard(a);
///
/// // The draw pile is empty, so the next draw recycles the discard.
/// assert_eq!(pile.draw(&mut rng).unwrap(), a);
/// assert!(pile.draw(&mut rng).is_err());
/// # let _ = b;
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct CardPile {
    kind: CardKind,
    draw: Vec<CardId>,
    discard: Vec<CardId>,
}

impl CardPile {
    /// Create a pile with `cards` as the draw pile, unshuffled.
    #[must_use]
    pub fn new(kind: CardKind, cards: Vec<CardId>) -> Self {
        Self {
            kind,
            draw: cards,
            discard: Vec::new(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> CardKind {
        self.kind
    }

    /// Cards in the draw pile, bottom first.
    #[must_use]
    pub fn draw_pile(&self) -> &[CardId] {
        &self.draw
    }

    /// Cards in the discard pile, oldest first.
    #[must_use]
    pub fn discard_pile(&self) -> &[CardId] {
        &self.discard
    }

    /// The card the next draw returns, if the draw pile is non-empty.
    #[must_use]
    pub fn peek(&self) -> Option<CardId> {
        self.draw.last().copied()
    }

    /// Cards available to draw, counting those that a refill would recover.
    #[must_use]
    pub fn available(&self) -> usize {
        self.draw.len() + self.discard.len()
    }

    /// No cards left in either pile.
    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.draw.is_empty() && self.discard.is_empty()
    }

    /// Shuffle the draw pile.
    pub fn shuffle(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.draw);
    }

    /// Swap in the discard pile if the draw pile is empty.
    ///
    /// Returns whether a swap happened. Fails without touching anything when
    /// both piles are empty.
    pub fn refill(&mut self, rng: &mut GameRng) -> Result<bool, ConditionError> {
        if self.is_exhausted() {
            return Err(ConditionError::EmptyDecks(self.kind));
        }
        if !self.draw.is_empty() {
            return Ok(false);
        }

        std::mem::swap(&mut self.draw, &mut self.discard);
        self.shuffle(rng);
        debug!("refilled {} pile with {} cards", self.kind, self.draw.len());
        Ok(true)
    }

    /// Take the top card, refilling first if needed.
    pub fn draw(&mut self, rng: &mut GameRng) -> Result<CardId, ConditionError> {
        self.refill(rng)?;
        self.draw.pop().ok_or(ConditionError::EmptyDecks(self.kind))
    }

    /// Take `count` cards, or nothing if fewer are available.
    pub fn draw_many(&mut self, count: usize, rng: &mut GameRng) -> Result<Vec<CardId>, ConditionError> {
        if count > self.available() {
            return Err(ConditionError::InsufficientCards {
                needed: count,
                available: self.available(),
            });
        }
        (0..count).map(|_| self.draw(rng)).collect()
    }

    pub fn discard(&mut self, card: CardId) {
        self.discard.push(card);
    }

    pub fn discard_all(&mut self, cards: impl IntoIterator<Item = CardId>) {
        self.discard.extend(cards);
    }

    /// Move the whole discard pile under the draw pile without shuffling.
    pub fn recombine(&mut self) {
        let mut rest = std::mem::take(&mut self.discard);
        rest.append(&mut self.draw);
        self.draw = rest;
    }

    /// Drop every card from both piles.
    pub fn clear(&mut self) {
        self.draw.clear();
        self.discard.clear();
    }
}
