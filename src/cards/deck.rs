//! Deck assembly.
//!
//! A `Deck` is the union of one or more packs with duplicate card texts
//! merged. It remembers the largest draw and play counts among its prompts so
//! games can size hands that never run dry.

use log::debug;
use thiserror::Error;

use super::card::Card;
use super::pack::Pack;
use super::set::CardSet;

/// The packs given to `Deck::create` held no cards at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
#[error("no cards in deck")]
pub struct EmptyDeckError;

/// Prompt and response cards merged from packs.
///
/// ## Example
///
/// ```
/// use party_cards::cards::{Card, Deck, Pack, PackInfo};
///
/// let base = Pack::new(
///     PackInfo::named("base"),
///     vec![Card::prompt("Pick two.", 0, 2)],
///     vec![Card::response("Bees?").with_watermark("base")],
/// );
/// let extra = Pack::new(
///     PackInfo::named("extra"),
///     vec![Card::prompt("Draw two, pick three.", 2, 3)],
///     vec![Card::response("Bees?").with_watermark("extra")],
/// );
///
/// let deck = Deck::create(&[base, extra]).unwrap();
/// assert_eq!(deck.prompt_cards().len(), 2);
/// assert_eq!(deck.response_cards().len(), 1);
/// assert_eq!(deck.max_draw(), 2);
/// assert_eq!(deck.max_play(), 3);
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    prompt_cards: CardSet,
    response_cards: CardSet,
    max_draw: u32,
    max_play: u32,
    sources: Vec<String>,
}

impl Deck {
    /// Merge packs into a deck.
    pub fn create(packs: &[Pack]) -> Result<Deck, EmptyDeckError> {
        let mut deck = Deck {
            prompt_cards: CardSet::new(),
            response_cards: CardSet::new(),
            max_draw: 0,
            max_play: 0,
            sources: Vec::with_capacity(packs.len()),
        };

        for pack in packs {
            let prompts = deck.prompt_cards.extend(pack.prompt_cards());
            let responses = deck.response_cards.extend(pack.response_cards());
            deck.sources.push(pack.name().to_owned());
            debug!(
                "deck: merged pack {:?} ({} new prompts, {} new responses)",
                pack.name(),
                prompts,
                responses
            );
        }

        deck.finish()
    }

    /// Build a deck straight from cards, without pack metadata.
    pub fn from_cards(
        prompts: impl IntoIterator<Item = Card>,
        responses: impl IntoIterator<Item = Card>,
    ) -> Result<Deck, EmptyDeckError> {
        Deck {
            prompt_cards: prompts.into_iter().collect(),
            response_cards: responses.into_iter().collect(),
            max_draw: 0,
            max_play: 0,
            sources: Vec::new(),
        }
        .finish()
    }

    fn finish(mut self) -> Result<Deck, EmptyDeckError> {
        if self.prompt_cards.is_empty() && self.response_cards.is_empty() {
            return Err(EmptyDeckError);
        }
        self.max_draw = self.prompt_cards.iter().map(Card::draw_count).max().unwrap_or(0);
        self.max_play = self.prompt_cards.iter().map(Card::play_count).max().unwrap_or(0);
        Ok(self)
    }

    #[must_use]
    pub fn prompt_cards(&self) -> &[Card] {
        self.prompt_cards.as_slice()
    }

    #[must_use]
    pub fn response_cards(&self) -> &[Card] {
        self.response_cards.as_slice()
    }

    /// Largest draw count among the prompts.
    #[must_use]
    pub fn max_draw(&self) -> u32 {
        self.max_draw
    }

    /// Largest play count among the prompts.
    #[must_use]
    pub fn max_play(&self) -> u32 {
        self.max_play
    }

    /// Names of the packs merged into this deck, in merge order.
    #[must_use]
    pub fn sources(&self) -> &[String] {
        &self.sources
    }
}
