//! # party-cards
//!
//! Rules engine for fill-in-the-blank party card games: one player (the
//! judge) reads a prompt card, everyone else answers it with response cards
//! from their hand, and the best answer scores a point.
//!
//! ## Design Principles
//!
//! 1. **All-or-Nothing Operations**: Every operation validates before it
//!    mutates. A rejected action leaves the game exactly as it was.
//!
//! 2. **Cards Are Conserved**: Cards move between piles, hands, plays, and
//!    the prompt slot. Play never creates or destroys one.
//!
//! 3. **House Rules Are Data**: Hand size, end conditions, voting, gambling,
//!    and point trading are all set in `HouseRules` when a game is built.
//!
//! ## Architecture
//!
//! - **Single Writer**: A `Game` is mutated only through `&mut self` methods
//!   and does no I/O. Callers serving many clients serialize access per game.
//!
//! - **Explicit Identity**: Players and games get ids from an `IdAllocator`
//!   that callers pass around. Cards get ids from their game's registry.
//!
//! - **Persistent Hands**: Hands are `im` ordered sets, so cloning a game for
//!   inspection is cheap.
//!
//! ## Modules
//!
//! - `core`: Ids, player roster, RNG, house rules, errors
//! - `cards`: Cards, packs and the pack loader, decks, card registry
//! - `piles`: Draw and discard piles with refill
//! - `game`: The `Game` aggregate, rounds, judge rotation, house rules

pub mod core;
pub mod cards;
pub mod piles;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    GameId, IdAllocator, PlayerId, Roster,
    GameRng,
    HouseRules, TradeRate,
    ConditionError, GameError, RuleError,
};

pub use crate::cards::{
    Card, CardId, CardKind, CardSet,
    Pack, PackError, PackInfo,
    Deck, EmptyDeckError, CardRegistry,
};

pub use crate::piles::CardPile;

pub use crate::game::{Game, GameBuilder, Outcome, RoundEnd, VoteStatus};
