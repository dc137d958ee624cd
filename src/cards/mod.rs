//! Card system: cards, packs, decks, and per-game storage.
//!
//! ## Key Types
//!
//! - `Card`: immutable prompt or response card, identified by its text
//! - `CardSet`: ordered collection that merges duplicate texts
//! - `Pack`: one source of cards, loadable from a pack directory
//! - `Deck`: packs merged into a single de-duplicated card pool
//! - `CardRegistry`: a game's cards addressed by `CardId`

pub mod card;
pub mod set;
pub mod pack;
pub mod deck;
pub mod registry;

pub use card::{Card, CardId, CardKind};
pub use set::CardSet;
pub use pack::{Pack, PackError, PackInfo};
pub use deck::{Deck, EmptyDeckError};
pub use registry::CardRegistry;
