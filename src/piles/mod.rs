//! Card piles.
//!
//! Each game keeps one `CardPile` per card kind: a shuffled draw pile plus the
//! discard pile it recycles from.

pub mod pile;

pub use pile::CardPile;
