//! Game state and rules.
//!
//! ## Key Types
//!
//! - `Game`: one game's piles, players, scores, and round state
//! - `GameBuilder`: assembles a `Game` from decks, players, and house rules
//! - `Outcome`: winner(s) of a round or game
//! - `RoundEnd`: what `Game::end_round` produced
//! - `VoteStatus`: tally summary after a ballot in voting games

pub mod state;
mod players;
mod round;
mod judge;
mod house;
pub mod outcome;

pub use state::{Game, GameBuilder};
pub use outcome::{Outcome, RoundEnd, VoteStatus};
