//! Core types: identifiers, players, RNG, house rules, errors.
//!
//! These are shared by the card and game modules and carry no game logic of
//! their own.

pub mod id;
pub mod player;
pub mod rng;
pub mod config;
pub mod error;

pub use id::{GameId, IdAllocator};
pub use player::{PlayerId, Roster};
pub use rng::GameRng;
pub use config::{HouseRules, TradeRate};
pub use error::{ConditionError, GameError, RuleError};
