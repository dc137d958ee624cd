//! Judge rotation.
//!
//! The judge seat walks the roster in seating order, one step per round,
//! wrapping at the end.

use log::{debug, info};

use super::state::Game;
use crate::core::error::{ConditionError, GameError, RuleError};
use crate::core::player::PlayerId;

impl Game {
    /// Appoint a judge.
    ///
    /// With `Some(player)` that player becomes judge; with `None` the seat
    /// after the current judge does. With fewer than two players the game is
    /// suspended, the judge cleared, and `InsufficientPlayers` returned.
    pub fn elect_judge(&mut self, player: Option<PlayerId>) -> Result<PlayerId, GameError> {
        let requested = match player {
            Some(p) => Some(
                self.players
                    .position(p)
                    .ok_or(RuleError::UnknownPlayer(p))?,
            ),
            None => None,
        };

        if self.players.len() < 2 {
            self.suspended = true;
            self.judge = None;
            self.judge_index = 0;
            debug!("{}: no judge, suspended", self.id);
            return Err(ConditionError::InsufficientPlayers.into());
        }

        let index = requested.unwrap_or((self.judge_index + 1) % self.players.len());
        let judge = self
            .players
            .get(index)
            .ok_or(ConditionError::InsufficientPlayers)?;

        self.judge_index = index;
        self.judge = Some(judge);
        info!("{}: {} is judge", self.id, judge);
        Ok(judge)
    }
}
