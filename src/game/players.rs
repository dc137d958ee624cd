//! Players joining and leaving.

use log::{debug, info};

use super::state::{Game, Seat};
use super::outcome::Outcome;
use crate::core::error::{ConditionError, GameError, RuleError};
use crate::core::player::PlayerId;

impl Game {
    /// Seat a new player.
    ///
    /// Fails if the player is already seated or if the response cards can't
    /// cover one more full hand on the worst-case draw round. The second
    /// player to join brings the game out of suspension and the first player
    /// becomes judge. Outside a round the newcomer is dealt a full hand;
    /// during a round they are dealt in when it ends.
    pub fn add_player(&mut self, player: PlayerId) -> Result<(), GameError> {
        if self.players.contains(player) {
            return Err(RuleError::DuplicatePlayer(player).into());
        }
        self.check_enough(self.players.len() + 1)?;

        let hand_size = self.rules.hand_size;
        if !self.in_round && hand_size > self.responses.available() {
            return Err(ConditionError::InsufficientCards {
                needed: hand_size,
                available: self.responses.available(),
            }
            .into());
        }

        self.players.insert(player);
        self.seats.insert(player, Seat::default());

        if !self.finished {
            self.suspended = self.players.len() < 2;
            if self.players.len() == 2 {
                self.elect_judge(self.players.get(0))?;
            }
        }

        if !self.in_round {
            self.deal(player, hand_size)?;
        }

        info!("{}: {} joined ({} players)", self.id, player, self.players.len());
        Ok(())
    }

    /// Remove a player, returning their cards to the discard pile.
    ///
    /// A departing judge is replaced by the next player in seating order.
    /// Dropping to one player suspends the game. Removing the last player
    /// ends and purges the game, and its final outcome is returned.
    pub fn remove_player(&mut self, player: PlayerId) -> Result<Option<Outcome>, GameError> {
        let index = self
            .players
            .position(player)
            .ok_or(RuleError::UnknownPlayer(player))?;

        if let Some(seat) = self.seats.remove(&player) {
            self.responses
                .discard_all(seat.hand.into_iter().chain(seat.played));
        }

        self.votes.remove(&player);
        if let Some(choice) = self.voters.remove(&player) {
            if let Some(tally) = self.votes.get_mut(&choice) {
                *tally -= 1;
                if *tally == 0 {
                    self.votes.remove(&choice);
                }
            }
        }
        // Ballots for the departed player are void; those voters may vote again.
        self.voters.retain(|_, choice| *choice != player);
        self.gamblers.remove(&player);

        self.players.remove(player);
        let was_judge = self.judge == Some(player);
        if index < self.judge_index {
            self.judge_index -= 1;
        }

        info!("{}: {} left ({} players)", self.id, player, self.players.len());

        match self.players.len() {
            0 => {
                self.judge = None;
                return Ok(Some(self.end_game(true)));
            }
            1 => {
                self.suspended = true;
                self.judge = None;
                self.judge_index = 0;
                debug!("{}: suspended pending more players", self.id);
            }
            n => {
                if was_judge && !self.finished && !self.suspended {
                    self.elect_judge(self.players.get(index % n))?;
                }
            }
        }

        Ok(None)
    }
}
