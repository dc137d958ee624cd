//! House rules: voting, gambling, and trading points for cards.
//!
//! Each of these is switched on through `HouseRules`. Gambling is on by
//! default; voting and trading are off.

use log::debug;

use super::state::Game;
use super::outcome::VoteStatus;
use crate::cards::CardId;
use crate::core::error::{ConditionError, GameError, RuleError};
use crate::core::player::PlayerId;

/// Points a player must hold to gamble; a gambler always keeps one.
const GAMBLE_MIN_POINTS: u32 = 2;

impl Game {
    // === Voting ===

    /// Cast `voter`'s ballot for `choice` in the current round.
    ///
    /// Players may vote for anyone seated, themselves included, once per
    /// round. The returned status reports whether the leader has reached a
    /// majority and what fraction of players has voted.
    pub fn vote(&mut self, voter: PlayerId, choice: PlayerId) -> Result<VoteStatus, GameError> {
        if !self.rules.voting {
            return Err(RuleError::VotingNotPermitted.into());
        }
        for player in [voter, choice] {
            if !self.players.contains(player) {
                return Err(RuleError::UnknownPlayer(player).into());
            }
        }
        if !self.in_round {
            return Err(ConditionError::NoRoundInProgress.into());
        }
        if self.voters.contains_key(&voter) {
            return Err(RuleError::DoubleVote(voter).into());
        }

        self.voters.insert(voter, choice);
        *self.votes.entry(choice).or_insert(0) += 1;
        debug!("{}: {} voted for {}", self.id, voter, choice);

        Ok(self.vote_status())
    }

    fn vote_status(&self) -> VoteStatus {
        let seats = self.players.len();
        let top = self.votes.values().copied().max().unwrap_or(0) as usize;
        VoteStatus {
            majority: seats > 0 && top * 2 >= seats,
            turnout: if seats == 0 { 0.0 } else { self.voters.len() as f64 / seats as f64 },
        }
    }

    /// Who `player` voted for this round, if anyone.
    pub fn vote_of(&self, player: PlayerId) -> Result<Option<PlayerId>, RuleError> {
        if !self.rules.voting {
            return Err(RuleError::VotingNotPermitted);
        }
        self.seat(player)?;
        Ok(self.voters.get(&player).copied())
    }

    /// Votes `player` has received this round.
    #[must_use]
    pub fn votes_for(&self, player: PlayerId) -> u32 {
        self.votes.get(&player).copied().unwrap_or(0)
    }

    /// Every player's tally this round, in seating order.
    #[must_use]
    pub fn vote_counts(&self) -> Vec<(PlayerId, u32)> {
        self.players.iter().map(|p| (p, self.votes_for(p))).collect()
    }

    // === Gambling ===

    /// Wager a point to add `card` to the player's play.
    ///
    /// Only allowed on prompts that take a single card, once per round, for
    /// a player with at least two points who hasn't passed. Each wager raises
    /// the points the round's winner receives by one.
    pub fn gamble(&mut self, player: PlayerId, card: CardId) -> Result<(), GameError> {
        let seat = self.seat(player)?;
        if !self.rules.gambling {
            return Err(RuleError::GamblingNotPermitted.into());
        }
        if !self.in_round {
            return Err(ConditionError::NoRoundInProgress.into());
        }
        if !self.rules.voting && self.judge == Some(player) {
            return Err(RuleError::JudgeCannotPlay(player).into());
        }
        if seat.last_played == Some(self.round_number) && seat.played.is_empty() {
            return Err(RuleError::AlreadyPassed(player).into());
        }
        if self.gamblers.contains(&player) {
            return Err(RuleError::DoubleGamble(player).into());
        }
        if self.required_cards() > 1 {
            return Err(RuleError::GambleOnMultiPick.into());
        }
        if seat.score < GAMBLE_MIN_POINTS {
            return Err(RuleError::InsufficientPoints {
                needed: GAMBLE_MIN_POINTS,
                available: seat.score,
            }
            .into());
        }
        Game::check_in_hand(seat, &[card])?;

        let seat = self.seat_mut(player)?;
        seat.score -= 1;
        seat.hand.remove(&card);
        seat.played.push(card);
        self.point_grant += 1;
        self.gamblers.insert(player);

        debug!("{}: {} gambled, grant now {}", self.id, player, self.point_grant);
        Ok(())
    }

    // === Trading ===

    /// Pay points to swap cards from a player's hand for fresh ones.
    ///
    /// The exchange rate comes from `HouseRules::trade`: the player pays its
    /// points and may discard up to its card limit. They are then dealt back
    /// up to a full hand.
    pub fn trade_points(&mut self, player: PlayerId, cards: &[CardId]) -> Result<(), GameError> {
        let seat = self.seat(player)?;
        let rate = self.rules.trade.ok_or(RuleError::TradingNotPermitted)?;
        if seat.score < rate.points {
            return Err(RuleError::InsufficientPoints {
                needed: rate.points,
                available: seat.score,
            }
            .into());
        }
        if cards.len() > rate.cards {
            return Err(RuleError::TooManyCards { limit: rate.cards, got: cards.len() }.into());
        }
        Game::check_in_hand(seat, cards)?;

        let refill = self
            .rules
            .hand_size
            .saturating_sub(seat.hand.len() - cards.len());
        let available = self.responses.available() + cards.len();
        if refill > available {
            return Err(ConditionError::InsufficientCards { needed: refill, available }.into());
        }

        let seat = self.seat_mut(player)?;
        for card in cards {
            seat.hand.remove(card);
        }
        seat.score -= rate.points;
        self.responses.discard_all(cards.iter().copied());
        self.deal(player, refill)?;

        debug!("{}: {} traded {} points for {} cards", self.id, player, rate.points, refill);
        Ok(())
    }
}
