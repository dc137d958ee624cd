//! Round lifecycle: start, play, resolve, end, and ending the game.
//!
//! ```text
//! Idle --start_round--> InRound --end_round--> Idle ... --> Finished
//! ```
//!
//! `end_round` moves to `Finished` when the round limit is reached or a
//! player hits the score limit. `end_game` can be called at any time.

use log::{debug, info, warn};

use super::state::Game;
use super::outcome::{Outcome, RoundEnd};
use crate::cards::CardId;
use crate::core::error::{ConditionError, GameError, RuleError};
use crate::core::player::PlayerId;

impl Game {
    /// Draw a prompt and open a new round.
    ///
    /// Prompts that ask players to draw extra cards deal them before play
    /// begins, to every player who may play this round. Returns the prompt's
    /// card id.
    pub fn start_round(&mut self) -> Result<CardId, GameError> {
        if self.in_round {
            return Err(ConditionError::RoundInProgress.into());
        }
        if self.finished {
            return Err(ConditionError::Finished.into());
        }
        if self.suspended {
            return Err(ConditionError::Suspended.into());
        }
        debug_assert!(self.current_prompt.is_none(), "prompt left over from last round");
        debug_assert!(
            self.seats.values().all(|s| s.played.is_empty()),
            "plays left over from last round"
        );
        if self.prompts.is_exhausted() {
            return Err(ConditionError::EmptyDecks(self.prompts.kind()).into());
        }

        // An empty draw pile is refilled by shuffling, so check the worst
        // prompt the discard pile could yield.
        let draw = match self.prompts.peek() {
            Some(prompt) => self.draw_count(prompt),
            None => self
                .prompts
                .discard_pile()
                .iter()
                .map(|&prompt| self.draw_count(prompt))
                .max()
                .unwrap_or(0),
        };
        let dealt: Vec<PlayerId> = self
            .players
            .iter()
            .filter(|&p| self.rules.voting || self.judge != Some(p))
            .collect();
        let needed = draw * dealt.len();
        if needed > self.responses.available() {
            return Err(ConditionError::InsufficientCards {
                needed,
                available: self.responses.available(),
            }
            .into());
        }

        let prompt = self.prompts.draw(&mut self.rng)?;
        self.current_prompt = Some(prompt);
        self.round_number += 1;
        self.in_round = true;

        let draw = self.draw_count(prompt);
        for player in dealt {
            self.deal(player, draw)?;
        }

        info!(
            "{}: round {} started, judge {}",
            self.id,
            self.round_number,
            self.judge.map_or_else(|| "none".to_owned(), |j| j.to_string())
        );
        Ok(prompt)
    }

    fn draw_count(&self, prompt: CardId) -> usize {
        self.registry.get(prompt).map_or(0, |c| c.draw_count() as usize)
    }

    /// Commit cards from a player's hand to the round, in order.
    ///
    /// The number of cards must match the prompt's play count. Each player
    /// plays at most once per round, and in judge mode the judge can't play.
    pub fn submit_play(&mut self, player: PlayerId, cards: &[CardId]) -> Result<(), GameError> {
        self.check_can_play(player)?;

        let expected = self.required_cards();
        if cards.len() != expected {
            return Err(RuleError::WrongCardCount { expected, got: cards.len() }.into());
        }
        Game::check_in_hand(self.seat(player)?, cards)?;

        let round = self.round_number;
        let seat = self.seat_mut(player)?;
        for &card in cards {
            seat.hand.remove(&card);
            seat.played.push(card);
        }
        seat.last_played = Some(round);

        debug!("{}: {} played {} cards", self.id, player, cards.len());
        Ok(())
    }

    /// Sit out the current round without playing.
    pub fn pass(&mut self, player: PlayerId) -> Result<(), GameError> {
        self.check_can_play(player)?;

        let round = self.round_number;
        self.seat_mut(player)?.last_played = Some(round);
        debug!("{}: {} passed", self.id, player);
        Ok(())
    }

    fn check_can_play(&self, player: PlayerId) -> Result<(), GameError> {
        let seat = self.seat(player)?;
        if !self.in_round {
            return Err(ConditionError::NoRoundInProgress.into());
        }
        if !self.rules.voting && self.judge == Some(player) {
            return Err(RuleError::JudgeCannotPlay(player).into());
        }
        if seat.last_played == Some(self.round_number) {
            return Err(RuleError::DoublePlay(player).into());
        }
        Ok(())
    }

    /// Score the current round.
    ///
    /// With `Some(winner)` that player receives the round's point grant; the
    /// judge can never be picked. With `None` in voting mode, every player
    /// tied for the most votes receives it, and nobody does if no votes were
    /// cast. Judge mode requires a winner.
    ///
    /// A round is scored once: after a successful call, later calls in the
    /// same round return the recorded outcome and ignore `winner`.
    pub fn resolve_round(&mut self, winner: Option<PlayerId>) -> Result<Outcome, GameError> {
        if let Some(w) = winner {
            if !self.players.contains(w) {
                return Err(RuleError::UnknownPlayer(w).into());
            }
        }
        if !self.in_round {
            return Err(ConditionError::NoRoundInProgress.into());
        }
        if let Some(outcome) = &self.resolution {
            return Ok(outcome.clone());
        }
        if self.players.len() <= 1 && (self.finished || self.suspended) {
            return Ok(Outcome::NoContest);
        }

        let outcome = match winner {
            Some(w) => {
                if self.judge == Some(w) {
                    return Err(RuleError::JudgeSelfAward(w).into());
                }
                self.award(w)?;
                Outcome::Winner(w)
            }
            None if self.rules.voting => {
                let top = self.votes.values().copied().max().unwrap_or(0);
                if top == 0 {
                    Outcome::NoContest
                } else {
                    let leaders: Vec<PlayerId> = self
                        .players
                        .iter()
                        .filter(|p| self.votes.get(p).copied() == Some(top))
                        .collect();
                    for &leader in &leaders {
                        self.award(leader)?;
                    }
                    Outcome::from_leaders(leaders)
                }
            }
            None => return Err(ConditionError::NoWinnerSelected.into()),
        };

        debug!("{}: round {} resolved: {:?}", self.id, self.round_number, outcome);
        self.resolution = Some(outcome.clone());
        Ok(outcome)
    }

    fn award(&mut self, player: PlayerId) -> Result<(), RuleError> {
        let grant = self.point_grant;
        self.seat_mut(player)?.score += grant;
        Ok(())
    }

    /// Resolve and close the current round.
    ///
    /// Played cards and the prompt go to the discard piles, hands are topped
    /// back up, and house-rule state resets. If an end condition is met the
    /// game finishes and the final standings are returned alongside the
    /// round's outcome; otherwise the next judge is elected.
    pub fn end_round(&mut self, winner: Option<PlayerId>) -> Result<RoundEnd, GameError> {
        let round = self.resolve_round(winner)?;
        self.close_round();

        if self.end_condition_met() {
            let game = self.end_game(false);
            return Ok(RoundEnd::GameOver { round, game });
        }

        if self.players.len() >= 2 {
            self.elect_judge(None)?;
        } else {
            self.suspended = true;
            self.judge = None;
            self.judge_index = 0;
        }
        Ok(RoundEnd::Continue(round))
    }

    fn end_condition_met(&self) -> bool {
        let rounds_done = self
            .rules
            .max_rounds
            .is_some_and(|max| self.round_number >= max);
        let score_reached = self
            .rules
            .max_score
            .is_some_and(|max| self.seats.values().any(|s| s.score >= max));
        rounds_done || score_reached
    }

    fn close_round(&mut self) {
        self.in_round = false;
        if let Some(prompt) = self.current_prompt.take() {
            self.prompts.discard(prompt);
        }

        let players: Vec<PlayerId> = self.players.iter().collect();
        for &player in &players {
            if let Some(seat) = self.seats.get_mut(&player) {
                self.responses.discard_all(seat.played.drain(..));
            }
        }
        // Hands go back to exactly `hand_size`: surplus from unplayed draw
        // cards is discarded, short hands are topped up.
        let hand_size = self.rules.hand_size;
        for &player in &players {
            if let Some(seat) = self.seats.get_mut(&player) {
                while seat.hand.len() > hand_size {
                    let Some(card) = seat.hand.remove_max() else { break };
                    self.responses.discard(card);
                }
            }
        }
        for player in players {
            let missing = self.shortfall(player);
            if let Err(err) = self.deal(player, missing) {
                warn!("{}: could not top up {}: {}", self.id, player, err);
            }
        }

        self.votes.clear();
        self.voters.clear();
        self.gamblers.clear();
        self.point_grant = 1;
        self.resolution = None;
    }

    /// Finish the game and return the winners by score.
    ///
    /// An active round is closed without scoring. Scores, votes, and the
    /// judge are cleared. Without `purge`, every card goes back into the draw
    /// piles and the roster is kept for inspection. With `purge`, players,
    /// piles, and cards are all dropped.
    pub fn end_game(&mut self, purge: bool) -> Outcome {
        self.suspended = true;
        self.finished = true;
        if self.in_round {
            self.close_round();
        }

        let outcome = if self.players.len() <= 1 {
            Outcome::NoContest
        } else {
            let top = self.seats.values().map(|s| s.score).max().unwrap_or(0);
            Outcome::from_leaders(
                self.players
                    .iter()
                    .filter(|p| self.seats.get(p).is_some_and(|s| s.score == top))
                    .collect(),
            )
        };

        self.votes.clear();
        self.voters.clear();
        self.gamblers.clear();
        self.point_grant = 1;
        self.resolution = None;
        self.judge = None;
        self.judge_index = 0;

        if purge {
            self.seats.clear();
            self.players.clear();
            self.prompts.clear();
            self.responses.clear();
            self.registry.clear();
            self.max_draw = None;
        } else {
            for seat in self.seats.values_mut() {
                seat.score = 0;
                seat.last_played = None;
                self.responses.discard_all(std::mem::take(&mut seat.hand));
            }
            self.prompts.recombine();
            self.responses.recombine();
        }

        info!("{}: game over after {} rounds: {:?}", self.id, self.round_number, outcome);
        outcome
    }
}
