//! Game error families.
//!
//! - `ConditionError`: the game cannot proceed as configured (not enough
//!   cards or players, exhausted piles, no end condition, wrong lifecycle
//!   state). Callers reconfigure or end the game.
//! - `RuleError`: a player action was rejected. Nothing was mutated, so the
//!   caller can re-prompt the player.
//!
//! Every public game operation validates before it mutates, so an `Err`
//! never leaves partial state behind.

use thiserror::Error;

use super::player::PlayerId;
use crate::cards::{CardId, CardKind};

/// The game cannot proceed in its current configuration or state.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConditionError {
    #[error("insufficient cards for all players: need {needed}, have {available}")]
    InsufficientCards { needed: usize, available: usize },

    #[error("insufficient players")]
    InsufficientPlayers,

    #[error("empty {0} decks")]
    EmptyDecks(CardKind),

    #[error("never-ending game: set max rounds or max score")]
    NeverEnding,

    #[error("a round is already in progress")]
    RoundInProgress,

    #[error("no round in progress")]
    NoRoundInProgress,

    #[error("the game is finished")]
    Finished,

    #[error("the game is suspended pending more players")]
    Suspended,

    #[error("a winner must be chosen in a judge-based game")]
    NoWinnerSelected,
}

/// A player action broke the rules.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum RuleError {
    #[error("{0} is not in the game")]
    UnknownPlayer(PlayerId),

    #[error("{0} is already in the game")]
    DuplicatePlayer(PlayerId),

    #[error("{0} already played this round")]
    DoublePlay(PlayerId),

    #[error("{0} already voted this round")]
    DoubleVote(PlayerId),

    #[error("{0} is the judge and can't play")]
    JudgeCannotPlay(PlayerId),

    #[error("{0} is the judge and can't win the round")]
    JudgeSelfAward(PlayerId),

    #[error("wrong number of cards: expected {expected}, got {got}")]
    WrongCardCount { expected: usize, got: usize },

    #[error("{0} is not in the player's hand")]
    CardNotInHand(CardId),

    #[error("voting is not permitted in this game")]
    VotingNotPermitted,

    #[error("gambling is not permitted in this game")]
    GamblingNotPermitted,

    #[error("{0} passed this round")]
    AlreadyPassed(PlayerId),

    #[error("{0} already gambled this round")]
    DoubleGamble(PlayerId),

    #[error("can't gamble on a prompt that takes more than one card")]
    GambleOnMultiPick,

    #[error("trading points for cards is not permitted")]
    TradingNotPermitted,

    #[error("insufficient points: need {needed}, have {available}")]
    InsufficientPoints { needed: u32, available: u32 },

    #[error("too many cards: limit {limit}, got {got}")]
    TooManyCards { limit: usize, got: usize },
}

/// Any error returned by a `Game` operation.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    #[error(transparent)]
    Condition(#[from] ConditionError),

    #[error(transparent)]
    Rule(#[from] RuleError),
}

impl GameError {
    #[must_use]
    pub fn is_condition(&self) -> bool {
        matches!(self, GameError::Condition(_))
    }

    #[must_use]
    pub fn is_rule(&self) -> bool {
        matches!(self, GameError::Rule(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_classification() {
        let condition: GameError = ConditionError::InsufficientPlayers.into();
        assert!(condition.is_condition());
        assert!(!condition.is_rule());

        let rule: GameError = RuleError::DoublePlay(PlayerId::new(1)).into();
        assert!(rule.is_rule());
        assert!(!rule.is_condition());
    }

    #[test]
    fn test_messages() {
        let err: GameError = RuleError::WrongCardCount { expected: 2, got: 1 }.into();
        assert_eq!(err.to_string(), "wrong number of cards: expected 2, got 1");

        let err = ConditionError::EmptyDecks(CardKind::Prompt);
        assert_eq!(err.to_string(), "empty prompt decks");

        let err = RuleError::JudgeSelfAward(PlayerId::new(3));
        assert_eq!(err.to_string(), "Player 3 is the judge and can't win the round");
    }
}
