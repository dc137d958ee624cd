//! Round and game results.

use serde::{Deserialize, Serialize};

use crate::core::player::PlayerId;

/// Who won a round or a game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Outcome {
    /// Single winner.
    Winner(PlayerId),
    /// Tied winners, in seating order. All of them were credited.
    Winners(Vec<PlayerId>),
    /// Nobody won (no votes cast, or too few players).
    NoContest,
}

impl Outcome {
    /// Build an outcome from the players who share the lead.
    #[must_use]
    pub fn from_leaders(mut leaders: Vec<PlayerId>) -> Self {
        match leaders.len() {
            0 => Outcome::NoContest,
            1 => Outcome::Winner(leaders.remove(0)),
            _ => Outcome::Winners(leaders),
        }
    }

    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: PlayerId) -> bool {
        self.winners().contains(&player)
    }

    /// Every winning player.
    #[must_use]
    pub fn winners(&self) -> &[PlayerId] {
        match self {
            Outcome::Winner(p) => std::slice::from_ref(p),
            Outcome::Winners(ps) => ps,
            Outcome::NoContest => &[],
        }
    }
}

/// Result of `Game::end_round`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RoundEnd {
    /// The round resolved and play continues.
    Continue(Outcome),
    /// The round resolved and it ended the game.
    GameOver {
        /// Winner(s) of the final round.
        round: Outcome,
        /// Winner(s) of the game by score.
        game: Outcome,
    },
}

impl RoundEnd {
    /// Winner(s) of the round that just ended.
    #[must_use]
    pub fn round(&self) -> &Outcome {
        match self {
            RoundEnd::Continue(round) | RoundEnd::GameOver { round, .. } => round,
        }
    }

    /// Final results, if the game ended.
    #[must_use]
    pub fn game(&self) -> Option<&Outcome> {
        match self {
            RoundEnd::Continue(_) => None,
            RoundEnd::GameOver { game, .. } => Some(game),
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self, RoundEnd::GameOver { .. })
    }
}

/// State of the vote after a ballot is cast.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VoteStatus {
    /// The leading player holds at least half the seats' votes.
    pub majority: bool,
    /// Fraction of players who have voted.
    pub turnout: f64,
}
