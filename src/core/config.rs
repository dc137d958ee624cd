//! House rules.
//!
//! A game's rules are fixed at construction. `HouseRules` deserializes from
//! JSON with every field optional, falling back to the standard rules:
//!
//! - 10 cards per hand
//! - play to 10 points, no round limit
//! - gambling allowed, no voting, no point trading

use serde::{Deserialize, Serialize};

use super::error::ConditionError;

/// Exchange rate for trading points for fresh cards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TradeRate {
    /// Points paid per trade.
    pub points: u32,
    /// Maximum number of cards swapped per trade.
    pub cards: usize,
}

/// House rule configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HouseRules {
    /// Cards held by each player between rounds.
    pub hand_size: usize,

    /// End the game after this many rounds.
    pub max_rounds: Option<u32>,

    /// End the game once any player reaches this score.
    pub max_score: Option<u32>,

    /// Point trading; `None` forbids it.
    pub trade: Option<TradeRate>,

    /// Players vote on the winner instead of a judge picking.
    pub voting: bool,

    /// Players may wager a point on an extra card.
    pub gambling: bool,
}

impl Default for HouseRules {
    fn default() -> Self {
        Self {
            hand_size: 10,
            max_rounds: None,
            max_score: Some(10),
            trade: None,
            voting: false,
            gambling: true,
        }
    }
}

impl HouseRules {
    #[must_use]
    pub fn with_hand_size(mut self, hand_size: usize) -> Self {
        self.hand_size = hand_size;
        self
    }

    #[must_use]
    pub fn with_max_rounds(mut self, max_rounds: Option<u32>) -> Self {
        self.max_rounds = max_rounds;
        self
    }

    #[must_use]
    pub fn with_max_score(mut self, max_score: Option<u32>) -> Self {
        self.max_score = max_score;
        self
    }

    #[must_use]
    pub fn with_trade(mut self, points: u32, cards: usize) -> Self {
        self.trade = Some(TradeRate { points, cards });
        self
    }

    #[must_use]
    pub fn with_voting(mut self, voting: bool) -> Self {
        self.voting = voting;
        self
    }

    #[must_use]
    pub fn with_gambling(mut self, gambling: bool) -> Self {
        self.gambling = gambling;
        self
    }

    /// Reject rule sets that never end.
    pub fn validate(&self) -> Result<(), ConditionError> {
        if self.max_rounds.is_none() && self.max_score.is_none() {
            return Err(ConditionError::NeverEnding);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let rules = HouseRules::default();
        assert_eq!(rules.hand_size, 10);
        assert_eq!(rules.max_score, Some(10));
        assert_eq!(rules.max_rounds, None);
        assert!(rules.gambling);
        assert!(!rules.voting);
        assert!(rules.trade.is_none());
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_never_ending_rejected() {
        let rules = HouseRules::default().with_max_score(None);
        assert_eq!(rules.validate(), Err(ConditionError::NeverEnding));

        let rules = rules.with_max_rounds(Some(5));
        assert!(rules.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let rules: HouseRules =
            serde_json::from_str(r#"{"hand_size": 7, "voting": true, "trade": {"points": 2, "cards": 4}}"#)
                .unwrap();

        assert_eq!(rules.hand_size, 7);
        assert!(rules.voting);
        assert_eq!(rules.trade, Some(TradeRate { points: 2, cards: 4 }));
        assert_eq!(rules.max_score, Some(10));
        assert!(rules.gambling);
    }

    #[test]
    fn test_builder() {
        let rules = HouseRules::default()
            .with_hand_size(5)
            .with_max_rounds(Some(3))
            .with_trade(1, 2)
            .with_gambling(false);

        assert_eq!(rules.hand_size, 5);
        assert_eq!(rules.max_rounds, Some(3));
        assert_eq!(rules.trade, Some(TradeRate { points: 1, cards: 2 }));
        assert!(!rules.gambling);
    }
}
