//! Player identification and membership order.
//!
//! ## PlayerId
//!
//! Opaque player identifier. The engine never interprets the value; callers
//! mint identifiers with an `IdAllocator` or bring their own.
//!
//! ## Roster
//!
//! Ordered, duplicate-free membership list. Insertion order is the seating
//! order used for judge rotation, and removal shifts later players down one
//! position.

use serde::{Deserialize, Serialize};

/// Opaque player identifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PlayerId(pub u64);

impl PlayerId {
    /// Create a new player ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for PlayerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Player {}", self.0)
    }
}

/// Ordered set of players.
///
/// ## Example
///
/// ```
/// use party_cards::core::{PlayerId, Roster};
///
/// let mut roster = Roster::new();
/// assert!(roster.insert(PlayerId::new(7)));
/// assert!(roster.insert(PlayerId::new(3)));
/// assert!(!roster.insert(PlayerId::new(7)));
///
/// assert_eq!(roster.position(PlayerId::new(3)), Some(1));
/// assert_eq!(roster.get(0), Some(PlayerId::new(7)));
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Roster {
    order: Vec<PlayerId>,
}

impl Roster {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a player. Returns `false` if they were already present.
    pub fn insert(&mut self, player: PlayerId) -> bool {
        if self.contains(player) {
            return false;
        }
        self.order.push(player);
        true
    }

    /// Remove a player, returning the position they held.
    pub fn remove(&mut self, player: PlayerId) -> Option<usize> {
        let index = self.position(player)?;
        self.order.remove(index);
        Some(index)
    }

    #[must_use]
    pub fn contains(&self, player: PlayerId) -> bool {
        self.order.contains(&player)
    }

    /// Seat position of a player.
    #[must_use]
    pub fn position(&self, player: PlayerId) -> Option<usize> {
        self.order.iter().position(|&p| p == player)
    }

    /// Player at a seat position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<PlayerId> {
        self.order.get(index).copied()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.order.iter().copied()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[PlayerId] {
        &self.order
    }

    pub fn clear(&mut self) {
        self.order.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(ids: &[u64]) -> Roster {
        let mut roster = Roster::new();
        for &id in ids {
            roster.insert(PlayerId::new(id));
        }
        roster
    }

    #[test]
    fn test_player_id_basics() {
        let p = PlayerId::new(42);
        assert_eq!(p.raw(), 42);
        assert_eq!(format!("{}", p), "Player 42");
    }

    #[test]
    fn test_insert_keeps_order_and_rejects_duplicates() {
        let mut r = roster(&[5, 1, 9]);
        assert!(!r.insert(PlayerId::new(1)));
        assert_eq!(r.as_slice(), &[PlayerId::new(5), PlayerId::new(1), PlayerId::new(9)]);
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn test_remove_shifts_positions() {
        let mut r = roster(&[1, 2, 3]);
        assert_eq!(r.remove(PlayerId::new(2)), Some(1));
        assert_eq!(r.position(PlayerId::new(3)), Some(1));
        assert_eq!(r.remove(PlayerId::new(2)), None);
    }

    #[test]
    fn test_get_out_of_range() {
        let r = roster(&[1]);
        assert_eq!(r.get(0), Some(PlayerId::new(1)));
        assert_eq!(r.get(1), None);
    }

    #[test]
    fn test_roster_serialization() {
        let r = roster(&[3, 4]);
        let json = serde_json::to_string(&r).unwrap();
        let back: Roster = serde_json::from_str(&json).unwrap();
        assert_eq!(r, back);
    }
}
