//! Identifier allocation.
//!
//! Players and games are keyed by opaque numeric identifiers. Callers mint
//! them from an `IdAllocator` they own and pass around explicitly; there is no
//! process-wide counter. The allocator is atomic so one instance can be shared
//! by threads that load packs or create games concurrently at startup.
//!
//! ```
//! use party_cards::core::IdAllocator;
//!
//! let ids = IdAllocator::new();
//! let a = ids.next_player();
//! let b = ids.next_player();
//! assert_ne!(a, b);
//! ```

use std::sync::atomic::{AtomicU64, Ordering};

use serde::{Deserialize, Serialize};

use super::player::PlayerId;

/// Identifier for a game instance.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GameId(pub u64);

impl GameId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for GameId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Game({})", self.0)
    }
}

/// Monotonic identifier source.
///
/// Every call hands out a value never returned before by the same allocator,
/// regardless of which kind of identifier is requested.
#[derive(Debug, Default)]
pub struct IdAllocator {
    next: AtomicU64,
}

impl IdAllocator {
    /// Create an allocator starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an allocator whose first identifier is `start`.
    ///
    /// Useful when resuming numbering after identifiers were handed out
    /// elsewhere.
    #[must_use]
    pub fn starting_at(start: u64) -> Self {
        Self {
            next: AtomicU64::new(start),
        }
    }

    fn bump(&self) -> u64 {
        self.next.fetch_add(1, Ordering::Relaxed)
    }

    /// Mint a fresh player identifier.
    pub fn next_player(&self) -> PlayerId {
        PlayerId::new(self.bump())
    }

    /// Mint a fresh game identifier.
    pub fn next_game(&self) -> GameId {
        GameId::new(self.bump())
    }
}
