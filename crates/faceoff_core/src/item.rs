//! Per-item tournament state and vote bookkeeping.

use serde::{Deserialize, Serialize};

/// Health assigned to every item when the tournament starts.
pub const STARTING_HEALTH: u32 = 100;

/// State of a single item across the tournament.
///
/// Health acts as a soft elimination signal: items that lose decisively
/// and repeatedly drop to zero and stop being paired, concentrating later
/// votes on the still-competitive items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ItemState {
    /// Opaque identifier supplied by the caller (typically an image URL)
    pub id: String,
    /// Remaining health, always within 0..=100
    pub health: u32,
    /// Votes won
    pub wins: u32,
    /// Votes lost
    pub losses: u32,
    /// Decision latency in milliseconds for each won vote, in vote order
    pub decision_times: Vec<u64>,
}

impl ItemState {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            health: STARTING_HEALTH,
            wins: 0,
            losses: 0,
            decision_times: Vec::new(),
        }
    }

    /// Items keep getting paired until their health is exhausted.
    pub fn is_alive(&self) -> bool {
        self.health > 0
    }

    /// Total votes this item has taken part in.
    pub fn total_votes(&self) -> u32 {
        self.wins + self.losses
    }
}

/// One resolved vote: who beat whom.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VoteRecord {
    pub winner: String,
    pub loser: String,
}
