//! The tournament engine: pair selection, vote application, progress.
//!
//! Single-threaded and synchronous. The engine owns all mutable state;
//! the caller drives it with `select_pair` / `record_vote` until
//! `select_pair` returns `Ok(None)`, then hands the final states to
//! `RankingReport::generate`.

use std::collections::HashMap;
use std::time::Instant;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use crate::error::TournamentError;
use crate::item::{ItemState, VoteRecord};
use crate::scoring::ScoringConfig;

/// The pair currently awaiting a vote.
#[derive(Debug)]
struct Matchup {
    first: usize,
    second: usize,
    started: Instant,
}

/// Outcome of a resolved vote, for callers that show per-vote feedback.
#[derive(Debug, Clone)]
pub struct VoteOutcome {
    pub winner: String,
    pub loser: String,
    pub decision_time_ms: u64,
    /// Health points transferred from loser to winner
    pub delta: u32,
    /// True when this vote drove the loser's health to zero
    pub loser_eliminated: bool,
}

/// Pairwise preference tournament over a fixed set of items.
///
/// Exactly one pair may be outstanding at a time. Votes are weighted by
/// decision latency, measured from pair selection to the vote unless the
/// caller supplies its own timing via [`Tournament::record_vote_timed`].
pub struct Tournament {
    /// Item states, in the order the identifiers were supplied
    items: Vec<ItemState>,
    /// Identifier -> index into `items`
    index: HashMap<String, usize>,
    pending: Option<Matchup>,
    history: Vec<VoteRecord>,
    config: ScoringConfig,
    finished: bool,
    rng: StdRng,
}

impl Tournament {
    /// Start a tournament over the given item identifiers.
    ///
    /// Fails with `InvalidInput` when fewer than two identifiers are
    /// supplied or any identifier repeats.
    pub fn new(ids: Vec<String>) -> Result<Self, TournamentError> {
        Self::with_config(ids, ScoringConfig::default())
    }

    /// Start a tournament with a custom scoring rule.
    pub fn with_config(ids: Vec<String>, config: ScoringConfig) -> Result<Self, TournamentError> {
        Self::build(ids, config, StdRng::from_entropy())
    }

    /// Start a tournament with deterministic pairing, for reproducible
    /// runs and tests.
    pub fn with_seed(
        ids: Vec<String>,
        config: ScoringConfig,
        seed: u64,
    ) -> Result<Self, TournamentError> {
        Self::build(ids, config, StdRng::seed_from_u64(seed))
    }

    fn build(
        ids: Vec<String>,
        config: ScoringConfig,
        rng: StdRng,
    ) -> Result<Self, TournamentError> {
        if ids.len() < 2 {
            return Err(TournamentError::InvalidInput {
                details: format!("need at least 2 items, got {}", ids.len()),
            });
        }
        let mut index = HashMap::with_capacity(ids.len());
        for (i, id) in ids.iter().enumerate() {
            if index.insert(id.clone(), i).is_some() {
                return Err(TournamentError::InvalidInput {
                    details: format!("duplicate item id: {}", id),
                });
            }
        }

        Ok(Self {
            items: ids.into_iter().map(ItemState::new).collect(),
            index,
            pending: None,
            history: Vec::new(),
            config,
            finished: false,
            rng,
        })
    }

    /// Draw the next pair to judge.
    ///
    /// Returns `Ok(None)` once the tournament is over: fewer than two
    /// items still have health, or [`Tournament::finish`] was called.
    /// The two identifiers are drawn uniformly without replacement from
    /// the alive set; their order carries no meaning.
    ///
    /// Selection starts the decision clock for [`Tournament::record_vote`].
    pub fn select_pair(&mut self) -> Result<Option<(String, String)>, TournamentError> {
        if self.pending.is_some() {
            return Err(TournamentError::PairAlreadyPending);
        }
        if self.finished {
            return Ok(None);
        }

        let alive: Vec<usize> = (0..self.items.len())
            .filter(|&i| self.items[i].is_alive())
            .collect();
        if alive.len() < 2 {
            self.finished = true;
            return Ok(None);
        }

        let picks: Vec<usize> = alive.choose_multiple(&mut self.rng, 2).copied().collect();
        let pair = (
            self.items[picks[0]].id.clone(),
            self.items[picks[1]].id.clone(),
        );
        self.pending = Some(Matchup {
            first: picks[0],
            second: picks[1],
            started: Instant::now(),
        });
        Ok(Some(pair))
    }

    /// Resolve the outstanding pair, measuring decision latency from the
    /// moment the pair was selected.
    pub fn record_vote(&mut self, winner_id: &str) -> Result<VoteOutcome, TournamentError> {
        let elapsed_ms = match &self.pending {
            Some(matchup) => {
                u64::try_from(matchup.started.elapsed().as_millis()).unwrap_or(u64::MAX)
            }
            None => {
                return Err(TournamentError::UnknownPair {
                    id: winner_id.to_string(),
                })
            }
        };
        self.record_vote_timed(winner_id, elapsed_ms)
    }

    /// Resolve the outstanding pair with a caller-measured decision time.
    ///
    /// For presentation layers that time the decision at the UI, and for
    /// deterministic tests. All checks happen before any state changes:
    /// a rejected vote leaves the engine untouched.
    pub fn record_vote_timed(
        &mut self,
        winner_id: &str,
        decision_time_ms: u64,
    ) -> Result<VoteOutcome, TournamentError> {
        let (first, second) = match &self.pending {
            Some(matchup) => (matchup.first, matchup.second),
            None => {
                return Err(TournamentError::UnknownPair {
                    id: winner_id.to_string(),
                })
            }
        };
        let (winner_idx, loser_idx) = if self.items[first].id == winner_id {
            (first, second)
        } else if self.items[second].id == winner_id {
            (second, first)
        } else {
            return Err(TournamentError::UnknownPair {
                id: winner_id.to_string(),
            });
        };

        let delta = self.config.vote_delta(decision_time_ms);

        let winner = &mut self.items[winner_idx];
        winner.health = (winner.health + delta).min(self.config.max_health);
        winner.wins += 1;
        winner.decision_times.push(decision_time_ms);

        let loser = &mut self.items[loser_idx];
        loser.health = loser.health.saturating_sub(delta);
        loser.losses += 1;
        let loser_eliminated = loser.health == 0;

        let outcome = VoteOutcome {
            winner: self.items[winner_idx].id.clone(),
            loser: self.items[loser_idx].id.clone(),
            decision_time_ms,
            delta,
            loser_eliminated,
        };
        self.history.push(VoteRecord {
            winner: outcome.winner.clone(),
            loser: outcome.loser.clone(),
        });
        self.pending = None;
        Ok(outcome)
    }

    /// Share of all possible pairings that have been judged, 0-100.
    ///
    /// The denominator is C(n, 2) over the original item count, so
    /// elimination can end a tournament with progress short of 100.
    /// Informational gauge only; completion is signalled by
    /// [`Tournament::select_pair`] returning `Ok(None)`.
    pub fn progress(&self) -> f64 {
        let n = self.items.len() as f64;
        let total_pairs = n * (n - 1.0) / 2.0;
        100.0 * self.history.len() as f64 / total_pairs
    }

    /// End the tournament now and return a snapshot of the item states.
    ///
    /// Random pairing puts no upper bound on tournament length short of
    /// elimination; this is the caller's early exit. Any outstanding pair
    /// is discarded, and later `select_pair` calls return `Ok(None)`.
    pub fn finish(&mut self) -> Vec<ItemState> {
        self.pending = None;
        self.finished = true;
        self.items.clone()
    }

    /// Current item states, in the order the identifiers were supplied.
    pub fn items(&self) -> &[ItemState] {
        &self.items
    }

    /// All resolved votes, oldest first.
    pub fn history(&self) -> &[VoteRecord] {
        &self.history
    }

    /// Number of votes resolved so far.
    pub fn votes_cast(&self) -> usize {
        self.history.len()
    }

    /// Items that still have health and can be paired.
    pub fn alive_count(&self) -> usize {
        self.items.iter().filter(|item| item.is_alive()).count()
    }

    /// Whether the tournament can produce another pair.
    pub fn is_complete(&self) -> bool {
        self.finished || self.alive_count() < 2
    }

    /// Look up an item by identifier.
    pub fn item(&self, id: &str) -> Option<&ItemState> {
        self.index.get(id).map(|&i| &self.items[i])
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod engine_tests;
