//! Latency-weighted scoring rule.
//!
//! Every vote transfers health from the loser to the winner. The amount
//! depends on how quickly the judge decided: a snap decision moves nine
//! times as many points as a hesitant one.

use serde::{Deserialize, Serialize};

/// Base points transferred per vote before the latency multiplier.
pub const BASE_POINTS: u32 = 10;

/// Decisions at or under this many milliseconds get the strong multiplier.
pub const FAST_CUTOFF_MS: u64 = 800;

/// Decisions over the fast cutoff but at or under this count as moderate.
pub const SLOW_CUTOFF_MS: u64 = 2000;

/// Health ceiling for every item.
pub const MAX_HEALTH: u32 = 100;

/// Tunable scoring parameters.
///
/// Defaults reproduce the standard rule: 10 base points, 3x at or under
/// 800ms, 1x up to 2000ms, 0.33x beyond.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub base_points: u32,
    pub fast_cutoff_ms: u64,
    pub slow_cutoff_ms: u64,
    pub fast_multiplier: f64,
    pub normal_multiplier: f64,
    pub slow_multiplier: f64,
    pub max_health: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            base_points: BASE_POINTS,
            fast_cutoff_ms: FAST_CUTOFF_MS,
            slow_cutoff_ms: SLOW_CUTOFF_MS,
            fast_multiplier: 3.0,
            normal_multiplier: 1.0,
            slow_multiplier: 0.33,
            max_health: MAX_HEALTH,
        }
    }
}

impl ScoringConfig {
    /// Latency multiplier for a decision time.
    pub fn multiplier(&self, decision_time_ms: u64) -> f64 {
        if decision_time_ms <= self.fast_cutoff_ms {
            self.fast_multiplier
        } else if decision_time_ms <= self.slow_cutoff_ms {
            self.normal_multiplier
        } else {
            self.slow_multiplier
        }
    }

    /// Health points transferred for a vote decided in `decision_time_ms`.
    pub fn vote_delta(&self, decision_time_ms: u64) -> u32 {
        (f64::from(self.base_points) * self.multiplier(decision_time_ms)).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_bands() {
        let config = ScoringConfig::default();

        assert_eq!(config.multiplier(0), 3.0);
        assert_eq!(config.multiplier(800), 3.0);
        assert_eq!(config.multiplier(801), 1.0);
        assert_eq!(config.multiplier(2000), 1.0);
        assert_eq!(config.multiplier(2001), 0.33);
    }

    #[test]
    fn test_vote_delta() {
        let config = ScoringConfig::default();

        // 500ms: strong decision, 10 * 3.0 = 30
        assert_eq!(config.vote_delta(500), 30);
        // 1500ms: moderate decision, 10 * 1.0 = 10
        assert_eq!(config.vote_delta(1500), 10);
        // 5000ms: weak decision, round(10 * 0.33) = 3
        assert_eq!(config.vote_delta(5000), 3);
    }
}
