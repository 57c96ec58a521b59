//! Final ranking derivation and presentation-ready report.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::TournamentError;
use crate::item::ItemState;

/// Derived, read-only metrics for one item.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportEntry {
    pub id: String,
    pub wins: u32,
    pub losses: u32,
    pub total_votes: u32,
    /// Wins as a percentage of votes taken part in; 0 when never voted on
    pub win_percentage: f64,
    /// Composite ranking score: (wins / max(losses, 1)) * total_votes.
    /// Folding in the vote count keeps barely-tested items from outranking
    /// items that earned their record.
    pub score: f64,
    /// Mean decision latency across won votes; `None` when the item never won
    pub avg_decision_time_ms: Option<f64>,
    pub final_health: u32,
}

impl ReportEntry {
    fn from_item(item: &ItemState) -> Self {
        let total_votes = item.total_votes();
        let win_percentage = if total_votes == 0 {
            0.0
        } else {
            f64::from(item.wins) / f64::from(total_votes) * 100.0
        };
        let score = f64::from(item.wins) / f64::from(item.losses.max(1)) * f64::from(total_votes);
        let avg_decision_time_ms = if item.decision_times.is_empty() {
            None
        } else {
            Some(item.decision_times.iter().sum::<u64>() as f64 / item.decision_times.len() as f64)
        };

        Self {
            id: item.id.clone(),
            wins: item.wins,
            losses: item.losses,
            total_votes,
            win_percentage,
            score,
            avg_decision_time_ms,
            final_health: item.health,
        }
    }
}

/// Ranked tournament outcome, ordered by score descending.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct RankingReport {
    pub entries: Vec<ReportEntry>,
}

impl RankingReport {
    /// Derive the report from final item states.
    ///
    /// Pure: reads the snapshot and builds new records, never mutating the
    /// input. Generating twice from the same states yields the same report.
    /// Score ties keep the input order (stable sort).
    pub fn generate(items: &[ItemState]) -> Self {
        let mut entries: Vec<ReportEntry> = items.iter().map(ReportEntry::from_item).collect();
        entries.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        Self { entries }
    }

    /// The top-ranked item, designated the tournament winner.
    pub fn winner(&self) -> Option<&ReportEntry> {
        self.entries.first()
    }

    /// Save as pretty-printed JSON.
    pub fn save(&self, path: &Path) -> Result<(), TournamentError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Load a previously saved report.
    pub fn load(path: &Path) -> Result<Self, TournamentError> {
        let contents = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    /// Formatted ranking table for terminal display.
    pub fn render_text(&self) -> String {
        let mut out = String::new();

        if let Some(winner) = self.winner() {
            out.push_str(&format!(
                "=== Winner: {} ({:.2}% wins) ===\n\n",
                winner.id, winner.win_percentage
            ));
        }

        out.push_str(&format!(
            "{:<4} {:<30} {:>6} {:>7} {:>6} {:>8} {:>10} {:>8}\n",
            "Rank", "Item", "Wins", "Losses", "Votes", "Win %", "Score", "Avg ms"
        ));
        out.push_str(&"-".repeat(86));
        out.push('\n');

        for (rank, entry) in self.entries.iter().enumerate() {
            let avg = entry
                .avg_decision_time_ms
                .map_or_else(|| "N/A".to_string(), |ms| format!("{:.0}", ms));
            out.push_str(&format!(
                "{:<4} {:<30} {:>6} {:>7} {:>6} {:>8.2} {:>10.2} {:>8}\n",
                rank + 1,
                entry.id,
                entry.wins,
                entry.losses,
                entry.total_votes,
                entry.win_percentage,
                entry.score,
                avg
            ));
        }

        out
    }

    /// Print the ranking table to stdout.
    pub fn print(&self) {
        println!("{}", self.render_text());
    }
}
