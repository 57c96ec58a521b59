//! Pairwise preference tournament engine.
//!
//! This crate provides infrastructure for:
//! - Running a health-point tournament over opaque item identifiers,
//!   where each vote's weight depends on how quickly the judge decided
//! - Uniform random pair selection over the still-alive items
//! - Deriving a pure ranking report from the final item states
//!
//! # Usage
//!
//! ```
//! use faceoff_core::{RankingReport, Tournament};
//!
//! let ids = vec!["a.png".to_string(), "b.png".to_string(), "c.png".to_string()];
//! let mut tournament = Tournament::new(ids).unwrap();
//!
//! while let Some((first, _second)) = tournament.select_pair().unwrap() {
//!     // Present both items, wait for the judge, then record the winner.
//!     tournament.record_vote(&first).unwrap();
//!     if tournament.votes_cast() >= 10 {
//!         break;
//!     }
//! }
//!
//! let report = RankingReport::generate(&tournament.finish());
//! println!("{}", report.render_text());
//! ```

mod engine;
mod error;
mod item;
mod report;
mod scoring;

pub use engine::*;
pub use error::*;
pub use item::*;
pub use report::*;
pub use scoring::*;
