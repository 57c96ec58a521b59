//! Error taxonomy for the tournament engine.

use thiserror::Error;

/// Everything that can go wrong while driving a tournament.
///
/// Completion is not represented here: `Tournament::select_pair` signals
/// it by returning `Ok(None)`, at which point the caller moves on to
/// report generation.
#[derive(Debug, Error)]
pub enum TournamentError {
    /// Bad initialization arguments. Fatal: the caller must not proceed.
    #[error("invalid input: {details}")]
    InvalidInput { details: String },

    /// `select_pair` was called while a pair was still awaiting its vote.
    #[error("a pair is already awaiting a vote")]
    PairAlreadyPending,

    /// A vote named an item outside the outstanding pair, or arrived when
    /// no pair was outstanding. Recoverable: select a fresh pair.
    #[error("vote does not match the outstanding pair: {id}")]
    UnknownPair { id: String },

    /// Report file could not be read or written.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// Report file held malformed JSON.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
