//! Error types for the fantasy hockey engine

use thiserror::Error;

use crate::cli::types::PlayerId;


pub type Result<T> = std::result::Result<T, FantasyError>;

#[derive(Error, Debug)]
pub enum FantasyError {
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON parsing failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Type mismatch for player {player_id}: expected {expected} stats, found {found} stats")]
    TypeMismatch {
        player_id: PlayerId,
        expected: &'static str,
        found: &'static str,
    },

    #[error("Validation failed: {message}")]
    Validation { message: String },

    #[error("Fantasy points are only defined for H2H_Points leagues")]
    UnsupportedScoring,

    #[error("Invalid position: {position}")]
    InvalidPosition { position: String },

    #[error("Invalid roster slot: {slot}")]
    InvalidSlot { slot: String },

    #[error("Invalid stat: {stat}")]
    InvalidStat { stat: String },

    #[error("Invalid timeframe: {timeframe}")]
    InvalidTimeframe { timeframe: String },

    #[error("Failed to parse player ID: {0}")]
    InvalidPlayerId(#[from] std::num::ParseIntError),

    #[error("Player not found: {id}")]
    PlayerNotFound { id: PlayerId },

    #[error("Cache error: {message}")]
    Cache { message: String },
}

impl FantasyError {
    /// Shorthand for building a `Validation` error.
    pub fn validation(message: impl Into<String>) -> Self {
        FantasyError::Validation {
            message: message.into(),
        }
    }

    /// True for errors caused by malformed caller input rather than I/O.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            FantasyError::Validation { .. } | FantasyError::TypeMismatch { .. }
        )
    }
}
