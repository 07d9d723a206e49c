//! Errors used throughout the puzzle tutor.
//!
//! `TutorError` is the single error type returned by position construction,
//! search, hint generation and the puzzle catalog. Input problems (bad FEN,
//! illegal setups, out-of-range tiers) are recoverable and suitable for
//! showing to end users. `InvalidDepth` and `NoLegalMoves` indicate the caller
//! asked for something the engine refuses to do rather than a transient
//! condition, so nothing in the crate retries on them.

use shakmaty::fen::ParseFenError;
use shakmaty::{Chess, PositionError};
use thiserror::Error;

/// Unified error type for the puzzle tutor.
#[derive(Error, Debug)]
pub enum TutorError {
    /// The FEN string could not be parsed.
    #[error("invalid FEN: {0}")]
    InvalidFen(#[from] ParseFenError),

    /// The FEN parsed but describes a position the rules refuse to play
    /// (missing kings, side not to move in check, ...).
    #[error("illegal position: {0}")]
    IllegalPosition(#[from] PositionError<Chess>),

    /// Search depth must be at least one ply.
    #[error("search depth must be positive, got {depth}")]
    InvalidDepth { depth: u8 },

    /// The side to move has no legal moves, so there is no best move to hint.
    #[error("no legal moves in this position")]
    NoLegalMoves,

    /// Hint tiers are 1, 2 or 3.
    #[error("hint level must be 1, 2 or 3, got {0}")]
    InvalidHintTier(u8),

    /// The move to describe starts on an empty square.
    #[error("no piece on square {0}")]
    NoPieceOnSquare(String),

    /// The puzzle catalog is empty or one of its rows is malformed.
    #[error("puzzle catalog error: {0}")]
    Catalog(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}

/// Result type alias for tutor operations.
pub type TutorResult<T> = Result<T, TutorError>;

#[cfg(test)]
mod tests {
    use super::TutorError;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            TutorError::InvalidDepth { depth: 0 }.to_string(),
            "search depth must be positive, got 0"
        );
        assert_eq!(
            TutorError::InvalidHintTier(7).to_string(),
            "hint level must be 1, 2 or 3, got 7"
        );
        assert_eq!(
            TutorError::NoPieceOnSquare("e4".to_owned()).to_string(),
            "no piece on square e4"
        );
    }

    #[test]
    fn fen_parse_errors_convert() {
        let err: TutorError = "not a fen"
            .parse::<shakmaty::fen::Fen>()
            .map_err(TutorError::from)
            .expect_err("garbage should not parse");
        assert!(matches!(err, TutorError::InvalidFen(_)));
    }
}
