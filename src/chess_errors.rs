//! Errors used throughout the rules engine.
//!
//! One typed error enum covers every fallible path in the crate: FEN and
//! coordinate parsing, move-text resolution, and the strict validation gate
//! in front of the state transition. Functions return
//! `Result<_, ChessError>` and propagate with `?`.

use std::error::Error;
use std::fmt;

use crate::moves::move_descriptions::Move;

/// Unified error type for the rules engine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChessError {
    /// A FEN string failed structural or field validation.
    ///
    /// Payload: a human-readable description of the offending field.
    InvalidFen(String),

    /// A coordinate string (for example `"e4"`) or square index was outside
    /// the board.
    InvalidSquare(String),

    /// A long-algebraic move string had the wrong shape or characters.
    InvalidMoveText(String),

    /// Move text parsed cleanly but matched no entry in the position's
    /// cached legal-move set.
    NoMatchingLegalMove(String),

    /// The move handed to the state transition is not in the position's
    /// cached legal-move set.
    IllegalMove(Move),

    /// The state transition was invoked on a position whose game has
    /// already ended.
    GameAlreadyOver,
}

impl fmt::Display for ChessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ChessError::InvalidFen(msg) => write!(f, "invalid FEN: {msg}"),
            ChessError::InvalidSquare(msg) => write!(f, "invalid square: {msg}"),
            ChessError::InvalidMoveText(msg) => write!(f, "invalid move text: {msg}"),
            ChessError::NoMatchingLegalMove(text) => {
                write!(f, "no legal move matches: {text}")
            }
            ChessError::IllegalMove(chess_move) => {
                write!(
                    f,
                    "move {} -> {} is not legal in this position",
                    chess_move.from, chess_move.to
                )
            }
            ChessError::GameAlreadyOver => write!(f, "the game has already ended"),
        }
    }
}

impl Error for ChessError {}
