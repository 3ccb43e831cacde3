//! Errors used throughout the rules engine.
//!
//! Illegality of a move is never an error: the legality predicates answer
//! `false`. `ChessError` only covers inputs that cannot be acted on at all.

use thiserror::Error;

use crate::game_state::chess_types::Square;

pub type ChessResult<T> = Result<T, ChessError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ChessError {
    /// Coordinates outside `0..=7`.
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds { row: i8, col: i8 },

    /// Tried to move from a square that holds no piece.
    #[error("no piece on {0}")]
    EmptySquare(Square),

    /// A checked move request failed the legality predicate.
    #[error("illegal move from {from} to {to}")]
    IllegalMove { from: Square, to: Square },

    /// Position string could not be parsed.
    #[error("invalid FEN: {0}")]
    InvalidFen(String),
}
