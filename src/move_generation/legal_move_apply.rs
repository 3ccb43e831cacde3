//! Move application.
//!
//! Mutates the position in place: records any capture, relocates the moving
//! piece and hands the turn over. There is no undo.

use log::debug;

use crate::errors::{ChessError, ChessResult};
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_legal_move;

/// What a completed move did, returned to the caller for redraws and logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    pub piece: Piece,
    pub from: Square,
    pub to: Square,
    pub captured: Option<Piece>,
}

/// Apply a move the caller has already judged legal.
///
/// Only fails when `from` is empty.
pub fn apply_move(
    game_state: &mut GameState,
    captured_pieces: &mut CapturedPieces,
    from: Square,
    to: Square,
) -> ChessResult<MoveOutcome> {
    let piece = game_state.get(from).ok_or(ChessError::EmptySquare(from))?;

    let captured = game_state.get(to);
    if let Some(victim) = captured {
        debug!(
            "{:?} {} captures {:?} {} on {to}",
            piece.color,
            piece.kind.name(),
            victim.color,
            victim.kind.name()
        );
        captured_pieces.record(victim);
    }

    game_state.set(to, Some(piece));
    game_state.set(from, None);
    game_state.side_to_move = game_state.side_to_move.opposite();

    debug!("{:?} {} {from} -> {to}", piece.color, piece.kind.name());

    Ok(MoveOutcome {
        piece,
        from,
        to,
        captured,
    })
}

/// Check legality first, then apply.
pub fn try_move(
    game_state: &mut GameState,
    captured_pieces: &mut CapturedPieces,
    from: Square,
    to: Square,
) -> ChessResult<MoveOutcome> {
    if !is_legal_move(game_state, from, to) {
        return Err(ChessError::IllegalMove { from, to });
    }
    apply_move(game_state, captured_pieces, from, to)
}
