//! Destination and full move generation.
//!
//! Candidate targets are every square on the board filtered through the
//! single-move predicate; the board is small enough that no attack tables are
//! needed.

use log::trace;

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_checks::is_legal_move;
use crate::move_generation::move_generator::{GeneratedMove, MoveGenerator};

/// Every square the piece on `from` may legally move to, in row-major order.
///
/// Empty when `from` is empty or holds a piece of the side not to move.
pub fn legal_destinations(game_state: &GameState, from: Square) -> Vec<Square> {
    let destinations: Vec<Square> = Square::all()
        .filter(|&to| is_legal_move(game_state, from, to))
        .collect();
    trace!("{} legal destinations from {from}", destinations.len());
    destinations
}

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_legal_moves(&self, game_state: &GameState) -> Vec<GeneratedMove> {
        let side = game_state.side_to_move;
        let mut out = Vec::with_capacity(64);

        for (from, piece) in game_state.pieces().filter(|(_, piece)| piece.color == side) {
            for to in legal_destinations(game_state, from) {
                out.push(GeneratedMove {
                    from,
                    to,
                    piece,
                    captured: game_state.get(to),
                });
            }
        }

        out
    }
}
