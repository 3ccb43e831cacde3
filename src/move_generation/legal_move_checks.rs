//! Single-move legality predicates.
//!
//! `is_piece_move_legal` is the raw rule set: occupancy plus per-piece
//! geometry. `is_legal_move` additionally requires the mover to belong to the
//! side to move. Neither looks at check.

use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_shared::is_occupied_by;
use crate::moves::bishop_moves::bishop_move_is_legal;
use crate::moves::king_moves::king_move_is_legal;
use crate::moves::knight_moves::knight_move_is_legal;
use crate::moves::pawn_moves::pawn_move_is_legal;
use crate::moves::queen_moves::queen_move_is_legal;
use crate::moves::rook_moves::rook_move_is_legal;

pub fn is_legal_move(game_state: &GameState, from: Square, to: Square) -> bool {
    match game_state.get(from) {
        Some(piece) if piece.color == game_state.side_to_move => {
            is_piece_move_legal(game_state, from, to)
        }
        _ => false,
    }
}

pub fn is_piece_move_legal(game_state: &GameState, from: Square, to: Square) -> bool {
    let Some(piece) = game_state.get(from) else {
        return false;
    };

    if is_occupied_by(game_state, piece.color, to) {
        return false;
    }

    match piece.kind {
        PieceKind::Pawn => pawn_move_is_legal(game_state, piece.color, from, to),
        PieceKind::Knight => knight_move_is_legal(from, to),
        PieceKind::Bishop => bishop_move_is_legal(game_state, from, to),
        PieceKind::Rook => rook_move_is_legal(game_state, from, to),
        PieceKind::Queen => queen_move_is_legal(game_state, from, to),
        PieceKind::King => king_move_is_legal(from, to),
    }
}
