use crate::game_state::{chess_types::Square, game_state::GameState};
use crate::move_generation::legal_move_shared::is_path_clear;
use crate::moves::bishop_moves::is_diagonal;
use crate::moves::rook_moves::is_straight;

/// Union of the rook and bishop lines, sharing one path walk.
pub fn queen_move_is_legal(game_state: &GameState, from: Square, to: Square) -> bool {
    (is_straight(from, to) || is_diagonal(from, to)) && is_path_clear(game_state, from, to)
}
