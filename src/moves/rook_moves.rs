use crate::game_state::{chess_types::Square, game_state::GameState};
use crate::move_generation::legal_move_shared::is_path_clear;

#[inline]
pub fn is_straight(from: Square, to: Square) -> bool {
    from != to && (from.row() == to.row() || from.col() == to.col())
}

pub fn rook_move_is_legal(game_state: &GameState, from: Square, to: Square) -> bool {
    is_straight(from, to) && is_path_clear(game_state, from, to)
}
