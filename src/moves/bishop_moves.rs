use crate::game_state::{chess_types::Square, game_state::GameState};
use crate::move_generation::legal_move_shared::is_path_clear;

#[inline]
pub fn is_diagonal(from: Square, to: Square) -> bool {
    let d_row = (to.row() - from.row()).abs();
    d_row != 0 && d_row == (to.col() - from.col()).abs()
}

pub fn bishop_move_is_legal(game_state: &GameState, from: Square, to: Square) -> bool {
    is_diagonal(from, to) && is_path_clear(game_state, from, to)
}
