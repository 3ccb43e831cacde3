use crate::game_state::chess_types::Square;

/// Knights jump: intervening pieces are irrelevant.
#[inline]
pub fn knight_move_is_legal(from: Square, to: Square) -> bool {
    let d_row = (to.row() - from.row()).abs();
    let d_col = (to.col() - from.col()).abs();
    (d_row == 2 && d_col == 1) || (d_row == 1 && d_col == 2)
}
