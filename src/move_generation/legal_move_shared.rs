//! Helpers shared by the sliding-piece predicates and the generator.

use crate::game_state::{chess_types::*, game_state::GameState};

/// True when every square strictly between `from` and `to` is empty.
///
/// Steps one square at a time along the sign of each axis delta, so the
/// endpoints must lie on a common rank, file or diagonal. Piece kinds are not
/// consulted.
pub fn is_path_clear(game_state: &GameState, from: Square, to: Square) -> bool {
    debug_assert!(
        from.row() == to.row()
            || from.col() == to.col()
            || (to.row() - from.row()).abs() == (to.col() - from.col()).abs(),
        "path walk between unaligned squares {from} and {to}"
    );

    let step_row = (to.row() - from.row()).signum();
    let step_col = (to.col() - from.col()).signum();

    let mut current = from;
    loop {
        let Some(next) = current.offset(step_row, step_col) else {
            return true;
        };
        if next == to {
            return true;
        }
        if !game_state.is_empty(next) {
            return false;
        }
        current = next;
    }
}

/// Piece standing on `square` if it belongs to `color`.
#[inline]
pub fn piece_on_square_for_color(
    game_state: &GameState,
    color: Color,
    square: Square,
) -> Option<Piece> {
    game_state.get(square).filter(|piece| piece.color == color)
}

#[inline]
pub fn is_occupied_by(game_state: &GameState, color: Color, square: Square) -> bool {
    piece_on_square_for_color(game_state, color, square).is_some()
}
