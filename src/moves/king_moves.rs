use crate::game_state::chess_types::Square;

/// One step in any direction. The zero move also satisfies this; it is
/// rejected earlier because the target holds the king itself.
#[inline]
pub fn king_move_is_legal(from: Square, to: Square) -> bool {
    (to.row() - from.row()).abs() <= 1 && (to.col() - from.col()).abs() <= 1
}

#[cfg(test)]
mod tests {
    use super::king_move_is_legal;
    use crate::game_state::chess_types::Square;

    #[test]
    fn king_reaches_all_adjacent_squares() {
        let from = Square::at(4, 4);
        let adjacent = Square::all()
            .filter(|&to| to != from && king_move_is_legal(from, to))
            .count();
        assert_eq!(adjacent, 8);
    }

    #[test]
    fn two_square_steps_are_illegal() {
        let from = Square::at(4, 4);
        for (d_row, d_col) in [(2, 0), (-2, 0), (0, 2), (0, -2), (2, 2), (-2, -2), (2, 1)] {
            let to = from.offset(d_row, d_col).expect("target on board");
            assert!(!king_move_is_legal(from, to), "({d_row}, {d_col})");
        }
    }
}
