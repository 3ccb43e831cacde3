//! Pawn movement predicate.
//!
//! Straight advances need empty squares; the diagonal step is capture-only.
//! No en-passant and no promotion.

use crate::game_state::chess_rules::{pawn_direction, pawn_home_row};
use crate::game_state::{chess_types::*, game_state::GameState};

pub fn pawn_move_is_legal(game_state: &GameState, color: Color, from: Square, to: Square) -> bool {
    let direction = pawn_direction(color);
    let d_row = to.row() - from.row();
    let d_col = to.col() - from.col();

    if d_col == 0 {
        if !game_state.is_empty(to) {
            return false;
        }
        if d_row == direction {
            return true;
        }
        if d_row == 2 * direction && from.row() == pawn_home_row(color) {
            return from
                .offset(direction, 0)
                .is_some_and(|middle| game_state.is_empty(middle));
        }
        return false;
    }

    d_col.abs() == 1 && d_row == direction && !game_state.is_empty(to)
}

#[cfg(test)]
mod tests {
    use super::pawn_move_is_legal;
    use crate::game_state::{chess_types::*, game_state::GameState};

    fn light_pawn_at(square: Square) -> GameState {
        let mut game_state = GameState::new_empty();
        game_state.set(square, Some(Piece::new(Color::Light, PieceKind::Pawn)));
        game_state
    }

    #[test]
    fn light_pawn_single_and_double_step_from_home_row() {
        let game_state = light_pawn_at(Square::at(6, 4));
        let from = Square::at(6, 4);

        assert!(pawn_move_is_legal(&game_state, Color::Light, from, Square::at(5, 4)));
        assert!(pawn_move_is_legal(&game_state, Color::Light, from, Square::at(4, 4)));
        assert!(!pawn_move_is_legal(&game_state, Color::Light, from, Square::at(3, 4)));
        assert!(!pawn_move_is_legal(&game_state, Color::Light, from, Square::at(7, 4)));
    }

    #[test]
    fn double_step_only_from_home_row() {
        let game_state = light_pawn_at(Square::at(4, 4));
        let from = Square::at(4, 4);

        assert!(pawn_move_is_legal(&game_state, Color::Light, from, Square::at(3, 4)));
        assert!(!pawn_move_is_legal(&game_state, Color::Light, from, Square::at(2, 4)));
    }

    #[test]
    fn dark_pawn_moves_toward_higher_rows() {
        let mut game_state = GameState::new_empty();
        let from = Square::at(1, 2);
        game_state.set(from, Some(Piece::new(Color::Dark, PieceKind::Pawn)));

        assert!(pawn_move_is_legal(&game_state, Color::Dark, from, Square::at(2, 2)));
        assert!(pawn_move_is_legal(&game_state, Color::Dark, from, Square::at(3, 2)));
        assert!(!pawn_move_is_legal(&game_state, Color::Dark, from, Square::at(0, 2)));
    }

    #[test]
    fn blocked_advances_are_illegal() {
        let mut game_state = light_pawn_at(Square::at(6, 4));
        let from = Square::at(6, 4);
        game_state.set(Square::at(5, 4), Some(Piece::new(Color::Dark, PieceKind::Knight)));

        assert!(!pawn_move_is_legal(&game_state, Color::Light, from, Square::at(5, 4)));
        // Intermediate square occupied blocks the double step too.
        assert!(!pawn_move_is_legal(&game_state, Color::Light, from, Square::at(4, 4)));

        game_state.set(Square::at(5, 4), None);
        game_state.set(Square::at(4, 4), Some(Piece::new(Color::Dark, PieceKind::Knight)));
        assert!(!pawn_move_is_legal(&game_state, Color::Light, from, Square::at(4, 4)));
    }

    #[test]
    fn diagonal_requires_an_occupied_target() {
        let mut game_state = light_pawn_at(Square::at(4, 4));
        let from = Square::at(4, 4);

        assert!(!pawn_move_is_legal(&game_state, Color::Light, from, Square::at(3, 3)));
        assert!(!pawn_move_is_legal(&game_state, Color::Light, from, Square::at(3, 5)));

        game_state.set(Square::at(3, 3), Some(Piece::new(Color::Dark, PieceKind::Pawn)));
        assert!(pawn_move_is_legal(&game_state, Color::Light, from, Square::at(3, 3)));

        // Backwards diagonal never captures.
        game_state.set(Square::at(5, 5), Some(Piece::new(Color::Dark, PieceKind::Pawn)));
        assert!(!pawn_move_is_legal(&game_state, Color::Light, from, Square::at(5, 5)));
    }

    #[test]
    fn dark_pawn_captures_toward_higher_rows() {
        let mut game_state = GameState::new_empty();
        let from = Square::at(3, 3);
        game_state.set(from, Some(Piece::new(Color::Dark, PieceKind::Pawn)));
        game_state.set(Square::at(4, 4), Some(Piece::new(Color::Light, PieceKind::Knight)));
        game_state.set(Square::at(2, 2), Some(Piece::new(Color::Light, PieceKind::Knight)));

        assert!(pawn_move_is_legal(&game_state, Color::Dark, from, Square::at(4, 4)));
        assert!(!pawn_move_is_legal(&game_state, Color::Dark, from, Square::at(2, 2)));
        assert!(!pawn_move_is_legal(&game_state, Color::Dark, from, Square::at(4, 2)));
    }
}
