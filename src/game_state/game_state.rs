//! Board container.
//!
//! `GameState` is the position the rules engine reads and mutates: an 8×8
//! grid of optional pieces plus the side to move. It performs no validation;
//! legality lives entirely in `move_generation`.

use crate::errors::ChessError;
use crate::game_state::chess_rules::STARTING_POSITION_FEN;
use crate::game_state::chess_types::*;
use crate::utils::fen_generator::generate_fen;
use crate::utils::fen_parser::parse_fen;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    // [row][col]
    board: [[Option<Piece>; 8]; 8],
    pub side_to_move: Color,
}

impl Default for GameState {
    fn default() -> Self {
        Self {
            board: [[None; 8]; 8],
            side_to_move: Color::Light,
        }
    }
}

impl GameState {
    #[inline]
    pub fn new_empty() -> Self {
        Self::default()
    }

    /// Standard starting setup, light to move.
    pub fn new_game() -> Self {
        let mut game_state = Self::new_empty();
        let back_rank = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];
        for (col, kind) in back_rank.into_iter().enumerate() {
            let col = col as u8;
            game_state.set(Square::at(0, col), Some(Piece::new(Color::Dark, kind)));
            game_state.set(Square::at(1, col), Some(Piece::new(Color::Dark, PieceKind::Pawn)));
            game_state.set(Square::at(6, col), Some(Piece::new(Color::Light, PieceKind::Pawn)));
            game_state.set(Square::at(7, col), Some(Piece::new(Color::Light, kind)));
        }
        debug_assert_eq!(game_state.get_fen(), STARTING_POSITION_FEN);
        game_state
    }

    #[inline]
    pub fn from_fen(fen: &str) -> Result<Self, ChessError> {
        parse_fen(fen)
    }

    #[inline]
    pub fn get_fen(&self) -> String {
        generate_fen(self)
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.board[square.row() as usize][square.col() as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.board[square.row() as usize][square.col() as usize] = piece;
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Occupied squares in row-major order.
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(|square| self.get(square).map(|piece| (square, piece)))
    }
}

#[cfg(test)]
mod tests {
    use super::GameState;
    use crate::game_state::chess_rules::STARTING_POSITION_FEN;
    use crate::game_state::chess_types::*;

    #[test]
    fn new_game_matches_starting_fen() {
        let game_state = GameState::new_game();
        let parsed = GameState::from_fen(STARTING_POSITION_FEN).expect("starting FEN should parse");

        assert_eq!(game_state, parsed);
        assert_eq!(game_state.side_to_move, Color::Light);
        assert_eq!(game_state.pieces().count(), 32);
        assert_eq!(
            game_state.get(Square::at(7, 4)),
            Some(Piece::new(Color::Light, PieceKind::King))
        );
        assert_eq!(
            game_state.get(Square::at(0, 3)),
            Some(Piece::new(Color::Dark, PieceKind::Queen))
        );
    }

    #[test]
    fn set_places_and_clears() {
        let mut game_state = GameState::new_empty();
        let sq = Square::at(4, 4);
        assert!(game_state.is_empty(sq));

        game_state.set(sq, Some(Piece::new(Color::Dark, PieceKind::Rook)));
        assert_eq!(game_state.get(sq), Some(Piece::new(Color::Dark, PieceKind::Rook)));

        game_state.set(sq, None);
        assert!(game_state.is_empty(sq));
        assert_eq!(game_state.pieces().count(), 0);
    }
}
