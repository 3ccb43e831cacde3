//! Core value types shared by the board container and the rules engine.
//! Color and kind are separate tags so rule dispatch is one exhaustive match.

use std::fmt;

pub use crate::game_state::captured_pieces::CapturedPieces;
pub use crate::game_state::game_state::GameState;

use crate::errors::ChessError;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }
}

/// Piece kind (color is represented separately).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    pub const fn name(self) -> &'static str {
        match self {
            PieceKind::Pawn => "pawn",
            PieceKind::Knight => "knight",
            PieceKind::Bishop => "bishop",
            PieceKind::Rook => "rook",
            PieceKind::Queen => "queen",
            PieceKind::King => "king",
        }
    }
}

/// A piece is nothing more than its color and kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub color: Color,
    pub kind: PieceKind,
}

impl Piece {
    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Self { color, kind }
    }
}

/// Board coordinate. Row 0 is the dark back rank, row 7 the light back rank.
///
/// Fields are private so every value is guaranteed to be on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Checked constructor; coordinates outside `0..=7` are an error.
    pub fn new(row: i8, col: i8) -> Result<Self, ChessError> {
        if !(0..8).contains(&row) || !(0..8).contains(&col) {
            return Err(ChessError::OutOfBounds { row, col });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Const constructor for board literals. Panics at compile time when
    /// used in a const context with an off-board coordinate.
    pub const fn at(row: u8, col: u8) -> Self {
        assert!(row < 8 && col < 8, "square literal off the board");
        Self { row, col }
    }

    #[inline]
    pub const fn row(self) -> i8 {
        self.row as i8
    }

    #[inline]
    pub const fn col(self) -> i8 {
        self.col as i8
    }

    /// Shift by a row/column delta, `None` when the result leaves the board.
    #[inline]
    pub fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        Square::new(self.row() + d_row, self.col() + d_col).ok()
    }

    /// All 64 squares in row-major order.
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..8).flat_map(|row| (0u8..8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_new_rejects_off_board_coordinates() {
        assert!(Square::new(0, 0).is_ok());
        assert!(Square::new(7, 7).is_ok());
        assert!(matches!(
            Square::new(8, 0),
            Err(ChessError::OutOfBounds { row: 8, col: 0 })
        ));
        assert!(Square::new(0, -1).is_err());
    }

    #[test]
    fn all_squares_are_row_major() {
        let squares: Vec<Square> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::at(0, 0));
        assert_eq!(squares[9], Square::at(1, 1));
        assert_eq!(squares[63], Square::at(7, 7));
    }

    #[test]
    fn offset_stops_at_board_edge() {
        assert_eq!(Square::at(0, 0).offset(-1, 0), None);
        assert_eq!(Square::at(3, 3).offset(2, -1), Some(Square::at(5, 2)));
    }

    #[test]
    fn color_opposite_round_trips() {
        assert_eq!(Color::Light.opposite(), Color::Dark);
        assert_eq!(Color::Dark.opposite().opposite(), Color::Dark);
    }
}
