//! Canonical chess-rule constants.
//!
//! Static rule literals: the starting layout and the per-color pawn geometry
//! used by the pawn movement predicate.

use crate::game_state::chess_types::Color;

/// Standard chess starting position in FEN. The first rank string is row 0.
pub const STARTING_POSITION_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w";

/// Row delta of a single pawn advance.
#[inline]
pub const fn pawn_direction(color: Color) -> i8 {
    match color {
        Color::Light => -1,
        Color::Dark => 1,
    }
}

/// Row a color's pawns start on; the double step is only allowed from here.
#[inline]
pub const fn pawn_home_row(color: Color) -> i8 {
    match color {
        Color::Light => 6,
        Color::Dark => 1,
    }
}
