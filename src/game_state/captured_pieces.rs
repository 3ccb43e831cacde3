//! Per-color record of pieces removed from the board.
//!
//! Append-only and kept in capture order. Display bookkeeping only; the rules
//! engine never reads it.

use crate::game_state::chess_types::{Color, Piece, PieceKind};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CapturedPieces {
    // [color] of the captured piece, not of the capturer.
    by_color: [Vec<PieceKind>; 2],
}

impl CapturedPieces {
    pub fn new() -> Self {
        Self::default()
    }

    /// File a removed piece under its own color.
    pub fn record(&mut self, piece: Piece) {
        self.by_color[piece.color.index()].push(piece.kind);
    }

    pub fn of(&self, color: Color) -> &[PieceKind] {
        &self.by_color[color.index()]
    }

    pub fn is_empty(&self) -> bool {
        self.by_color.iter().all(Vec::is_empty)
    }
}
