//! Terminal-oriented Unicode board renderer.
//!
//! Redraws the whole board on every call; there is no incremental diff.

use crate::game_state::chess_types::*;

/// Render the board to a Unicode string for terminal output.
///
/// Row 0 is printed first, so the dark side sits at the top. Row and column
/// indices are printed on the edges since they are what the driver reads.
pub fn render_game_state(game_state: &GameState) -> String {
    render_with_hints(game_state, &[])
}

/// Same as [`render_game_state`], marking `hints` with `*` on empty squares
/// and `x` under occupied ones.
pub fn render_with_hints(game_state: &GameState, hints: &[Square]) -> String {
    let mut out = String::new();

    out.push_str("  0 1 2 3 4 5 6 7\n");

    for row in 0..8u8 {
        out.push(char::from(b'0' + row));
        out.push(' ');

        for col in 0..8u8 {
            let square = Square::at(row, col);
            let hinted = hints.contains(&square);
            match (game_state.get(square), hinted) {
                (Some(piece), false) => out.push(piece_to_unicode(piece)),
                (Some(_), true) => out.push('x'),
                (None, true) => out.push('*'),
                (None, false) => out.push('·'),
            }

            if col < 7 {
                out.push(' ');
            }
        }

        out.push(' ');
        out.push(char::from(b'0' + row));
        out.push('\n');
    }

    out.push_str("  0 1 2 3 4 5 6 7");

    out
}

/// One line per color listing its captured pieces in capture order.
pub fn render_captured(captured: &CapturedPieces) -> String {
    let line = |color: Color, label: &str| {
        let mut s = format!("{label} captured:");
        for &kind in captured.of(color) {
            s.push(' ');
            s.push(piece_to_unicode(Piece::new(color, kind)));
        }
        s
    };

    format!("{}\n{}", line(Color::Light, "White"), line(Color::Dark, "Black"))
}

fn piece_to_unicode(piece: Piece) -> char {
    match (piece.color, piece.kind) {
        (Color::Light, PieceKind::Pawn) => '♙',
        (Color::Light, PieceKind::Knight) => '♘',
        (Color::Light, PieceKind::Bishop) => '♗',
        (Color::Light, PieceKind::Rook) => '♖',
        (Color::Light, PieceKind::Queen) => '♕',
        (Color::Light, PieceKind::King) => '♔',
        (Color::Dark, PieceKind::Pawn) => '♟',
        (Color::Dark, PieceKind::Knight) => '♞',
        (Color::Dark, PieceKind::Bishop) => '♝',
        (Color::Dark, PieceKind::Rook) => '♜',
        (Color::Dark, PieceKind::Queen) => '♛',
        (Color::Dark, PieceKind::King) => '♚',
    }
}
