//! Move-path enumeration for validating the generator.
//!
//! A captured king does not end the walk; the rules here know nothing of
//! check or mate.

use crate::errors::ChessResult;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::apply_move;
use crate::move_generation::move_generator::MoveGenerator;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PerftCounts {
    pub nodes: usize,
    pub captures: usize,
    pub king_captures: usize,
}

impl PerftCounts {
    fn merge(&mut self, rhs: PerftCounts) {
        self.nodes += rhs.nodes;
        self.captures += rhs.captures;
        self.king_captures += rhs.king_captures;
    }
}

pub fn perft<G: MoveGenerator>(
    generator: &G,
    game_state: &GameState,
    depth: u8,
) -> ChessResult<PerftCounts> {
    if depth == 0 {
        return Ok(PerftCounts {
            nodes: 1,
            ..PerftCounts::default()
        });
    }

    let mut total = PerftCounts::default();

    for mv in generator.generate_legal_moves(game_state) {
        if depth == 1 {
            total.nodes += 1;
            if let Some(victim) = mv.captured {
                total.captures += 1;
                if victim.kind == PieceKind::King {
                    total.king_captures += 1;
                }
            }
            continue;
        }

        let mut next = game_state.clone();
        let mut captured = CapturedPieces::new();
        apply_move(&mut next, &mut captured, mv.from, mv.to)?;
        total.merge(perft(generator, &next, depth - 1)?);
    }

    Ok(total)
}
