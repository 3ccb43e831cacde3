//! Engine abstraction for automated play.
//!
//! An engine picks one legal move for the side to move; the caller applies it.

use crate::game_state::game_state::GameState;
use crate::move_generation::move_generator::GeneratedMove;

pub trait Engine {
    fn name(&self) -> &str;

    /// `None` when the side to move has no legal move at all.
    fn choose_move(&mut self, game_state: &GameState) -> Option<GeneratedMove>;
}
