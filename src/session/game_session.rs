//! Select / highlight / confirm flow for an interactive front end.
//!
//! A front end forwards every square the player picks to [`GameSession::click`]
//! and redraws from the returned outcome. Selecting a piece caches its legal
//! destinations as hints; picking a hint applies the move, picking anything
//! else drops the selection.

use log::{debug, info};

use crate::errors::ChessResult;
use crate::game_state::{chess_types::*, game_state::GameState};
use crate::move_generation::legal_move_apply::{apply_move, MoveOutcome};
use crate::move_generation::legal_move_generator::legal_destinations;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub square: Square,
    pub hints: Vec<Square>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Nothing selected and the square is empty or holds a waiting piece.
    Ignored,
    Selected(Selection),
    Deselected,
    Moved(MoveOutcome),
}

#[derive(Debug, Clone)]
pub struct GameSession {
    pub game_state: GameState,
    pub captured: CapturedPieces,
    selection: Option<Selection>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    pub fn new() -> Self {
        Self::from_game_state(GameState::new_game())
    }

    pub fn from_game_state(game_state: GameState) -> Self {
        Self {
            game_state,
            captured: CapturedPieces::new(),
            selection: None,
        }
    }

    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    pub fn click(&mut self, square: Square) -> ChessResult<ClickOutcome> {
        let Some(selection) = self.selection.take() else {
            return Ok(self.select(square));
        };

        if !selection.hints.contains(&square) {
            debug!("dropped selection of {}", selection.square);
            return Ok(ClickOutcome::Deselected);
        }

        let outcome = apply_move(
            &mut self.game_state,
            &mut self.captured,
            selection.square,
            square,
        )?;
        info!(
            "{:?} moved {} {} -> {}",
            outcome.piece.color,
            outcome.piece.kind.name(),
            outcome.from,
            outcome.to
        );
        Ok(ClickOutcome::Moved(outcome))
    }

    /// Drop any selection; the position is untouched.
    pub fn deselect(&mut self) {
        self.selection = None;
    }

    fn select(&mut self, square: Square) -> ClickOutcome {
        match self.game_state.get(square) {
            Some(piece) if piece.color == self.game_state.side_to_move => {
                let selection = Selection {
                    square,
                    hints: legal_destinations(&self.game_state, square),
                };
                self.selection = Some(selection.clone());
                ClickOutcome::Selected(selection)
            }
            _ => ClickOutcome::Ignored,
        }
    }
}
