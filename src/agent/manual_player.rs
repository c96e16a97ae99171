//! Manual player fed by the command interpreter.
//!
//! The orchestrator parses move commands from its input sources and queues
//! them here; `get_move` then hands the queued move back when it is this
//! player's turn. This keeps the turn loop identical for manual and
//! automated players while the interpreter stays in charge of all other
//! commands typed mid-game.

use crate::game_repr::{Board, Move, PieceColor};

use super::player::Player;

pub struct ManualPlayer {
    pending: Option<Move>,
    name: String,
}

impl ManualPlayer {
    pub fn new(color: PieceColor) -> Self {
        Self {
            pending: None,
            name: format!("{} (manual)", color),
        }
    }

    /// Queue the move most recently parsed from input.
    pub fn queue_move(&mut self, mv: Move) {
        self.pending = Some(mv);
    }
}

impl Player for ManualPlayer {
    fn get_move(&mut self, _board: &Board, _color: PieceColor) -> Option<Move> {
        self.pending.take()
    }

    fn name(&self) -> &str {
        &self.name
    }
}
