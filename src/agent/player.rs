//! Player trait and associated types for game agents.
//!
//! A player is any entity that can be asked for the next move: a human
//! typing commands, or the search-backed automated player. The game loop
//! owns the live board and passes it by reference; players never hold a
//! shared mutable board.
//!
//! `get_move()` is intentionally synchronous. The manual player is fed by
//! the command interpreter before being asked, and the AI blocks while it
//! searches, so the orchestrator simply calls `get_move()` and waits.

use crate::game_repr::{Board, Move, PieceColor};

/// Outcome of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameResult {
    RedWins,
    BlueWins,
    Draw,
}

impl GameResult {
    /// Decide the outcome of a finished board by piece counts.
    pub fn from_board(board: &Board) -> Self {
        use std::cmp::Ordering;
        match board.red_pieces().cmp(&board.blue_pieces()) {
            Ordering::Greater => GameResult::RedWins,
            Ordering::Less => GameResult::BlueWins,
            Ordering::Equal => GameResult::Draw,
        }
    }
}

/// Trait for entities that can provide moves.
///
/// `get_move()` may block (the AI searches, a manual player waits for
/// input to be queued). Returning `None` means the player has no move to
/// offer right now; the orchestrator decides what that means in context.
/// The move returned is validated by the caller before being applied.
pub trait Player {
    /// Request the next move for `color` on `board`.
    fn get_move(&mut self, board: &Board, color: PieceColor) -> Option<Move>;

    /// Notification that the game has ended. Default: do nothing.
    fn game_ended(&mut self, _result: GameResult) {}

    /// Display name, used in prompts and logs.
    fn name(&self) -> &str {
        "Player"
    }
}
