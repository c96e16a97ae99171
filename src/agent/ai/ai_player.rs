//! Automated player backed by the negamax search.

use crate::game_repr::{Board, Move, PieceColor};

use super::super::player::Player;
use super::search::{choose_move_at_depth, MAX_DEPTH};

/// A player that computes its own moves.
///
/// Deterministic: the same position always yields the same move, because
/// the underlying search breaks ties by enumeration order and carries no
/// hidden state between calls.
pub struct AiPlayer {
    depth: u32,
    name: String,
}

impl AiPlayer {
    pub fn new(color: PieceColor) -> Self {
        Self::with_depth(color, MAX_DEPTH)
    }

    pub fn with_depth(color: PieceColor, depth: u32) -> Self {
        Self {
            depth,
            name: format!("{} (AI)", color),
        }
    }

    pub fn depth(&self) -> u32 {
        self.depth
    }
}

impl Player for AiPlayer {
    fn get_move(&mut self, board: &Board, color: PieceColor) -> Option<Move> {
        Some(choose_move_at_depth(color, board, self.depth))
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ai_player_reports_depth_and_name() {
        let ai = AiPlayer::new(PieceColor::Blue);
        assert_eq!(ai.depth(), MAX_DEPTH);
        assert_eq!(ai.name(), "Blue (AI)");
    }

    #[test]
    fn ai_player_moves_are_legal() {
        let board = Board::new();
        let mut ai = AiPlayer::with_depth(PieceColor::Red, 2);
        let mv = ai.get_move(&board, PieceColor::Red).unwrap();
        assert!(board.legal_move(mv));
    }
}
