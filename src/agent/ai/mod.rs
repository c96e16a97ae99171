// AI agent - negamax with a single pruning bound.
//
// Deterministic (same position always gives the same move): candidate
// moves come back from the board in a fixed order and ties keep the first
// move found. Each branch is explored on a clone of the board, so the
// live game board is never touched by a search.

mod ai_player;
mod evaluation;
mod search;

pub use ai_player::AiPlayer;
pub use evaluation::{centrality, evaluate, WINNING_VALUE};
pub use search::{choose_move, choose_move_at_depth, MAX_DEPTH};
