// Negamax search with a single pruning bound.
//
// The tree is explored depth-first over clones of the board: each node
// clones, applies one candidate move and recurses for the opponent with
// the negated best-so-far as its bound. A child whose negated value
// exceeds the bound cuts off the remaining siblings. Ties are broken by
// move-enumeration order (the first move examined wins), which together
// with the board's fixed enumeration order makes the search fully
// deterministic.

use log::debug;

use crate::game_repr::{Board, Move, PieceColor};

use super::evaluation::{evaluate, is_won, INFTY, WINNING_VALUE};

/// Default search horizon in plies.
pub const MAX_DEPTH: u32 = 4;

/// Pick a move for `side` on `board`, searching `depth` plies.
///
/// Returns `Move::Pass` when `side` has no extend or jump available. The
/// caller is responsible for detecting game over before asking again;
/// the search itself never mutates `board`.
pub fn choose_move_at_depth(side: PieceColor, board: &Board, depth: u32) -> Move {
    let (value, best) = search(side, board, depth, INFTY);
    match best {
        Some(mv) => {
            debug!("search: {} plays {} (value {})", side, mv, value);
            mv
        }
        None => {
            debug!("search: {} has no move, passing", side);
            Move::Pass
        }
    }
}

/// Pick a move for `side` at the default horizon.
pub fn choose_move(side: PieceColor, board: &Board) -> Move {
    choose_move_at_depth(side, board, MAX_DEPTH)
}

/// Core recursion. Returns the best value found for `side` together with
/// the move achieving it (`None` at evaluated leaves or when `side` has
/// no moves).
fn search(side: PieceColor, board: &Board, depth: u32, bound: i32) -> (i32, Option<Move>) {
    if is_won(board, side) {
        return (WINNING_VALUE, None);
    }
    if is_won(board, side.opposite()) {
        return (-WINNING_VALUE, None);
    }
    if depth == 0 {
        return (evaluate(board, side), None);
    }

    let mut best_value = -INFTY;
    let mut best_move = None;
    for mv in board.legal_moves(side) {
        let mut child = board.clone();
        child
            .make_move(mv)
            .expect("enumerated moves are legal on the clone");
        let (child_value, _) = search(side.opposite(), &child, depth - 1, -best_value);
        let value = saturating_neg(child_value);
        if best_move.is_none() || value > best_value {
            best_value = value;
            best_move = Some(mv);
            if value > bound {
                break;
            }
        }
    }
    if best_move.is_none() {
        // Stuck sides pass; score the standing position instead of
        // expanding a forced-pass subtree.
        return (evaluate(board, side), None);
    }
    (best_value, best_move)
}

/// Negate without overflowing at `-i32::MIN`.
fn saturating_neg(v: i32) -> i32 {
    if v == i32::MIN {
        i32::MAX
    } else {
        -v
    }
}
