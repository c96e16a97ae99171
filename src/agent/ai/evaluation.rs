// Static position evaluation.
//
// Scores are from the perspective of the side passed in: positive is good
// for that side. Terminal positions (one side wiped out) get WINNING_VALUE
// magnitudes; everything else is scored by a centrality sum where each
// cell's weight is its Manhattan distance from the board center, own
// pieces subtracting the weight and enemy pieces adding it.

use crate::game_repr::{Board, PieceColor, Square, SIDE};

/// Score of a position already won (opponent has no pieces).
pub const WINNING_VALUE: i32 = i32::MAX - 1;
/// A magnitude greater than any reachable value, used as the root bound.
pub const INFTY: i32 = i32::MAX;

/// Centrality weight of an interior square: Manhattan distance from the
/// board's center cell (d4).
pub fn centrality(sq: Square) -> i32 {
    let mid = (SIDE / 2) as i32;
    let c = sq.col() as i32 - 'a' as i32;
    let r = sq.row() as i32 - '1' as i32;
    (c - mid).abs() + (r - mid).abs()
}

/// True iff `side` has already won outright on `board`.
pub fn is_won(board: &Board, side: PieceColor) -> bool {
    board
        .num_pieces(side.opposite())
        .map(|n| n == 0)
        .unwrap_or(false)
}

/// Heuristic value of `board` from `side`'s perspective.
pub fn evaluate(board: &Board, side: PieceColor) -> i32 {
    if is_won(board, side) {
        return WINNING_VALUE;
    }
    if is_won(board, side.opposite()) {
        return -WINNING_VALUE;
    }
    let enemy = side.opposite();
    let mut value = 0;
    for col in 'a'..='g' {
        for row in '1'..='7' {
            let sq = Square::new(col, row).unwrap();
            let cell = board.get(sq);
            if cell == side {
                value -= centrality(sq);
            } else if cell == enemy {
                value += centrality(sq);
            }
        }
    }
    value
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_repr::Move;

    #[test]
    fn centrality_weights() {
        let sq = |c, r| Square::new(c, r).unwrap();
        assert_eq!(centrality(sq('d', '4')), 0);
        assert_eq!(centrality(sq('a', '1')), 6);
        assert_eq!(centrality(sq('d', '1')), 3);
        assert_eq!(centrality(sq('c', '3')), 2);
    }

    #[test]
    fn starting_position_is_balanced() {
        let board = Board::new();
        assert_eq!(evaluate(&board, PieceColor::Red), 0);
        assert_eq!(evaluate(&board, PieceColor::Blue), 0);
    }

    #[test]
    fn evaluation_is_antisymmetric() {
        let mut board = Board::new();
        board.make_move("a7-b6".parse::<Move>().unwrap()).unwrap();
        board.make_move("a1-a3".parse::<Move>().unwrap()).unwrap();
        let red = evaluate(&board, PieceColor::Red);
        let blue = evaluate(&board, PieceColor::Blue);
        assert_eq!(red, -blue);
        assert_ne!(red, 0);
    }

    #[test]
    fn wiped_out_opponent_is_a_win() {
        let mut board = Board::new();
        // Red hunts down both blue pieces; the last jump lands next to
        // the survivor and captures it.
        for m in ["a7-a5", "a1-b3", "a5-b4", "g7-e5", "b4-d4"] {
            board.make_move(m.parse::<Move>().unwrap()).unwrap();
        }
        assert_eq!(board.blue_pieces(), 0);
        assert!(board.game_over());
        assert!(is_won(&board, PieceColor::Red));
        assert_eq!(evaluate(&board, PieceColor::Red), WINNING_VALUE);
        assert_eq!(evaluate(&board, PieceColor::Blue), -WINNING_VALUE);
    }
}
