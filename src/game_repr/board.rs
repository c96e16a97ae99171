use std::fmt;

use smallvec::SmallVec;
use thiserror::Error;

use super::moves::{Move, Square};
use super::piece::PieceColor;

/// Number of squares on a side of the playable board.
pub const SIDE: usize = 7;
/// Side length including the artificial 2-deep blocked border.
pub const EXTENDED_SIDE: usize = SIDE + 4;
/// Total cells in the extended grid.
pub const GRID_SIZE: usize = EXTENDED_SIDE * EXTENDED_SIDE;
/// Consecutive jumps (since the last extend) after which the game ends.
pub const JUMP_LIMIT: u32 = 25;

/// Contract violations detected by [`Board`] operations. The board is left
/// unmodified whenever one of these is returned.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("illegal move: {0}")]
    IllegalMove(Move),
    #[error("illegal block placement at {0}")]
    IllegalBlock(Square),
    #[error("undo requested with empty history")]
    UndoUnderflow,
    #[error("{0} is not a player color")]
    InvalidColor(PieceColor),
}

/// Everything a mutating operation needs to remember to be reversed.
#[derive(Clone)]
struct Snapshot {
    grid: [PieceColor; GRID_SIZE],
    pieces: [u32; 2],
    whose_move: PieceColor,
    num_moves: u32,
    num_jumps: u32,
    moves_played: usize,
}

/// An Ataxx board.
///
/// The playable 7x7 region sits inside an 11x11 grid whose outer two rows
/// and columns are permanently `Blocked`. Probing any square within two of
/// an interior square therefore stays in bounds, and a probe that leaves
/// the playable region is rejected by the same emptiness rule that rejects
/// interior blocks.
///
/// Every mutating operation (move, pass, block placement) first pushes a
/// full snapshot, so [`Board::undo`] is an exact inverse.
#[derive(Clone)]
pub struct Board {
    grid: [PieceColor; GRID_SIZE],
    /// Red count at index 0, Blue at index 1. Always equals the number of
    /// matching cells in `grid`.
    pieces: [u32; 2],
    whose_move: PieceColor,
    /// Moves and passes applied since the last reset.
    num_moves: u32,
    /// Jumps since the last extend; drives the forced-end condition.
    num_jumps: u32,
    history: Vec<Snapshot>,
    all_moves: Vec<Move>,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// A fresh board: pieces of each color in opposite corners, no blocks,
    /// Red to move, empty undo history.
    pub fn new() -> Board {
        let mut grid = [PieceColor::Blocked; GRID_SIZE];
        for col in 'a'..='g' {
            for row in '1'..='7' {
                let sq = Square::new(col, row).unwrap();
                grid[sq.index()] = PieceColor::Empty;
            }
        }
        let mut board = Board {
            grid,
            pieces: [2, 2],
            whose_move: PieceColor::Red,
            num_moves: 0,
            num_jumps: 0,
            history: Vec::new(),
            all_moves: Vec::new(),
        };
        for (col, row, color) in [
            ('a', '7', PieceColor::Red),
            ('g', '1', PieceColor::Red),
            ('a', '1', PieceColor::Blue),
            ('g', '7', PieceColor::Blue),
        ] {
            let sq = Square::new(col, row).unwrap();
            board.grid[sq.index()] = color;
        }
        board
    }

    /// Reset to the starting state, dropping history, blocks and pieces.
    pub fn clear(&mut self) {
        *self = Board::new();
    }

    /// Contents of a square anywhere in the extended region.
    pub fn get(&self, sq: Square) -> PieceColor {
        self.grid[sq.index()]
    }

    /// Color of the player who moves next.
    pub fn whose_move(&self) -> PieceColor {
        self.whose_move
    }

    /// Total moves and passes applied since the last reset.
    pub fn num_moves(&self) -> u32 {
        self.num_moves
    }

    /// Jumps made since the last extend added a piece to the board.
    pub fn num_jumps(&self) -> u32 {
        self.num_jumps
    }

    /// Moves played since the last reset, oldest first (passes excluded).
    pub fn all_moves(&self) -> &[Move] {
        &self.all_moves
    }

    pub fn red_pieces(&self) -> u32 {
        self.pieces[0]
    }

    pub fn blue_pieces(&self) -> u32 {
        self.pieces[1]
    }

    /// Piece count for a player color.
    pub fn num_pieces(&self, color: PieceColor) -> Result<u32, BoardError> {
        Ok(self.pieces[Self::color_index(color)?])
    }

    fn color_index(color: PieceColor) -> Result<usize, BoardError> {
        match color {
            PieceColor::Red => Ok(0),
            PieceColor::Blue => Ok(1),
            other => Err(BoardError::InvalidColor(other)),
        }
    }

    fn incr_pieces(&mut self, color: PieceColor, k: i32) {
        let idx = match color {
            PieceColor::Red => 0,
            PieceColor::Blue => 1,
            _ => unreachable!("only player colors own pieces"),
        };
        self.pieces[idx] = (self.pieces[idx] as i32 + k) as u32;
    }

    /// True iff `mv` may be applied to the current position: a pass when
    /// the side to move is stuck, or an extend/jump from an own piece to an
    /// empty square at the variant's exact distance.
    pub fn legal_move(&self, mv: Move) -> bool {
        match mv {
            Move::Pass => !self.can_move(self.whose_move),
            Move::Extend { from, to } => {
                self.grid[from.index()] == self.whose_move
                    && self.grid[to.index()] == PieceColor::Empty
                    && from.distance(to) == 1
            }
            Move::Jump { from, to } => {
                self.grid[from.index()] == self.whose_move
                    && self.grid[to.index()] == PieceColor::Empty
                    && from.distance(to) == 2
            }
        }
    }

    /// True iff `who` has at least one extend or jump available, ignoring
    /// whether it is that player's turn.
    pub fn can_move(&self, who: PieceColor) -> bool {
        self.for_each_move(who, &mut |_| false)
    }

    /// Every legal extend/jump for `who`, in a fixed deterministic order:
    /// source squares column-major (column outer, row inner, both
    /// ascending), then destinations by column and row ascending over the
    /// 5x5 box around the source. Search tie-breaking relies on this order.
    pub fn legal_moves(&self, who: PieceColor) -> SmallVec<[Move; 128]> {
        let mut moves = SmallVec::new();
        self.for_each_move(who, &mut |mv| {
            moves.push(mv);
            true
        });
        moves
    }

    /// Drives both `can_move` and `legal_moves`. The visitor returns false
    /// to stop early; the overall return says whether any move was found.
    fn for_each_move(&self, who: PieceColor, visit: &mut dyn FnMut(Move) -> bool) -> bool {
        let mut found = false;
        for col in 'a'..='g' {
            for row in '1'..='7' {
                let from = Square::new(col, row).unwrap();
                if self.grid[from.index()] != who {
                    continue;
                }
                for dc in -2..=2 {
                    for dr in -2..=2 {
                        if dc == 0 && dr == 0 {
                            continue;
                        }
                        // Stays within the extended region for any interior
                        // source, so the unwrap cannot fail.
                        let to = from.offset(dc, dr).unwrap();
                        if self.grid[to.index()] != PieceColor::Empty {
                            continue;
                        }
                        let mv = Move::new(from, to).unwrap();
                        found = true;
                        if !visit(mv) {
                            return true;
                        }
                    }
                }
            }
        }
        found
    }

    /// Apply `mv` for the side to move. Extends grow a new piece on the
    /// destination; jumps vacate the source. Either way every enemy piece
    /// adjacent to the destination is converted to the mover's color.
    pub fn make_move(&mut self, mv: Move) -> Result<(), BoardError> {
        if mv.is_pass() {
            return self.pass();
        }
        if !self.legal_move(mv) {
            return Err(BoardError::IllegalMove(mv));
        }
        self.push_snapshot();
        let mover = self.whose_move;
        match mv {
            Move::Extend { to, .. } => {
                self.incr_pieces(mover, 1);
                self.grid[to.index()] = mover;
                self.capture_around(to, mover);
                self.num_jumps = 0;
            }
            Move::Jump { from, to } => {
                self.grid[from.index()] = PieceColor::Empty;
                self.grid[to.index()] = mover;
                self.capture_around(to, mover);
                self.num_jumps += 1;
            }
            Move::Pass => unreachable!("handled above"),
        }
        self.all_moves.push(mv);
        self.whose_move = mover.opposite();
        self.num_moves += 1;
        Ok(())
    }

    /// Flip every enemy piece in the 8-neighborhood of `to`.
    fn capture_around(&mut self, to: Square, mover: PieceColor) {
        let enemy = mover.opposite();
        for dc in -1..=1 {
            for dr in -1..=1 {
                if dc == 0 && dr == 0 {
                    continue;
                }
                let sq = to.offset(dc, dr).unwrap();
                if self.grid[sq.index()] == enemy {
                    self.grid[sq.index()] = mover;
                    self.incr_pieces(mover, 1);
                    self.incr_pieces(enemy, -1);
                }
            }
        }
    }

    /// Give up the turn. Legal only when the side to move is stuck.
    pub fn pass(&mut self) -> Result<(), BoardError> {
        if self.can_move(self.whose_move) {
            return Err(BoardError::IllegalMove(Move::Pass));
        }
        self.push_snapshot();
        self.whose_move = self.whose_move.opposite();
        self.num_moves += 1;
        Ok(())
    }

    /// Revert the most recent mutating operation, restoring the grid,
    /// counts, turn and counters exactly.
    pub fn undo(&mut self) -> Result<(), BoardError> {
        let snap = self.history.pop().ok_or(BoardError::UndoUnderflow)?;
        self.grid = snap.grid;
        self.pieces = snap.pieces;
        self.whose_move = snap.whose_move;
        self.num_moves = snap.num_moves;
        self.num_jumps = snap.num_jumps;
        self.all_moves.truncate(snap.moves_played);
        Ok(())
    }

    /// Depth of the undo history.
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    fn push_snapshot(&mut self) {
        self.history.push(Snapshot {
            grid: self.grid,
            pieces: self.pieces,
            whose_move: self.whose_move,
            num_moves: self.num_moves,
            num_jumps: self.num_jumps,
            moves_played: self.all_moves.len(),
        });
    }

    /// True iff a block may be placed at `sq`: an empty interior square
    /// that is not one of the four starting corners.
    pub fn legal_block(&self, sq: Square) -> bool {
        let corner = (sq.col() == 'a' || sq.col() == 'g') && (sq.row() == '1' || sq.row() == '7');
        sq.is_interior() && !corner && self.grid[sq.index()] == PieceColor::Empty
    }

    /// Place a block at `sq` and at its reflections across the middle row
    /// and column. Each reflection is placed only if itself legal. The
    /// whole placement is undoable as one operation.
    pub fn set_block(&mut self, sq: Square) -> Result<(), BoardError> {
        if !self.legal_block(sq) {
            return Err(BoardError::IllegalBlock(sq));
        }
        self.push_snapshot();
        self.grid[sq.index()] = PieceColor::Blocked;
        let mirror_col = (b'a' + b'g' - sq.col() as u8) as char;
        let mirror_row = (b'1' + b'7' - sq.row() as u8) as char;
        for (col, row) in [
            (mirror_col, sq.row()),
            (sq.col(), mirror_row),
            (mirror_col, mirror_row),
        ] {
            let m = Square::new(col, row).unwrap();
            if self.legal_block(m) {
                self.grid[m.index()] = PieceColor::Blocked;
            }
        }
        Ok(())
    }

    /// True iff the game is over: neither side can move, one side has no
    /// pieces, or too many consecutive jumps since the last extend.
    pub fn game_over(&self) -> bool {
        (!self.can_move(PieceColor::Red) && !self.can_move(PieceColor::Blue))
            || self.red_pieces() == 0
            || self.blue_pieces() == 0
            || self.num_jumps > JUMP_LIMIT
    }
}

/// Boards compare equal when their grids match cell for cell.
impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.grid[..] == other.grid[..]
    }
}

impl Eq for Board {}

impl fmt::Display for Board {
    /// The "dump" depiction: rows 7 down to 1 between `===` fences, cells
    /// rendered as `r`, `b`, `X` or `-`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "===")?;
        for row in ('1'..='7').rev() {
            write!(f, " ")?;
            for col in 'a'..='g' {
                let sq = Square::new(col, row).unwrap();
                let cell = match self.grid[sq.index()] {
                    PieceColor::Red => 'r',
                    PieceColor::Blue => 'b',
                    PieceColor::Blocked => 'X',
                    PieceColor::Empty => '-',
                };
                write!(f, " {}", cell)?;
            }
            writeln!(f)?;
        }
        write!(f, "===")
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} (to move: {}, red: {}, blue: {}, jumps: {})",
            self, self.whose_move, self.pieces[0], self.pieces[1], self.num_jumps
        )
    }
}
