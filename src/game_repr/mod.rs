mod board;
mod moves;
mod piece;


pub use board::*;
pub use moves::*;
pub use piece::*;
