pub mod player;
pub use player::*;

pub mod manual_player;
pub use manual_player::*;

pub mod ai;
pub use ai::{choose_move, AiPlayer};
