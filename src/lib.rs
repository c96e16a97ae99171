//! An Ataxx engine: board representation, move generation, a negamax
//! player, and a line-oriented command interpreter for playing games.

pub mod agent;
pub mod command;
pub mod game_repr;
pub mod orchestrator;
