//! The game session: a command interpreter wrapped around a board and
//! two player slots.
//!
//! A session cycles through three states. In `Setup` the position can
//! be edited (blocks, pre-placed moves) and players assigned; `start`
//! enters `Playing`, where the side to move is asked for a move until
//! the game is over; the winner is then announced and the session sits
//! in `Finished` until `clear` or `quit`.

use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::agent::ai::MAX_DEPTH;
use crate::agent::{AiPlayer, GameResult, ManualPlayer, Player};
use crate::command::{Command, CommandSource, GameError};
use crate::game_repr::{Board, Move, PieceColor};

const HELP_TEXT: &str = "\
Commands (one per line):
  auto <red|blue>    let the machine play that color
  manual <red|blue>  take over that color yourself
  block <cr>         place a block and its mirror images (setup only)
  <c0r0>-<c1r1>      make a move; 'pass' or '-' to pass
  start              begin play from the current position
  clear              abandon the game and return to setup
  seed <n>           reseed the random number generator
  load <file>        read further commands from a file
  dump               print the current position
  help               print this message
  quit               exit";

/// Session state, advanced by `start`, game over, and `clear`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    Setup,
    Playing,
    Finished,
}

enum PlayerSlot {
    Manual(ManualPlayer),
    Auto(AiPlayer),
}

impl PlayerSlot {
    fn player(&mut self) -> &mut dyn Player {
        match self {
            PlayerSlot::Manual(p) => p,
            PlayerSlot::Auto(p) => p,
        }
    }
}

/// A complete interactive session.
pub struct Game {
    board: Board,
    state: State,
    inputs: CommandSource,
    rng: StdRng,
    red: PlayerSlot,
    blue: PlayerSlot,
    ai_depth: u32,
    running: bool,
}

impl Game {
    /// A fresh session: red manual, blue automated.
    pub fn new(inputs: CommandSource) -> Game {
        Game::with_depth(inputs, MAX_DEPTH)
    }

    /// Like [`Game::new`] but automated players search to `depth`.
    pub fn with_depth(inputs: CommandSource, depth: u32) -> Game {
        Game {
            board: Board::new(),
            state: State::Setup,
            inputs,
            rng: StdRng::from_entropy(),
            red: PlayerSlot::Manual(ManualPlayer::new(PieceColor::Red)),
            blue: PlayerSlot::Auto(AiPlayer::with_depth(PieceColor::Blue, depth)),
            ai_depth: depth,
            running: true,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// A pseudo-random number below `max`, for automated players that
    /// want to vary their play. Reseedable with the `seed` command.
    pub fn next_random(&mut self, max: u64) -> u64 {
        self.rng.gen_range(0..max)
    }

    /// Run the session until `quit` or end of input.
    pub fn run(&mut self) {
        while self.running {
            while self.running && self.state == State::Setup {
                self.do_command("ataxx: ");
            }
            while self.running && self.state == State::Playing && !self.board.game_over() {
                self.play_turn();
            }
            if self.running && self.state == State::Playing {
                self.announce_winner();
            }
            while self.running && self.state == State::Finished {
                self.do_command("ataxx: ");
            }
            if self.running {
                self.board.clear();
                self.state = State::Setup;
            }
        }
    }

    /// Read one command and execute it, reporting any error.
    fn do_command(&mut self, prompt: &str) {
        let Some(line) = self.inputs.get_line(prompt) else {
            self.running = false;
            return;
        };
        match Command::parse(&line).and_then(|cmd| self.execute(cmd)) {
            Ok(()) => {}
            Err(err) => eprintln!("error: {}", err),
        }
    }

    fn execute(&mut self, cmd: Command) -> Result<(), GameError> {
        match cmd {
            Command::Auto(color) => {
                self.require_setup("auto")?;
                *self.slot_mut(color) =
                    PlayerSlot::Auto(AiPlayer::with_depth(color, self.ai_depth));
            }
            Command::Manual(color) => {
                self.require_setup("manual")?;
                *self.slot_mut(color) = PlayerSlot::Manual(ManualPlayer::new(color));
            }
            Command::Block(sq) => {
                self.require_setup("block")?;
                self.board.set_block(sq)?;
            }
            Command::Clear => {
                self.board.clear();
                self.state = State::Setup;
            }
            Command::Dump => println!("{}", self.board),
            Command::Help => println!("{}", HELP_TEXT),
            Command::Load(path) => self.inputs.push_file(&path)?,
            Command::Seed(n) => self.rng = StdRng::seed_from_u64(n),
            Command::Start => {
                self.require_setup("start")?;
                info!("game started, {} to move", self.board.whose_move());
                self.state = State::Playing;
            }
            Command::Quit => self.running = false,
            Command::PieceMove(mv) => match self.state {
                State::Finished => return Err(GameError::WrongState("move")),
                // Setup moves edit the position directly.
                _ => self.board.make_move(mv)?,
            },
        }
        Ok(())
    }

    fn require_setup(&self, what: &'static str) -> Result<(), GameError> {
        if self.state == State::Setup {
            Ok(())
        } else {
            Err(GameError::WrongState(what))
        }
    }

    fn slot_mut(&mut self, color: PieceColor) -> &mut PlayerSlot {
        match color {
            PieceColor::Red => &mut self.red,
            _ => &mut self.blue,
        }
    }

    /// One ply: ask the side to move for a move and apply it.
    fn play_turn(&mut self) {
        let color = self.board.whose_move();
        let automated = matches!(self.slot_mut(color), PlayerSlot::Auto(_));
        let mv = if automated {
            let Game {
                red, blue, board, ..
            } = self;
            let slot = match color {
                PieceColor::Red => red,
                _ => blue,
            };
            slot.player().get_move(board, color)
        } else {
            self.read_manual_move(color)
        };
        // A command issued at the prompt may have ended or reset the game.
        if self.state != State::Playing {
            return;
        }
        let Some(mv) = mv else {
            return;
        };
        match self.board.make_move(mv) {
            Ok(()) => {
                debug!("{} plays {}", color, mv);
                if automated {
                    if mv.is_pass() {
                        println!("{} passes.", color);
                    } else {
                        println!("{} moves {}.", color, mv);
                    }
                }
            }
            Err(err) => eprintln!("error: {}", err),
        }
    }

    /// Prompt the manual player, executing any interleaved commands,
    /// until a move arrives or play stops.
    fn read_manual_move(&mut self, color: PieceColor) -> Option<Move> {
        loop {
            if self.state != State::Playing || !self.running {
                return None;
            }
            let prompt = format!("{}: ", color);
            let Some(line) = self.inputs.get_line(&prompt) else {
                self.running = false;
                return None;
            };
            match Command::parse(&line) {
                Ok(Command::PieceMove(mv)) => {
                    if let PlayerSlot::Manual(p) = self.slot_mut(color) {
                        p.queue_move(mv);
                    }
                    let Game {
                        red, blue, board, ..
                    } = self;
                    let slot = match color {
                        PieceColor::Red => red,
                        _ => blue,
                    };
                    return slot.player().get_move(board, color);
                }
                Ok(other) => {
                    if let Err(err) = self.execute(other) {
                        eprintln!("error: {}", err);
                    }
                }
                Err(err) => eprintln!("error: {}", err),
            }
        }
    }

    fn announce_winner(&mut self) {
        let result = GameResult::from_board(&self.board);
        match result {
            GameResult::RedWins => println!("Red wins."),
            GameResult::BlueWins => println!("Blue wins."),
            GameResult::Draw => println!("Draw."),
        }
        info!(
            "game over after {} moves, red {} blue {}",
            self.board.num_moves(),
            self.board.red_pieces(),
            self.board.blue_pieces()
        );
        self.red.player().game_ended(result);
        self.blue.player().game_ended(result);
        self.state = State::Finished;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn scripted(script: &str, depth: u32) -> Game {
        Game::with_depth(CommandSource::from_reader(Cursor::new(script.to_string())), depth)
    }

    #[test]
    fn start_is_setup_only() {
        let mut game = scripted("", 1);
        game.state = State::Playing;
        assert!(matches!(
            game.execute(Command::Start),
            Err(GameError::WrongState("start"))
        ));
    }

    #[test]
    fn block_is_setup_only() {
        let mut game = scripted("", 1);
        game.execute(Command::Start).unwrap();
        let before = game.board().clone();
        let sq = crate::game_repr::Square::new('c', '3').unwrap();
        assert!(matches!(
            game.execute(Command::Block(sq)),
            Err(GameError::WrongState("block"))
        ));
        assert_eq!(game.board(), &before);
    }

    #[test]
    fn clear_returns_to_setup() {
        let mut game = scripted("", 1);
        game.execute(Command::Start).unwrap();
        assert_eq!(game.state(), State::Playing);
        game.execute(Command::Clear).unwrap();
        assert_eq!(game.state(), State::Setup);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn setup_moves_edit_the_position() {
        let mut game = scripted("", 1);
        game.execute(Command::PieceMove("a7-b6".parse().unwrap()))
            .unwrap();
        assert_eq!(game.board().red_pieces(), 3);
        assert_eq!(game.board().whose_move(), PieceColor::Blue);
    }

    #[test]
    fn seed_makes_the_generator_repeatable() {
        let mut game = scripted("", 1);
        game.execute(Command::Seed(7)).unwrap();
        let first: Vec<u64> = (0..8).map(|_| game.next_random(100)).collect();
        game.execute(Command::Seed(7)).unwrap();
        let second: Vec<u64> = (0..8).map(|_| game.next_random(100)).collect();
        assert_eq!(first, second);
    }
}
