//! Textual command protocol and input sources.
//!
//! Commands arrive one per line, from stdin or from files pushed by the
//! `load` command. The interpreter in the orchestrator decides which
//! commands are allowed in which game state; this module only parses.

use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use thiserror::Error;

use crate::game_repr::{BoardError, Move, ParseMoveError, PieceColor, Square};

/// Errors surfaced to the user by the command interpreter.
#[derive(Debug, Error)]
pub enum GameError {
    #[error("command not understood: '{0}'")]
    BadCommand(String),
    #[error(transparent)]
    Board(#[from] BoardError),
    #[error(transparent)]
    BadMove(#[from] ParseMoveError),
    #[error("unknown player: {0}")]
    UnknownPlayer(String),
    #[error("invalid number: {0}")]
    BadNumber(String),
    #[error("cannot open file {path}")]
    Load {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error("'{0}' command is not allowed now")]
    WrongState(&'static str),
}

/// One parsed command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Hand a color to the automated player.
    Auto(PieceColor),
    /// Hand a color to the manual player.
    Manual(PieceColor),
    /// Place a block (and its mirrors) during setup.
    Block(Square),
    Clear,
    Dump,
    Help,
    Load(String),
    /// A move or a pass, e.g. `c2-c4`, `pass`, `-`.
    PieceMove(Move),
    Seed(u64),
    Start,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines are the caller's concern.
    pub fn parse(line: &str) -> Result<Command, GameError> {
        let mut words = line.split_whitespace();
        let head = words.next().unwrap_or("");
        let rest: Vec<&str> = words.collect();
        let bad = || GameError::BadCommand(line.trim().to_string());
        match head {
            "auto" | "manual" => {
                let name = rest.first().ok_or_else(bad)?;
                let color = PieceColor::player_from_str(name)
                    .ok_or_else(|| GameError::UnknownPlayer(name.to_string()))?;
                if head == "auto" {
                    Ok(Command::Auto(color))
                } else {
                    Ok(Command::Manual(color))
                }
            }
            "block" => {
                let operand = rest.first().ok_or_else(bad)?;
                let chars: Vec<char> = operand.chars().collect();
                let sq = match chars.as_slice() {
                    [col, row] => Square::new(*col, *row),
                    _ => None,
                };
                sq.filter(Square::is_interior)
                    .map(Command::Block)
                    .ok_or_else(bad)
            }
            "clear" => Ok(Command::Clear),
            "dump" => Ok(Command::Dump),
            "help" => Ok(Command::Help),
            "load" => {
                let path = rest.first().ok_or_else(bad)?;
                Ok(Command::Load(path.to_string()))
            }
            "seed" => {
                let operand = rest.first().ok_or_else(bad)?;
                let n = operand
                    .parse::<u64>()
                    .map_err(|_| GameError::BadNumber(operand.to_string()))?;
                Ok(Command::Seed(n))
            }
            "start" => Ok(Command::Start),
            "quit" => Ok(Command::Quit),
            _ => {
                let mv: Move = line.trim().parse()?;
                Ok(Command::PieceMove(mv))
            }
        }
    }
}

/// A stack of line sources. `load` pushes a file on top; a source is
/// popped when it runs dry, falling back to whatever is underneath.
pub struct CommandSource {
    sources: Vec<Box<dyn BufRead>>,
    interactive: bool,
}

impl CommandSource {
    /// Read from standard input, prompting before each line.
    pub fn from_stdin() -> Self {
        Self {
            sources: vec![Box::new(BufReader::new(io::stdin()))],
            interactive: true,
        }
    }

    /// Read from an in-memory or file reader without prompting.
    pub fn from_reader(reader: impl BufRead + 'static) -> Self {
        Self {
            sources: vec![Box::new(reader)],
            interactive: false,
        }
    }

    /// Push a command file on top of the current source.
    pub fn push_file(&mut self, path: &str) -> Result<(), GameError> {
        let file = File::open(path).map_err(|source| GameError::Load {
            path: path.to_string(),
            source,
        })?;
        self.sources.push(Box::new(BufReader::new(file)));
        Ok(())
    }

    /// Next non-blank line, or `None` when every source is exhausted.
    pub fn get_line(&mut self, prompt: &str) -> Option<String> {
        loop {
            if self.interactive && self.sources.len() == 1 {
                print!("{}", prompt);
                let _ = io::stdout().flush();
            }
            let source = self.sources.last_mut()?;
            let mut line = String::new();
            match source.read_line(&mut line) {
                Ok(0) | Err(_) => {
                    self.sources.pop();
                    if self.sources.is_empty() {
                        return None;
                    }
                }
                Ok(_) => {
                    let trimmed = line.trim();
                    if !trimmed.is_empty() {
                        return Some(trimmed.to_string());
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn parses_every_command() {
        assert_eq!(
            Command::parse("auto red").unwrap(),
            Command::Auto(PieceColor::Red)
        );
        assert_eq!(
            Command::parse("manual Blue").unwrap(),
            Command::Manual(PieceColor::Blue)
        );
        assert_eq!(
            Command::parse("block c2").unwrap(),
            Command::Block(Square::new('c', '2').unwrap())
        );
        assert_eq!(Command::parse("clear").unwrap(), Command::Clear);
        assert_eq!(Command::parse("dump").unwrap(), Command::Dump);
        assert_eq!(
            Command::parse("load game.txt").unwrap(),
            Command::Load("game.txt".to_string())
        );
        assert_eq!(Command::parse("seed 42").unwrap(), Command::Seed(42));
        assert_eq!(Command::parse("start").unwrap(), Command::Start);
        assert_eq!(Command::parse("quit").unwrap(), Command::Quit);
        assert_eq!(
            Command::parse("c2-c4").unwrap(),
            Command::PieceMove("c2-c4".parse().unwrap())
        );
        assert_eq!(
            Command::parse("pass").unwrap(),
            Command::PieceMove(Move::Pass)
        );
        assert_eq!(Command::parse("-").unwrap(), Command::PieceMove(Move::Pass));
    }

    #[test]
    fn rejects_garbage() {
        assert!(Command::parse("resign").is_err());
        assert!(Command::parse("auto").is_err());
        assert!(Command::parse("auto green").is_err());
        assert!(Command::parse("block z9").is_err());
        assert!(Command::parse("block d").is_err());
        assert!(Command::parse("seed many").is_err());
    }

    #[test]
    fn source_stack_pops_on_eof() {
        let mut source = CommandSource::from_reader(Cursor::new("one\n\n two \n"));
        assert_eq!(source.get_line("> ").as_deref(), Some("one"));
        assert_eq!(source.get_line("> ").as_deref(), Some("two"));
        assert_eq!(source.get_line("> "), None);
    }
}
