//! End-to-end sessions driven through the command interpreter.

use std::io::Cursor;

use ataxx_engine::command::CommandSource;
use ataxx_engine::game_repr::{Board, PieceColor, Square, JUMP_LIMIT};
use ataxx_engine::orchestrator::{Game, State};

fn run_script(script: &str, depth: u32) -> Game {
    let inputs = CommandSource::from_reader(Cursor::new(script.to_string()));
    let mut game = Game::with_depth(inputs, depth);
    game.run();
    game
}

#[test]
fn scripted_manual_game_to_a_red_win() {
    // Red wipes blue out in five moves; the stray commands in the
    // middle must be rejected without disturbing play.
    let script = "\
manual blue
block b2
start
block c3
a7-a5
a1-b3
dump
a5-b4
g7-e5
b4-d4
quit
";
    let game = run_script(script, 1);
    assert_eq!(game.state(), State::Finished);
    assert!(game.board().game_over());
    assert_eq!(game.board().blue_pieces(), 0);
    assert!(game.board().red_pieces() > 0);
}

#[test]
fn two_automated_players_finish_a_game() {
    let game = run_script("auto red\nstart\n", 2);
    assert!(game.board().game_over());
    let board = game.board();
    assert!(
        !board.can_move(PieceColor::Red) && !board.can_move(PieceColor::Blue)
            || board.red_pieces() == 0
            || board.blue_pieces() == 0
            || board.num_jumps() > JUMP_LIMIT
    );
}

#[test]
fn end_of_input_quits_cleanly() {
    let game = run_script("block d2\n", 1);
    assert_eq!(game.state(), State::Setup);
    let mut expected = Board::new();
    expected.set_block(Square::new('d', '2').unwrap()).unwrap();
    assert_eq!(game.board(), &expected);
}

#[test]
fn clear_mid_game_returns_to_setup() {
    let game = run_script("start\na7-b6\nclear\nquit\n", 1);
    assert_eq!(game.board(), &Board::new());
}
