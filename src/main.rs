use std::env;
use std::process;

use log::info;

use ataxx_engine::command::CommandSource;
use ataxx_engine::orchestrator::Game;

fn main() {
    env_logger::init();

    let mut inputs = CommandSource::from_stdin();
    if let Some(path) = env::args().nth(1) {
        if let Err(err) = inputs.push_file(&path) {
            eprintln!("error: {}", err);
            process::exit(1);
        }
    }

    info!("starting session");
    Game::new(inputs).run();
}
