//! Perft counter: `perft [depth]` reads FEN lines from stdin and prints
//! `<fen>,<leaf count>` for each.

use std::env;
use std::io::{self, BufRead};
use std::process::ExitCode;
use std::time::Instant;

use chessmoves::board::Board;
use log::info;

const DEFAULT_DEPTH: usize = 3;

fn main() -> ExitCode {
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "warn"),
    )
    .init();

    let depth = match env::args().nth(1) {
        None => DEFAULT_DEPTH,
        Some(arg) => match arg.parse() {
            Ok(depth) => depth,
            Err(_) => {
                eprintln!("usage: perft [depth]");
                return ExitCode::FAILURE;
            }
        },
    };

    for (index, line) in io::stdin().lock().lines().enumerate() {
        let Ok(line) = line else {
            return ExitCode::FAILURE;
        };
        let fen = line.trim();
        if fen.is_empty() {
            continue;
        }

        let mut board = match Board::try_from_fen(fen) {
            Ok(board) => board,
            Err(e) => {
                eprintln!("*** Error: Input line {}: {e}", index + 1);
                return ExitCode::FAILURE;
            }
        };

        let start = Instant::now();
        let nodes = board.perft(depth);
        info!("depth {depth}: {nodes} nodes in {:?}", start.elapsed());
        println!("{},{nodes}", board.to_fen());
    }

    ExitCode::SUCCESS
}
