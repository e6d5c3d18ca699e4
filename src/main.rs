//! Batch driver: reads one FEN per line from stdin and writes every legal
//! move of each position together with the position it leads to.
//!
//! ```text
//! fen,<normalized fen>
//! move,<san>,<resulting fen>
//! ...
//! end
//! ```

use std::io::{self, BufRead, BufWriter, Write};
use std::process::ExitCode;

use chessmoves::api;
use chessmoves::board::Notation;
use log::debug;

fn init_logging() {
    env_logger::Builder::from_env(
        env_logger::Env::default().filter_or(env_logger::DEFAULT_FILTER_ENV, "warn"),
    )
    .target(env_logger::Target::Stderr)
    .init();
}

/// The output block for one position
fn render_position(fen: &str) -> Result<String, api::Error> {
    let normalized = api::position(fen)?;
    let moves = api::moves(fen, Notation::San)?;
    debug!("{normalized}: {} legal moves", moves.len());

    let mut block = format!("fen,{normalized}\n");
    for (san, next) in &moves {
        block.push_str(&format!("move,{san},{next}\n"));
    }
    block.push_str("end\n");
    Ok(block)
}

fn main() -> ExitCode {
    init_logging();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    for (index, line) in stdin.lock().lines().enumerate() {
        let line_number = index + 1;
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("*** Error: Cannot read input line {line_number}: {e}");
                return ExitCode::FAILURE;
            }
        };
        let fen = line.trim();
        if fen.is_empty() {
            continue;
        }

        match render_position(fen) {
            Ok(block) => {
                if out.write_all(block.as_bytes()).is_err() {
                    return ExitCode::FAILURE;
                }
            }
            Err(e) => {
                let _ = out.flush();
                debug!("line {line_number}: {e}");
                eprintln!("*** Error: Input line {line_number} contains no FEN data");
                return ExitCode::FAILURE;
            }
        }
    }

    if out.flush().is_err() {
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
