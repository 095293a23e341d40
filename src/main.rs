//! Renju board judge CLI
//!
//! Reads a board file (single board or batch), scans it for a winning
//! line and prints the verdict per board: `No winner`, or the winner's
//! code followed by the 1-based anchor of the run.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use renju::loader::{self, Input};
use renju::rules::{find_winner, WinResult};

#[derive(Debug, Parser)]
#[command(name = "renju", about = "Renju five-in-a-row board judge")]
struct Args {
    /// Path to the board configuration file
    board: PathBuf,
}

fn main() {
    let args = Args::parse();
    if let Err(err) = run(&args) {
        // Load failures are reported, not crashed on; the exit is normal.
        println!("Error: {err:#}");
    }
}

fn run(args: &Args) -> Result<()> {
    let text = fs::read_to_string(&args.board)
        .with_context(|| format!("failed to read {}", args.board.display()))?;

    match loader::parse_input(&text)? {
        Input::Single(board) => report(find_winner(&board)),
        Input::Batch(boards) => {
            for board in &boards {
                report(find_winner(board));
            }
        }
    }
    Ok(())
}

fn report(result: WinResult) {
    match result {
        WinResult::NoWinner => println!("No winner"),
        WinResult::Winner { stone, row, col } => {
            println!("{}", stone.code());
            println!("{row} {col}");
        }
    }
}
