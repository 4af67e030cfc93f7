//! Command-line interface for the tictactoe driver.

use clap::{Parser, Subcommand, ValueEnum};
use laminar_tictactoe::Player;

/// Tic-tac-toe against a perfect-play engine
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a minimax engine", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Let the engine play both sides
    Selfplay {
        /// Player who moves first
        #[arg(long, value_enum, default_value = "x")]
        first: MarkArg,

        /// Force the opening cell as ROW,COL (zero-based)
        #[arg(long, value_parser = parse_coords)]
        opening: Option<(usize, usize)>,

        /// Print the game record as JSON instead of boards
        #[arg(long)]
        json: bool,
    },

    /// Play against the engine on stdin
    Play {
        /// Mark the human plays (X moves first)
        #[arg(long, value_enum, default_value = "x")]
        human: MarkArg,
    },
}

/// Player mark as given on the command line.
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MarkArg {
    /// Player X
    X,
    /// Player O
    O,
}

impl From<MarkArg> for Player {
    fn from(arg: MarkArg) -> Self {
        match arg {
            MarkArg::X => Player::X,
            MarkArg::O => Player::O,
        }
    }
}

/// Parses `ROW,COL`.
fn parse_coords(s: &str) -> Result<(usize, usize), String> {
    let (row, col) = s
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {:?}", s))?;
    let row = row
        .trim()
        .parse()
        .map_err(|e| format!("invalid row {:?}: {}", row, e))?;
    let col = col
        .trim()
        .parse()
        .map_err(|e| format!("invalid column {:?}: {}", col, e))?;
    Ok((row, col))
}
