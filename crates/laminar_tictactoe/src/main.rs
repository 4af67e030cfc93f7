//! tictactoe - terminal driver for the minimax engine.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Command};
use laminar_tictactoe::{Game, GameErrorKind, Player, Position};
use std::io::{BufRead, Write};
use tracing::{info, instrument, warn};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Selfplay {
            first,
            opening,
            json,
        } => run_selfplay(first.into(), opening, json),
        Command::Play { human } => run_play(human.into()),
    }
}

/// Engine against itself.
#[instrument]
fn run_selfplay(first: Player, opening: Option<(usize, usize)>, json: bool) -> Result<()> {
    info!("Starting self-play");
    let mut game = Game::new(first);

    if let Some((row, col)) = opening {
        game.make_move(row, col)
            .with_context(|| format!("Opening move ({}, {}) rejected", row, col))?;
        if !json {
            println!("{} opens at ({}, {})\n{}\n", first, row, col, game.board());
        }
    }

    while !game.outcome().is_over() {
        let (action, _) = game.play_best().context("Engine failed to move")?;
        if !json {
            println!("{}\n{}\n", action, game.board());
        }
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&game.record())?);
    } else {
        println!("{}", game.outcome());
    }
    Ok(())
}

/// Human against the engine on stdin/stdout.
#[instrument]
fn run_play(human: Player) -> Result<()> {
    info!("Starting interactive game");
    let mut game = Game::new(Player::X);
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();

    while !game.outcome().is_over() {
        if game.to_move() != human {
            let (action, _) = game.play_best().context("Engine failed to move")?;
            println!("Computer plays {}", action);
            continue;
        }

        println!("\n{}\n", game.board());
        print!("{} to move (row col, or 1-9): ", human);
        std::io::stdout().flush()?;

        let Some(line) = lines.next() else {
            bail!("Input closed before the game finished");
        };
        let line = line?;
        let Some((row, col)) = parse_human_move(&line) else {
            println!("Enter a row and column (0-2) or a cell number (1-9).");
            continue;
        };

        match game.make_move(row, col) {
            Ok(_) => {}
            Err(e) if matches!(e.kind(), GameErrorKind::SquareOccupied { .. }) => {
                println!("That square is taken.");
            }
            Err(e) if matches!(e.kind(), GameErrorKind::OutOfRange { .. }) => {
                warn!(row, col, "Move out of range");
                println!("Rows and columns run from 0 to 2.");
            }
            Err(e) => return Err(e.into()),
        }
    }

    println!("\n{}\n\n{}", game.board(), game.outcome());
    Ok(())
}

/// Accepts `row col` or a 1-based cell number.
fn parse_human_move(input: &str) -> Option<(usize, usize)> {
    let parts: Vec<usize> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(str::parse)
        .collect::<Result<_, _>>()
        .ok()?;

    match parts.as_slice() {
        [cell] => cell
            .checked_sub(1)
            .and_then(Position::from_index)
            .map(Position::coords),
        [row, col] => Some((*row, *col)),
        _ => None,
    }
}
