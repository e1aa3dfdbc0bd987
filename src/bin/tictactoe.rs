use std::io::{self, BufRead, Write};

use anyhow::{Context, Result, bail};
use clap::Parser;
use grid_life::tictactoe::{Mark, MoveError, Outcome, TicTacToe, choose_move};
use rand::{Rng, SeedableRng};
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tictactoe")]
#[command(version, about = "Tic-Tac-Toe in the terminal against a heuristic AI")]
struct Cli {
    /// Both marks are played from the keyboard
    #[arg(long)]
    two_player: bool,

    /// Seed for the first-player draw and the AI's tie-breaks
    #[arg(long)]
    seed: Option<u64>,
}

fn read_cell<I>(lines: &mut I, board: &TicTacToe) -> Result<usize>
where
    I: Iterator<Item = io::Result<String>>,
{
    loop {
        print!("{board}> ");
        io::stdout().flush()?;
        let Some(line) = lines.next() else {
            bail!("input closed before the game finished");
        };
        let line = line.context("failed to read move")?;
        match line.trim().parse::<usize>() {
            Ok(cell) if (1..=9).contains(&cell) => return Ok(cell),
            _ => println!("Input must be a number between 1 and 9, please try again."),
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut rng = match cli.seed {
        Some(seed) => rand::rngs::StdRng::seed_from_u64(seed),
        None => rand::rngs::StdRng::from_rng(&mut rand::rng()),
    };

    let human = Mark::X;
    let mut player = if rng.random_bool(0.5) { Mark::X } else { Mark::O };
    let mut board = TicTacToe::new();
    let stdin = io::stdin();
    let mut lines = stdin.lock().lines();

    let outcome = loop {
        if cli.two_player || player == human {
            println!("Player {player}, what is your move?");
            let cell = read_cell(&mut lines, &board)?;
            match board.play(cell, player) {
                Ok(()) => {}
                Err(MoveError::Occupied(_)) => {
                    println!("Cell already full, please try again.");
                    continue;
                }
                Err(err) => return Err(err.into()),
            }
        } else {
            let cell = choose_move(&board, player, &mut rng)
                .context("no free cell left for the AI")?;
            debug!(cell, %player, "AI move");
            println!("Player {player} plays {cell}");
            board.play(cell, player)?;
        }

        if let Some(outcome) = board.outcome() {
            break outcome;
        }
        player = player.opponent();
    };

    print!("{board}");
    match outcome {
        Outcome::Win(mark) => println!("Player {mark} is the champion"),
        Outcome::Draw => println!("We have a draw"),
    }
    Ok(())
}
