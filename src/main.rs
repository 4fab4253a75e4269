use battleship_solo::{
    init_logging, print_player_view, EventSink, Game, GameError, GameEvent, Turn, BOARD_SIZE,
};
use clap::Parser;
use rand::rngs::SmallRng;
use rand::SeedableRng;
use std::io::{self, Write};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, help = "Fix RNG seed for reproducible games (e.g., --seed 12345)")]
    seed: Option<u64>,
}

/// Prints each event's user-facing message as it happens.
struct ConsoleSink;

impl EventSink for ConsoleSink {
    fn publish(&mut self, event: GameEvent) {
        println!("{}", event);
    }
}

fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., A5)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-J", col_ch));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= BOARD_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-J", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-10", row_str))?;
    if row == 0 {
        return Err("Row cannot be 0 - must be 1-10".to_string());
    }
    if row > BOARD_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-10", row));
    }
    Ok((row - 1, col))
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    if let Some(s) = cli.seed {
        println!("Using fixed seed: {} (game will be reproducible)", s);
    }
    let mut rng = if let Some(s) = cli.seed {
        SmallRng::seed_from_u64(s)
    } else {
        let mut seed_rng = rand::rng();
        SmallRng::from_rng(&mut seed_rng)
    };

    let mut game = Game::new(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
    let mut sink = ConsoleSink;

    println!("Fleets deployed. Sink the AI's Battleship and both Destroyers!\n");

    loop {
        print_player_view(&game);

        let (row, col) = loop {
            print!("\nEnter target coordinates (e.g., A5): ");
            io::stdout().flush()?;
            let mut line = String::new();
            io::stdin().read_line(&mut line)?;
            match parse_coord(line.trim()) {
                Ok(coord) => break coord,
                Err(e) => println!("✗ Error: {}", e),
            }
        };

        match game.player_guess(row, col, &mut rng, &mut sink) {
            Ok(()) => {}
            Err(GameError::GameOver) => break,
            Err(e) => return Err(anyhow::anyhow!(e)),
        }

        if let Turn::Over(_) = game.turn() {
            println!();
            print_player_view(&game);
            break;
        }
        println!();
    }

    Ok(())
}
