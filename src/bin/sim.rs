//! Headless auto-play: the player side guesses randomly, like the AI.
//! Prints a JSON summary of the finished game.

use battleship_solo::{random_target, Game, GameEvent, Side, Turn};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use serde::Serialize;

#[derive(Serialize)]
struct Summary {
    winner: Option<Side>,
    player_shots: usize,
    ai_shots: usize,
    events: Vec<GameEvent>,
}

fn main() -> anyhow::Result<()> {
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 2 {
        eprintln!("Usage: {} <seed>", args[0]);
        std::process::exit(1);
    }
    let seed: u64 = args[1].parse()?;
    let mut rng = SmallRng::seed_from_u64(seed);

    let mut game = Game::new(&mut rng).map_err(|e| anyhow::anyhow!(e))?;
    let mut events: Vec<GameEvent> = Vec::new();

    while matches!(game.turn(), Turn::Player) {
        let Some((row, col)) = random_target(game.ai_board(), &mut rng) else {
            break;
        };
        game.player_guess(row, col, &mut rng, &mut events)
            .map_err(|e| anyhow::anyhow!(e))?;
    }

    let winner = match game.turn() {
        Turn::Over(side) => Some(side),
        _ => None,
    };
    let player_shots = events
        .iter()
        .filter(|e| {
            matches!(
                e,
                GameEvent::PlayerHit | GameEvent::PlayerSank { .. } | GameEvent::PlayerMissed
            )
        })
        .count();
    let ai_shots = events
        .iter()
        .filter(|e| {
            matches!(
                e,
                GameEvent::AiHit | GameEvent::AiSank { .. } | GameEvent::AiMissed
            )
        })
        .count();

    let summary = Summary {
        winner,
        player_shots,
        ai_shots,
        events,
    };
    println!("{}", serde_json::to_string(&summary)?);
    Ok(())
}
