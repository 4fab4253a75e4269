//! Turn state machine driving a game of human vs. random-guessing AI.

use crate::{
    ai,
    board::Board,
    common::{GameError, ShotResult},
    config::{BOARD_SIZE, TOTAL_SHIP_CELLS},
};
use core::fmt;
use rand::Rng;
use serde::Serialize;

/// The two sides of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Player,
    Ai,
}

/// Whose move it is, or who won.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Turn {
    Player,
    Ai,
    Over(Side),
}

/// Events emitted while resolving guesses. `Display` renders the
/// user-facing message for each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameEvent {
    AlreadyTargeted,
    PlayerHit,
    PlayerSank { ship: &'static str },
    PlayerMissed,
    AiHit,
    AiSank { ship: &'static str },
    AiMissed,
    PlayerWins,
    AiWins,
}

impl fmt::Display for GameEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameEvent::AlreadyTargeted => write!(f, "You have already targeted this spot!"),
            GameEvent::PlayerHit => write!(f, "You hit the AI's ship!"),
            GameEvent::PlayerSank { ship } => write!(f, "You destroyed the AI's {}!", ship),
            GameEvent::PlayerMissed => write!(f, "You missed!"),
            GameEvent::AiHit => write!(f, "AI hit your ship!"),
            GameEvent::AiSank { ship } => write!(f, "AI destroyed your {}!", ship),
            GameEvent::AiMissed => write!(f, "AI missed!"),
            GameEvent::PlayerWins => write!(f, "You win!"),
            GameEvent::AiWins => write!(f, "AI wins!"),
        }
    }
}

/// Receiver for game events; the seam between the core and whatever log
/// or UI surface displays them.
pub trait EventSink {
    fn publish(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn publish(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Full game state: both boards and the turn. No globals; multiple games
/// can run side by side.
pub struct Game {
    player_board: Board,
    ai_board: Board,
    turn: Turn,
}

impl Game {
    /// Create a game with two standard boards and randomly placed fleets.
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Result<Self, GameError> {
        let mut player_board = Board::new(BOARD_SIZE, BOARD_SIZE)?;
        let mut ai_board = Board::new(BOARD_SIZE, BOARD_SIZE)?;
        player_board.place_fleet(rng)?;
        ai_board.place_fleet(rng)?;
        Ok(Self::with_boards(player_board, ai_board))
    }

    /// Create a game from prepared boards. Used for deterministic setups.
    pub fn with_boards(player_board: Board, ai_board: Board) -> Self {
        Game {
            player_board,
            ai_board,
            turn: Turn::Player,
        }
    }

    pub fn player_board(&self) -> &Board {
        &self.player_board
    }

    pub fn ai_board(&self) -> &Board {
        &self.ai_board
    }

    pub fn turn(&self) -> Turn {
        self.turn
    }

    /// Resolve one player guess against the AI board as a single
    /// indivisible step: on a miss the AI plays out its whole turn (guessing
    /// again after each of its hits) before control returns. Afterwards the
    /// game is back at `Turn::Player` or finished.
    ///
    /// Re-targeting an already-hit cell consumes the input without passing
    /// the turn. Coordinates are expected to be pre-validated; out-of-bounds
    /// input surfaces as a board error.
    pub fn player_guess<R: Rng + ?Sized>(
        &mut self,
        row: usize,
        col: usize,
        rng: &mut R,
        sink: &mut dyn EventSink,
    ) -> Result<(), GameError> {
        if matches!(self.turn, Turn::Over(_)) {
            return Err(GameError::GameOver);
        }
        match self.ai_board.fire(row, col)? {
            ShotResult::Repeat => {
                sink.publish(GameEvent::AlreadyTargeted);
                return Ok(());
            }
            ShotResult::Hit => sink.publish(GameEvent::PlayerHit),
            ShotResult::Sunk(ship) => sink.publish(GameEvent::PlayerSank { ship }),
            ShotResult::Miss => {
                sink.publish(GameEvent::PlayerMissed);
                self.turn = Turn::Ai;
            }
        }
        self.check_game_over(sink);
        while matches!(self.turn, Turn::Ai) {
            self.ai_turn(rng, sink)?;
        }
        Ok(())
    }

    /// One AI guess against the player board. A hit keeps the turn with
    /// the AI; a miss hands it back.
    fn ai_turn<R: Rng + ?Sized>(
        &mut self,
        rng: &mut R,
        sink: &mut dyn EventSink,
    ) -> Result<(), GameError> {
        let Some((row, col)) = ai::random_target(&self.player_board, rng) else {
            // Board exhausted without a win; nothing left to guess.
            self.turn = Turn::Player;
            return Ok(());
        };
        log::debug!("ai guesses ({}, {})", row, col);
        match self.player_board.fire(row, col)? {
            ShotResult::Hit => sink.publish(GameEvent::AiHit),
            ShotResult::Sunk(ship) => sink.publish(GameEvent::AiSank { ship }),
            ShotResult::Miss => {
                sink.publish(GameEvent::AiMissed);
                self.turn = Turn::Player;
            }
            // random_target never returns an already-hit cell
            ShotResult::Repeat => {}
        }
        self.check_game_over(sink);
        Ok(())
    }

    /// Declare a winner once a fleet's 13 cells are all hit. The AI board
    /// is checked first, so a simultaneous count favors the player. Emits
    /// exactly one terminal event.
    fn check_game_over(&mut self, sink: &mut dyn EventSink) {
        if matches!(self.turn, Turn::Over(_)) {
            return;
        }
        if self.ai_board.hit_ship_cells() >= TOTAL_SHIP_CELLS {
            self.turn = Turn::Over(Side::Player);
            sink.publish(GameEvent::PlayerWins);
        } else if self.player_board.hit_ship_cells() >= TOTAL_SHIP_CELLS {
            self.turn = Turn::Over(Side::Ai);
            sink.publish(GameEvent::AiWins);
        }
    }
}
