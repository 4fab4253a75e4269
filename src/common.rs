//! Common types: board errors, game errors and shot results.

use core::fmt;

/// Outcome of firing at a single cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShotResult {
    /// The cell was already hit; nothing changed.
    Repeat,
    /// Shot landed on open water.
    Miss,
    /// Shot hit a ship segment without destroying the ship.
    Hit,
    /// Shot destroyed a ship, carrying its name.
    Sunk(&'static str),
}

/// Errors returned by Board operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BoardError {
    /// Board created with zero rows or columns.
    InvalidDimensions,
    /// Coordinate outside the grid.
    OutOfBounds,
    /// Ship run would extend past the board edge.
    ShipOutOfBounds,
    /// Ship run overlaps or touches another ship (8-neighborhood buffer).
    ShipTooClose,
    /// Random placement exhausted its safety cap.
    UnableToPlaceShip,
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::InvalidDimensions => write!(f, "Board dimensions must be positive"),
            BoardError::OutOfBounds => write!(f, "Coordinate is outside the board"),
            BoardError::ShipOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::ShipTooClose => {
                write!(f, "Ship placement overlaps or touches another ship")
            }
            BoardError::UnableToPlaceShip => write!(f, "Unable to place ship"),
        }
    }
}

impl std::error::Error for BoardError {}

/// Errors returned by the game controller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameError {
    /// Underlying board error (e.g., out-of-bounds guess).
    Board(BoardError),
    /// A guess was submitted after the game ended.
    GameOver,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "Board error: {}", e),
            GameError::GameOver => write!(f, "The game is already over"),
        }
    }
}

impl std::error::Error for GameError {}
