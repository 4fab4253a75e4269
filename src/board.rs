//! Game board state: cell grid, fleet placement and shot resolution.

use crate::common::{BoardError, ShotResult};
use crate::config::{FLEET, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Ship, ShipType};
use core::fmt;
use rand::Rng;

/// Index of a ship in the board's ship list. Cells refer to their ship by
/// id rather than by reference.
pub type ShipId = usize;

/// A single board cell. Coordinates are implicit in the cell's grid
/// position; only occupancy and hit state are stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    ship: Option<ShipId>,
    hit: bool,
}

impl Cell {
    /// Id of the ship occupying this cell, if any.
    pub fn ship(&self) -> Option<ShipId> {
        self.ship
    }

    /// Whether this cell has been hit.
    pub fn is_hit(&self) -> bool {
        self.hit
    }
}

/// How a cell appears to a renderer. With fog-of-war active, unhit ship
/// cells render as `Water`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellView {
    Water,
    Ship,
    Hit,
    Miss,
}

/// A rows x columns grid of cells plus the ships placed on it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>,
    ships: Vec<Ship>,
}

impl Board {
    /// Create an empty board with the given dimensions. Both dimensions
    /// must be positive.
    pub fn new(rows: usize, columns: usize) -> Result<Self, BoardError> {
        if rows == 0 || columns == 0 {
            return Err(BoardError::InvalidDimensions);
        }
        Ok(Board {
            rows,
            columns,
            cells: vec![Cell::default(); rows * columns],
            ships: Vec::new(),
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    /// The ships placed on this board, indexed by [`ShipId`].
    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, BoardError> {
        if row >= self.rows || col >= self.columns {
            return Err(BoardError::OutOfBounds);
        }
        Ok(row * self.columns + col)
    }

    /// The cell at (`row`, `col`), or `None` when out of bounds.
    pub fn get(&self, row: usize, col: usize) -> Option<&Cell> {
        self.index(row, col).ok().map(|i| &self.cells[i])
    }

    /// Whether the cell at (`row`, `col`) has been hit.
    pub fn is_hit(&self, row: usize, col: usize) -> Result<bool, BoardError> {
        Ok(self.cells[self.index(row, col)?].hit)
    }

    /// Coordinates of every cell a ship of `length` would occupy starting
    /// at (`row`, `col`) in `orientation`, or `ShipOutOfBounds` when the
    /// run does not fit.
    fn run_cells(
        &self,
        length: usize,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<Vec<(usize, usize)>, BoardError> {
        let fits = match orientation {
            Orientation::Horizontal => col + length <= self.columns,
            Orientation::Vertical => row + length <= self.rows,
        };
        if !fits || row >= self.rows || col >= self.columns {
            return Err(BoardError::ShipOutOfBounds);
        }
        Ok((0..length)
            .map(|i| match orientation {
                Orientation::Horizontal => (row, col + i),
                Orientation::Vertical => (row + i, col),
            })
            .collect())
    }

    /// Whether a ship run may be committed: every cell of the run and its
    /// full 8-neighborhood must be unoccupied. This keeps a one-cell
    /// buffer between ships; they never touch, not even diagonally.
    pub fn can_place(
        &self,
        ship_type: ShipType,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<bool, BoardError> {
        let run = self.run_cells(ship_type.length(), row, col, orientation)?;
        for (r, c) in run {
            for dr in -1i32..=1 {
                for dc in -1i32..=1 {
                    let nr = r as i32 + dr;
                    let nc = c as i32 + dc;
                    if nr < 0 || nc < 0 {
                        continue;
                    }
                    if let Some(cell) = self.get(nr as usize, nc as usize) {
                        if cell.ship.is_some() {
                            return Ok(false);
                        }
                    }
                }
            }
        }
        Ok(true)
    }

    /// Commit a ship to the board, recording its id on every occupied cell.
    pub fn place(
        &mut self,
        ship_type: ShipType,
        row: usize,
        col: usize,
        orientation: Orientation,
    ) -> Result<ShipId, BoardError> {
        if !self.can_place(ship_type, row, col, orientation)? {
            return Err(BoardError::ShipTooClose);
        }
        let id = self.ships.len();
        let ship = Ship::new(ship_type, row, col, orientation);
        for (r, c) in self.run_cells(ship_type.length(), row, col, orientation)? {
            let i = self.index(r, c)?;
            self.cells[i].ship = Some(id);
        }
        self.ships.push(ship);
        Ok(id)
    }

    /// Returns a random valid (row, col, Orientation) for `ship_type` by
    /// rejection sampling, bounded by the placement safety cap.
    pub fn random_placement<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        ship_type: ShipType,
    ) -> Result<(usize, usize, Orientation), BoardError> {
        let len = ship_type.length();
        let fits_horizontal = len <= self.columns;
        let fits_vertical = len <= self.rows;
        if !fits_horizontal && !fits_vertical {
            return Err(BoardError::ShipOutOfBounds);
        }
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let orientation = if fits_horizontal && fits_vertical {
                if rng.random() {
                    Orientation::Horizontal
                } else {
                    Orientation::Vertical
                }
            } else if fits_horizontal {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_r, max_c) = match orientation {
                Orientation::Horizontal => (self.rows - 1, self.columns - len),
                Orientation::Vertical => (self.rows - len, self.columns - 1),
            };
            let row = rng.random_range(0..=max_r);
            let col = rng.random_range(0..=max_c);
            if self.can_place(ship_type, row, col, orientation)? {
                return Ok((row, col, orientation));
            }
        }
        Err(BoardError::UnableToPlaceShip)
    }

    /// Place the configured fleet in order using rejection sampling.
    pub fn place_fleet<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), BoardError> {
        for ship_type in FLEET {
            let (row, col, orientation) = self.random_placement(rng, ship_type)?;
            let id = self.place(ship_type, row, col, orientation)?;
            log::debug!(
                "placed {} (id {}) at ({}, {}) {:?}",
                ship_type.name(),
                id,
                row,
                col,
                orientation
            );
        }
        Ok(())
    }

    /// Resolve a shot at (`row`, `col`). An already-hit cell is reported as
    /// `Repeat` and changes nothing; hit bookkeeping is never
    /// double-counted. Destroying a ship closes off its surroundings.
    pub fn fire(&mut self, row: usize, col: usize) -> Result<ShotResult, BoardError> {
        let i = self.index(row, col)?;
        if self.cells[i].hit {
            return Ok(ShotResult::Repeat);
        }
        self.cells[i].hit = true;
        match self.cells[i].ship {
            Some(id) => {
                self.ships[id].register_hit();
                if self.ships[id].is_destroyed() {
                    self.close_off(id)?;
                    Ok(ShotResult::Sunk(self.ships[id].ship_type().name()))
                } else {
                    Ok(ShotResult::Hit)
                }
            }
            None => Ok(ShotResult::Miss),
        }
    }

    /// Whether the ship with `id` has had all its segments hit.
    pub fn is_destroyed(&self, id: ShipId) -> Result<bool, BoardError> {
        self.ships
            .get(id)
            .map(Ship::is_destroyed)
            .ok_or(BoardError::OutOfBounds)
    }

    /// Mark the one-cell ring around a ship's footprint (including the two
    /// end caps along its axis) as hit, even where empty. The placement
    /// buffer guarantees the ring never holds another ship's cell.
    /// Idempotent: re-marking an already-hit cell is a no-op.
    pub fn close_off(&mut self, id: ShipId) -> Result<(), BoardError> {
        let ship = *self.ships.get(id).ok_or(BoardError::OutOfBounds)?;
        for (r, c) in ship.cells() {
            for dr in -1i32..=1 {
                for dc in -1i32..=1 {
                    let nr = r as i32 + dr;
                    let nc = c as i32 + dc;
                    if nr < 0 || nc < 0 {
                        continue;
                    }
                    if let Ok(i) = self.index(nr as usize, nc as usize) {
                        self.cells[i].hit = true;
                    }
                }
            }
        }
        Ok(())
    }

    /// Count of hit cells that hold a ship segment; the win check compares
    /// this against the fleet's total cell count.
    pub fn hit_ship_cells(&self) -> usize {
        self.cells
            .iter()
            .filter(|cell| cell.hit && cell.ship.is_some())
            .count()
    }

    /// Count of cells not yet hit; the AI's sampling domain.
    pub fn untargeted_cells(&self) -> usize {
        self.cells.iter().filter(|cell| !cell.hit).count()
    }

    /// Whether every ship on the board has been destroyed.
    pub fn all_destroyed(&self) -> bool {
        !self.ships.is_empty() && self.ships.iter().all(Ship::is_destroyed)
    }

    /// How the cell at (`row`, `col`) appears to a renderer. With `reveal`
    /// false the fog-of-war rule applies: unhit ship cells are never
    /// revealed.
    pub fn view(&self, row: usize, col: usize, reveal: bool) -> Result<CellView, BoardError> {
        let cell = self.cells[self.index(row, col)?];
        Ok(match (cell.hit, cell.ship.is_some()) {
            (true, true) => CellView::Hit,
            (true, false) => CellView::Miss,
            (false, true) if reveal => CellView::Ship,
            _ => CellView::Water,
        })
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in 0..self.rows {
            for c in 0..self.columns {
                let cell = &self.cells[r * self.columns + c];
                let ch = match (cell.hit, cell.ship.is_some()) {
                    (true, true) => 'X',
                    (true, false) => 'o',
                    (false, true) => 'S',
                    (false, false) => '.',
                };
                write!(f, "{}", ch)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
