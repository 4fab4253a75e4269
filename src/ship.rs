//! Ship definitions and placed-ship bookkeeping.

use core::fmt;

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship committed to a board: a straight contiguous run of
/// `length` cells starting at (`row`, `col`) in `orientation`, with
/// cumulative hits tracked against its length.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    row: usize,
    col: usize,
    orientation: Orientation,
    hit_count: usize,
}

impl Ship {
    pub(crate) fn new(ship_type: ShipType, row: usize, col: usize, orientation: Orientation) -> Self {
        Ship {
            ship_type,
            row,
            col,
            orientation,
            hit_count: 0,
        }
    }

    /// Ship's type.
    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    /// Origin of the ship (row, col).
    pub fn origin(&self) -> (usize, usize) {
        (self.row, self.col)
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Number of segments hit so far.
    pub fn hit_count(&self) -> usize {
        self.hit_count
    }

    /// Record one segment hit. Callers must not re-report a cell that was
    /// already hit; the board's repeat check guarantees this.
    pub(crate) fn register_hit(&mut self) {
        self.hit_count += 1;
    }

    /// Whether all segments have been hit.
    pub fn is_destroyed(&self) -> bool {
        self.hit_count == self.ship_type.length()
    }

    /// Iterate the coordinates of the ship's footprint, origin first.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (row, col, orientation) = (self.row, self.col, self.orientation);
        (0..self.ship_type.length()).map(move |i| match orientation {
            Orientation::Horizontal => (row, col + i),
            Orientation::Vertical => (row + i, col),
        })
    }

    /// Whether (`row`, `col`) lies on the ship's footprint.
    pub fn contains(&self, row: usize, col: usize) -> bool {
        self.cells().any(|(r, c)| r == row && c == col)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: ({}, {}), orientation: {:?}, hits: {}/{} }}",
            self.ship_type.name(),
            self.row,
            self.col,
            self.orientation,
            self.hit_count,
            self.ship_type.length(),
        )
    }
}
