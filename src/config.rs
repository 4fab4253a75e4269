use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const NUM_SHIPS: usize = 3;
pub const FLEET: [ShipType; NUM_SHIPS] = [
    ShipType::new("Battleship", 5),
    ShipType::new("Destroyer", 4),
    ShipType::new("Destroyer", 4),
];

/// Total number of ship cells in the standard fleet. A board whose hit ship
/// cells reach this count has lost its entire fleet.
pub const TOTAL_SHIP_CELLS: usize = 5 + 4 + 4;

/// Safety cap on placement rejection sampling. The fixed fleet on a 10x10
/// board always places within a handful of attempts; exhausting the cap
/// signals a configuration defect, not bad luck.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 10_000;
