use battleship_solo::{Board, BoardError, CellView, Orientation, ShipType, ShotResult};

#[test]
fn test_rejects_zero_dimensions() {
    assert_eq!(Board::new(0, 10).unwrap_err(), BoardError::InvalidDimensions);
    assert_eq!(Board::new(10, 0).unwrap_err(), BoardError::InvalidDimensions);
    assert_eq!(Board::new(0, 0).unwrap_err(), BoardError::InvalidDimensions);
}

#[test]
fn test_rejects_out_of_bounds_run() {
    let mut board = Board::new(10, 10).unwrap();
    let def = ShipType::new("Test", 5);
    assert_eq!(
        board.place(def, 0, 6, Orientation::Horizontal).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    assert_eq!(
        board.place(def, 6, 0, Orientation::Vertical).unwrap_err(),
        BoardError::ShipOutOfBounds
    );
    // fits exactly at the edge
    assert!(board.place(def, 0, 5, Orientation::Horizontal).is_ok());
}

#[test]
fn test_rejects_touching_ships() {
    let mut board = Board::new(10, 10).unwrap();
    let def = ShipType::new("Test", 4);
    board.place(def, 0, 0, Orientation::Horizontal).unwrap();
    // directly below
    assert_eq!(
        board.place(def, 1, 0, Orientation::Horizontal).unwrap_err(),
        BoardError::ShipTooClose
    );
    // diagonal contact at (1, 4)
    assert_eq!(
        board.place(def, 1, 4, Orientation::Vertical).unwrap_err(),
        BoardError::ShipTooClose
    );
    // one-cell buffer respected
    assert!(board.place(def, 2, 0, Orientation::Horizontal).is_ok());
}

#[test]
fn test_fire_miss_and_bounds() {
    let mut board = Board::new(10, 10).unwrap();
    assert_eq!(board.fire(3, 3).unwrap(), ShotResult::Miss);
    assert_eq!(board.fire(3, 3).unwrap(), ShotResult::Repeat);
    assert_eq!(board.fire(10, 0).unwrap_err(), BoardError::OutOfBounds);
    assert_eq!(board.is_hit(10, 0).unwrap_err(), BoardError::OutOfBounds);
}

#[test]
fn test_close_off_marks_full_perimeter() {
    let mut board = Board::new(10, 10).unwrap();
    let def = ShipType::new("Test", 3);
    let id = board.place(def, 2, 2, Orientation::Horizontal).unwrap();
    board.fire(2, 2).unwrap();
    board.fire(2, 3).unwrap();
    assert_eq!(board.fire(2, 4).unwrap(), ShotResult::Sunk("Test"));
    // ring around rows 1..=3, cols 1..=5 is hit, end caps included
    for r in 1..=3 {
        for c in 1..=5 {
            assert!(board.is_hit(r, c).unwrap(), "({}, {}) not hit", r, c);
        }
    }
    // cells beyond the ring untouched
    assert!(!board.is_hit(0, 0).unwrap());
    assert!(!board.is_hit(4, 4).unwrap());
    assert!(board.is_destroyed(id).unwrap());
}

#[test]
fn test_close_off_clipped_at_edge() {
    let mut board = Board::new(10, 10).unwrap();
    let def = ShipType::new("Test", 2);
    board.place(def, 0, 0, Orientation::Vertical).unwrap();
    board.fire(0, 0).unwrap();
    assert_eq!(board.fire(1, 0).unwrap(), ShotResult::Sunk("Test"));
    for r in 0..=2 {
        for c in 0..=1 {
            assert!(board.is_hit(r, c).unwrap());
        }
    }
}

#[test]
fn test_close_off_is_idempotent() {
    let mut board = Board::new(10, 10).unwrap();
    let def = ShipType::new("Test", 2);
    let id = board.place(def, 5, 5, Orientation::Horizontal).unwrap();
    board.close_off(id).unwrap();
    let snapshot = board.clone();
    board.close_off(id).unwrap();
    assert_eq!(board, snapshot);
}

#[test]
fn test_fog_of_war_view() {
    let mut board = Board::new(10, 10).unwrap();
    let def = ShipType::new("Test", 2);
    board.place(def, 0, 0, Orientation::Horizontal).unwrap();
    // unhit ship cell: concealed unless revealed
    assert_eq!(board.view(0, 0, false).unwrap(), CellView::Water);
    assert_eq!(board.view(0, 0, true).unwrap(), CellView::Ship);
    board.fire(0, 0).unwrap();
    assert_eq!(board.view(0, 0, false).unwrap(), CellView::Hit);
    board.fire(5, 5).unwrap();
    assert_eq!(board.view(5, 5, false).unwrap(), CellView::Miss);
    assert_eq!(board.view(9, 9, false).unwrap(), CellView::Water);
}

#[test]
fn test_cell_counters() {
    let mut board = Board::new(10, 10).unwrap();
    let def = ShipType::new("Test", 2);
    board.place(def, 0, 0, Orientation::Horizontal).unwrap();
    assert_eq!(board.untargeted_cells(), 100);
    assert_eq!(board.hit_ship_cells(), 0);
    board.fire(0, 0).unwrap();
    board.fire(9, 9).unwrap();
    assert_eq!(board.untargeted_cells(), 98);
    assert_eq!(board.hit_ship_cells(), 1);
    assert!(!board.all_destroyed());
    board.fire(0, 1).unwrap();
    assert!(board.all_destroyed());
}
