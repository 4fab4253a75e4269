//! Random-guessing opponent logic.

use crate::board::Board;
use rand::Rng;

/// Pick a uniformly random untargeted cell by rejection sampling. The
/// domain is finite and shrinks with every shot, so the loop terminates;
/// returns `None` only when every cell has already been hit.
pub fn random_target<R: Rng + ?Sized>(board: &Board, rng: &mut R) -> Option<(usize, usize)> {
    if board.untargeted_cells() == 0 {
        return None;
    }
    loop {
        let row = rng.random_range(0..board.rows());
        let col = rng.random_range(0..board.columns());
        if !board.is_hit(row, col).unwrap_or(true) {
            return Some((row, col));
        }
    }
}
