//! Terminal rendering of boards. The AI board is drawn with fog-of-war
//! active; the player's own board is fully revealed.

use crate::board::{Board, CellView};
use crate::game::Game;

fn print_board(board: &Board, reveal: bool) {
    println!("    ╔═══════════════════════╗");
    print!("    ║  ");
    for c in 0..board.columns() {
        let ch = (b'A' + c as u8) as char;
        print!(" {}", ch);
    }
    println!(" ║");
    println!("    ╠═══════════════════════╣");
    for r in 0..board.rows() {
        print!("    ║ {:2}", r + 1);
        for c in 0..board.columns() {
            let ch = match board.view(r, c, reveal).unwrap_or(CellView::Water) {
                CellView::Hit => 'X',
                CellView::Miss => 'o',
                CellView::Ship => 'S',
                CellView::Water => '.',
            };
            print!(" {}", ch);
        }
        println!(" ║");
    }
    println!("    ╚═══════════════════════╝");

    if reveal {
        println!("    Legend: S=Ship  X=Hit  o=Miss  .=Water");
    } else {
        println!("    Legend: X=Hit  o=Miss  .=Unknown");
    }
}

/// Display the AI board (top, concealed) and the player's board (bottom,
/// revealed with per-ship status).
pub fn print_player_view(game: &Game) {
    println!("AI board:");
    print_board(game.ai_board(), false);
    println!("\nYour board:");
    print_board(game.player_board(), true);
    println!("\n    Ships:");
    for ship in game.player_board().ships() {
        let def = ship.ship_type();
        let status = if ship.is_destroyed() { "SUNK" } else { "Active" };
        println!("      {} ({}): {}", def.name(), def.length(), status);
    }
}
