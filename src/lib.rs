mod ai;
mod board;
mod common;
mod config;
mod game;
mod logging;
mod ship;
mod ui;

pub use ai::*;
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
pub use logging::init_logging;
pub use ship::*;
pub use ui::*;
