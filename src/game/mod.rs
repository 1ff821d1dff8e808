//! Core Connect Four game logic: board storage and gravity drops, line
//! enumeration and win detection, player types, and the turn-by-turn game
//! state.

mod board;
mod lines;
mod player;
mod state;

pub use board::{Board, Cell, COLS, ROWS};
pub use lines::{has_four_in_a_row, lines, Direction, Line, WIN_LENGTH};
pub use player::Player;
pub use state::{GameOutcome, GameState};
