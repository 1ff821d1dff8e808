//! Front ends for a human playing the engine: a ratatui terminal UI and a
//! plain line-based console game.

mod app;
pub mod console;
mod game_view;

pub use app::App;
