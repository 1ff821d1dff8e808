//! The computer opponent: line heuristic, alpha-beta minimax search, and the
//! agents that play through them.

mod agent;
pub mod heuristic;
mod minimax;
mod random;
pub mod search;

pub use agent::Agent;
pub use heuristic::{score_board, score_line, Heuristic, LineHeuristic, LineTally};
pub use minimax::MinimaxAgent;
pub use random::RandomAgent;
pub use search::{choose_column, SearchResult, SearchStats, Searcher, DEFAULT_DEPTH, FULL_WINDOW};
