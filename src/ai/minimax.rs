use crate::game::GameState;

use super::agent::Agent;
use super::heuristic::{Heuristic, LineHeuristic};
use super::search::{Searcher, DEFAULT_DEPTH, FULL_WINDOW};

/// Computer opponent: alpha-beta minimax rooted at the side to move.
pub struct MinimaxAgent {
    depth: usize,
    heuristic: Box<dyn Heuristic>,
}

impl MinimaxAgent {
    pub fn new(depth: usize) -> Self {
        MinimaxAgent {
            depth,
            heuristic: Box::new(LineHeuristic),
        }
    }

    pub fn with_heuristic(depth: usize, heuristic: Box<dyn Heuristic>) -> Self {
        MinimaxAgent { depth, heuristic }
    }

    pub fn depth(&self) -> usize {
        self.depth
    }
}

impl Default for MinimaxAgent {
    fn default() -> Self {
        Self::new(DEFAULT_DEPTH)
    }
}

impl Agent for MinimaxAgent {
    fn select_column(&mut self, state: &GameState) -> Option<usize> {
        if state.is_terminal() {
            return None;
        }
        let side = state.current_player();
        let (alpha, beta) = FULL_WINDOW;
        Searcher::new(side, self.heuristic.as_ref())
            .search(state.board(), self.depth, alpha, beta, side)
            .column
    }

    fn name(&self) -> &str {
        "Minimax"
    }
}
