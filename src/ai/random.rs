use crate::game::GameState;
use rand::rngs::StdRng;
use rand::Rng;
use rand::SeedableRng;

use super::agent::Agent;

/// An agent that selects uniformly at random from legal columns.
pub struct RandomAgent {
    rng: StdRng,
}

impl RandomAgent {
    pub fn new() -> Self {
        RandomAgent {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Reproducible agent for tests and demos
    pub fn seeded(seed: u64) -> Self {
        RandomAgent {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomAgent {
    fn default() -> Self {
        Self::new()
    }
}

impl Agent for RandomAgent {
    fn select_column(&mut self, state: &GameState) -> Option<usize> {
        let actions = state.legal_actions();
        if actions.is_empty() {
            return None;
        }
        let idx = self.rng.random_range(0..actions.len());
        Some(actions[idx])
    }

    fn name(&self) -> &str {
        "Random"
    }
}
