use crate::game::GameState;

/// Universal interface for anything that can play a turn.
pub trait Agent {
    /// Select a column given the current game state, or `None` if the agent
    /// has nothing to play (terminal or full board).
    fn select_column(&mut self, state: &GameState) -> Option<usize>;

    /// Return the agent's display name.
    fn name(&self) -> &str;
}
