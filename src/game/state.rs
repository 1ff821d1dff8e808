use super::{has_four_in_a_row, Board, Player};
use crate::error::MoveError;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameOutcome {
    Winner(Player),
    Draw,
}

/// The live game: board, side to move, turns played and outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    current_player: Player,
    turns: usize,
    outcome: Option<GameOutcome>,
}

impl GameState {
    /// Create initial game state on a standard board
    pub fn initial() -> Self {
        Self::new(Board::new())
    }

    /// Start a game on the given (normally empty) board. Red moves first.
    pub fn new(board: Board) -> Self {
        GameState {
            board,
            current_player: Player::Red,
            turns: 0,
            outcome: None,
        }
    }

    /// Get current player
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Get reference to board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Number of pieces played so far
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Get game outcome if game is over
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Check if game is over
    pub fn is_terminal(&self) -> bool {
        self.outcome.is_some()
    }

    /// Get list of legal columns (not full)
    pub fn legal_actions(&self) -> Vec<usize> {
        if self.is_terminal() {
            return Vec::new();
        }
        self.board.legal_columns().collect()
    }

    /// Apply a move and return new state (immutable)
    pub fn apply_move(&self, column: usize) -> Result<GameState, MoveError> {
        let mut next = self.clone();
        next.apply_move_mut(column)?;
        Ok(next)
    }

    /// Apply move mutably (for UI efficiency)
    pub fn apply_move_mut(&mut self, column: usize) -> Result<(), MoveError> {
        if self.is_terminal() {
            return Err(MoveError::GameOver);
        }

        self.board.try_drop(column, self.current_player)?;
        self.turns += 1;

        if has_four_in_a_row(&self.board, self.current_player) {
            self.outcome = Some(GameOutcome::Winner(self.current_player));
        } else if self.board.is_full() {
            self.outcome = Some(GameOutcome::Draw);
        }

        self.current_player = self.current_player.other();

        Ok(())
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::Cell;

    #[test]
    fn test_initial_state() {
        let state = GameState::initial();
        assert_eq!(state.current_player(), Player::Red);
        assert_eq!(state.turns(), 0);
        assert!(!state.is_terminal());
        assert_eq!(state.legal_actions().len(), 7);
    }

    #[test]
    fn test_apply_move() {
        let state = GameState::initial();
        let new_state = state.apply_move(3).unwrap();

        assert_eq!(new_state.current_player(), Player::Yellow);
        assert_eq!(new_state.turns(), 1);
        assert_eq!(new_state.board().get(0, 3), Cell::Red);
        // The original is untouched
        assert_eq!(state.board().get(0, 3), Cell::Empty);
    }

    #[test]
    fn test_rejected_move_keeps_turn() {
        let mut state = GameState::initial();
        assert_eq!(state.apply_move_mut(9), Err(MoveError::InvalidColumn(9)));
        assert_eq!(state.current_player(), Player::Red);
        assert_eq!(state.turns(), 0);
    }

    #[test]
    fn test_win_detection() {
        let mut state = GameState::initial();

        // Red wins with horizontal line
        for col in 0..4 {
            state = state.apply_move(col).unwrap(); // Red
            if col < 3 {
                state = state.apply_move(col).unwrap(); // Yellow (row above)
            }
        }

        assert!(state.is_terminal());
        assert_eq!(state.outcome(), Some(GameOutcome::Winner(Player::Red)));
        assert!(state.legal_actions().is_empty());
        assert_eq!(state.apply_move(5), Err(MoveError::GameOver));
    }

    #[test]
    fn test_draw_on_full_board() {
        // 2x4 board: no line of four fits vertically or diagonally, and
        // alternating colours keep both rows mixed.
        let mut state = GameState::new(Board::with_size(2, 4));
        for col in [0, 1, 2, 3, 1, 0, 3, 2] {
            assert!(!state.is_terminal());
            state.apply_move_mut(col).unwrap();
        }

        assert_eq!(state.outcome(), Some(GameOutcome::Draw));
        assert_eq!(state.turns(), 8);
    }
}
