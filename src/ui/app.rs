use crate::ai::{Agent, MinimaxAgent};
use crate::config::AppConfig;
use crate::game::{GameOutcome, GameState, Player};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{backend::Backend, Terminal};
use std::io;

pub struct App {
    config: AppConfig,
    game_state: GameState,
    computer: Player,
    agent: MinimaxAgent,
    selected_column: usize,
    thinking: bool,
    should_quit: bool,
    message: Option<String>,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        App {
            game_state: GameState::new(config.board.build()),
            computer: config.play.computer,
            agent: MinimaxAgent::new(config.search.depth),
            selected_column: config.board.cols / 2, // Start in middle
            thinking: false,
            should_quit: false,
            message: None,
            config,
        }
    }

    /// Main application loop
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()>
    where
        B::Error: Into<io::Error>,
    {
        loop {
            terminal.draw(|f| self.render(f)).map_err(Into::into)?;

            if self.should_quit {
                break;
            }

            // The "thinking" frame is drawn before the search blocks the loop.
            if self.computer_to_move() {
                if self.thinking {
                    self.computer_turn();
                } else {
                    self.thinking = true;
                }
                continue;
            }

            self.handle_events()?;
        }
        Ok(())
    }

    fn computer_to_move(&self) -> bool {
        !self.game_state.is_terminal() && self.game_state.current_player() == self.computer
    }

    /// Handle keyboard events
    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(std::time::Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key(key);
                }
            }
        }
        Ok(())
    }

    /// Handle key press
    fn handle_key(&mut self, key: KeyEvent) {
        // Clear message on any key press
        self.message = None;
        let cols = self.game_state.board().cols();

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Left => {
                self.selected_column = self.selected_column.saturating_sub(1);
            }
            KeyCode::Right => {
                if self.selected_column + 1 < cols {
                    self.selected_column += 1;
                }
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                self.drop_piece();
            }
            KeyCode::Char(c @ '1'..='9') => {
                let col = c as usize - '1' as usize;
                if col < cols {
                    self.selected_column = col;
                    self.drop_piece();
                }
            }
            KeyCode::Char('s') => {
                self.computer = self.computer.other();
                self.message = Some(format!("You now play {}.", self.computer.other().name()));
            }
            KeyCode::Char('r') => {
                self.game_state = GameState::new(self.config.board.build());
                self.selected_column = cols / 2;
                self.message = Some("New game started!".to_string());
            }
            _ => {}
        }
    }

    /// Drop the human's piece in the selected column
    fn drop_piece(&mut self) {
        if self.game_state.is_terminal() {
            self.message = Some("Game over! Press 'r' to restart.".to_string());
            return;
        }

        match self.game_state.apply_move_mut(self.selected_column) {
            Ok(()) => self.report_outcome(),
            Err(e) => self.message = Some(e.to_string()),
        }
    }

    /// Let the engine pick and play a column
    fn computer_turn(&mut self) {
        self.thinking = false;
        let Some(col) = self.agent.select_column(&self.game_state) else {
            return;
        };
        match self.game_state.apply_move_mut(col) {
            Ok(()) => {
                self.message = Some(format!("Computer played column {}.", col + 1));
                self.report_outcome();
            }
            Err(e) => self.message = Some(format!("Computer move rejected: {e}")),
        }
    }

    fn report_outcome(&mut self) {
        if let Some(outcome) = self.game_state.outcome() {
            self.message = Some(match outcome {
                GameOutcome::Winner(player) if player == self.computer => {
                    format!("{} (computer) wins!", player.name())
                }
                GameOutcome::Winner(player) => format!("{} (you) win!", player.name()),
                GameOutcome::Draw => "It's a draw!".to_string(),
            });
        }
    }

    /// Render the UI
    fn render(&self, frame: &mut ratatui::Frame) {
        let seats = format!(
            "You: {}  |  Computer: {} (depth {})",
            self.computer.other().name(),
            self.computer.name(),
            self.agent.depth()
        );
        let message = if self.thinking {
            Some(format!("{} is thinking...", self.computer.name()))
        } else {
            self.message.clone()
        };
        super::game_view::render(
            frame,
            &self.game_state,
            self.selected_column,
            &message,
            &seats,
        );
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(AppConfig::default())
    }
}
