//! Line-based game on stdin/stdout: the human types column numbers, the
//! computer answers with a minimax move, and the board is reprinted after
//! every piece.

use std::io::{self, BufRead, Write};

use crate::ai::{Agent, MinimaxAgent};
use crate::config::AppConfig;
use crate::error::{InputError, MoveError};
use crate::game::{Board, GameOutcome, GameState};

/// Parse a typed column (0-based) and check it can take a piece.
pub fn parse_column(input: &str, board: &Board) -> Result<usize, InputError> {
    let max = board.cols().saturating_sub(1);
    let col: usize = input
        .trim()
        .parse()
        .map_err(|_| InputError::NotANumber { max })?;
    if col >= board.cols() {
        return Err(MoveError::InvalidColumn(col).into());
    }
    if board.is_column_full(col) {
        return Err(MoveError::ColumnFull(col).into());
    }
    Ok(col)
}

/// Play one game. Returns `None` if the input ends before the game does.
pub fn run<R: BufRead, W: Write>(
    config: &AppConfig,
    mut input: R,
    mut output: W,
) -> io::Result<Option<GameOutcome>> {
    let computer = config.play.computer;
    let mut agent = MinimaxAgent::new(config.search.depth);
    let mut state = GameState::new(config.board.build());
    let mut line = String::new();

    writeln!(output, "{}", state.board())?;
    while !state.is_terminal() {
        let col = if state.current_player() == computer {
            writeln!(output, "AI is thinking about a move...")?;
            match agent.select_column(&state) {
                Some(col) => col,
                None => break,
            }
        } else {
            write!(output, "Enter a column: ")?;
            output.flush()?;
            line.clear();
            if input.read_line(&mut line)? == 0 {
                writeln!(output)?;
                return Ok(None);
            }
            match parse_column(&line, state.board()) {
                Ok(col) => col,
                Err(e) => {
                    writeln!(output, "{e}\n\n")?;
                    continue;
                }
            }
        };

        if let Err(e) = state.apply_move_mut(col) {
            writeln!(output, "{e}")?;
            continue;
        }
        writeln!(output)?;
        writeln!(output, "{}", state.board())?;
    }

    match state.outcome() {
        Some(GameOutcome::Winner(player)) if player == computer => writeln!(output, "AI Wins!")?,
        Some(GameOutcome::Winner(_)) => writeln!(output, "Player Wins!")?,
        Some(GameOutcome::Draw) => writeln!(output, "Draw!")?,
        None => {}
    }
    Ok(state.outcome())
}
