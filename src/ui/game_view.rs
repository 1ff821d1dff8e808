use crate::game::{Board, Cell, GameState, Player};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    game_state: &GameState,
    selected_column: usize,
    message: &Option<String>,
    seats: &str,
) {
    let board = game_state.board();
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                    // Header
            Constraint::Min(board.rows() as u16 + 4), // Board
            Constraint::Length(3),                    // Message
            Constraint::Length(3),                    // Controls
        ])
        .split(frame.area());

    render_header(frame, game_state, seats, chunks[0]);
    render_board(frame, board, selected_column, chunks[1]);
    render_message(frame, message, chunks[2]);
    render_controls(frame, chunks[3]);
}

fn player_color(player: Player) -> Color {
    match player {
        Player::Red => Color::Red,
        Player::Yellow => Color::Yellow,
    }
}

fn render_header(frame: &mut Frame, game_state: &GameState, seats: &str, area: ratatui::layout::Rect) {
    let current_player = game_state.current_player();

    let status = if game_state.is_terminal() {
        format!("Game Over  |  {}", seats)
    } else {
        format!("Current Player: {}  |  {}", current_player.name(), seats)
    };

    let header = Paragraph::new(status)
        .style(
            Style::default()
                .fg(player_color(current_player))
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(frame: &mut Frame, board: &Board, selected_column: usize, area: ratatui::layout::Rect) {
    let cols = board.cols();
    let mut lines = Vec::new();

    // Column numbers with selection indicator
    let mut col_line = vec![Span::raw("   ")]; // Padding (3 chars to match "  ║")
    for col in 0..cols {
        let label = format!("{:^3}", col + 1);
        if col == selected_column {
            col_line.push(Span::styled(
                label,
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            ));
        } else {
            col_line.push(Span::raw(label));
        }
    }
    col_line.push(Span::raw("  ")); // Suffix padding to match " ║"
    lines.push(Line::from(col_line));

    let rule = "═".repeat(3 * cols + 1);
    lines.push(Line::from(format!("  ╔{rule}╗")));

    // Row 0 is the bottom, so draw from the top row down
    for row in (0..board.rows()).rev() {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..cols {
            let (symbol, color) = match board.get(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Red => (" ● ", Color::Red),
                Cell::Yellow => (" ● ", Color::Yellow),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from(format!("  ╚{rule}╝")));

    // Selection indicator
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..cols {
        if col == selected_column {
            indicator_line.push(Span::styled(" ▲ ", Style::default().fg(Color::Cyan)));
        } else {
            indicator_line.push(Span::raw("   "));
        }
    }
    indicator_line.push(Span::raw("  "));
    lines.push(Line::from(indicator_line));

    let board_widget = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(board_widget, area);
}

fn render_message(frame: &mut Frame, message: &Option<String>, area: ratatui::layout::Rect) {
    let text = message.as_deref().unwrap_or("");
    let msg_widget = Paragraph::new(text)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));

    frame.render_widget(msg_widget, area);
}

fn render_controls(frame: &mut Frame, area: ratatui::layout::Rect) {
    let controls = Paragraph::new(Line::from(
        "←/→: Move  |  Enter: Drop  |  1-9: Column  |  S: Swap seats  |  R: Restart  |  Q: Quit",
    ))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
