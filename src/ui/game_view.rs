use crate::game::{Board, Cell, GameStatus, COLS, ROWS};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn render(
    frame: &mut Frame,
    board: &Board,
    selected_column: usize,
    hint_column: Option<usize>,
    status_line: &str,
    stats_line: &str,
    message: &Option<String>,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(11),   // Board
            Constraint::Length(3), // Statistics
            Constraint::Length(3), // Message
            Constraint::Length(4), // Controls
        ])
        .split(frame.area());

    render_header(frame, board.status(), status_line, chunks[0]);
    render_board(frame, board, selected_column, hint_column, chunks[1]);
    render_stats(frame, stats_line, chunks[2]);
    render_message(frame, message, chunks[3]);
    render_controls(frame, chunks[4]);
}

fn render_header(
    frame: &mut Frame,
    status: GameStatus,
    status_line: &str,
    area: ratatui::layout::Rect,
) {
    let color = match status {
        GameStatus::RedTurn | GameStatus::RedWins => Color::Red,
        GameStatus::BlackTurn | GameStatus::BlackWins => Color::White,
        GameStatus::Tie => Color::Yellow,
    };

    let header = Paragraph::new(status_line.to_string())
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Connect Four"));

    frame.render_widget(header, area);
}

fn render_board(
    frame: &mut Frame,
    board: &Board,
    selected_column: usize,
    hint_column: Option<usize>,
    area: ratatui::layout::Rect,
) {
    let mut lines = Vec::new();

    // Column numbers; the selection is cyan, a pending hint green.
    let mut col_line = vec![Span::raw("   ")];
    for col in 0..COLS {
        let style = if hint_column == Some(col) {
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else if col == selected_column {
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default()
        };
        col_line.push(Span::styled(format!(" {} ", col + 1), style));
    }
    col_line.push(Span::raw("  "));
    lines.push(Line::from(col_line));

    lines.push(Line::from("  ╔══════════════════════╗"));

    for row in 0..ROWS {
        let mut row_spans = vec![Span::raw("  ║")];

        for col in 0..COLS {
            // True black is invisible on dark terminals; Black renders
            // white.
            let (symbol, color) = match board.hole(row, col) {
                Cell::Empty => (" . ", Color::DarkGray),
                Cell::Red => (" ● ", Color::Red),
                Cell::Black => (" ● ", Color::White),
            };
            row_spans.push(Span::styled(symbol, Style::default().fg(color)));
        }

        row_spans.push(Span::raw(" ║"));
        lines.push(Line::from(row_spans));
    }

    lines.push(Line::from("  ╚══════════════════════╝"));

    // Selection indicator under the board.
    let mut indicator_line = vec![Span::raw("   ")];
    for col in 0..COLS {
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

fn render_stats(frame: &mut Frame, stats_line: &str, area: ratatui::layout::Rect) {
    let stats_widget = Paragraph::new(stats_line.to_string())
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Statistics"));

    frame.render_widget(stats_widget, area);
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
    let line1 = Line::from("←/→: Move  |  Enter: Drop  |  U: Undo  |  H: Hint");
    let line2 = Line::from("C: Clear  |  M: Mode  |  +/-: Difficulty  |  S: Reset Stats  |  Q: Quit");

    let controls = Paragraph::new(vec![line1, line2])
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title("Controls"));

    frame.render_widget(controls, area);
}
