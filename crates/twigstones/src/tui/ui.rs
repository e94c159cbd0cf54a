//! Stateless UI rendering.

use super::app::{App, side_name};
use super::input::KEY_HELP;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use twigstones_core::{Cell, Mark, Square};

/// Draws the whole screen from the app state.
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),  // Title
            Constraint::Length(1),  // Scores
            Constraint::Min(13),    // Board (+ history)
            Constraint::Length(3),  // Status
            Constraint::Length(1),  // Footer
            Constraint::Length(1),  // Help
        ])
        .split(frame.area());

    let title = Paragraph::new("Twigs & Stones")
        .style(Style::default().fg(Color::Green).add_modifier(Modifier::BOLD))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::BOTTOM));
    frame.render_widget(title, chunks[0]);

    draw_scores(frame, chunks[1], app);

    let middle = if app.show_history() {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(40), Constraint::Length(24)])
            .split(chunks[2])
    } else {
        Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(40)])
            .split(chunks[2])
    };
    draw_board(frame, middle[0], app);
    if app.show_history() {
        draw_history(frame, middle[1], app);
    }

    let status = match app.hint() {
        Some(hint) => format!("{}  ({})", app.status_text(), hint),
        None => app.status_text(),
    };
    let status = Paragraph::new(status)
        .style(Style::default().fg(Color::Yellow))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
    frame.render_widget(status, chunks[3]);

    let footer = format!("{} • Difficulty: {}", app.footer_text(), app.difficulty());
    frame.render_widget(
        Paragraph::new(footer)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        chunks[4],
    );
    frame.render_widget(
        Paragraph::new(KEY_HELP)
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center),
        chunks[5],
    );
}

fn draw_scores(frame: &mut Frame, area: Rect, app: &App) {
    let score = app.engine().scoreboard();
    let line = Line::from(vec![
        Span::styled(
            format!("{} {}", side_name(Mark::X), score.wins_x()),
            mark_style(Mark::X),
        ),
        Span::raw("   "),
        Span::styled(format!("Draws {}", score.draws()), Style::default().fg(Color::Gray)),
        Span::raw("   "),
        Span::styled(
            format!("{} {}", side_name(Mark::O), score.wins_o()),
            mark_style(Mark::O),
        ),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}

fn draw_board(frame: &mut Frame, area: Rect, app: &App) {
    let board_area = center_rect(area, 40, 11);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(3),
        ])
        .split(board_area);

    for row in 0..3 {
        draw_row(frame, rows[row * 2], app, row);
        if row < 2 {
            draw_separator(frame, rows[row * 2 + 1]);
        }
    }
}

fn draw_row(frame: &mut Frame, area: Rect, app: &App, row: usize) {
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
            Constraint::Length(1),
            Constraint::Length(12),
        ])
        .split(area);

    for col in 0..3 {
        if let Some(cell) = Cell::from_row_col(row, col) {
            draw_cell(frame, cols[col * 2], app, cell);
        }
        if col < 2 {
            draw_separator_vertical(frame, cols[col * 2 + 1]);
        }
    }
}

fn draw_cell(frame: &mut Frame, area: Rect, app: &App, cell: Cell) {
    let engine = app.engine();
    let winning = engine
        .outcome()
        .winning_line()
        .is_some_and(|line| line.contains(cell));

    let (symbol, mut style) = match (engine.board().get(cell), app.preview(cell)) {
        (Square::Occupied(mark), _) => (format!(" {} ", mark), mark_style(mark)),
        (Square::Empty, Some(mark)) => (
            format!(" {} ", mark),
            Style::default().fg(Color::DarkGray).add_modifier(Modifier::DIM),
        ),
        (Square::Empty, None) => (format!(" {} ", cell.index() + 1), Style::default().fg(Color::DarkGray)),
    };

    if winning {
        style = style.bg(Color::Yellow).fg(Color::Black);
    } else if cell == app.cursor() {
        style = style.bg(Color::White).fg(Color::Black);
    }

    let paragraph =
        Paragraph::new(Line::from(Span::styled(symbol, style))).alignment(Alignment::Center);
    frame.render_widget(paragraph, center_rect(area, area.width, 1));
}

fn draw_history(frame: &mut Frame, area: Rect, app: &App) {
    let lines: Vec<Line> = app.history_lines().into_iter().map(Line::from).collect();
    let panel = Paragraph::new(lines).block(Block::default().title("History").borders(Borders::ALL));
    frame.render_widget(panel, area);
}

fn mark_style(mark: Mark) -> Style {
    let color = match mark {
        Mark::X => Color::Green,
        Mark::O => Color::Gray,
    };
    Style::default().fg(color).add_modifier(Modifier::BOLD)
}

fn draw_separator(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new("──────────────────────────────────────")
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn draw_separator_vertical(frame: &mut Frame, area: Rect) {
    let sep = Paragraph::new(vec![Line::from("│"), Line::from("│"), Line::from("│")])
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(sep, area);
}

fn center_rect(area: Rect, width: u16, height: u16) -> Rect {
    let vert = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(area.height.saturating_sub(height) / 2),
            Constraint::Length(height),
            Constraint::Min(0),
        ])
        .split(area);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(area.width.saturating_sub(width) / 2),
            Constraint::Length(width),
            Constraint::Min(0),
        ])
        .split(vert[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::tui::input::Action;
    use ratatui::{Terminal, backend::TestBackend};
    use std::time::Instant;

    fn screen_text(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 24)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content()
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_renders_status_and_footer() {
        let mut app = App::new(&AppConfig::default());
        app.handle(Action::Place(Cell::Center), Instant::now());
        let text = screen_text(&app);
        assert!(text.contains("Twigs & Stones"));
        assert!(text.contains("Current Turn: Stones (O)"));
        assert!(text.contains("Total Moves: 1"));
    }

    #[test]
    fn test_renders_history_panel() {
        let mut app = App::new(&AppConfig::default());
        let now = Instant::now();
        app.handle(Action::Place(Cell::TopLeft), now);
        app.handle(Action::ToggleHistory, now);
        let text = screen_text(&app);
        assert!(text.contains("History"));
        assert!(text.contains("1. X → 0"));
    }
}
