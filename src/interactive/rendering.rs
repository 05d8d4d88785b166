//! TUI rendering with ratatui
//!
//! Clue panel, the guess board and the message log.

use super::app::{App, InputMode, MessageStyle};
use crate::core::{Feedback, GuessDraft};
use crate::engine::{GameSession, ScoredRow};
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Wrap},
};

const BOOK_WIDTH: usize = 18;

/// Rows on the board: the session's limit, which is never below one
fn board_rows(app: &App) -> usize {
    app.game
        .session()
        .map_or(app.game.config().attempts_max, GameSession::attempts_max)
        .max(1)
}

fn board_height(app: &App) -> u16 {
    u16::try_from(board_rows(app))
        .unwrap_or(u16::MAX)
        .saturating_add(2)
}

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),                 // Header
            Constraint::Min(8),                    // Clue
            Constraint::Length(board_height(app)), // Board
            Constraint::Length(7),                 // Messages
            Constraint::Length(1),                 // Status bar
        ])
        .split(f.area());

    render_header(f, chunks[0]);
    render_clue(f, app, chunks[1]);
    render_board(f, app, chunks[2]);
    render_messages(f, app, chunks[3]);
    render_status(f, app, chunks[4]);

    if app.input_mode == InputMode::Share {
        render_share(f, app);
    }
}

fn render_header(f: &mut Frame, area: Rect) {
    let header = Paragraph::new("📖 BIBIRBLE - Guess the verse")
        .style(
            Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
        )
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

fn render_clue(f: &mut Frame, app: &App, area: Rect) {
    let clue = app.game.current_clue_text();
    let color = if app.input_mode == InputMode::NoData {
        Color::Red
    } else {
        Color::White
    };

    let paragraph = Paragraph::new(clue)
        .style(Style::default().fg(color))
        .block(
            Block::default()
                .title(" Passage ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, area);
}

const fn feedback_style(feedback: Feedback) -> Style {
    let bg = match feedback {
        Feedback::Exact => Color::Green,
        Feedback::Partial => Color::Yellow,
        Feedback::Miss => Color::DarkGray,
    };
    Style::new().fg(Color::Black).bg(bg).add_modifier(Modifier::BOLD)
}

fn scored_line(row: &ScoredRow) -> Line<'static> {
    let [c1, c2, v1, v2] = row.guess.digits();
    let [f1, f2, f3, f4] = row.feedback.digits;
    Line::from(vec![
        Span::styled(
            format!(" {:<BOOK_WIDTH$}", row.guess.book()),
            feedback_style(row.feedback.book),
        ),
        Span::raw(" "),
        Span::styled(format!(" {c1} "), feedback_style(f1)),
        Span::styled(format!(" {c2} "), feedback_style(f2)),
        Span::raw(" : "),
        Span::styled(format!(" {v1} "), feedback_style(f3)),
        Span::styled(format!(" {v2} "), feedback_style(f4)),
    ])
}

fn draft_line(draft: &GuessDraft) -> Line<'static> {
    let open = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::UNDERLINED);
    let book = draft.book.as_deref().unwrap_or("↑↓ / letter");
    let digit = |d: Option<u8>| {
        Span::styled(
            d.map_or_else(|| " _ ".to_string(), |d| format!(" {d} ")),
            open,
        )
    };
    let [c1, c2, v1, v2] = draft.digits;

    Line::from(vec![
        Span::styled(format!(" {book:<BOOK_WIDTH$}"), open),
        Span::raw(" "),
        digit(c1),
        digit(c2),
        Span::raw(" : "),
        digit(v1),
        digit(v2),
    ])
}

fn empty_line() -> Line<'static> {
    let locked = Style::default().fg(Color::DarkGray);
    Line::from(Span::styled(
        format!(" {:<BOOK_WIDTH$}  ·  ·  :  ·  · ", ""),
        locked,
    ))
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let attempts = board_rows(app);
    let session = app.game.session();
    let rows = session.map_or(&[][..], |s| s.rows());
    let active = session.and_then(|s| s.active_row());

    // Scroll so the open row (or the last scored one) stays in view
    let visible = usize::from(area.height.saturating_sub(2)).max(1);
    let focus = active.unwrap_or_else(|| rows.len().saturating_sub(1));
    let first = (focus + 1).saturating_sub(visible);

    let lines: Vec<Line> = (first..attempts)
        .take(visible)
        .map(|i| match rows.get(i) {
            Some(row) => scored_line(row),
            None if active == Some(i) => draft_line(&app.draft),
            None => empty_line(),
        })
        .collect();

    let title = match active {
        Some(row) => format!(" Guess {}/{attempts} ", row + 1),
        None => " Board ".to_string(),
    };
    let board = Paragraph::new(lines).block(
        Block::default()
            .title(title)
            .borders(Borders::ALL)
            .border_type(BorderType::Double)
            .style(Style::default().fg(Color::Yellow)),
    );

    f.render_widget(board, area);
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(35), Constraint::Percentage(65)])
        .split(area);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate() * 100.0
    );
    f.render_widget(
        Paragraph::new(stats_text).alignment(Alignment::Center),
        chunks[0],
    );

    let help_text = match app.input_mode {
        InputMode::Guessing => "↑↓/a-z: Book | 0-9: Digits | ⌫: Erase | Enter: Submit | q: Quit",
        InputMode::GameOver => "n: New Game | s: Share | q: Quit",
        InputMode::Share => "s: Close | n: New Game | q: Quit",
        InputMode::NoData => "q: Quit",
    };
    let help = Paragraph::new(help_text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[1]);
}

fn render_share(f: &mut Frame, app: &App) {
    let Some(text) = app.share_text() else {
        return;
    };
    let area = centered(f.area(), 50, 14);
    let popup = Paragraph::new(text)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(" Share ")
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Green)),
        );

    f.render_widget(Clear, area);
    f.render_widget(popup, area);
}

fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Guess, Passage, RowFeedback};
    use crate::corpus::Corpus;
    use crate::engine::{Game, GameConfig};
    use ratatui::{Terminal, backend::TestBackend};

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn draws_clue_and_board() {
        let corpus = Corpus::new(vec![Passage::new("john", 11, 35, "Jesus wept.")]);
        let app = App::new(Game::new(corpus, GameConfig::default().with_seed(1)));

        let screen = screen(&app);
        assert!(screen.contains("BIBIRBLE"));
        assert!(screen.contains("Jesus"));
        assert!(screen.contains("Guess 1/7"));
        assert!(!screen.contains("wept"));
    }

    fn app_with_attempts(attempts_max: usize) -> App {
        let corpus = Corpus::new(vec![Passage::new("john", 11, 35, "Jesus wept.")]);
        let config = GameConfig {
            attempts_max,
            ..GameConfig::default().with_seed(1)
        };
        App::new(Game::new(corpus, config))
    }

    #[test]
    #[allow(arithmetic_overflow)]
    fn huge_attempt_limits_still_draw() {
        let app = app_with_attempts(65_534);
        assert_eq!(board_height(&app), 65_534 + 2);
        assert!(screen(&app).contains("BIBIRBLE"));

        let app = app_with_attempts(usize::MAX);
        assert_eq!(board_height(&app), u16::MAX);
        assert!(screen(&app).contains("BIBIRBLE"));
    }

    #[test]
    fn board_follows_the_session_limit() {
        let app = app_with_attempts(0);
        assert_eq!(board_rows(&app), 1);
        assert!(screen(&app).contains("Guess 1/1"));
    }

    #[test]
    fn draws_no_data_message() {
        let app = App::new(Game::new(Corpus::default(), GameConfig::default()));
        assert!(screen(&app).contains("Failed to load data"));
    }

    #[test]
    fn scored_line_carries_feedback_colors() {
        let row = ScoredRow {
            guess: Guess::new("john", [0, 3, 1, 6]).unwrap(),
            feedback: RowFeedback::new(
                Feedback::Exact,
                [Feedback::Miss, Feedback::Partial, Feedback::Exact, Feedback::Miss],
            ),
        };
        let line = scored_line(&row);

        assert_eq!(line.spans[0].style.bg, Some(Color::Green));
        assert_eq!(line.spans[2].style.bg, Some(Color::DarkGray));
        assert_eq!(line.spans[3].style.bg, Some(Color::Yellow));
        assert_eq!(line.spans[5].style.bg, Some(Color::Green));
    }

    #[test]
    fn centered_fits_small_areas() {
        let area = Rect::new(0, 0, 20, 5);
        assert_eq!(centered(area, 50, 14), area);
    }
}
