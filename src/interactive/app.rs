//! TUI application state and logic

use crate::core::GuessDraft;
use crate::engine::{Game, SessionState};
use crate::error::GameError;
use crate::output::formatters::share_text;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub game: Game,
    /// Book picker entries, sorted
    pub books: Vec<String>,
    /// Picker position; `None` until a book is chosen
    pub book_index: Option<usize>,
    pub draft: GuessDraft,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub input_mode: InputMode,
    pub should_quit: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// The open row accepts a book and four digits
    Guessing,
    /// Round over; rows are locked
    GameOver,
    /// Round over, share text on screen
    Share,
    /// Nothing loaded; only quitting works
    NoData,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Index `n` counts games won on attempt `n`
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    fn record(&mut self, won: bool, attempts: usize) {
        self.total_games += 1;
        if won {
            self.games_won += 1;
            if self.guess_distribution.len() <= attempts {
                self.guess_distribution.resize(attempts + 1, 0);
            }
            self.guess_distribution[attempts] += 1;
        }
    }

    /// Wins per attempt count, e.g. `1:0 2:3 3:1`
    #[must_use]
    pub fn distribution_summary(&self) -> String {
        self.guess_distribution
            .iter()
            .enumerate()
            .skip(1)
            .map(|(attempts, count)| format!("{attempts}:{count}"))
            .collect::<Vec<_>>()
            .join(" ")
    }

    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64
        }
    }
}

impl App {
    /// Wrap a game and open the first round if there is data
    #[must_use]
    pub fn new(game: Game) -> Self {
        let books = game.book_names().into_iter().map(str::to_string).collect();
        let mut app = Self {
            game,
            books,
            book_index: None,
            draft: GuessDraft::new(),
            messages: Vec::new(),
            stats: Statistics::default(),
            input_mode: InputMode::NoData,
            should_quit: false,
        };

        if app.game.is_playable() {
            app.add_message(
                "Welcome! Guess where the passage comes from.",
                MessageStyle::Info,
            );
            app.new_game();
        } else {
            app.add_message(crate::engine::NO_DATA_MESSAGE, MessageStyle::Error);
        }
        app
    }

    pub fn new_game(&mut self) {
        match self.game.start_new_game() {
            Ok(_) => {
                self.draft.clear();
                self.book_index = None;
                self.input_mode = InputMode::Guessing;
                self.add_message(
                    "New game! ↑/↓ or a letter picks the book, digits fill chapter:verse.",
                    MessageStyle::Info,
                );
            }
            Err(e) => {
                self.input_mode = InputMode::NoData;
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    /// Move the book picker one entry, wrapping around
    pub fn cycle_book(&mut self, forward: bool) {
        let len = self.books.len();
        if len == 0 {
            return;
        }
        let next = match (self.book_index, forward) {
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
            (None, true) => 0,
            (None, false) => len - 1,
        };
        self.select_book(next);
    }

    /// Jump to the next book starting with `letter`, cycling among matches
    pub fn jump_to_letter(&mut self, letter: char) {
        let letter = letter.to_ascii_lowercase();
        let starts_with = |book: &String| {
            book.chars()
                .find(char::is_ascii_alphabetic)
                .is_some_and(|c| c.to_ascii_lowercase() == letter)
        };

        let start = self.book_index.map_or(0, |i| i + 1);
        let found = (0..self.books.len())
            .map(|offset| (start + offset) % self.books.len())
            .find(|&i| starts_with(&self.books[i]));
        if let Some(i) = found {
            self.select_book(i);
        }
    }

    fn select_book(&mut self, index: usize) {
        self.book_index = Some(index);
        self.draft.set_book(self.books[index].clone());
    }

    /// Score the open row if it is complete
    pub fn submit(&mut self) {
        if !self.draft.is_complete() {
            self.add_message(
                "Pick a book and fill all four digits first.",
                MessageStyle::Error,
            );
            return;
        }

        match self.game.submit_draft(&self.draft) {
            Ok(result) => {
                self.draft.clear();
                self.book_index = None;
                match result.state {
                    SessionState::AwaitingGuess { .. } => {
                        let feedback = result.feedback;
                        self.add_message(
                            &format!(
                                "{} {}/5 correct, {} digits placed, {} misplaced",
                                feedback.to_emoji(),
                                feedback.correct_count(),
                                feedback.exact_digits(),
                                feedback.partial_digits()
                            ),
                            MessageStyle::Info,
                        );
                    }
                    SessionState::GameOver { won } => self.finish_round(won),
                }
            }
            Err(GameError::GameOver) => self.input_mode = InputMode::GameOver,
            Err(e) => self.add_message(&e.to_string(), MessageStyle::Error),
        }
    }

    fn finish_round(&mut self, won: bool) {
        let Some(session) = self.game.session() else {
            return;
        };
        let attempts = session.rows().len();
        let message = session.end_message().unwrap_or_default();

        self.stats.record(won, attempts);
        self.input_mode = InputMode::GameOver;
        let style = if won {
            MessageStyle::Success
        } else {
            MessageStyle::Error
        };
        self.add_message(&message, style);
        if won {
            let summary = format!("Wins by attempt: {}", self.stats.distribution_summary());
            self.add_message(&summary, MessageStyle::Info);
        }
        self.add_message(
            "Press 'n' for a new game, 's' to share, 'q' to quit.",
            MessageStyle::Info,
        );
    }

    /// Share text for the finished round
    #[must_use]
    pub fn share_text(&self) -> Option<String> {
        self.game.session().and_then(share_text)
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }
        if matches!(key.code, KeyCode::Esc | KeyCode::Char('q' | 'Q')) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::NoData => {}
            InputMode::Guessing => match key.code {
                KeyCode::Up => self.cycle_book(false),
                KeyCode::Down | KeyCode::Tab => self.cycle_book(true),
                KeyCode::Char(c) if c.is_ascii_digit() => {
                    self.draft.push_digit(c as u8 - b'0');
                }
                KeyCode::Char(c) if c.is_ascii_alphabetic() => self.jump_to_letter(c),
                KeyCode::Backspace => {
                    self.draft.pop_digit();
                }
                KeyCode::Enter => self.submit(),
                _ => {}
            },
            InputMode::GameOver | InputMode::Share => match key.code {
                KeyCode::Char('n' | 'N') => self.new_game(),
                KeyCode::Char('s' | 'S') => {
                    self.input_mode = if self.input_mode == InputMode::Share {
                        InputMode::GameOver
                    } else {
                        InputMode::Share
                    };
                }
                _ => {}
            },
        }
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("TUI stopped: {err:#}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
