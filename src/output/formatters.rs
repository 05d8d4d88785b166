//! Formatting utilities for terminal output

use crate::core::{Feedback, Guess, RowFeedback};
use crate::engine::{GameSession, ScoredRow};
use colored::{ColoredString, Colorize};

/// Emoji grid, one line per scored row
#[must_use]
pub fn share_grid(rows: &[ScoredRow]) -> String {
    rows.iter()
        .map(|row| row.feedback.to_emoji())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Share summary followed by the emoji grid, or `None` while the round is running
#[must_use]
pub fn share_text(session: &GameSession) -> Option<String> {
    let summary = session.share_summary().ok()?;
    Some(format!("{summary}\n\n{}", share_grid(session.rows())))
}

/// Color a field the way its feedback tag reads on the board
#[must_use]
pub fn paint(text: &str, feedback: Feedback) -> ColoredString {
    match feedback {
        Feedback::Exact => text.black().on_green().bold(),
        Feedback::Partial => text.black().on_yellow().bold(),
        Feedback::Miss => text.white().on_bright_black(),
    }
}

/// A scored guess as a colored board row: ` Book  0 3 : 1 6 `
#[must_use]
pub fn colored_row(guess: &Guess, feedback: &RowFeedback) -> String {
    let [c1, c2, v1, v2] = guess.digits();
    let [f1, f2, f3, f4] = feedback.digits;
    format!(
        "{} {}{} : {}{}",
        paint(&format!(" {:<16}", guess.book()), feedback.book),
        paint(&format!(" {c1} "), f1),
        paint(&format!(" {c2} "), f2),
        paint(&format!(" {v1} "), f3),
        paint(&format!(" {v2} "), f4),
    )
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Passage;
    use crate::engine::RevealMode;

    #[test]
    fn grid_has_one_line_per_row() {
        let rows = vec![
            ScoredRow {
                guess: Guess::new("Mark", [1, 6, 3, 0]).unwrap(),
                feedback: RowFeedback::new(Feedback::Partial, [Feedback::Partial; 4]),
            },
            ScoredRow {
                guess: Guess::new("John", [0, 3, 1, 6]).unwrap(),
                feedback: RowFeedback::PERFECT,
            },
        ];
        assert_eq!(share_grid(&rows), "🟨🟨🟨🟨🟨\n🟩🟩🟩🟩🟩");
    }

    #[test]
    fn share_text_waits_for_game_over() {
        let mut session = GameSession::new(
            Passage::new("John", 3, 16, "For God so loved"),
            7,
            RevealMode::default(),
        );
        assert!(share_text(&session).is_none());

        session.submit(&Guess::new("John", [0, 3, 1, 6]).unwrap()).unwrap();
        let text = share_text(&session).unwrap();
        assert!(text.starts_with("Could you beat this score in Bibirble?"));
        assert!(text.ends_with("🟩🟩🟩🟩🟩"));
    }

    #[test]
    fn progress_bar_empty() {
        assert_eq!(create_progress_bar(0.0, 100.0, 10), "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        assert_eq!(create_progress_bar(100.0, 100.0, 10), "██████████");
    }

    #[test]
    fn progress_bar_half() {
        assert_eq!(create_progress_bar(50.0, 100.0, 10), "█████░░░░░");
    }

    #[test]
    fn progress_bar_zero_max() {
        assert_eq!(create_progress_bar(5.0, 0.0, 4), "░░░░");
    }
}
