//! Simple interactive CLI mode
//!
//! Line-based game without the TUI. Guesses are typed as `Book CC:VV`.

use crate::core::Guess;
use crate::engine::{Game, GameSession, NO_DATA_MESSAGE};
use crate::error::GameError;
use crate::output::formatters::{colored_row, share_text};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// Run the simple interactive CLI mode on stdin/stdout
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple(game: &mut Game) -> Result<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run_simple_with(game, &mut stdin.lock(), &mut stdout.lock())
}

/// Run the line-based game loop over arbitrary input and output
///
/// Returns when the player quits or the input ends.
///
/// # Errors
///
/// Returns an error if reading input or writing output fails.
pub fn run_simple_with<R: BufRead, W: Write>(
    game: &mut Game,
    input: &mut R,
    out: &mut W,
) -> Result<()> {
    writeln!(out, "\n╔══════════════════════════════════════════════════════════════╗")?;
    writeln!(out, "║                    Bibirble - Simple Mode                    ║")?;
    writeln!(out, "╚══════════════════════════════════════════════════════════════╝\n")?;

    if !game.is_playable() {
        writeln!(out, "{}", NO_DATA_MESSAGE.red().bold())?;
        return Ok(());
    }

    writeln!(out, "Guess the book, chapter and verse of the passage, e.g. 'John 03:16'.")?;
    writeln!(out, "More of the passage is revealed after every guess.\n")?;
    writeln!(out, "Commands: 'quit' to exit, 'new' for a new game, 'books' to list books\n")?;

    game.start_new_game()?;
    print_clue(game, out)?;

    loop {
        let prompt = match game.session().and_then(GameSession::active_row) {
            Some(row) => format!("Guess {}/{}", row + 1, game.config().attempts_max),
            None => "Command".to_string(),
        };
        let Some(line) = read_line(input, out, &prompt)? else {
            writeln!(out)?;
            return Ok(());
        };

        match line.to_lowercase().as_str() {
            "" => {}
            "quit" | "q" | "exit" => {
                writeln!(out, "\n👋 Thanks for playing!\n")?;
                return Ok(());
            }
            "new" | "n" => {
                game.start_new_game()?;
                writeln!(out, "\n🔄 New game started!\n")?;
                print_clue(game, out)?;
            }
            "books" | "b" => {
                writeln!(out, "{}\n", game.book_names().join(", "))?;
            }
            "share" | "s" => match game.session().and_then(share_text) {
                Some(text) => writeln!(out, "\n{text}\n")?,
                None => writeln!(out, "Finish the game first!\n")?,
            },
            _ => handle_guess(game, &line, out)?,
        }
    }
}

fn handle_guess<W: Write>(game: &mut Game, line: &str, out: &mut W) -> Result<()> {
    let guess = match Guess::parse(line) {
        Ok(guess) => guess,
        Err(e) => {
            writeln!(out, "❌ {e}. Use 'Book CC:VV', e.g. 'John 03:16'\n")?;
            return Ok(());
        }
    };

    let Some(book) = game.corpus().canonical_book(guess.book()) else {
        writeln!(out, "❌ Unknown book '{}'. Type 'books' to list them.\n", guess.book())?;
        return Ok(());
    };
    let guess = Guess::new(book, guess.digits())?;

    match game.submit_guess(&guess) {
        Ok(result) => {
            writeln!(out, "{}", colored_row(&guess, &result.feedback))?;
            writeln!(out)?;
            print_clue(game, out)?;
            if result.state.is_over() {
                print_end(game, out)?;
            }
        }
        Err(GameError::GameOver) => {
            writeln!(out, "The game is over. Type 'new' to play again.\n")?;
        }
        Err(e) => return Err(e.into()),
    }
    Ok(())
}

fn print_clue<W: Write>(game: &Game, out: &mut W) -> io::Result<()> {
    writeln!(out, "{}", "─".repeat(60).cyan())?;
    writeln!(out, "{}", game.current_clue_text().bright_white())?;
    writeln!(out, "{}", "─".repeat(60).cyan())
}

fn print_end<W: Write>(game: &Game, out: &mut W) -> io::Result<()> {
    let Some(session) = game.session() else {
        return Ok(());
    };
    if let Some(message) = session.end_message() {
        let message = if session.did_win() {
            format!("🎉 {message}").bright_green().bold()
        } else {
            message.yellow()
        };
        writeln!(out, "\n{message}")?;
    }
    if let Some(text) = share_text(session) {
        writeln!(out, "\n{text}")?;
    }
    writeln!(out, "\nType 'new' to play again or 'quit' to exit.\n")
}

/// Prompt and read one trimmed line, `None` at end of input
fn read_line<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    prompt: &str,
) -> io::Result<Option<String>> {
    write!(out, "{prompt}: ")?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}
