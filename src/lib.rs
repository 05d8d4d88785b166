//! Bibirble
//!
//! A verse-guessing game: a passage is revealed a chunk at a time and the
//! player names its book, chapter and verse, with Wordle-style feedback on
//! every field.
//!
//! # Quick Start
//!
//! ```rust
//! use bibirble::core::{Feedback, Guess, Passage};
//! use bibirble::corpus::Corpus;
//! use bibirble::engine::{Game, GameConfig};
//!
//! let corpus = Corpus::new(vec![Passage::new("john", 3, 16, "For God so loved the world")]);
//! let mut game = Game::new(corpus, GameConfig::default().with_seed(7));
//! game.start_new_game().unwrap();
//!
//! let result = game.submit_guess(&Guess::parse("mark 03:61").unwrap()).unwrap();
//! assert_eq!(result.feedback.book, Feedback::Partial);
//! assert_eq!(result.feedback.exact_digits(), 2);
//! ```

// Core domain types
pub mod core;

// Error types
pub mod error;

// Passage data and the category table
pub mod corpus;

// Reveal, scoring and the turn engine
pub mod engine;

// Automatic player
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
