//! Core domain types for the verse-guessing game
//!
//! Pure data types with no I/O: feedback tags, locators, passages and guesses.

mod feedback;
mod guess;
mod passage;

pub use feedback::{Feedback, RowFeedback};
pub use guess::{Guess, GuessDraft, GuessError};
pub use passage::{Locator, Passage};
