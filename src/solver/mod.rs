//! Automatic player
//!
//! Keeps every corpus locator that is consistent with the feedback seen so far
//! and guesses one of them at random.

mod player;

pub use player::{AutoPlayer, PlayRecord, is_consistent};
