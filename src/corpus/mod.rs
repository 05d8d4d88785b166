//! Passage corpus
//!
//! An ordered, immutable collection of passages with random selection and
//! book-name lookups. Loading lives in [`loader`]; the category table used for
//! partial book credit lives in [`categories`].

pub mod categories;
pub mod loader;

use crate::core::{Locator, Passage};
use rand::Rng;
use rand::prelude::IndexedRandom;
use rustc_hash::FxHashSet;

/// All loaded passages
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    passages: Vec<Passage>,
}

impl Corpus {
    #[must_use]
    pub const fn new(passages: Vec<Passage>) -> Self {
        Self { passages }
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.passages.len()
    }

    /// True when nothing was loaded and play must be disabled
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.passages.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn passages(&self) -> &[Passage] {
        &self.passages
    }

    /// Pick a passage uniformly at random; `None` for an empty corpus
    pub fn random_passage<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Passage> {
        self.passages.choose(rng)
    }

    /// Distinct book names in first-seen order
    #[must_use]
    pub fn all_book_names(&self) -> Vec<&str> {
        let mut seen = FxHashSet::default();
        self.passages
            .iter()
            .map(|p| p.book.as_str())
            .filter(|book| seen.insert(*book))
            .collect()
    }

    /// Distinct book names sorted for display
    #[must_use]
    pub fn sorted_book_names(&self) -> Vec<&str> {
        let mut books = self.all_book_names();
        books.sort_unstable();
        books
    }

    /// Category of a book via the fixed table (case-insensitive)
    #[must_use]
    pub fn category_of(&self, book: &str) -> Option<&'static str> {
        categories::category_of(book)
    }

    /// The corpus spelling of a book name typed in any case or spacing
    #[must_use]
    pub fn canonical_book(&self, name: &str) -> Option<&str> {
        let key = categories::normalize_book(name);
        self.passages
            .iter()
            .map(|p| p.book.as_str())
            .find(|book| categories::normalize_book(book) == key)
    }

    /// Distinct locators, in corpus order
    #[must_use]
    pub fn locators(&self) -> Vec<Locator> {
        let mut seen = FxHashSet::default();
        self.passages
            .iter()
            .map(Passage::locator)
            .filter(|loc| seen.insert(loc.clone()))
            .collect()
    }

    /// Find the passage at a locator
    #[must_use]
    pub fn find(&self, locator: &Locator) -> Option<&Passage> {
        self.passages.iter().find(|p| {
            p.book == locator.book && p.chapter == locator.chapter && p.verse == locator.verse
        })
    }
}

impl From<Vec<Passage>> for Corpus {
    fn from(passages: Vec<Passage>) -> Self {
        Self::new(passages)
    }
}
