//! Passages and their book/chapter/verse locators

use serde::Deserialize;
use std::fmt;

/// Book, chapter and verse identifying one passage
///
/// Chapter and verse are scored as two decimal digits each. Values of 100 or
/// more keep only their last two digits, so such passages can never be
/// guessed exactly.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Locator {
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
}

impl Locator {
    #[must_use]
    pub fn new(book: impl Into<String>, chapter: u32, verse: u32) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse,
        }
    }

    /// The four scored digits: chapter tens, chapter ones, verse tens, verse ones
    ///
    /// # Examples
    /// ```
    /// use bibirble::core::Locator;
    ///
    /// assert_eq!(Locator::new("John", 3, 16).digits(), [0, 3, 1, 6]);
    /// assert_eq!(Locator::new("Psalms", 119, 105).digits(), [1, 9, 0, 5]);
    /// ```
    #[must_use]
    pub const fn digits(&self) -> [u8; 4] {
        let [c1, c2] = two_digits(self.chapter);
        let [v1, v2] = two_digits(self.verse);
        [c1, c2, v1, v2]
    }

    /// True when both chapter and verse fit in two digits
    #[must_use]
    pub const fn is_fully_guessable(&self) -> bool {
        self.chapter < 100 && self.verse < 100
    }
}

impl fmt::Display for Locator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}:{}", self.book, self.chapter, self.verse)
    }
}

const fn two_digits(n: u32) -> [u8; 2] {
    let n = n % 100;
    [(n / 10) as u8, (n % 10) as u8]
}

/// One corpus entry
///
/// Mirrors a record of the corpus file; absent fields fall back to empty
/// strings and zero.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize)]
#[serde(default)]
pub struct Passage {
    pub testament: String,
    pub area: String,
    pub book: String,
    pub chapter: u32,
    pub verse: u32,
    pub text: String,
}

impl Passage {
    #[must_use]
    pub fn new(book: impl Into<String>, chapter: u32, verse: u32, text: impl Into<String>) -> Self {
        Self {
            book: book.into(),
            chapter,
            verse,
            text: text.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn locator(&self) -> Locator {
        Locator::new(self.book.clone(), self.chapter, self.verse)
    }

    /// Whitespace-separated words of the text
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.text.split_whitespace()
    }

    #[must_use]
    pub fn word_count(&self) -> usize {
        self.words().count()
    }

    #[must_use]
    pub const fn is_fully_guessable(&self) -> bool {
        self.chapter < 100 && self.verse < 100
    }
}
