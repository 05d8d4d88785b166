//! Player guesses: complete rows and in-progress drafts

use thiserror::Error;

/// Reasons a guess cannot be built
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuessError {
    #[error("no book selected")]
    MissingBook,
    #[error("digit {0} is not a single decimal digit")]
    InvalidDigit(u8),
    #[error("guess is incomplete: choose a book and fill all four digits")]
    Incomplete,
    #[error("cannot parse guess '{0}', expected e.g. 'John 03:16'")]
    Unparseable(String),
}

/// A complete guess row: a book plus chapter-tens, chapter-ones, verse-tens, verse-ones
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Guess {
    book: String,
    digits: [u8; 4],
}

impl Guess {
    /// Create a guess from a book name and four digits
    ///
    /// # Errors
    /// Returns `GuessError` if the book is empty or a digit is above 9.
    ///
    /// # Examples
    /// ```
    /// use bibirble::core::Guess;
    ///
    /// let guess = Guess::new("John", [0, 3, 1, 6]).unwrap();
    /// assert_eq!(guess.to_string(), "John 03:16");
    /// assert!(Guess::new("John", [0, 3, 1, 16]).is_err());
    /// ```
    pub fn new(book: impl Into<String>, digits: [u8; 4]) -> Result<Self, GuessError> {
        let book = book.into();
        if book.trim().is_empty() {
            return Err(GuessError::MissingBook);
        }
        if let Some(&bad) = digits.iter().find(|&&d| d > 9) {
            return Err(GuessError::InvalidDigit(bad));
        }
        Ok(Self { book, digits })
    }

    /// Parse textual input such as "John 03:16", "John 3:16" or "1samuel 0101"
    ///
    /// Chapter and verse may each be one or two digits when separated by ':';
    /// without a separator exactly four digits are expected.
    ///
    /// # Errors
    /// Returns `GuessError::Unparseable` for anything else.
    pub fn parse(input: &str) -> Result<Self, GuessError> {
        let unparseable = || GuessError::Unparseable(input.to_string());
        let (book, numbers) = input
            .trim()
            .rsplit_once(char::is_whitespace)
            .ok_or_else(unparseable)?;

        let digits: [u8; 4] = if let Some((chapter, verse)) = numbers.split_once(':') {
            let [c1, c2] = parse_pair(chapter).ok_or_else(unparseable)?;
            let [v1, v2] = parse_pair(verse).ok_or_else(unparseable)?;
            [c1, c2, v1, v2]
        } else {
            let parsed: Vec<u8> = numbers
                .chars()
                .map(|c| c.to_digit(10).map(|d| d as u8))
                .collect::<Option<_>>()
                .ok_or_else(unparseable)?;
            parsed.try_into().map_err(|_| unparseable())?
        };

        Self::new(book.trim(), digits)
    }

    #[inline]
    #[must_use]
    pub fn book(&self) -> &str {
        &self.book
    }

    #[inline]
    #[must_use]
    pub const fn digits(&self) -> [u8; 4] {
        self.digits
    }
}

impl std::fmt::Display for Guess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let [c1, c2, v1, v2] = self.digits;
        write!(f, "{} {c1}{c2}:{v1}{v2}", self.book)
    }
}

fn parse_pair(s: &str) -> Option<[u8; 2]> {
    let digits: Vec<u8> = s
        .chars()
        .map(|c| c.to_digit(10).map(|d| d as u8))
        .collect::<Option<_>>()?;
    match digits.as_slice() {
        &[ones] => Some([0, ones]),
        &[tens, ones] => Some([tens, ones]),
        _ => None,
    }
}

/// An input row that may still be missing fields
///
/// Only a complete draft can be turned into a [`Guess`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GuessDraft {
    pub book: Option<String>,
    pub digits: [Option<u8>; 4],
}

impl GuessDraft {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when a book is chosen and all four digits are filled
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.book.as_ref().is_some_and(|b| !b.is_empty()) && self.digits.iter().all(Option::is_some)
    }

    pub fn set_book(&mut self, book: impl Into<String>) {
        self.book = Some(book.into());
    }

    /// Fill the first empty digit slot; returns false when the row is full or `digit > 9`
    pub fn push_digit(&mut self, digit: u8) -> bool {
        if digit > 9 {
            return false;
        }
        match self.digits.iter_mut().find(|d| d.is_none()) {
            Some(slot) => {
                *slot = Some(digit);
                true
            }
            None => false,
        }
    }

    /// Clear the last filled digit slot
    pub fn pop_digit(&mut self) -> Option<u8> {
        self.digits.iter_mut().rev().find(|d| d.is_some()).and_then(Option::take)
    }

    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Build the complete guess, or `None` if a field is still empty
    #[must_use]
    pub fn to_guess(&self) -> Option<Guess> {
        let book = self.book.as_ref()?;
        let [Some(c1), Some(c2), Some(v1), Some(v2)] = self.digits else {
            return None;
        };
        Guess::new(book.clone(), [c1, c2, v1, v2]).ok()
    }
}

impl TryFrom<&GuessDraft> for Guess {
    type Error = GuessError;

    fn try_from(draft: &GuessDraft) -> Result<Self, Self::Error> {
        draft.to_guess().ok_or(GuessError::Incomplete)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guess_rejects_empty_book() {
        assert_eq!(Guess::new("  ", [0, 0, 0, 0]), Err(GuessError::MissingBook));
    }

    #[test]
    fn guess_rejects_multi_digit_values() {
        assert_eq!(Guess::new("John", [0, 3, 10, 6]), Err(GuessError::InvalidDigit(10)));
    }

    #[test]
    fn parse_colon_form() {
        let guess = Guess::parse("John 03:16").unwrap();
        assert_eq!(guess.book(), "John");
        assert_eq!(guess.digits(), [0, 3, 1, 6]);

        let short = Guess::parse("John 3:16").unwrap();
        assert_eq!(short, guess);
    }

    #[test]
    fn parse_compact_form_and_spaced_book() {
        let guess = Guess::parse("Song of Solomon 0204").unwrap();
        assert_eq!(guess.book(), "Song of Solomon");
        assert_eq!(guess.digits(), [0, 2, 0, 4]);
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(Guess::parse("John").is_err());
        assert!(Guess::parse("John 123:4").is_err());
        assert!(Guess::parse("John 316").is_err());
        assert!(Guess::parse("John ab:cd").is_err());
    }

    #[test]
    fn draft_completeness() {
        let mut draft = GuessDraft::new();
        assert!(!draft.is_complete());

        for d in [0, 3, 1, 6] {
            assert!(draft.push_digit(d));
        }
        assert!(!draft.is_complete(), "book still missing");
        assert!(!draft.push_digit(7), "row is full");

        draft.set_book("John");
        assert!(draft.is_complete());
        assert_eq!(draft.to_guess(), Some(Guess::new("John", [0, 3, 1, 6]).unwrap()));
    }

    #[test]
    fn draft_pop_digit_removes_last() {
        let mut draft = GuessDraft::new();
        draft.set_book("Mark");
        draft.push_digit(1);
        draft.push_digit(2);

        assert_eq!(draft.pop_digit(), Some(2));
        assert_eq!(draft.digits, [Some(1), None, None, None]);
        assert_eq!(draft.pop_digit(), Some(1));
        assert_eq!(draft.pop_digit(), None);
    }

    #[test]
    fn incomplete_draft_does_not_convert() {
        let mut draft = GuessDraft::new();
        draft.set_book("John");
        draft.push_digit(3);
        assert_eq!(Guess::try_from(&draft), Err(GuessError::Incomplete));
    }
}
