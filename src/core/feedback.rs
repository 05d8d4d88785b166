//! Per-field feedback for a submitted guess row
//!
//! Each guessed field receives one of three tags:
//! - Exact (🟩): correct value in the correct place
//! - Partial (🟨): digit present elsewhere in the locator, or book from the same category
//! - Miss (⬜): no match
//!
//! A row carries one tag for the book and four for the chapter/verse digits.

use std::fmt;

/// Feedback tag for a single guessed field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Feedback {
    Exact,
    Partial,
    #[default]
    Miss,
}

impl Feedback {
    /// Emoji square used in grids and share text
    #[inline]
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Exact => '🟩',
            Self::Partial => '🟨',
            Self::Miss => '⬜',
        }
    }

    /// Single ASCII letter for plain-text output
    #[inline]
    #[must_use]
    pub const fn letter(self) -> char {
        match self {
            Self::Exact => 'G',
            Self::Partial => 'Y',
            Self::Miss => '-',
        }
    }

    /// Parse a single feedback symbol
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for exact
    /// - 'Y'/'y'/🟨 for partial
    /// - '-'/'_'/⬜ for miss
    #[must_use]
    pub const fn from_char(ch: char) -> Option<Self> {
        match ch {
            'G' | 'g' | '🟩' => Some(Self::Exact),
            'Y' | 'y' | '🟨' => Some(Self::Partial),
            '-' | '_' | '⬜' => Some(Self::Miss),
            _ => None,
        }
    }
}

/// Feedback for one whole guess row: the book plus four digits
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct RowFeedback {
    pub book: Feedback,
    pub digits: [Feedback; 4],
}

impl RowFeedback {
    /// Every field exact
    pub const PERFECT: Self = Self {
        book: Feedback::Exact,
        digits: [Feedback::Exact; 4],
    };

    #[must_use]
    pub const fn new(book: Feedback, digits: [Feedback; 4]) -> Self {
        Self { book, digits }
    }

    /// Number of exact fields (0-5)
    #[must_use]
    pub fn correct_count(&self) -> usize {
        usize::from(self.book == Feedback::Exact) + self.exact_digits()
    }

    /// Number of digits tagged exact (0-4)
    #[must_use]
    pub fn exact_digits(&self) -> usize {
        self.digits.iter().filter(|&&d| d == Feedback::Exact).count()
    }

    /// Number of digits tagged partial (0-4)
    #[must_use]
    pub fn partial_digits(&self) -> usize {
        self.digits.iter().filter(|&&d| d == Feedback::Partial).count()
    }

    /// True when the book and all four digits are exact
    #[must_use]
    pub fn is_perfect(&self) -> bool {
        self.correct_count() == 5
    }

    /// All five tags in display order, book first
    #[must_use]
    pub fn tags(&self) -> [Feedback; 5] {
        let [c1, c2, v1, v2] = self.digits;
        [self.book, c1, c2, v1, v2]
    }

    /// Convert to an emoji string such as "🟩🟨⬜🟩🟨"
    ///
    /// # Examples
    /// ```
    /// use bibirble::core::RowFeedback;
    ///
    /// let row: RowFeedback = "GY-GY".parse().unwrap();
    /// assert_eq!(row.to_emoji(), "🟩🟨⬜🟩🟨");
    /// ```
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.tags().iter().map(|t| t.emoji()).collect()
    }
}

impl fmt::Display for RowFeedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for tag in self.tags() {
            write!(f, "{}", tag.letter())?;
        }
        Ok(())
    }
}

impl std::str::FromStr for RowFeedback {
    type Err = String;

    /// Parse a five-symbol row, book first: "GY-GY" or "🟩🟨⬜🟩🟨"
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tags: Vec<Feedback> = s
            .chars()
            .map(Feedback::from_char)
            .collect::<Option<_>>()
            .ok_or_else(|| format!("Invalid feedback string: {s}"))?;

        match tags.as_slice() {
            &[book, c1, c2, v1, v2] => Ok(Self::new(book, [c1, c2, v1, v2])),
            _ => Err(format!("Feedback must have 5 symbols, got {}", tags.len())),
        }
    }
}
