//! Feedback scoring for a guess row
//!
//! The book is scored on its own: exact name match, else same category, else
//! miss. The four digits are scored Wordle-style against the zero-padded
//! chapter and verse of the target.

use crate::core::{Feedback, Guess, Locator, RowFeedback};
use crate::corpus::categories;

/// Score a guessed book against the target book
///
/// Exact comparison is case-sensitive; the category check is not.
#[must_use]
pub fn score_book(guess: &str, target: &str) -> Feedback {
    if guess == target {
        Feedback::Exact
    } else if categories::same_category(guess, target) {
        Feedback::Partial
    } else {
        Feedback::Miss
    }
}

/// Score four guessed digits against four target digits
///
/// # Algorithm
/// 1. First pass: mark exact positional matches and consume those target digits
/// 2. Second pass: for every non-exact position, consume the first remaining
///    target digit (left to right) with the same value and mark it partial
///
/// Each target digit satisfies at most one guessed digit.
///
/// # Examples
/// ```
/// use bibirble::core::Feedback::{Exact, Miss, Partial};
/// use bibirble::engine::score_digits;
///
/// assert_eq!(score_digits([1, 6, 3, 0], [0, 3, 1, 6]), [Partial; 4]);
/// assert_eq!(score_digits([3, 3, 9, 9], [0, 3, 1, 6]), [Miss, Exact, Miss, Miss]);
/// ```
#[must_use]
pub fn score_digits(guess: [u8; 4], target: [u8; 4]) -> [Feedback; 4] {
    let mut result = [Feedback::Miss; 4];
    let mut pool = target.map(Some);

    // First pass: exact matches
    for (i, slot) in pool.iter_mut().enumerate() {
        if guess[i] == target[i] {
            result[i] = Feedback::Exact;
            *slot = None;
        }
    }

    // Second pass: partial matches from what is left
    for (i, &digit) in guess.iter().enumerate() {
        if result[i] == Feedback::Exact {
            continue;
        }
        if let Some(slot) = pool.iter_mut().find(|slot| **slot == Some(digit)) {
            result[i] = Feedback::Partial;
            *slot = None;
        }
    }

    result
}

/// Score a complete guess against a target locator
#[must_use]
pub fn score_guess(guess: &Guess, target: &Locator) -> RowFeedback {
    RowFeedback::new(
        score_book(guess.book(), &target.book),
        score_digits(guess.digits(), target.digits()),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use Feedback::{Exact, Miss, Partial};
    use proptest::prelude::*;

    fn john_3_16() -> Locator {
        Locator::new("John", 3, 16)
    }

    #[test]
    fn book_exact_is_case_sensitive() {
        assert_eq!(score_book("John", "John"), Exact);
        // Same category via case-insensitive lookup, but not the same spelling
        assert_eq!(score_book("john", "John"), Partial);
    }

    #[test]
    fn book_same_category_is_partial() {
        assert_eq!(score_book("Mark", "John"), Partial);
        assert_eq!(score_book("exodus", "genesis"), Partial);
    }

    #[test]
    fn book_other_category_is_miss() {
        assert_eq!(score_book("Genesis", "John"), Miss);
        assert_eq!(score_book("Tobit", "Judith"), Miss, "unknown books never share a category");
    }

    #[test]
    fn winning_guess_scores_perfect() {
        let guess = Guess::new("John", [0, 3, 1, 6]).unwrap();
        let feedback = score_guess(&guess, &john_3_16());
        assert!(feedback.is_perfect());
        assert_eq!(feedback.correct_count(), 5);
    }

    #[test]
    fn all_digits_displaced_are_partial() {
        let guess = Guess::new("Mark", [1, 6, 3, 0]).unwrap();
        let feedback = score_guess(&guess, &john_3_16());
        assert_eq!(feedback.book, Partial);
        assert_eq!(feedback.digits, [Partial; 4]);
        assert_eq!(feedback.correct_count(), 0);
    }

    #[test]
    fn exact_match_consumes_before_partial() {
        // Only one 3 in the target; the exact one at position 1 wins
        assert_eq!(score_digits([3, 3, 9, 9], [0, 3, 1, 6]), [Miss, Exact, Miss, Miss]);
    }

    #[test]
    fn duplicate_guess_digits_match_once() {
        assert_eq!(score_digits([6, 6, 6, 6], [0, 3, 1, 6]), [Miss, Miss, Miss, Exact]);
        assert_eq!(score_digits([1, 1, 0, 0], [0, 1, 2, 3]), [Miss, Exact, Partial, Miss]);
    }

    #[test]
    fn duplicate_target_digits_each_satisfy_one_guess() {
        // Target 11:01 has three 1s
        assert_eq!(score_digits([1, 0, 1, 1], [1, 1, 0, 1]), [Exact, Partial, Partial, Exact]);
        assert_eq!(score_digits([2, 2, 2, 2], [1, 1, 0, 1]), [Miss; 4]);
    }

    #[test]
    fn partial_consumes_leftmost_remaining() {
        // The exact 5 leaves no 5 for the others; the 0 takes the first free 0
        assert_eq!(score_digits([5, 5, 5, 0], [0, 0, 5, 7]), [Miss, Miss, Exact, Partial]);
        assert_eq!(score_digits([0, 9, 0, 0], [7, 0, 0, 8]), [Partial, Miss, Exact, Miss]);
    }

    #[test]
    fn three_digit_chapter_uses_last_two_digits() {
        let target = Locator::new("Psalms", 119, 105);
        let guess = Guess::new("Psalms", [1, 9, 0, 5]).unwrap();
        assert!(score_guess(&guess, &target).is_perfect());
    }

    #[test]
    fn four_exact_digits_with_wrong_book_is_not_perfect() {
        let guess = Guess::new("Mark", [0, 3, 1, 6]).unwrap();
        let feedback = score_guess(&guess, &john_3_16());
        assert_eq!(feedback.exact_digits(), 4);
        assert!(!feedback.is_perfect());
    }

    fn count(digits: &[u8; 4], value: u8) -> usize {
        digits.iter().filter(|&&d| d == value).count()
    }

    proptest! {
        #[test]
        fn matches_never_exceed_target_multiplicity(guess in prop::array::uniform4(0u8..10), target in prop::array::uniform4(0u8..10)) {
            let result = score_digits(guess, target);
            for value in 0..10u8 {
                let claimed = (0..4)
                    .filter(|&i| guess[i] == value && result[i] != Miss)
                    .count();
                prop_assert!(claimed <= count(&target, value));
            }
        }

        #[test]
        fn exact_tags_mean_positional_equality(guess in prop::array::uniform4(0u8..10), target in prop::array::uniform4(0u8..10)) {
            let result = score_digits(guess, target);
            for i in 0..4 {
                prop_assert_eq!(result[i] == Exact, guess[i] == target[i]);
            }
        }

        #[test]
        fn matched_count_is_multiset_intersection(guess in prop::array::uniform4(0u8..10), target in prop::array::uniform4(0u8..10)) {
            let result = score_digits(guess, target);
            let matched = result.iter().filter(|&&f| f != Miss).count();
            let expected: usize = (0..10u8)
                .map(|v| count(&guess, v).min(count(&target, v)))
                .sum();
            prop_assert_eq!(matched, expected);
        }
    }
}
