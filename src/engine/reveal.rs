//! Progressive text reveal
//!
//! A passage is split into chunks of `max(1, words / 7)` words. Chunk 0 is
//! always shown; each later stage shows one more chunk. Hidden words become
//! [`PLACEHOLDER`].

use rustc_hash::FxHashSet;

/// Token standing in for a hidden word
pub const PLACEHOLDER: &str = "...";

/// Number of slices a passage is cut into for sizing chunks
const SLICE_DIVISOR: usize = 7;

/// How far a passage has been revealed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stage {
    /// Attempt index: chunks `0..=n` are revealed
    Attempt(usize),
    /// Game over: the whole text is shown
    Terminal,
}

/// How revealed chunks decide which words are visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealMode {
    /// A word is visible wherever its exact text occurs in a revealed chunk,
    /// so a repeated word shows at every position once any copy is revealed
    #[default]
    ContentMatch,
    /// Only the positions inside revealed chunks are visible
    Positional,
}

impl RevealMode {
    /// Parse a mode name: "content" or "positional"
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "content" | "content-match" => Some(Self::ContentMatch),
            "positional" | "position" => Some(Self::Positional),
            _ => None,
        }
    }
}

/// Chunk size for a passage of `word_count` words, never zero
#[inline]
#[must_use]
pub const fn chunk_size(word_count: usize) -> usize {
    let slices = word_count / SLICE_DIVISOR;
    if slices == 0 { 1 } else { slices }
}

/// Number of chunks a passage of `word_count` words is split into
#[inline]
#[must_use]
pub const fn chunk_count(word_count: usize) -> usize {
    word_count.div_ceil(chunk_size(word_count))
}

/// Mask `text` for `stage` using the default [`RevealMode::ContentMatch`]
///
/// # Examples
/// ```
/// use bibirble::engine::{Stage, reveal};
///
/// let text = "For God so loved the world, that he gave his one and only Son";
/// assert_eq!(
///     reveal(text, Stage::Attempt(0)),
///     "For God ... ... ... ... ... ... ... ... ... ... ... ..."
/// );
/// assert_eq!(
///     reveal(text, Stage::Attempt(1)),
///     "For God so loved ... ... ... ... ... ... ... ... ... ..."
/// );
/// assert_eq!(reveal(text, Stage::Terminal), text);
/// ```
#[must_use]
pub fn reveal(text: &str, stage: Stage) -> String {
    reveal_with(text, stage, RevealMode::default())
}

/// Mask `text` for `stage`
///
/// At [`Stage::Terminal`] the text is returned unchanged. Otherwise the
/// output has exactly one token per input word, joined by single spaces.
#[must_use]
pub fn reveal_with(text: &str, stage: Stage, mode: RevealMode) -> String {
    let Stage::Attempt(stage) = stage else {
        return text.to_string();
    };

    let words: Vec<&str> = text.split_whitespace().collect();
    if words.is_empty() {
        return String::new();
    }

    let size = chunk_size(words.len());
    // Chunks past the end are silently ignored
    let revealed_len = stage.saturating_add(1).saturating_mul(size).min(words.len());

    let visible: Vec<bool> = match mode {
        RevealMode::ContentMatch => {
            let shown: FxHashSet<&str> = words[..revealed_len].iter().copied().collect();
            words.iter().map(|w| shown.contains(w)).collect()
        }
        RevealMode::Positional => (0..words.len()).map(|i| i < revealed_len).collect(),
    };

    words
        .iter()
        .zip(visible)
        .map(|(&word, shown)| if shown { word } else { PLACEHOLDER })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const JOHN_3_16: &str = "For God so loved the world, that he gave his one and only Son";

    fn tokens(s: &str) -> Vec<&str> {
        s.split(' ').filter(|t| !t.is_empty()).collect()
    }

    #[test]
    fn chunk_sizing() {
        assert_eq!(chunk_size(0), 1);
        assert_eq!(chunk_size(6), 1);
        assert_eq!(chunk_size(7), 1);
        assert_eq!(chunk_size(14), 2);
        assert_eq!(chunk_size(20), 2);
        assert_eq!(chunk_count(14), 7);
        assert_eq!(chunk_count(20), 10);
        assert_eq!(chunk_count(3), 3);
    }

    #[test]
    fn fourteen_words_make_seven_chunks_of_two() {
        let words = JOHN_3_16.split_whitespace().count();
        assert_eq!(words, 14);
        assert_eq!(chunk_size(words), 2);
        assert_eq!(chunk_count(words), 7);
    }

    #[test]
    fn stage_zero_shows_first_chunk() {
        assert_eq!(
            reveal(JOHN_3_16, Stage::Attempt(0)),
            "For God ... ... ... ... ... ... ... ... ... ... ... ..."
        );
    }

    #[test]
    fn each_stage_reveals_one_more_chunk() {
        assert_eq!(
            reveal(JOHN_3_16, Stage::Attempt(1)),
            "For God so loved ... ... ... ... ... ... ... ... ... ..."
        );
        assert_eq!(
            reveal(JOHN_3_16, Stage::Attempt(6)),
            JOHN_3_16,
            "all seven chunks visible"
        );
    }

    #[test]
    fn stage_beyond_chunks_shows_everything() {
        assert_eq!(reveal(JOHN_3_16, Stage::Attempt(50)), JOHN_3_16);
        assert_eq!(reveal(JOHN_3_16, Stage::Attempt(usize::MAX)), JOHN_3_16);
    }

    #[test]
    fn terminal_returns_full_text() {
        let text = "Jesus  wept.";
        assert_eq!(reveal(text, Stage::Terminal), text);
    }

    #[test]
    fn empty_text_reveals_nothing() {
        assert_eq!(reveal("", Stage::Attempt(0)), "");
        assert_eq!(reveal("   ", Stage::Attempt(3)), "");
    }

    #[test]
    fn short_text_uses_single_word_chunks() {
        assert_eq!(reveal("Jesus wept.", Stage::Attempt(0)), "Jesus ...");
        assert_eq!(reveal("Jesus wept.", Stage::Attempt(1)), "Jesus wept.");
    }

    #[test]
    fn trailing_partial_chunk_is_revealed() {
        // 15 words, chunk size 2: the last chunk holds one word
        let text = "a b c d e f g h i j k l m n o";
        assert_eq!(chunk_count(15), 8);
        assert_eq!(reveal(text, Stage::Attempt(7)), text);
        assert!(reveal(text, Stage::Attempt(6)).ends_with("n ..."));
    }

    #[test]
    fn content_match_reveals_repeated_words_everywhere() {
        let text = "the cat sat on the mat with the dog";
        assert_eq!(
            reveal_with(text, Stage::Attempt(0), RevealMode::ContentMatch),
            "the ... ... ... the ... ... the ..."
        );
    }

    #[test]
    fn positional_reveals_only_chunk_positions() {
        let text = "the cat sat on the mat with the dog";
        assert_eq!(
            reveal_with(text, Stage::Attempt(0), RevealMode::Positional),
            "the ... ... ... ... ... ... ... ..."
        );
    }

    #[test]
    fn mode_names() {
        assert_eq!(RevealMode::from_name("content"), Some(RevealMode::ContentMatch));
        assert_eq!(RevealMode::from_name("positional"), Some(RevealMode::Positional));
        assert_eq!(RevealMode::from_name("random"), None);
    }

    fn word_list() -> impl Strategy<Value = Vec<String>> {
        prop::collection::vec("[a-e]{1,3}", 0..40)
    }

    fn any_mode() -> impl Strategy<Value = RevealMode> {
        prop_oneof![Just(RevealMode::ContentMatch), Just(RevealMode::Positional)]
    }

    proptest! {
        #[test]
        fn output_has_one_token_per_word(words in word_list(), stage in 0usize..12, mode in any_mode()) {
            let text = words.join(" ");
            let out = reveal_with(&text, Stage::Attempt(stage), mode);
            prop_assert_eq!(tokens(&out).len(), words.len());
        }

        #[test]
        fn visible_words_keep_their_text(words in word_list(), stage in 0usize..12, mode in any_mode()) {
            let text = words.join(" ");
            let out = reveal_with(&text, Stage::Attempt(stage), mode);
            for (token, word) in tokens(&out).iter().zip(&words) {
                prop_assert!(*token == PLACEHOLDER || *token == word.as_str());
            }
        }

        #[test]
        fn reveal_is_monotonic(words in word_list(), stage in 0usize..12, mode in any_mode()) {
            let text = words.join(" ");
            let now = reveal_with(&text, Stage::Attempt(stage), mode);
            let next = reveal_with(&text, Stage::Attempt(stage + 1), mode);
            for (a, b) in tokens(&now).iter().zip(tokens(&next)) {
                if *a != PLACEHOLDER {
                    prop_assert_eq!(*a, b);
                }
            }
        }

        #[test]
        fn first_chunk_always_visible(words in word_list(), stage in 0usize..12, mode in any_mode()) {
            let text = words.join(" ");
            let out = reveal_with(&text, Stage::Attempt(stage), mode);
            let size = chunk_size(words.len()).min(words.len());
            for (token, word) in tokens(&out).iter().zip(&words).take(size) {
                prop_assert_eq!(*token, word.as_str());
            }
        }

        #[test]
        fn terminal_has_no_placeholders(words in word_list()) {
            let text = words.join(" ");
            prop_assert_eq!(reveal(&text, Stage::Terminal), text);
        }
    }
}
