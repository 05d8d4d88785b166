//! Reveal command
//!
//! Shows how the clue for one passage unfolds, stage by stage.

use crate::core::Locator;
use crate::corpus::Corpus;
use crate::engine::{RevealMode, Stage, reveal_with};
use anyhow::{Context, Result, anyhow, bail};

/// Masked clue of one passage at each requested stage
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RevealStages {
    pub locator: Locator,
    pub word_count: usize,
    pub stages: Vec<(Stage, String)>,
}

/// Parse `Book chapter:verse`, e.g. `"1 John 4:8"`
///
/// # Errors
///
/// Returns an error if the book or the `chapter:verse` part is missing or
/// not numeric.
pub fn parse_locator(input: &str) -> Result<Locator> {
    let input = input.trim();
    let (book, reference) = input
        .rsplit_once(char::is_whitespace)
        .ok_or_else(|| anyhow!("expected `Book chapter:verse`, got {input:?}"))?;
    let (chapter, verse) = reference
        .split_once(':')
        .ok_or_else(|| anyhow!("expected `chapter:verse`, got {reference:?}"))?;

    let book = book.trim();
    if book.is_empty() {
        bail!("missing book name in {input:?}");
    }

    Ok(Locator::new(
        book,
        chapter.parse().with_context(|| format!("bad chapter {chapter:?}"))?,
        verse.parse().with_context(|| format!("bad verse {verse:?}"))?,
    ))
}

/// Clue stages for the passage at `locator`
///
/// With `only` set, a single attempt stage is produced; otherwise every
/// attempt stage followed by the terminal one.
///
/// # Errors
///
/// Returns an error if the locator cannot be parsed or names no passage in
/// the corpus.
pub fn reveal_stages(
    corpus: &Corpus,
    locator: &str,
    attempts_max: usize,
    mode: RevealMode,
    only: Option<usize>,
) -> Result<RevealStages> {
    let wanted = parse_locator(locator)?;
    let book = corpus
        .canonical_book(&wanted.book)
        .ok_or_else(|| anyhow!("book {:?} is not in the corpus", wanted.book))?;
    let wanted = Locator::new(book, wanted.chapter, wanted.verse);
    let passage = corpus
        .find(&wanted)
        .ok_or_else(|| anyhow!("no passage at {wanted}"))?;

    let stages: Vec<Stage> = match only {
        Some(stage) => vec![Stage::Attempt(stage)],
        None => (0..attempts_max)
            .map(Stage::Attempt)
            .chain(std::iter::once(Stage::Terminal))
            .collect(),
    };

    Ok(RevealStages {
        locator: passage.locator(),
        word_count: passage.word_count(),
        stages: stages
            .into_iter()
            .map(|stage| (stage, reveal_with(&passage.text, stage, mode)))
            .collect(),
    })
}
