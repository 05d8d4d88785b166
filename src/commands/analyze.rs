//! Corpus analysis command
//!
//! Summarizes a loaded corpus: sizes, word counts, category coverage and the
//! passages whose chapter or verse cannot be expressed in two digits.

use crate::core::{Locator, Passage};
use crate::corpus::{Corpus, categories};
use rayon::prelude::*;
use rustc_hash::FxHashMap;

/// Result of analyzing a corpus
#[derive(Debug, Clone, PartialEq)]
pub struct CorpusAnalysis {
    pub passages: usize,
    pub books: usize,
    pub min_words: usize,
    pub max_words: usize,
    pub mean_words: f64,
    /// Passages with fewer than 7 words (one-word reveal chunks)
    pub short_passages: usize,
    pub empty_passages: usize,
    /// Passages with chapter or verse of 100 or more
    pub unguessable: Vec<Locator>,
    /// Passage count per category, in table order
    pub per_category: Vec<(&'static str, usize)>,
    /// Passages whose book is not in the category table
    pub uncategorized: usize,
    /// Passages whose `area` field disagrees with the category table
    pub area_mismatches: usize,
}

#[derive(Default)]
struct Tally {
    per_category: FxHashMap<&'static str, usize>,
    uncategorized: usize,
    area_mismatches: usize,
}

impl Tally {
    fn add(mut self, passage: &Passage) -> Self {
        match categories::category_of(&passage.book) {
            Some(category) => {
                *self.per_category.entry(category).or_insert(0) += 1;
                if !passage.area.is_empty() && passage.area != category {
                    self.area_mismatches += 1;
                }
            }
            None => self.uncategorized += 1,
        }
        self
    }

    fn merge(mut self, other: Self) -> Self {
        for (category, count) in other.per_category {
            *self.per_category.entry(category).or_insert(0) += count;
        }
        self.uncategorized += other.uncategorized;
        self.area_mismatches += other.area_mismatches;
        self
    }
}

/// Analyze a corpus
#[must_use]
pub fn analyze_corpus(corpus: &Corpus) -> CorpusAnalysis {
    let passages = corpus.passages();
    let word_counts: Vec<usize> = passages.par_iter().map(Passage::word_count).collect();

    let tally = passages
        .par_iter()
        .fold(Tally::default, Tally::add)
        .reduce(Tally::default, Tally::merge);

    let unguessable: Vec<Locator> = passages
        .par_iter()
        .filter(|p| !p.is_fully_guessable())
        .map(Passage::locator)
        .collect();

    let total_words: usize = word_counts.iter().sum();
    let mean_words = if word_counts.is_empty() {
        0.0
    } else {
        total_words as f64 / word_counts.len() as f64
    };

    let per_category = categories::CATEGORIES
        .iter()
        .map(|&(name, _)| (name, tally.per_category.get(name).copied().unwrap_or(0)))
        .collect();

    CorpusAnalysis {
        passages: passages.len(),
        books: corpus.all_book_names().len(),
        min_words: word_counts.iter().copied().min().unwrap_or(0),
        max_words: word_counts.iter().copied().max().unwrap_or(0),
        mean_words,
        short_passages: word_counts.iter().filter(|&&n| n < 7).count(),
        empty_passages: word_counts.iter().filter(|&&n| n == 0).count(),
        unguessable,
        per_category,
        uncategorized: tally.uncategorized,
        area_mismatches: tally.area_mismatches,
    }
}
