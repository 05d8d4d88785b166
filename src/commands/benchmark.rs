//! Benchmark command
//!
//! Plays many seeded rounds with the automatic player and reports how often
//! and how quickly it wins.

use crate::corpus::Corpus;
use crate::solver::{AutoPlayer, PlayRecord};
use indicatif::{ProgressBar, ProgressStyle};
use rand::SeedableRng;
use rand::rngs::StdRng;
use rayon::prelude::*;
use rustc_hash::FxHashMap;
use std::time::{Duration, Instant};

/// Result of a benchmark run
#[derive(Debug, Clone)]
pub struct BenchmarkResult {
    pub games: usize,
    pub wins: usize,
    pub attempts_max: usize,
    /// Average attempts over won games
    pub average_attempts: f64,
    /// Attempts needed -> number of games won with that many
    pub distribution: FxHashMap<usize, usize>,
    pub duration: Duration,
    pub games_per_second: f64,
}

impl BenchmarkResult {
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.wins as f64 / self.games as f64
        }
    }
}

/// Play `games` rounds on random targets
///
/// Round `i` uses an RNG seeded from `seed + i`, so results do not depend on
/// thread scheduling.
#[must_use]
pub fn run_benchmark(
    corpus: &Corpus,
    games: usize,
    attempts_max: usize,
    seed: u64,
    show_progress: bool,
) -> BenchmarkResult {
    let start = Instant::now();
    let locators = corpus.locators();
    let player = AutoPlayer::new(&locators);

    let pb = if show_progress {
        let pb = ProgressBar::new(games as u64);
        pb.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_bar())
                .progress_chars("█▓▒░"),
        );
        pb
    } else {
        ProgressBar::hidden()
    };

    let records: Vec<PlayRecord> = (0..games as u64)
        .into_par_iter()
        .filter_map(|i| {
            let mut rng = StdRng::seed_from_u64(seed.wrapping_add(i));
            let target = corpus.random_passage(&mut rng)?;
            let record = player.play(target, attempts_max, &mut rng);
            pb.inc(1);
            Some(record)
        })
        .collect();

    pb.finish_with_message("Complete!");

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut total_attempts = 0;
    let mut wins = 0;
    for record in records.iter().filter(|r| r.won) {
        wins += 1;
        total_attempts += record.guesses.len();
        *distribution.entry(record.guesses.len()).or_insert(0) += 1;
    }

    let duration = start.elapsed();
    let played = records.len();

    BenchmarkResult {
        games: played,
        wins,
        attempts_max,
        average_attempts: if wins == 0 {
            0.0
        } else {
            total_attempts as f64 / wins as f64
        },
        distribution,
        duration,
        games_per_second: played as f64 / duration.as_secs_f64().max(f64::EPSILON),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::loader::from_json_str;

    fn sample() -> Corpus {
        from_json_str(include_str!("../../data/sample_sections.json")).unwrap()
    }

    #[test]
    fn benchmark_runs() {
        let result = run_benchmark(&sample(), 20, 7, 42, false);

        assert_eq!(result.games, 20);
        assert!(result.wins <= result.games);
        assert!(result.average_attempts <= 7.0);
        assert!((0.0..=1.0).contains(&result.win_rate()));
    }

    #[test]
    fn benchmark_distribution_sums_to_wins() {
        let result = run_benchmark(&sample(), 30, 7, 7, false);
        let distribution_sum: usize = result.distribution.values().sum();
        assert_eq!(distribution_sum, result.wins);
        assert!(result.distribution.keys().all(|&k| (1..=7).contains(&k)));
    }

    #[test]
    fn benchmark_is_reproducible() {
        let a = run_benchmark(&sample(), 15, 7, 99, false);
        let b = run_benchmark(&sample(), 15, 7, 99, false);
        assert_eq!(a.wins, b.wins);
        assert_eq!(a.distribution, b.distribution);
    }

    #[test]
    fn benchmark_on_empty_corpus() {
        let result = run_benchmark(&Corpus::default(), 10, 7, 1, false);
        assert_eq!(result.games, 0);
        assert_eq!(result.wins, 0);
        assert!(result.win_rate().abs() < f64::EPSILON);
    }
}
