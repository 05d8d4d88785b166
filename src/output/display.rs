//! Display functions for command results

use super::formatters::create_progress_bar;
use crate::commands::{BenchmarkResult, CorpusAnalysis, RevealStages};
use crate::engine::Stage;
use colored::Colorize;

fn banner(title: &str) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", title.bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
}

/// Print corpus statistics
pub fn print_analysis_result(result: &CorpusAnalysis) {
    banner("CORPUS ANALYSIS");

    println!("\n📖 {}", "Contents:".bright_cyan().bold());
    println!("   Passages:         {}", result.passages.to_string().bright_yellow().bold());
    println!("   Books:            {}", result.books);
    println!(
        "   Words/passage:    {} .. {} (mean {:.1})",
        result.min_words, result.max_words, result.mean_words
    );
    println!("   Under 7 words:    {}", result.short_passages);
    if result.empty_passages > 0 {
        println!("   Empty:            {}", result.empty_passages.to_string().red());
    }

    println!("\n📚 {}", "Categories:".bright_cyan().bold());
    let widest = result.per_category.iter().map(|&(_, n)| n).max().unwrap_or(0);
    for &(name, count) in &result.per_category {
        let bar = create_progress_bar(count as f64, widest as f64, 30);
        println!("   {name:<26} {} {count:5}", bar.green());
    }
    if result.uncategorized > 0 {
        println!(
            "   {:<26} {}",
            "(not in table)".yellow(),
            result.uncategorized.to_string().yellow()
        );
    }
    if result.area_mismatches > 0 {
        println!(
            "\n⚠️  {} passages carry an area that disagrees with the table",
            result.area_mismatches.to_string().yellow()
        );
    }

    if !result.unguessable.is_empty() {
        println!(
            "\n⚠️  {} (chapter or verse ≥ 100, only the last two digits can be guessed):",
            "Not fully guessable".yellow().bold()
        );
        for locator in result.unguessable.iter().take(10) {
            println!("   • {locator}");
        }
        if result.unguessable.len() > 10 {
            println!("   … and {} more", result.unguessable.len() - 10);
        }
    }
}

/// Print the result of a benchmark
pub fn print_benchmark_result(result: &BenchmarkResult) {
    banner("BENCHMARK RESULTS");

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Games played:     {}", result.games);
    println!(
        "   Win rate:         {}",
        format!("{:.1}%", result.win_rate() * 100.0).bright_yellow().bold()
    );
    println!("   Average guesses:  {:.2}", result.average_attempts);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());
    println!("   Games/second:     {:.1}", result.games_per_second);

    if result.games == 0 {
        return;
    }

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for attempts in 1..=result.attempts_max {
        let count = result.distribution.get(&attempts).copied().unwrap_or(0);
        let pct = (count as f64 / result.games as f64) * 100.0;
        let bar = create_progress_bar(pct, 100.0, 40);
        println!("   {attempts}: {} {count:4} ({pct:5.1}%)", bar.green());
    }
    let losses = result.games - result.wins;
    let pct = (losses as f64 / result.games as f64) * 100.0;
    let bar = create_progress_bar(pct, 100.0, 40);
    println!("   X: {} {losses:4} ({pct:5.1}%)", bar.red());
}

/// Print the clue of one passage at each stage
pub fn print_reveal_stages(result: &RevealStages) {
    banner(&format!("REVEAL: {}", result.locator));
    println!("\n   {} words\n", result.word_count);

    for (stage, clue) in &result.stages {
        let label = match stage {
            Stage::Attempt(n) => format!("Attempt {}", n + 1),
            Stage::Terminal => "Final".to_string(),
        };
        println!("{}", label.bright_cyan().bold());
        println!("   {clue}\n");
    }
}
