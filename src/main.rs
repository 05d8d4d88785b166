//! Bibirble - CLI
//!
//! Verse-guessing game with TUI and line-based modes, plus corpus tooling.

use anyhow::{Result, anyhow};
use bibirble::{
    commands::{analyze_corpus, reveal_stages, run_benchmark, run_simple},
    corpus::{Corpus, loader},
    engine::{DEFAULT_ATTEMPTS, Game, GameConfig, RevealMode},
    output::{print_analysis_result, print_benchmark_result, print_reveal_stages},
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "bibirble",
    about = "Guess the book, chapter and verse of a slowly revealed Bible passage",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Passage file (JSON); defaults to bible_sections.json in the usual places
    #[arg(short, long, global = true, env = "BIBIRBLE_CORPUS")]
    corpus: Option<PathBuf>,

    /// Seed for target selection (random if omitted)
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Attempts per game, also the number of reveal stages (1-99)
    #[arg(
        short,
        long,
        global = true,
        default_value_t = DEFAULT_ATTEMPTS as u16,
        value_parser = clap::value_parser!(u16).range(1..=99)
    )]
    attempts: u16,

    /// Reveal mode: content (default) or positional
    #[arg(short, long, global = true, default_value = "content")]
    reveal: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based game without TUI)
    Simple,

    /// Corpus statistics
    Analyze,

    /// Auto-play seeded games and report the win rate
    Benchmark {
        /// Number of games to play
        #[arg(short = 'n', long, default_value = "200")]
        count: usize,
    },

    /// Show the clue of one passage at each stage
    Reveal {
        /// Passage locator, e.g. "John 3:16"
        locator: String,

        /// Show a single stage (0-based) instead of all of them
        #[arg(short, long)]
        stage: Option<usize>,
    },
}

fn init_tracing(default_level: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    // Keep the TUI screen clean unless RUST_LOG asks for more
    init_tracing(if matches!(command, Commands::Play) {
        "error"
    } else {
        "warn"
    });

    let reveal_mode = RevealMode::from_name(&cli.reveal).ok_or_else(|| {
        anyhow!(
            "unknown reveal mode '{}' (use content or positional)",
            cli.reveal
        )
    })?;
    let config = GameConfig {
        attempts_max: usize::from(cli.attempts),
        reveal_mode,
        seed: cli.seed,
    };
    let corpus = loader::load_or_empty(cli.corpus.as_deref());

    match command {
        Commands::Play => run_play_command(corpus, config),
        Commands::Simple => run_simple(&mut Game::new(corpus, config)),
        Commands::Analyze => {
            ensure_data(&corpus)?;
            print_analysis_result(&analyze_corpus(&corpus));
            Ok(())
        }
        Commands::Benchmark { count } => {
            ensure_data(&corpus)?;
            run_benchmark_command(&corpus, count, config);
            Ok(())
        }
        Commands::Reveal { locator, stage } => {
            ensure_data(&corpus)?;
            let stages =
                reveal_stages(&corpus, &locator, config.attempts_max, reveal_mode, stage)?;
            print_reveal_stages(&stages);
            Ok(())
        }
    }
}

fn ensure_data(corpus: &Corpus) -> Result<()> {
    if corpus.is_empty() {
        return Err(anyhow!(bibirble::engine::NO_DATA_MESSAGE));
    }
    Ok(())
}

fn run_benchmark_command(corpus: &Corpus, count: usize, config: GameConfig) {
    let seed = config.seed.unwrap_or_else(rand::random);
    println!(
        "Running benchmark on {count} games over {} passages (seed {seed})...",
        corpus.len()
    );

    let result = run_benchmark(corpus, count, config.attempts_max, seed, true);
    print_benchmark_result(&result);
}

fn run_play_command(corpus: Corpus, config: GameConfig) -> Result<()> {
    use bibirble::interactive::{App, run_tui};

    let app = App::new(Game::new(corpus, config));
    run_tui(app)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attempts_default_to_seven() {
        let cli = Cli::try_parse_from(["bibirble", "analyze"]).unwrap();
        assert_eq!(usize::from(cli.attempts), DEFAULT_ATTEMPTS);
    }

    #[test]
    fn attempts_are_bounded() {
        assert!(Cli::try_parse_from(["bibirble", "--attempts", "0"]).is_err());
        assert!(Cli::try_parse_from(["bibirble", "--attempts", "100"]).is_err());
        assert!(Cli::try_parse_from(["bibirble", "--attempts", "65534"]).is_err());
        let cli = Cli::try_parse_from(["bibirble", "--attempts", "99"]).unwrap();
        assert_eq!(cli.attempts, 99);
    }
}
