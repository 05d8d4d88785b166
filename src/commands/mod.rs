//! Command implementations

pub mod analyze;
pub mod benchmark;
pub mod reveal;
pub mod simple;

pub use analyze::{CorpusAnalysis, analyze_corpus};
pub use benchmark::{BenchmarkResult, run_benchmark};
pub use reveal::{RevealStages, parse_locator, reveal_stages};
pub use simple::{run_simple, run_simple_with};
