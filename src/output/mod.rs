//! Terminal output formatting
//!
//! Display utilities for CLI results, colored board rows and share text.

pub mod display;
pub mod formatters;

pub use display::{print_analysis_result, print_benchmark_result, print_reveal_stages};
