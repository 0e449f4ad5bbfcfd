//! Terminal output formatting
//!
//! Display utilities for transcripts, outcomes and benchmark statistics.

pub mod display;
pub mod formatters;

pub use display::{print_banner, print_bench_result, print_error, print_outcome, print_transcript};
