//! Command implementations

pub mod bench;
pub mod play;
pub mod solve;

pub use bench::{BenchResult, WordOutcome, WordRun, load_word_list, parse_word_list, run_bench};
pub use play::run_play;
pub use solve::{Services, run_session, solve_word};
