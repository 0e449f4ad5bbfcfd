//! Wordle Oracle
//!
//! Solves hosted Wordle puzzles by turning per-slot oracle feedback into a
//! shrinking letter pattern, requesting candidates that fit it and probing
//! letters known to be present until every slot is confirmed.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_oracle::commands::{Services, solve_word};
//! use wordle_oracle::config::{ServiceEndpoints, SessionConfig, SourceKind};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let http = wordle_oracle::http::build_client()?;
//! let services = Services::new(&http, &ServiceEndpoints::default(), SourceKind::Dictionary, None);
//!
//! let outcome = solve_word(&SessionConfig::for_word("apple"), &services).await?;
//! println!("{:?} in {} rounds", outcome.word(), outcome.rounds);
//! # Ok(())
//! # }
//! ```

// Core domain types
pub mod core;

// Session configuration and validation
pub mod config;

// Shared HTTP plumbing
pub mod http;

// Feedback oracle client
pub mod oracle;

// Candidate sources
pub mod sources;

// Solving loop
pub mod solver;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
