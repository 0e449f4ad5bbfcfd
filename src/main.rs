//! Wordle Oracle - CLI
//!
//! Solves hosted Wordle puzzles by refining a letter pattern from oracle
//! feedback, using a dictionary or a language model for candidates.

use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};
use wordle_oracle::{
    commands::{Services, load_word_list, run_bench, run_play, solve_word},
    config::{
        DEFAULT_BATCH_SIZE, DEFAULT_CHECKER_URL, DEFAULT_DICTIONARY_URL, DEFAULT_LLM_MODEL,
        DEFAULT_LLM_URL, DEFAULT_MAX_ROUNDS, DEFAULT_SIZE, GameMode, LetterPolicy,
        ServiceEndpoints, SessionConfig, SourceKind,
    },
    http::build_client,
    output::{print_bench_result, print_outcome, print_transcript},
};

#[derive(Parser)]
#[command(
    name = "wordle_oracle",
    about = "Solve hosted Wordle puzzles from per-slot oracle feedback",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Game mode: daily (default), random, word
    #[arg(short, long, global = true, value_enum, default_value_t = GameMode::Daily)]
    mode: GameMode,

    /// Word length for daily and random games
    #[arg(short = 'n', long, global = true, default_value_t = DEFAULT_SIZE)]
    size: usize,

    /// Explicit target word (implies --mode word)
    #[arg(short, long, global = true)]
    word: Option<String>,

    /// Maximum candidate rounds per session
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_ROUNDS)]
    max_rounds: u32,

    /// Candidate source: dictionary (default) or generative
    #[arg(short, long, global = true, value_enum, default_value_t = SourceKind::Dictionary)]
    source: SourceKind,

    /// Reject candidates that reuse a confirmed-absent letter
    #[arg(long, global = true)]
    strict_letters: bool,

    /// Candidates requested per round
    #[arg(long, global = true, default_value_t = DEFAULT_BATCH_SIZE)]
    batch_size: usize,

    #[arg(long, global = true, env = "WORDLE_CHECKER_URL", default_value = DEFAULT_CHECKER_URL)]
    checker_url: String,

    #[arg(long, global = true, env = "WORDLE_DICTIONARY_URL", default_value = DEFAULT_DICTIONARY_URL)]
    dictionary_url: String,

    #[arg(long, global = true, env = "OPENAI_BASE_URL", default_value = DEFAULT_LLM_URL)]
    llm_url: String,

    #[arg(long, global = true, env = "WORDLE_LLM_MODEL", default_value = DEFAULT_LLM_MODEL)]
    llm_model: String,

    /// API key for the generative source
    #[arg(long, global = true, env = "OPENAI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Log progress to stderr
    #[arg(short, long, global = true)]
    verbose: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Solve puzzles interactively, offering to play again (default)
    Play,

    /// Solve a single puzzle and print its transcript
    Solve,

    /// Solve a list of explicit words and report statistics
    Bench {
        /// Words to solve
        words: Vec<String>,

        /// Read words from a file, one per line
        #[arg(short, long)]
        file: Option<PathBuf>,
    },
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        let base = match &self.word {
            Some(word) => SessionConfig::for_word(word),
            None => SessionConfig::new(self.mode, self.size),
        };
        let policy = if self.strict_letters {
            LetterPolicy::Strict
        } else {
            LetterPolicy::Lenient
        };

        base.with_max_rounds(self.max_rounds)
            .with_source(self.source, self.api_key.clone())
            .with_letter_policy(policy)
            .with_batch_size(self.batch_size)
    }

    fn endpoints(&self) -> ServiceEndpoints {
        ServiceEndpoints {
            checker_url: self.checker_url.clone(),
            dictionary_url: self.dictionary_url.clone(),
            llm_url: self.llm_url.clone(),
            llm_model: self.llm_model.clone(),
        }
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "info" } else { "warn" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));

    // Stdout carries the transcript
    tracing_subscriber::registry()
        .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
        .with(env_filter)
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = cli.session_config();
    let http = build_client()?;
    let services = Services::new(&http, &cli.endpoints(), cli.source, cli.api_key.as_deref());

    match cli.command.unwrap_or(Commands::Play) {
        Commands::Play => run_play(&config, &services).await,
        Commands::Solve => {
            let outcome = solve_word(&config, &services).await?;
            print_transcript(&outcome);
            print_outcome(&outcome);
            Ok(())
        }
        Commands::Bench { mut words, file } => {
            if let Some(path) = file {
                words.extend(load_word_list(&path)?);
            }
            if words.is_empty() {
                bail!("No words to benchmark; pass words or --file");
            }

            println!("🎯 Solving {} words...", words.len());
            let result = run_bench(&words, &config, &services).await;
            print_bench_result(&result);
            Ok(())
        }
    }
}
