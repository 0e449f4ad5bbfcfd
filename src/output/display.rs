//! Display functions for command results

use super::formatters::{create_progress_bar, format_letters, render_feedback};
use crate::commands::BenchResult;
use crate::config::SessionConfig;
use crate::core::{feedback_to_emoji, is_all_correct};
use crate::solver::{GuessKind, Outcome, SolveOutcome};
use colored::Colorize;

/// Print the session banner
pub fn print_banner(config: &SessionConfig) {
    println!("{}", "═".repeat(60).cyan());
    println!(" {} ", "WORDLE ORACLE".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!(
        "Mode: {}   Size: {}   Max rounds: {}",
        config.mode.to_string().bright_yellow(),
        config.size,
        config.max_rounds
    );
    println!();
}

/// Print every oracle submission of a finished session
pub fn print_transcript(outcome: &SolveOutcome) {
    for line in transcript_lines(outcome) {
        println!("{line}");
    }
}

/// Transcript lines in submission order
///
/// A candidate's "Current" line is held back until its probes are listed,
/// so the patterns read in the order they were reached.
#[must_use]
pub fn transcript_lines(outcome: &SolveOutcome) -> Vec<String> {
    let mut lines = Vec::with_capacity(outcome.steps.len() * 3);
    let mut pending: Option<String> = None;

    for step in &outcome.steps {
        if step.kind == GuessKind::Candidate {
            lines.extend(pending.take());
        }

        let label = match step.kind {
            GuessKind::Candidate => "Guess".bright_blue().bold(),
            GuessKind::Probe => "Spam ".yellow().bold(),
        };
        lines.push(format!(
            "[{:>2}] {label} {}  {}",
            step.round,
            render_feedback(&step.feedback),
            feedback_to_emoji(&step.feedback)
        ));

        if step.kind == GuessKind::Candidate && !is_all_correct(&step.feedback) {
            lines.push(format!("     {} {}", "Wrong".red(), step.word));
        }

        let current = format!("     {} {}", "Current".bright_black(), step.pattern_after);
        match step.kind {
            GuessKind::Candidate => pending = Some(current),
            GuessKind::Probe => lines.push(current),
        }
    }

    lines.extend(pending);
    lines
}

/// Print the final result banner
pub fn print_outcome(outcome: &SolveOutcome) {
    println!();
    match &outcome.outcome {
        Outcome::Solved { word } => {
            println!(
                "{}",
                format!("✅ Result: {}", word.to_uppercase()).green().bold()
            );
            println!(
                "   Rounds: {}   Guesses: {} ({} probes)",
                outcome.rounds,
                outcome.guesses(),
                outcome.probes()
            );
        }
        Outcome::Failed(kind) => {
            println!(
                "{}",
                format!("❌ No word found ({kind})").red().bold()
            );
            println!("   Pattern: {}", outcome.pattern);
            println!(
                "   Absent:  {}",
                format_letters(&outcome.knowledge.absent())
            );
            println!(
                "   Present: {}",
                format_letters(&outcome.knowledge.present())
            );
            println!(
                "   Rounds: {}   Guesses: {}",
                outcome.rounds,
                outcome.guesses()
            );
        }
    }
}

/// Print a session error
pub fn print_error(error: &anyhow::Error) {
    eprintln!("{} {error:#}", "Error:".red().bold());
}

/// Print the result of a benchmark
pub fn print_bench_result(result: &BenchResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "BENCHMARK RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", result.total_words);
    println!(
        "   Solved:           {} ({:.1}%)",
        result.solved.to_string().green(),
        result.success_rate()
    );
    println!("   No candidates:    {}", result.no_candidates);
    println!("   Rounds exhausted: {}", result.rounds_exhausted);
    println!("   Errors:           {}", result.errors);
    println!(
        "   Average rounds:   {}",
        format!("{:.2}", result.average_rounds)
            .bright_yellow()
            .bold()
    );
    println!("   Average guesses:  {:.2}", result.average_guesses);
    println!("   Time taken:       {:.2}s", result.duration.as_secs_f64());

    if result.solved > 0 {
        println!("\n📈 {}", "Rounds distribution:".bright_cyan().bold());
        for (rounds, &count) in &result.distribution {
            let pct = count as f64 / result.solved as f64 * 100.0;
            let bar = create_progress_bar(pct, 100.0, 40);
            println!("   {rounds:>3}: {} {count:4} ({pct:5.1}%)", bar.green());
        }
    }

    if !result.failed_words.is_empty() {
        println!("\n⚠️  {}", "Unsolved:".yellow().bold());
        println!("   {}", result.failed_words.join(", "));
    }
}
