//! Interactive play loop
//!
//! Clears the terminal, runs a session, prints the transcript and asks
//! whether to play again. Every iteration starts from a fresh solver.

use super::solve::{Services, solve_word};
use crate::config::SessionConfig;
use crate::output::{print_banner, print_error, print_outcome, print_transcript};
use anyhow::Result;
use crossterm::{
    cursor::MoveTo,
    execute,
    terminal::{Clear, ClearType},
};
use std::io::{self, Write};

/// Run sessions until the player declines another
///
/// Session failures are reported and the player is offered another round;
/// an invalid configuration ends the loop before the first session.
///
/// # Errors
/// Returns an error if the configuration is invalid or the terminal cannot
/// be written to.
pub async fn run_play(config: &SessionConfig, services: &Services) -> Result<()> {
    config.validate()?;

    loop {
        clear_screen()?;
        print_banner(config);

        match solve_word(config, services).await {
            Ok(outcome) => {
                print_transcript(&outcome);
                print_outcome(&outcome);
            }
            Err(e) => print_error(&e),
        }

        if !ask_play_again()? {
            break;
        }
    }

    println!("Goodbye!");
    Ok(())
}

fn clear_screen() -> io::Result<()> {
    execute!(io::stdout(), Clear(ClearType::All), MoveTo(0, 0))
}

fn ask_play_again() -> io::Result<bool> {
    loop {
        print!("\nPlay again? (yes/no) [yes]: ");
        io::stdout().flush()?;

        let mut input = String::new();
        if io::stdin().read_line(&mut input)? == 0 {
            // EOF
            return Ok(false);
        }

        match parse_answer(&input) {
            Some(answer) => return Ok(answer),
            None => println!("Please answer yes or no."),
        }
    }
}

/// Interpret a yes/no reply; an empty reply means yes
fn parse_answer(input: &str) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "" | "y" | "yes" => Some(true),
        "n" | "no" | "q" | "quit" => Some(false),
        _ => None,
    }
}
