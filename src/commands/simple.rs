//! Simple interactive CLI mode
//!
//! Text-based prompt loop: ask for a start and end word, run the search,
//! print the ladder, repeat.

use super::{Algorithm, LadderConfig, run_ladder};
use crate::core::Dictionary;
use crate::output::print_ladder_result;
use std::io::{self, Write};

/// Run the simple interactive mode
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(dictionary: &Dictionary, algorithm: Algorithm) -> Result<(), String> {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║              Word Ladder - Interactive Mode                  ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll find the shortest word ladder between two words, changing");
    println!("one letter at a time through {} dictionary words.\n", dictionary.len());
    println!("Commands: 'quit' to exit\n");

    loop {
        let start = get_user_input("Enter start word")?;
        if is_quit(&start) {
            println!("\n👋 Goodbye!\n");
            return Ok(());
        }

        let end = get_user_input("Enter end word")?;
        if is_quit(&end) {
            println!("\n👋 Goodbye!\n");
            return Ok(());
        }

        let mut config = LadderConfig::new(start, end);
        config.algorithm = algorithm;

        match run_ladder(&config, dictionary) {
            Ok(result) => print_ladder_result(&result, false),
            Err(message) => println!("\n❌ {message}\n"),
        }
    }
}

fn is_quit(input: &str) -> bool {
    matches!(input, "quit" | "q" | "exit")
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String, String> {
    print!("{prompt}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;

    Ok(input.trim().to_string())
}
