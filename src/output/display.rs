//! Display functions for command results

use super::formatters::{format_ladder, format_ladder_arrows, ladder_summary};
use crate::commands::{DistanceResult, LadderResult, NeighborsResult};
use colored::Colorize;

/// Print the result of a ladder search
pub fn print_ladder_result(result: &LadderResult, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Ladder: {} → {}",
        result.start.to_uppercase().bright_yellow().bold(),
        result.end.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    if let Some(report) = &result.usage_error {
        println!("\n{}", format!("⚠ {report}").yellow());
    }

    if result.ladder.is_empty() {
        println!("\n{}\n", "No word ladder found.".red().bold());
        return;
    }

    println!("\nWord ladder found: {}", format_ladder(&result.ladder));
    println!("  {}", format_ladder_arrows(&result.ladder).bright_white());
    println!(
        "\n{}",
        format!("✅ {}", ladder_summary(&result.ladder)).green().bold()
    );

    if verbose {
        println!(
            "  Searched a dictionary of {} words",
            result.dictionary_size
        );
    }
    println!();
}

/// Print the result of listing neighbors
pub fn print_neighbors_result(result: &NeighborsResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Neighbors of {} ({} in a dictionary of {} words)",
        result.word.to_uppercase().bright_yellow().bold(),
        result.neighbors.len(),
        result.dictionary_size
    );
    println!("{}", "─".repeat(60).cyan());

    if result.neighbors.is_empty() {
        println!("\n{}\n", "No neighbors found.".red());
        return;
    }

    println!();
    for neighbor in &result.neighbors {
        println!("  • {neighbor}");
    }
    println!();
}

/// Print the result of an edit-distance check
pub fn print_distance_result(result: &DistanceResult) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Distance: {} vs {}",
        result.word_a.to_uppercase().bright_yellow().bold(),
        result.word_b.to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    let adjacency = if result.adjacent {
        "one edit apart (or identical)".green().bold()
    } else {
        "more than one edit apart".red()
    };
    println!("\n  Adjacent:     {adjacency}");

    if let (Some(bound), Some(within)) = (result.bound, result.within_bound) {
        let verdict = if within {
            format!("within {bound} edits").green().bold()
        } else {
            format!("beyond {bound} edits").red()
        };
        println!("  Bounded:      {verdict}");
    }
    println!();
}
