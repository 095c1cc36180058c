//! Word Ladder - CLI
//!
//! Finds shortest word-transformation ladders over a dictionary, one
//! single-character edit per step.

use anyhow::Result;
use clap::{Parser, Subcommand};
use word_ladder::{
    commands::{Algorithm, LadderConfig, check_distance, list_neighbors, run_ladder, run_simple},
    core::Dictionary,
    output::{print_distance_result, print_ladder_result, print_neighbors_result},
    wordlists::{WORDS, loader::dictionary_from_slice},
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Word ladder solver using breadth-first and bidirectional search",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Algorithm: bidirectional (default) or bfs
    #[arg(short, long, global = true, default_value = "bidirectional")]
    algorithm: String,

    /// Wordlist: 'embedded' (default) or path to a file of words
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive mode (default): prompt for start and end words
    Simple,

    /// Find the shortest ladder between two words
    Ladder {
        /// The start word
        start: String,

        /// The end word
        end: String,

        /// Show verbose output with dictionary statistics
        #[arg(short, long)]
        verbose: bool,
    },

    /// List all dictionary words one edit away from a word
    Neighbors {
        /// Word to find neighbors of
        word: String,
    },

    /// Check whether two words are one edit apart
    Distance {
        /// First word
        word_a: String,

        /// Second word
        word_b: String,

        /// Also check a general edit-distance bound
        #[arg(short, long)]
        bound: Option<usize>,
    },
}

/// Load the dictionary based on the -w flag
///
/// - "embedded": the word list compiled into the binary
/// - "<path>": load a custom word list from a file
fn load_dictionary(wordlist_mode: &str) -> Result<Dictionary> {
    use word_ladder::wordlists::loader::load_from_file;

    match wordlist_mode {
        "embedded" => Ok(dictionary_from_slice(WORDS)),
        path => {
            let dictionary = load_from_file(path)?;
            Ok(dictionary)
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(&cli.wordlist)?;
    let algorithm = Algorithm::from_name(&cli.algorithm);

    // Default to interactive mode if no command given
    let command = cli.command.unwrap_or(Commands::Simple);

    match command {
        Commands::Simple => {
            run_simple(&dictionary, algorithm).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Ladder {
            start,
            end,
            verbose,
        } => {
            let mut config = LadderConfig::new(start, end);
            config.algorithm = algorithm;
            let result = run_ladder(&config, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_ladder_result(&result, verbose);
            Ok(())
        }
        Commands::Neighbors { word } => {
            let result = list_neighbors(&word, &dictionary).map_err(|e| anyhow::anyhow!(e))?;
            print_neighbors_result(&result);
            Ok(())
        }
        Commands::Distance {
            word_a,
            word_b,
            bound,
        } => {
            let result =
                check_distance(&word_a, &word_b, bound).map_err(|e| anyhow::anyhow!(e))?;
            print_distance_result(&result);
            Ok(())
        }
    }
}
