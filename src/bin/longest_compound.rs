// Prints the longest compound word in a word list.

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::{debug, info};

use compword::search::CompoundSearch;
use compword::trie::build_prefix_index;
use compword::wordlist::load_words;

/// Finds the longest compound word in the given list of words
#[derive(Parser, Debug)]
#[command(name = "longest-compound")]
#[command(version, about, long_about = None)]
struct Args {
    /// File name containing word list, one word per line
    #[arg(value_name = "FNAME")]
    fname: PathBuf,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse();

    let words = load_words(&args.fname)?;
    info!("loaded {} words from {}", words.len(), args.fname.display());

    let index = build_prefix_index(&words)
        .with_context(|| format!("Failed to index {}", args.fname.display()))?;
    debug!("{index:?}");

    let search = CompoundSearch::new(&words, &index);
    let (found, stats) = search.find_longest_with_stats();
    info!(
        "search popped {} of {} candidates",
        stats.popped,
        stats.seeded + stats.pushed
    );

    match found {
        Some(word) => {
            if let Some(parts) = search.decompose(word) {
                debug!("{word} = {}", parts.join(" + "));
            }
            println!("{word}");
        }
        None => println!("No compound words"),
    }

    Ok(())
}
