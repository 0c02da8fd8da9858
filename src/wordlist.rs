//! Loading word lists from delimited text files.
//!
//! One record per line; only the first comma-separated field of a record is used.
//! Blank lines are skipped. Every other record must be a word over `a`-`z`, otherwise
//! loading fails without returning any words.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::trie::Symbol;
use crate::WordSet;

/// Errors that can occur while loading a word list.
#[derive(Debug, Error)]
pub enum WordListError {
    /// The file could not be opened or read.
    #[error("failed to read word list {}", path.display())]
    Io {
        /// The word list being read.
        path: PathBuf,
        /// The underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// A record contained a character outside `a`-`z`.
    #[error(
        "{}:{line}: invalid character {symbol:?} in word {word:?}: only a-z allowed",
        path.display()
    )]
    InvalidWord {
        /// The word list being read.
        path: PathBuf,
        /// 1-based line number of the record.
        line: usize,
        /// The rejected word.
        word: String,
        /// The first offending character.
        symbol: char,
    },
}

/// Extracts the word from one record, or `None` for a blank line.
fn first_field(line: &str) -> Option<&str> {
    let word = line.split(',').next().unwrap_or_default().trim();
    (!word.is_empty()).then_some(word)
}

/// Reads a word list from `path`.
///
/// # Examples
///
/// ```no_run
/// use compword::wordlist::load_words;
///
/// let words = load_words("words.txt").unwrap();
/// println!("{} words", words.len());
/// ```
pub fn load_words(path: impl AsRef<Path>) -> Result<WordSet, WordListError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| WordListError::Io {
        path: path.to_owned(),
        source,
    })?;
    read_words(BufReader::new(file), path)
}

/// Reads a word list from any buffered reader. `path` is only used in errors.
pub fn read_words(mut reader: impl BufRead, path: &Path) -> Result<WordSet, WordListError> {
    let mut words = WordSet::new();

    // Reuse one buffer instead of allocating a new string for every line.
    let mut buf = String::with_capacity(80);
    let mut line = 0;
    loop {
        buf.clear();
        let bytes_read = reader.read_line(&mut buf).map_err(|source| WordListError::Io {
            path: path.to_owned(),
            source,
        })?;
        if bytes_read == 0 {
            break;
        }
        line += 1;

        let Some(word) = first_field(&buf) else {
            continue;
        };
        if let Some(symbol) = word.chars().find(|&ch| Symbol::try_from(ch).is_err()) {
            return Err(WordListError::InvalidWord {
                path: path.to_owned(),
                line,
                word: word.to_owned(),
                symbol,
            });
        }
        if !words.contains(word) {
            words.insert(word.to_owned());
        }
    }

    debug!("read {} words from {} lines of {}", words.len(), line, path.display());
    Ok(words)
}
