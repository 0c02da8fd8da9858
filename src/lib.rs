//! # compword
//!
//! Finds the longest *compound word* in a word list: a word that splits into two or
//! more other words from the same list.
//!
//! Two pieces do the work:
//!
//! - [`PrefixIndex`](trie::PrefixIndex), a trie over the fixed `a`-`z` alphabet that
//!   answers "which prefixes of this string are words?" in time proportional to the
//!   matched part of the string.
//! - [`CompoundSearch`](search::CompoundSearch), a best-first search over suffix
//!   decompositions. Candidates are processed longest-word-first, so the first
//!   candidate that decomposes completely is the answer.
//!
//! ## Quick Start
//!
//! ```
//! use compword::search::find_longest;
//! use compword::trie::build_prefix_index;
//! use compword::WordSet;
//!
//! let words: WordSet = ["cat", "cats", "dog", "catsdogcats", "dogcatsdog"]
//!     .into_iter()
//!     .map(String::from)
//!     .collect();
//! let index = build_prefix_index(&words).unwrap();
//!
//! assert_eq!(find_longest(&words, &index), Some("catsdogcats"));
//! ```
//!
//! Word lists are read with [`wordlist::load_words`]; the `longest-compound` binary
//! wires the three together.

#![warn(missing_docs)]

/// Best-first compound word search.
pub mod search;
/// Prefix trie over the `a`-`z` alphabet.
pub mod trie;
/// Word list file loading.
pub mod wordlist;

pub use search::{find_longest, CancelToken, Cancelled, CompoundSearch, SearchStats};
pub use trie::{build_prefix_index, BuildError, PrefixIndex};
pub use wordlist::{load_words, WordListError};

/// The set of words a search runs over; also the membership oracle for suffixes.
pub type WordSet = hashbrown::HashSet<String>;
