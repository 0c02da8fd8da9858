use log::debug;
use smallvec::SmallVec;
use thiserror::Error;

use super::index::PrefixIndex;
use super::node::TrieNode;
use super::node_arena::{NodeArena, NodeId};
use super::symbol::Symbol;

/// Errors that can occur when building a [`PrefixIndex`].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BuildError {
    /// A word contained a character outside `a`-`z`.
    ///
    /// `position` is the zero-based character offset of `symbol` within `word`.
    #[error(
        "invalid character {symbol:?} at position {position} in word {word:?}: only a-z allowed"
    )]
    InvalidSymbol {
        /// The rejected word.
        word: String,
        /// The first offending character.
        symbol: char,
        /// Character offset of `symbol`.
        position: usize,
    },
}

/// Converts a word to trie symbols, rejecting anything outside the alphabet.
pub(crate) fn symbols_of(word: &str) -> Result<SmallVec<[Symbol; 32]>, BuildError> {
    word.chars()
        .enumerate()
        .map(|(position, ch)| {
            Symbol::try_from(ch).map_err(|symbol| BuildError::InvalidSymbol {
                word: word.to_owned(),
                symbol,
                position,
            })
        })
        .collect()
}

/// Incremental builder for a [`PrefixIndex`].
///
/// Words may be added in any order and duplicates are ignored. A word is validated
/// completely before any node is created, so a rejected word leaves the builder
/// unchanged.
#[derive(Debug)]
pub struct Builder {
    arena: NodeArena,
    word_count: usize,
}

impl Builder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Builder {
            arena: NodeArena::new(),
            word_count: 0,
        }
    }

    /// Adds a word to the index being constructed.
    ///
    /// Returns `Ok(true)` if the word was new, `Ok(false)` if it was already present
    /// or empty. The empty word never marks the root, so it can never be reported
    /// as a prefix.
    ///
    /// # Errors
    ///
    /// Returns [`BuildError::InvalidSymbol`] if the word contains a character
    /// outside `a`-`z`.
    pub fn add_word(&mut self, word: &str) -> Result<bool, BuildError> {
        let symbols = symbols_of(word)?;
        if symbols.is_empty() {
            return Ok(false);
        }

        let mut current = NodeId::ROOT;
        for &symbol in &symbols {
            current = match self.arena.get(current).child(symbol) {
                Some(child) => child,
                None => {
                    let child = self.arena.alloc(TrieNode::new(symbol));
                    self.arena.get_mut(current).insert(symbol, child);
                    child
                }
            };
        }

        let node = self.arena.get_mut(current);
        if node.is_word() {
            return Ok(false);
        }
        node.set_word();
        self.word_count += 1;
        Ok(true)
    }

    /// Finalizes construction. The returned index is immutable.
    pub fn build(self) -> PrefixIndex {
        debug!(
            "built prefix index: {} words, {} nodes",
            self.word_count,
            self.arena.len()
        );
        PrefixIndex::from_parts(self.arena, self.word_count)
    }
}

impl Default for Builder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds a [`PrefixIndex`] from an iterator of words.
///
/// Words may come in any order; duplicates are stored once.
///
/// # Examples
///
/// ```
/// use compword::trie::build_prefix_index;
///
/// let index = build_prefix_index(["cat", "dog", "catdog"]).unwrap();
/// assert!(index.contains("catdog"));
/// assert!(!index.contains("catd"));
/// assert_eq!(index.prefixes_of("catdogs").as_slice(), ["cat", "catdog"]);
/// ```
///
/// # Errors
///
/// Fails on the first word containing a character outside `a`-`z`.
pub fn build_prefix_index<W: AsRef<str>>(
    words: impl IntoIterator<Item = W>,
) -> Result<PrefixIndex, BuildError> {
    let mut builder = Builder::new();
    for word in words {
        builder.add_word(word.as_ref())?;
    }
    Ok(builder.build())
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn shared_prefixes_share_nodes() {
        let index = build_prefix_index(["abcdef"]).unwrap();
        assert_eq!(index.node_count(), "abcdef".len() + 1);

        let index = build_prefix_index(["abcdef", "abc", "ab", "abcdefg"]).unwrap();
        assert_eq!(index.node_count(), "abcdefg".len() + 1);
    }

    #[test]
    fn unsorted_input_is_accepted() {
        let index = build_prefix_index(["delta", "alfa", "charlie", "bravo"]).unwrap();
        assert_eq!(index.len(), 4);
        assert_eq!(index.words(), ["alfa", "bravo", "charlie", "delta"]);
    }

    #[test]
    fn duplicate_words_are_stored_once() {
        let mut builder = Builder::new();
        assert_eq!(builder.add_word("echo"), Ok(true));
        assert_eq!(builder.add_word("echo"), Ok(false));
        let index = builder.build();
        assert_eq!(index.len(), 1);
    }

    #[test]
    fn empty_word_is_ignored() {
        let mut builder = Builder::new();
        assert_eq!(builder.add_word(""), Ok(false));
        let index = builder.build();
        assert!(index.is_empty());
        assert!(!index.root().is_word());
    }

    #[test]
    fn invalid_symbol_reports_position() {
        let res = build_prefix_index(["alfa", "brAvo"]);
        assert_eq!(
            res.unwrap_err(),
            BuildError::InvalidSymbol {
                word: "brAvo".to_owned(),
                symbol: 'A',
                position: 2,
            }
        );
    }

    #[test]
    fn rejected_word_leaves_builder_unchanged() {
        let mut builder = Builder::new();
        builder.add_word("golf").unwrap();
        assert!(builder.add_word("gol-f").is_err());
        let index = builder.build();
        assert_eq!(index.node_count(), "golf".len() + 1);
        assert!(!index.contains("gol"));
    }

    #[test]
    fn error_message_names_the_word() {
        let err = build_prefix_index(["hotel9"]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid character '9' at position 5 in word \"hotel9\": only a-z allowed"
        );
    }
}
