//! Best-first search for the longest compound word.
//!
//! The frontier holds partially matched candidates: an original word plus the offset
//! of the suffix still left to match. Candidates are popped longest-original-first, so
//! the first candidate whose remaining suffix is itself a word is the longest compound
//! word in the set.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::sync::atomic::{AtomicBool, Ordering as AtomicOrdering};
use std::sync::Arc;

use hashbrown::HashSet;
use log::{debug, trace};
use thiserror::Error;

use crate::trie::PrefixIndex;
use crate::WordSet;

/// Returned by [`CompoundSearch::find_longest_until`] when its token was tripped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("compound word search cancelled")]
pub struct Cancelled;

/// A shared flag that stops a running search between frontier pops.
///
/// Clones share the same flag, so one clone can be handed to another thread and
/// tripped there while the search runs.
#[derive(Debug, Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    /// Creates a token that has not been tripped.
    pub fn new() -> Self {
        Self::default()
    }

    /// Requests cancellation of every search observing this token.
    pub fn cancel(&self) {
        self.0.store(true, AtomicOrdering::Relaxed);
    }

    /// True once [`cancel`](CancelToken::cancel) has been called on any clone.
    pub fn is_cancelled(&self) -> bool {
        self.0.load(AtomicOrdering::Relaxed)
    }
}

/// Counters describing how much work one search did.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Candidates pushed while seeding from whole words.
    pub seeded: usize,
    /// Candidates popped from the frontier.
    pub popped: usize,
    /// Candidates pushed while extending popped suffixes.
    pub pushed: usize,
    /// Suffixes not pushed because the same state was already queued.
    pub suppressed: usize,
}

/// One frontier entry: `original` with the first `offset` bytes already matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
struct Candidate<'a> {
    original: &'a str,
    offset: usize,
}

impl<'a> Candidate<'a> {
    #[inline]
    fn suffix(&self) -> &'a str {
        &self.original[self.offset..]
    }
}

// Max-heap order: longer originals first; among equal lengths the smaller original,
// then the smaller suffix, wins. This makes the result independent of set iteration order.
impl Ord for Candidate<'_> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.original
            .len()
            .cmp(&other.original.len())
            .then_with(|| other.original.cmp(self.original))
            .then_with(|| other.suffix().cmp(self.suffix()))
    }
}

impl PartialOrd for Candidate<'_> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Finds compound words: words that split into two or more words of the same set.
///
/// The word set is both the source of candidates and the membership oracle; the
/// index must have been built from the same words.
///
/// # Examples
///
/// ```
/// use compword::search::CompoundSearch;
/// use compword::trie::build_prefix_index;
/// use compword::WordSet;
///
/// let words: WordSet = ["cat", "dog", "catdogcat"].into_iter().map(String::from).collect();
/// let index = build_prefix_index(&words).unwrap();
/// let search = CompoundSearch::new(&words, &index);
///
/// assert_eq!(search.find_longest(), Some("catdogcat"));
/// assert_eq!(search.decompose("catdogcat"), Some(vec!["cat", "dog", "cat"]));
/// ```
#[derive(Debug, Clone, Copy)]
pub struct CompoundSearch<'a> {
    words: &'a WordSet,
    index: &'a PrefixIndex,
}

impl<'a> CompoundSearch<'a> {
    /// Creates a search over `words` using a prefix index built from them.
    pub fn new(words: &'a WordSet, index: &'a PrefixIndex) -> Self {
        CompoundSearch { words, index }
    }

    /// Returns the longest compound word, or `None` if the set has none.
    pub fn find_longest(&self) -> Option<&'a str> {
        self.find_longest_with_stats().0
    }

    /// Like [`find_longest`](CompoundSearch::find_longest), also returning work counters.
    pub fn find_longest_with_stats(&self) -> (Option<&'a str>, SearchStats) {
        let mut stats = SearchStats::default();
        let found = match self.run(None, &mut stats) {
            Ok(found) => found,
            Err(Cancelled) => unreachable!("search without a token cannot be cancelled"),
        };
        (found, stats)
    }

    /// Like [`find_longest`](CompoundSearch::find_longest), checking `token` before
    /// every frontier pop.
    ///
    /// # Errors
    ///
    /// Returns [`Cancelled`] if the token is tripped before an answer is found.
    pub fn find_longest_until(&self, token: &CancelToken) -> Result<Option<&'a str>, Cancelled> {
        self.run(Some(token), &mut SearchStats::default())
    }

    fn run(
        &self,
        token: Option<&CancelToken>,
        stats: &mut SearchStats,
    ) -> Result<Option<&'a str>, Cancelled> {
        let mut frontier = BinaryHeap::new();
        let mut considered = HashSet::new();

        for original in self.words.iter().map(String::as_str) {
            for prefix in self.index.prefixes_of(original) {
                if prefix.len() == original.len() {
                    continue;
                }
                let candidate = Candidate {
                    original,
                    offset: prefix.len(),
                };
                if considered.insert(candidate) {
                    frontier.push(candidate);
                    stats.seeded += 1;
                }
            }
        }
        debug!(
            "seeded frontier with {} candidates from {} words",
            stats.seeded,
            self.words.len()
        );

        while let Some(candidate) = frontier.pop() {
            if token.is_some_and(CancelToken::is_cancelled) {
                debug!("search cancelled after {} pops", stats.popped);
                return Err(Cancelled);
            }
            stats.popped += 1;

            let suffix = candidate.suffix();
            trace!("popped {:?} with suffix {suffix:?}", candidate.original);
            if !suffix.is_empty() && self.words.contains(suffix) {
                debug!("found {:?}: {stats:?}", candidate.original);
                return Ok(Some(candidate.original));
            }

            for prefix in self.index.prefixes_of(suffix) {
                if prefix.len() == suffix.len() {
                    continue;
                }
                let next = Candidate {
                    original: candidate.original,
                    offset: candidate.offset + prefix.len(),
                };
                if considered.insert(next) {
                    frontier.push(next);
                    stats.pushed += 1;
                } else {
                    stats.suppressed += 1;
                }
            }
        }

        debug!("no compound word: {stats:?}");
        Ok(None)
    }

    /// Splits `word` into two or more words of the index, preferring shorter leading
    /// parts. Returns `None` if no such split exists.
    ///
    /// `word` does not need to be in the set itself.
    pub fn decompose<'s>(&self, word: &'s str) -> Option<Vec<&'s str>> {
        let mut parts = Vec::new();
        let mut dead_ends = HashSet::new();
        self.split_from(word, 0, &mut parts, &mut dead_ends)
            .then_some(parts)
    }

    fn split_from<'s>(
        &self,
        word: &'s str,
        offset: usize,
        parts: &mut Vec<&'s str>,
        dead_ends: &mut HashSet<usize>,
    ) -> bool {
        if offset == word.len() {
            return parts.len() >= 2;
        }
        if dead_ends.contains(&offset) {
            return false;
        }
        for prefix in self.index.prefixes_of(&word[offset..]) {
            if offset == 0 && prefix.len() == word.len() {
                continue;
            }
            parts.push(prefix);
            if self.split_from(word, offset + prefix.len(), parts, dead_ends) {
                return true;
            }
            parts.pop();
        }
        dead_ends.insert(offset);
        false
    }
}

/// Returns the longest word of `words` made of two or more other words of `words`.
///
/// `index` must have been built from `words`.
///
/// ```
/// use compword::search::find_longest;
/// use compword::trie::build_prefix_index;
/// use compword::WordSet;
///
/// let words: WordSet = ["cat", "dog"].into_iter().map(String::from).collect();
/// let index = build_prefix_index(&words).unwrap();
/// assert_eq!(find_longest(&words, &index), None);
/// ```
pub fn find_longest<'a>(words: &'a WordSet, index: &'a PrefixIndex) -> Option<&'a str> {
    CompoundSearch::new(words, index).find_longest()
}
