use std::fmt;

use smallvec::SmallVec;

use super::node::Node;
use super::node_arena::{NodeArena, NodeId};
use super::symbol::Symbol;

/// Prefixes of a queried string that are words, shortest first.
///
/// Stored inline for the common case of a handful of matches.
pub type Prefixes<'s> = SmallVec<[&'s str; 8]>;

/// An immutable trie over a set of lowercase words.
///
/// The index owns every node; [`root`](PrefixIndex::root) and the other accessors
/// hand out borrowed [`Node`] views. Build one with
/// [`build_prefix_index`](super::build_prefix_index) or a [`Builder`](super::Builder).
///
/// # Examples
///
/// ```
/// use compword::trie::build_prefix_index;
///
/// let index = build_prefix_index(["a", "ab", "abab"]).unwrap();
/// assert_eq!(index.prefixes_of("ababx").as_slice(), ["a", "ab", "abab"]);
/// assert!(index.prefixes_of("b").is_empty());
/// ```
#[derive(Clone)]
pub struct PrefixIndex {
    arena: NodeArena,
    word_count: usize,
}

impl PrefixIndex {
    pub(crate) fn from_parts(arena: NodeArena, word_count: usize) -> Self {
        PrefixIndex { arena, word_count }
    }

    /// Returns a view of the root node.
    pub fn root(&self) -> Node<'_> {
        Node::new(&self.arena, NodeId::ROOT)
    }

    /// Returns the number of trie nodes, root included.
    pub fn node_count(&self) -> usize {
        self.arena.len()
    }

    /// Returns the number of distinct words in the index.
    pub fn len(&self) -> usize {
        self.word_count
    }

    /// True if no word has been inserted.
    pub fn is_empty(&self) -> bool {
        self.word_count == 0
    }

    /// Follows `s` from the root, returning the node it ends on.
    fn walk(&self, s: &str) -> Option<NodeId> {
        s.bytes().try_fold(NodeId::ROOT, |id, byte| {
            self.arena.get(id).child(Symbol::from_byte(byte)?)
        })
    }

    /// Returns `true` if `word` is in the index.
    ///
    /// ```
    /// use compword::trie::build_prefix_index;
    ///
    /// let index = build_prefix_index(["bake", "cake"]).unwrap();
    /// assert!(index.contains("cake"));
    /// assert!(!index.contains("cak"));
    /// assert!(!index.contains(""));
    /// ```
    pub fn contains(&self, word: &str) -> bool {
        self.walk(word)
            .is_some_and(|id| self.arena.get(id).is_word())
    }

    /// Returns `true` if some word in the index starts with `prefix`.
    pub fn has_prefix(&self, prefix: &str) -> bool {
        self.walk(prefix).is_some()
    }

    /// Returns every prefix of `s` that is a word, in increasing length order.
    ///
    /// `s` itself is included when it is a word. The walk stops at the first symbol
    /// with no matching edge (or outside `a`-`z`), so the cost is proportional to the
    /// matched part of `s` and independent of the number of words.
    pub fn prefixes_of<'s>(&self, s: &'s str) -> Prefixes<'s> {
        let mut prefixes = Prefixes::new();
        let mut current = NodeId::ROOT;
        for (i, byte) in s.bytes().enumerate() {
            let Some(next) =
                Symbol::from_byte(byte).and_then(|sym| self.arena.get(current).child(sym))
            else {
                break;
            };
            current = next;
            if self.arena.get(current).is_word() {
                // Every byte up to here was ASCII, so `i + 1` is a char boundary.
                prefixes.push(&s[..=i]);
            }
        }
        prefixes
    }

    /// Returns all words in lexicographic order.
    pub fn words(&self) -> Vec<String> {
        let mut words = Vec::with_capacity(self.word_count);
        let mut prefix = String::new();
        let mut stack = vec![(NodeId::ROOT, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = self.arena.get(id);
            if let Some(sym) = node.symbol() {
                prefix.truncate(depth - 1);
                prefix.push(sym.to_char());
            }
            if node.is_word() {
                words.push(prefix.clone());
            }
            stack.extend(node.child_ids().rev().map(|(_, child)| (child, depth + 1)));
        }
        words
    }
}

/// Renders the trie one node per line, children indented by a tab under their parent.
///
/// Each line shows the node's symbol (`^` for the root), the symbols of its children
/// and a trailing `*` when the node ends a word:
///
/// ```
/// use compword::trie::build_prefix_index;
///
/// let index = build_prefix_index(["ab", "b"]).unwrap();
/// assert_eq!(index.to_string(), "^ [ab]\n\ta [b]\n\t\tb [] *\n\tb [] *\n");
/// ```
impl fmt::Display for PrefixIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut stack = vec![(NodeId::ROOT, 0usize)];
        while let Some((id, depth)) = stack.pop() {
            let node = self.arena.get(id);
            for _ in 0..depth {
                f.write_str("\t")?;
            }
            match node.symbol() {
                Some(sym) => write!(f, "{sym} [")?,
                None => f.write_str("^ [")?,
            }
            for (sym, _) in node.child_ids() {
                write!(f, "{sym}")?;
            }
            f.write_str("]")?;
            if node.is_word() {
                f.write_str(" *")?;
            }
            f.write_str("\n")?;
            stack.extend(node.child_ids().rev().map(|(_, child)| (child, depth + 1)));
        }
        Ok(())
    }
}

impl fmt::Debug for PrefixIndex {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrefixIndex")
            .field("word_count", &self.word_count)
            .field("node_count", &self.node_count())
            .finish()
    }
}
