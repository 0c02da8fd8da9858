use std::fmt;

use super::node_arena::{NodeArena, NodeId};
use super::symbol::{Symbol, ALPHABET_SIZE};

/// Storage form of a trie node: its symbol, one child slot per symbol and the word flag.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct TrieNode {
    symbol: Option<Symbol>,
    children: [Option<NodeId>; ALPHABET_SIZE],
    word: bool,
}

impl TrieNode {
    /// Creates the root node, which carries no symbol.
    pub fn root() -> Self {
        TrieNode {
            symbol: None,
            children: [None; ALPHABET_SIZE],
            word: false,
        }
    }

    /// Creates a non-terminal node for `symbol` with no children.
    pub fn new(symbol: Symbol) -> Self {
        TrieNode {
            symbol: Some(symbol),
            children: [None; ALPHABET_SIZE],
            word: false,
        }
    }

    #[inline]
    pub fn symbol(&self) -> Option<Symbol> {
        self.symbol
    }

    /// Returns the id of the child reached over `symbol`'s edge.
    #[inline]
    pub fn child(&self, symbol: Symbol) -> Option<NodeId> {
        self.children[symbol.index()]
    }

    /// Attaches a child.
    pub fn insert(&mut self, symbol: Symbol, child: NodeId) {
        debug_assert!(self.children[symbol.index()].is_none());
        self.children[symbol.index()] = Some(child);
    }

    #[inline]
    pub fn is_word(&self) -> bool {
        self.word
    }

    pub fn set_word(&mut self) {
        self.word = true;
    }

    /// Occupied child slots in symbol order.
    pub fn child_ids(&self) -> impl DoubleEndedIterator<Item = (Symbol, NodeId)> + '_ {
        self.children
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| Some((Symbol::from_index(i)?, (*slot)?)))
    }
}

/// A borrowed view of one node of a [`PrefixIndex`](super::PrefixIndex).
///
/// Views are cheap to copy and borrow the index they came from, so traversal never
/// needs to clone anything.
#[derive(Clone, Copy)]
pub struct Node<'a> {
    arena: &'a NodeArena,
    id: NodeId,
}

impl<'a> Node<'a> {
    pub(crate) fn new(arena: &'a NodeArena, id: NodeId) -> Self {
        Node { arena, id }
    }

    #[inline]
    fn raw(&self) -> &'a TrieNode {
        self.arena.get(self.id)
    }

    /// Returns the node that `symbol`'s edge leads to, or `None` if no such edge exists.
    #[inline]
    pub fn get(&self, symbol: Symbol) -> Option<Node<'a>> {
        self.raw().child(symbol).map(|id| Node::new(self.arena, id))
    }

    /// Like [`get`](Node::get), taking a `char`. Letters outside `a`-`z` never match.
    #[inline]
    pub fn get_char(&self, ch: char) -> Option<Node<'a>> {
        Symbol::try_from(ch).ok().and_then(|sym| self.get(sym))
    }

    /// The symbol on the edge leading to this node; `None` for the root.
    #[inline]
    pub fn symbol(&self) -> Option<Symbol> {
        self.raw().symbol()
    }

    /// True if the path from the root to this node spells a word.
    #[inline]
    pub fn is_word(&self) -> bool {
        self.raw().is_word()
    }

    /// Returns an iterator over all children of this node, in symbol order.
    pub fn children(&self) -> ChildIter<'a> {
        ChildIter {
            arena: self.arena,
            node: self.raw(),
            next: 0,
        }
    }

    /// Returns the number of children.
    pub fn child_count(&self) -> usize {
        self.raw().child_ids().count()
    }
}

impl PartialEq for Node<'_> {
    fn eq(&self, rhs: &Self) -> bool {
        std::ptr::eq(self.arena, rhs.arena) && self.id == rhs.id
    }
}

impl Eq for Node<'_> {}

impl fmt::Debug for Node<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Node")
            .field("symbol", &self.symbol())
            .field("word", &self.is_word())
            .field("child_count", &self.child_count())
            .finish()
    }
}

/// An iterator over the children of a [`Node`].
#[derive(Clone)]
pub struct ChildIter<'a> {
    arena: &'a NodeArena,
    node: &'a TrieNode,
    next: usize,
}

impl<'a> Iterator for ChildIter<'a> {
    type Item = (Symbol, Node<'a>);

    fn next(&mut self) -> Option<Self::Item> {
        while self.next < ALPHABET_SIZE {
            let index = self.next;
            self.next += 1;
            if let Some(id) = self.node.children[index] {
                let symbol = Symbol::from_index(index)?;
                return Some((symbol, Node::new(self.arena, id)));
            }
        }
        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(ALPHABET_SIZE - self.next))
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn sym(ch: char) -> Symbol {
        Symbol::try_from(ch).unwrap()
    }

    #[test]
    fn no_children() {
        let arena = NodeArena::new();
        let root = Node::new(&arena, NodeId::ROOT);
        assert_eq!(root.children().next(), None);
        assert_eq!(root.child_count(), 0);
        assert!(!root.is_word());
    }

    #[test]
    fn children_in_symbol_order() {
        let mut arena = NodeArena::new();
        for ch in ['q', 'b', 'x'] {
            let id = arena.alloc(TrieNode::new(sym(ch)));
            arena.get_mut(NodeId::ROOT).insert(sym(ch), id);
        }
        let root = Node::new(&arena, NodeId::ROOT);
        let letters: Vec<char> = root.children().map(|(s, _)| s.to_char()).collect();
        assert_eq!(letters, ['b', 'q', 'x']);
        assert_eq!(root.child_count(), 3);
        for (s, child) in root.children() {
            assert_eq!(child.symbol(), Some(s));
        }
    }

    #[test]
    fn get_follows_edges() {
        let mut arena = NodeArena::new();
        let id = arena.alloc(TrieNode::new(sym('a')));
        arena.get_mut(NodeId::ROOT).insert(sym('a'), id);
        arena.get_mut(id).set_word();

        let root = Node::new(&arena, NodeId::ROOT);
        let a = root.get(sym('a')).unwrap();
        assert!(a.is_word());
        assert_eq!(root.get_char('a'), Some(a));
        assert_eq!(root.get(sym('b')), None);
        assert_eq!(root.get_char('A'), None);
    }
}
