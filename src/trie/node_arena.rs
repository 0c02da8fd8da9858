//! Contiguous storage for trie nodes.
//!
//! Nodes are addressed by [`NodeId`] instead of references, so the index can own
//! every node in a single allocation and hand out shared borrows freely.

use std::num::NonZeroU32;

use super::node::TrieNode;

/// Handle to a node stored in a [`NodeArena`].
///
/// Ids count from one, leaving zero as the niche for `Option<NodeId>`, so an empty
/// child slot costs no more than a filled one.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub(crate) struct NodeId(NonZeroU32);

impl NodeId {
    /// Id of the root node; always the first node allocated.
    pub(crate) const ROOT: NodeId = NodeId(NonZeroU32::MIN);

    #[inline]
    fn slot(self) -> usize {
        self.0.get() as usize - 1
    }
}

/// Append-only node storage. Nodes are never removed or moved out.
#[derive(Clone, Debug)]
pub(crate) struct NodeArena {
    nodes: Vec<TrieNode>,
}

impl NodeArena {
    /// Creates an arena holding only the root node.
    pub fn new() -> Self {
        NodeArena {
            nodes: vec![TrieNode::root()],
        }
    }

    /// Stores a node and returns its id.
    ///
    /// # Panics
    ///
    /// Panics if the arena already holds `u32::MAX` nodes.
    pub fn alloc(&mut self, node: TrieNode) -> NodeId {
        let id = u32::try_from(self.nodes.len() + 1)
            .ok()
            .and_then(NonZeroU32::new)
            .expect("trie node count overflow");
        self.nodes.push(node);
        NodeId(id)
    }

    /// Returns the node with the given id.
    #[inline]
    pub fn get(&self, id: NodeId) -> &TrieNode {
        &self.nodes[id.slot()]
    }

    /// Returns the node with the given id for in-place updates while building.
    #[inline]
    pub fn get_mut(&mut self, id: NodeId) -> &mut TrieNode {
        &mut self.nodes[id.slot()]
    }

    /// Returns the number of nodes allocated in this arena, root included.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::trie::Symbol;

    #[test]
    fn starts_with_root() {
        let arena = NodeArena::new();
        assert_eq!(arena.len(), 1);
        assert_eq!(arena.get(NodeId::ROOT).symbol(), None);
    }

    #[test]
    fn ids_are_stable() {
        let mut arena = NodeArena::new();
        let a = Symbol::from_byte(b'a').unwrap();
        let b = Symbol::from_byte(b'b').unwrap();
        let id_a = arena.alloc(TrieNode::new(a));
        let id_b = arena.alloc(TrieNode::new(b));
        assert_ne!(id_a, id_b);
        assert_eq!(arena.get(id_a).symbol(), Some(a));
        assert_eq!(arena.get(id_b).symbol(), Some(b));
        assert_eq!(arena.len(), 3);
    }

    #[test]
    fn empty_child_slot_is_free() {
        use crate::trie::ALPHABET_SIZE;
        use std::mem::size_of;

        assert_eq!(size_of::<Option<NodeId>>(), size_of::<u32>());
        assert_eq!(size_of::<[Option<NodeId>; ALPHABET_SIZE]>(), 4 * ALPHABET_SIZE);
    }

    #[test]
    fn root_is_first_slot() {
        let mut arena = NodeArena::new();
        let a = Symbol::from_byte(b'a').unwrap();
        let id_a = arena.alloc(TrieNode::new(a));
        assert_eq!(NodeId::ROOT.slot(), 0);
        assert_eq!(id_a.slot(), 1);
    }
}
