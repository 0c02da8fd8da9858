/// Incremental construction of a [`PrefixIndex`].
pub mod builder;
/// The immutable prefix trie and its queries.
pub mod index;
/// Trie nodes and borrowed node views.
pub mod node;
/// Internal node storage.
pub(crate) mod node_arena;
/// The fixed `a`-`z` alphabet.
pub mod symbol;

pub use builder::{build_prefix_index, BuildError, Builder};
pub use index::{PrefixIndex, Prefixes};
pub use node::{ChildIter, Node};
pub use symbol::{Symbol, ALPHABET_SIZE};
