//! `rb_sentinel_tree` is an ordered key set based on a red-black tree.
//!
//! Insertion, removal and lookup run in O(logN) time regardless of the order
//! in which keys arrive, because every modification is followed by a fixup
//! pass that recolors and rotates nodes until the red-black properties hold again.
//!
//! Nodes live in a vector and refer to each other by index instead of by pointer.
//! Slot 0 is a shared black sentinel standing in for every missing child and for
//! the parent of the root, so the balancing code never branches on a null link.
//! The sentinel is never written to after construction.
//!
//! Equal keys are kept: the tree behaves as a sorted multiset and
//! [`RbTree::remove`] drops one occurrence at a time.
//!
//! # Example
//!
//! ```rust
//! use rb_sentinel_tree::RbTree;
//!
//! let mut tree = RbTree::new();
//! for key in [20, 15, 30, 10, 18, 25, 40, 22] {
//!     tree.insert(key);
//! }
//! assert!(tree.contains(&18));
//! assert!(tree.remove(&10));
//! assert_eq!(
//!     tree.iter().copied().collect::<Vec<_>>(),
//!     vec![15, 18, 20, 22, 25, 30, 40]
//! );
//! ```
//!

mod error;
mod handle;
mod index;
mod iter;
mod node;
mod rbtree;

#[cfg(test)]
mod tests;

pub use error::{TreeError, TreeResult};
pub use handle::NodeRef;
pub use index::{DefaultIx, IndexType, NodeIndex};
pub use iter::{IntoIter, Iter, Nodes};
pub use node::Color;
pub use rbtree::RbTree;
