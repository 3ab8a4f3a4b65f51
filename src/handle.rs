use std::fmt;

use crate::index::{IndexType, NodeIndex};
use crate::node::{Color, Node};
use crate::rbtree::RbTree;

/// A read-only handle to a node of an [`RbTree`].
///
/// Handles never point at the sentinel: every navigation method returns
/// `None` where the tree has no node.
pub struct NodeRef<'a, K, Ix> {
    /// Reference to the tree
    pub(crate) tree_ref: &'a RbTree<K, Ix>,
    /// The node
    pub(crate) node_idx: NodeIndex<Ix>,
}

impl<'a, K, Ix> NodeRef<'a, K, Ix>
where
    Ix: IndexType,
{
    /// Wrap `node_idx`, or return `None` if it is the sentinel.
    pub(crate) fn new(tree_ref: &'a RbTree<K, Ix>, node_idx: NodeIndex<Ix>) -> Option<Self> {
        (!node_idx.is_sentinel()).then_some(NodeRef { tree_ref, node_idx })
    }

    /// Key stored in the node.
    #[inline]
    pub fn key(&self) -> &'a K {
        self.tree_ref.node_ref(self.node_idx, Node::key)
    }

    #[inline]
    pub fn color(&self) -> Color {
        self.tree_ref.node_ref(self.node_idx, Node::color)
    }

    #[inline]
    pub fn is_red(&self) -> bool {
        self.tree_ref.node_ref(self.node_idx, Node::is_red)
    }

    #[inline]
    pub fn is_black(&self) -> bool {
        self.tree_ref.node_ref(self.node_idx, Node::is_black)
    }

    /// Arena slot of the node. Only stable until the next mutation of the tree.
    #[inline]
    pub fn index(&self) -> NodeIndex<Ix> {
        self.node_idx
    }

    #[inline]
    pub fn left(&self) -> Option<Self> {
        Self::new(self.tree_ref, self.tree_ref.node_ref(self.node_idx, Node::left))
    }

    #[inline]
    pub fn right(&self) -> Option<Self> {
        Self::new(self.tree_ref, self.tree_ref.node_ref(self.node_idx, Node::right))
    }

    /// Parent of the node, `None` for the root.
    #[inline]
    pub fn parent(&self) -> Option<Self> {
        Self::new(
            self.tree_ref,
            self.tree_ref.node_ref(self.node_idx, Node::parent),
        )
    }
}

impl<K, Ix: Copy> Clone for NodeRef<'_, K, Ix> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, Ix: Copy> Copy for NodeRef<'_, K, Ix> {}

impl<K, Ix> fmt::Debug for NodeRef<'_, K, Ix>
where
    K: fmt::Debug,
    Ix: IndexType,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("node_idx", &self.node_idx)
            .field("key", self.key())
            .field("color", &self.color())
            .finish()
    }
}
