use crate::handle::NodeRef;
use crate::index::{IndexType, NodeIndex};
use crate::node::Node;
use crate::rbtree::RbTree;

/// Pushes a link of nodes on the left to stack.
fn left_link<K, Ix>(tree_ref: &RbTree<K, Ix>, mut x: NodeIndex<Ix>, stack: &mut Vec<NodeIndex<Ix>>)
where
    Ix: IndexType,
{
    while !x.is_sentinel() {
        stack.push(x);
        x = tree_ref.node_ref(x, Node::left);
    }
}

/// An iterator over handles to the nodes of a `RbTree`, in ascending key order.
#[derive(Debug)]
pub struct Nodes<'a, K, Ix> {
    /// Reference to the tree
    pub(crate) tree_ref: &'a RbTree<K, Ix>,
    /// Stack for iteration
    pub(crate) stack: Vec<NodeIndex<Ix>>,
    /// Nodes not yet yielded
    pub(crate) remaining: usize,
}

impl<'a, K, Ix> Nodes<'a, K, Ix>
where
    Ix: IndexType,
{
    pub fn new(tree_ref: &'a RbTree<K, Ix>) -> Self {
        let mut stack = Vec::new();
        left_link(tree_ref, tree_ref.root, &mut stack);
        Nodes {
            tree_ref,
            stack,
            remaining: tree_ref.len,
        }
    }
}

impl<'a, K, Ix> Iterator for Nodes<'a, K, Ix>
where
    Ix: IndexType,
{
    type Item = NodeRef<'a, K, Ix>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let x = self.stack.pop()?;
        left_link(
            self.tree_ref,
            self.tree_ref.node_ref(x, Node::right),
            &mut self.stack,
        );
        self.remaining -= 1;
        NodeRef::new(self.tree_ref, x)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<K, Ix: IndexType> ExactSizeIterator for Nodes<'_, K, Ix> {}

/// An iterator over the keys of a `RbTree`, in ascending order.
#[derive(Debug)]
pub struct Iter<'a, K, Ix> {
    inner: Nodes<'a, K, Ix>,
}

impl<'a, K, Ix> Iter<'a, K, Ix>
where
    Ix: IndexType,
{
    pub fn new(tree_ref: &'a RbTree<K, Ix>) -> Self {
        Iter {
            inner: Nodes::new(tree_ref),
        }
    }
}

impl<'a, K, Ix> Iterator for Iter<'a, K, Ix>
where
    Ix: IndexType,
{
    type Item = &'a K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|node| node.key())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<K, Ix: IndexType> ExactSizeIterator for Iter<'_, K, Ix> {}

/// An into iterator over the keys of a `RbTree`, in ascending order.
#[derive(Debug)]
pub struct IntoIter<K, Ix> {
    tree: RbTree<K, Ix>,
    /// Stack for iteration
    pub(crate) stack: Vec<NodeIndex<Ix>>,
}

impl<K, Ix> IntoIter<K, Ix>
where
    Ix: IndexType,
{
    pub fn new(tree: RbTree<K, Ix>) -> Self {
        let mut stack = Vec::new();
        left_link(&tree, tree.root, &mut stack);
        IntoIter { tree, stack }
    }
}

impl<K, Ix> Iterator for IntoIter<K, Ix>
where
    Ix: IndexType,
{
    type Item = K;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let x = self.stack.pop()?;
        left_link(
            &self.tree,
            self.tree.node_ref(x, Node::right),
            &mut self.stack,
        );
        self.tree.len -= 1;
        Some(self.tree.node_mut(x, Node::take_key))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.tree.len, Some(self.tree.len))
    }
}

impl<K, Ix: IndexType> ExactSizeIterator for IntoIter<K, Ix> {}
