use std::fmt;

use log::{debug, trace, warn};

use crate::error::{TreeError, TreeResult};
use crate::handle::NodeRef;
use crate::index::{DefaultIx, IndexType, NodeIndex};
use crate::iter::{IntoIter, Iter, Nodes};
use crate::node::{Color, Node};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An ordered collection of keys, kept balanced as a red-black tree.
///
/// Equal keys are allowed: a key equal to an existing one is placed after it,
/// so the tree behaves as a sorted multiset.
#[derive(Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RbTree<K, Ix = DefaultIx> {
    /// Vector that stores nodes, slot 0 is the sentinel
    pub(crate) nodes: Vec<Node<K, Ix>>,
    /// Root of the tree
    pub(crate) root: NodeIndex<Ix>,
    /// Number of keys in the tree
    pub(crate) len: usize,
}

impl<K, Ix> RbTree<K, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    /// Creates a new `RbTree` with estimated capacity.
    #[inline]
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        let mut nodes = vec![Self::new_sentinel()];
        nodes.reserve(capacity);
        RbTree {
            nodes,
            root: Self::sentinel(),
            len: 0,
        }
    }

    /// Insert a key into the tree.
    ///
    /// Returns `false` when the node could not be allocated, in which case
    /// the tree is left untouched. Use [`RbTree::try_insert`] to get the cause.
    ///
    /// # Example
    /// ```rust
    /// use rb_sentinel_tree::RbTree;
    ///
    /// let mut tree = RbTree::new();
    /// assert!(tree.insert(3));
    /// assert!(tree.insert(1));
    /// assert!(tree.insert(3));
    /// assert_eq!(tree.len(), 3);
    /// assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 3, 3]);
    /// ```
    #[inline]
    pub fn insert(&mut self, key: K) -> bool {
        match self.try_insert(key) {
            Ok(()) => true,
            Err(err) => {
                warn!("insert rejected: {err}");
                false
            }
        }
    }

    /// Insert a key into the tree, reporting why the insertion failed.
    ///
    /// # Errors
    ///
    /// Returns [`TreeError::CapacityExceeded`] when `Ix` cannot address another
    /// node and [`TreeError::Alloc`] when the arena cannot grow. Either way no
    /// node has been linked.
    #[inline]
    pub fn try_insert(&mut self, key: K) -> TreeResult<()> {
        let node_idx = NodeIndex::new(self.nodes.len());
        // check for max capacity, except if we use usize
        if <Ix as IndexType>::max().index() != !0 && NodeIndex::end() == node_idx {
            return Err(TreeError::CapacityExceeded);
        }
        self.nodes.try_reserve(1)?;
        self.nodes.push(Self::new_node(key));
        self.insert_inner(node_idx);
        debug!("inserted {:?}, len {}", node_idx, self.len);
        Ok(())
    }

    /// Remove one occurrence of a key from the tree.
    ///
    /// Returns `false` and leaves the tree unchanged if the key is absent.
    ///
    /// # Example
    /// ```rust
    /// use rb_sentinel_tree::RbTree;
    ///
    /// let mut tree: RbTree<i32> = [20, 15, 30].into_iter().collect();
    /// assert!(!tree.remove(&99));
    /// assert!(tree.remove(&15));
    /// assert_eq!(tree.len(), 2);
    /// assert!(!tree.contains(&15));
    /// ```
    #[inline]
    pub fn remove(&mut self, key: &K) -> bool {
        let node_idx = self.search(key);
        if node_idx.is_sentinel() {
            debug!("remove: key not found");
            return false;
        }
        self.remove_inner(node_idx);
        // Swap the node with the last node stored in the vector and update indices
        let _removed = self.nodes.swap_remove(node_idx.index());
        let old = NodeIndex::<Ix>::new(self.nodes.len());
        self.update_idx(old, node_idx);
        debug!("removed {:?}, len {}", node_idx, self.len);
        true
    }

    /// Look up a key, returning a handle to the node that holds it.
    ///
    /// # Example
    /// ```rust
    /// use rb_sentinel_tree::{Color, RbTree};
    ///
    /// let tree: RbTree<i32> = [20, 15, 30].into_iter().collect();
    /// let node = tree.get(&20).unwrap();
    /// assert_eq!(node.key(), &20);
    /// assert_eq!(node.color(), Color::Black);
    /// assert_eq!(node.left().map(|n| *n.key()), Some(15));
    /// assert!(tree.get(&99).is_none());
    /// ```
    #[inline]
    pub fn get(&self, key: &K) -> Option<NodeRef<'_, K, Ix>> {
        NodeRef::new(self, self.search(key))
    }

    /// Return `true` if the tree holds the key.
    #[inline]
    pub fn contains(&self, key: &K) -> bool {
        !self.search(key).is_sentinel()
    }

    /// Return the smallest key.
    #[inline]
    pub fn first(&self) -> Option<&K> {
        if self.root.is_sentinel() {
            return None;
        }
        Some(self.node_ref(self.tree_minimum(self.root), Node::key))
    }

    /// Return the largest key.
    #[inline]
    pub fn last(&self) -> Option<&K> {
        if self.root.is_sentinel() {
            return None;
        }
        Some(self.node_ref(self.tree_maximum(self.root), Node::key))
    }
}

impl<K, Ix> RbTree<K, Ix>
where
    Ix: IndexType,
{
    /// Get an iterator over the keys of the tree, in ascending order.
    #[inline]
    #[must_use]
    pub fn iter(&self) -> Iter<'_, K, Ix> {
        Iter::new(self)
    }

    /// Get an iterator over handles to the nodes of the tree, in ascending key order.
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> Nodes<'_, K, Ix> {
        Nodes::new(self)
    }

    /// Return a handle to the root node.
    #[inline]
    pub fn root(&self) -> Option<NodeRef<'_, K, Ix>> {
        NodeRef::new(self, self.root)
    }

    /// Number of nodes on the longest path from the root to a leaf.
    ///
    /// # Example
    /// ```rust
    /// use rb_sentinel_tree::RbTree;
    ///
    /// let tree: RbTree<u32> = (0..1000).collect();
    /// assert!(tree.height() <= 2 * 10);
    /// assert_eq!(RbTree::<u32>::new().height(), 0);
    /// ```
    #[must_use]
    pub fn height(&self) -> usize {
        let mut height = 0;
        let mut stack = vec![(self.root, 0)];
        while let Some((x, depth)) = stack.pop() {
            if x.is_sentinel() {
                height = height.max(depth);
                continue;
            }
            stack.push((self.node_ref(x, Node::left), depth + 1));
            stack.push((self.node_ref(x, Node::right), depth + 1));
        }
        height
    }

    /// Remove all keys from the tree
    #[inline]
    pub fn clear(&mut self) {
        self.nodes.truncate(1);
        self.root = NodeIndex::SENTINEL;
        self.len = 0;
    }

    /// Return the number of keys in the tree.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Return `true` if the tree contains no keys.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<K> RbTree<K>
where
    K: Ord,
{
    /// Create an empty `RbTree`
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self {
            nodes: vec![Self::new_sentinel()],
            root: Self::sentinel(),
            len: 0,
        }
    }
}

impl<K> Default for RbTree<K>
where
    K: Ord,
{
    #[inline]
    fn default() -> Self {
        Self::with_capacity(0)
    }
}

impl<K, Ix> RbTree<K, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    /// Create a new sentinel node
    fn new_sentinel() -> Node<K, Ix> {
        Node {
            key: None,
            left: None,
            right: None,
            parent: None,
            color: Color::Black,
        }
    }

    /// Create a new tree node
    fn new_node(key: K) -> Node<K, Ix> {
        Node {
            key: Some(key),
            left: Some(Self::sentinel()),
            right: Some(Self::sentinel()),
            parent: Some(Self::sentinel()),
            color: Color::Red,
        }
    }

    /// Get the sentinel node index
    fn sentinel() -> NodeIndex<Ix> {
        NodeIndex::SENTINEL
    }
}

impl<K, Ix> RbTree<K, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    /// Insert a node into the tree.
    fn insert_inner(&mut self, z: NodeIndex<Ix>) {
        let mut y = Self::sentinel();
        let mut x = self.root;

        while !x.is_sentinel() {
            y = x;
            if self.node_ref(z, Node::key) < self.node_ref(x, Node::key) {
                x = self.node_ref(x, Node::left);
            } else {
                x = self.node_ref(x, Node::right);
            }
        }
        self.node_mut(z, Node::set_parent(y));
        if y.is_sentinel() {
            self.root = z;
        } else if self.node_ref(z, Node::key) < self.node_ref(y, Node::key) {
            self.node_mut(y, Node::set_left(z));
        } else {
            self.node_mut(y, Node::set_right(z));
        }

        self.insert_fixup(z);

        self.len = self.len.wrapping_add(1);
    }

    /// Remove a node from the tree.
    ///
    /// The node is unlinked but stays in the arena.
    fn remove_inner(&mut self, z: NodeIndex<Ix>) {
        let mut y_orig_color = self.node_ref(z, Node::color);
        let x;
        let x_parent;
        if self.left_ref(z, Node::is_sentinel) {
            x = self.node_ref(z, Node::right);
            x_parent = self.node_ref(z, Node::parent);
            self.transplant(z, x);
        } else if self.right_ref(z, Node::is_sentinel) {
            x = self.node_ref(z, Node::left);
            x_parent = self.node_ref(z, Node::parent);
            self.transplant(z, x);
        } else {
            let y = self.tree_minimum(self.node_ref(z, Node::right));
            y_orig_color = self.node_ref(y, Node::color);
            x = self.node_ref(y, Node::right);
            if self.node_ref(y, Node::parent) == z {
                x_parent = y;
            } else {
                x_parent = self.node_ref(y, Node::parent);
                self.transplant(y, x);
                self.node_mut(y, Node::set_right(self.node_ref(z, Node::right)));
                self.right_mut(y, Node::set_parent(y));
            }
            self.transplant(z, y);
            self.node_mut(y, Node::set_left(self.node_ref(z, Node::left)));
            self.left_mut(y, Node::set_parent(y));
            self.node_mut(y, Node::set_color(self.node_ref(z, Node::color)));
        }

        if matches!(y_orig_color, Color::Black) {
            self.remove_fixup(x, x_parent);
        }

        self.len = self.len.wrapping_sub(1);
    }

    /// Search for the node holding the given key, or the sentinel.
    fn search(&self, key: &K) -> NodeIndex<Ix> {
        let mut x = self.root;
        while let Some(node) = self.node_ref(x, Node::sentinel) {
            if key < node.key() {
                x = node.left();
            } else if key > node.key() {
                x = node.right();
            } else {
                break;
            }
        }
        x
    }

    /// Restore red-black tree properties after an insert.
    fn insert_fixup(&mut self, mut z: NodeIndex<Ix>) {
        // A red parent is never the root, so the grandparent is a real node.
        while self.parent_ref(z, Node::is_red) {
            if self.is_left_child(self.node_ref(z, Node::parent)) {
                let y = self.grand_parent_ref(z, Node::right);
                if self.node_ref(y, Node::is_red) {
                    trace!("insert fixup at {z:?}: red uncle, recolor");
                    self.parent_mut(z, Node::set_color(Color::Black));
                    self.node_mut(y, Node::set_color(Color::Black));
                    self.grand_parent_mut(z, Node::set_color(Color::Red));
                    z = self.parent_ref(z, Node::parent);
                } else {
                    if self.is_right_child(z) {
                        trace!("insert fixup at {z:?}: inner grandchild, rotate left");
                        z = self.node_ref(z, Node::parent);
                        self.left_rotate(z);
                    }
                    trace!("insert fixup at {z:?}: outer grandchild, rotate right");
                    self.parent_mut(z, Node::set_color(Color::Black));
                    self.grand_parent_mut(z, Node::set_color(Color::Red));
                    self.right_rotate(self.parent_ref(z, Node::parent));
                }
            } else {
                let y = self.grand_parent_ref(z, Node::left);
                if self.node_ref(y, Node::is_red) {
                    trace!("insert fixup at {z:?}: red uncle, recolor");
                    self.parent_mut(z, Node::set_color(Color::Black));
                    self.node_mut(y, Node::set_color(Color::Black));
                    self.grand_parent_mut(z, Node::set_color(Color::Red));
                    z = self.parent_ref(z, Node::parent);
                } else {
                    if self.is_left_child(z) {
                        trace!("insert fixup at {z:?}: inner grandchild, rotate right");
                        z = self.node_ref(z, Node::parent);
                        self.right_rotate(z);
                    }
                    trace!("insert fixup at {z:?}: outer grandchild, rotate left");
                    self.parent_mut(z, Node::set_color(Color::Black));
                    self.grand_parent_mut(z, Node::set_color(Color::Red));
                    self.left_rotate(self.parent_ref(z, Node::parent));
                }
            }
        }
        self.node_mut(self.root, Node::set_color(Color::Black));
    }

    /// Restore red-black tree properties after a remove.
    ///
    /// `x` may be the sentinel, so its parent is passed in as `p` instead of
    /// being read from the sentinel.
    fn remove_fixup(&mut self, mut x: NodeIndex<Ix>, mut p: NodeIndex<Ix>) {
        while x != self.root && self.node_ref(x, Node::is_black) {
            let mut w;
            // When `x` is the sentinel its sibling is a real node, so this test
            // cannot match the wrong side.
            if self.node_ref(p, Node::left) == x {
                w = self.node_ref(p, Node::right);
                debug_assert!(!w.is_sentinel(), "black-height violated");
                if self.node_ref(w, Node::is_red) {
                    trace!("remove fixup at {x:?}: red sibling, rotate left");
                    self.node_mut(w, Node::set_color(Color::Black));
                    self.node_mut(p, Node::set_color(Color::Red));
                    self.left_rotate(p);
                    w = self.node_ref(p, Node::right);
                }
                if self.left_ref(w, Node::is_black) && self.right_ref(w, Node::is_black) {
                    trace!("remove fixup at {x:?}: black nephews, recolor");
                    self.node_mut(w, Node::set_color(Color::Red));
                    x = p;
                    p = self.node_ref(x, Node::parent);
                } else {
                    if self.right_ref(w, Node::is_black) {
                        trace!("remove fixup at {x:?}: red near nephew, rotate right");
                        self.left_mut(w, Node::set_color(Color::Black));
                        self.node_mut(w, Node::set_color(Color::Red));
                        self.right_rotate(w);
                        w = self.node_ref(p, Node::right);
                    }
                    trace!("remove fixup at {x:?}: red far nephew, rotate left");
                    self.node_mut(w, Node::set_color(self.node_ref(p, Node::color)));
                    self.node_mut(p, Node::set_color(Color::Black));
                    self.right_mut(w, Node::set_color(Color::Black));
                    self.left_rotate(p);
                    x = self.root;
                }
            } else {
                w = self.node_ref(p, Node::left);
                debug_assert!(!w.is_sentinel(), "black-height violated");
                if self.node_ref(w, Node::is_red) {
                    trace!("remove fixup at {x:?}: red sibling, rotate right");
                    self.node_mut(w, Node::set_color(Color::Black));
                    self.node_mut(p, Node::set_color(Color::Red));
                    self.right_rotate(p);
                    w = self.node_ref(p, Node::left);
                }
                if self.right_ref(w, Node::is_black) && self.left_ref(w, Node::is_black) {
                    trace!("remove fixup at {x:?}: black nephews, recolor");
                    self.node_mut(w, Node::set_color(Color::Red));
                    x = p;
                    p = self.node_ref(x, Node::parent);
                } else {
                    if self.left_ref(w, Node::is_black) {
                        trace!("remove fixup at {x:?}: red near nephew, rotate left");
                        self.right_mut(w, Node::set_color(Color::Black));
                        self.node_mut(w, Node::set_color(Color::Red));
                        self.left_rotate(w);
                        w = self.node_ref(p, Node::left);
                    }
                    trace!("remove fixup at {x:?}: red far nephew, rotate right");
                    self.node_mut(w, Node::set_color(self.node_ref(p, Node::color)));
                    self.node_mut(p, Node::set_color(Color::Black));
                    self.left_mut(w, Node::set_color(Color::Black));
                    self.right_rotate(p);
                    x = self.root;
                }
            }
        }
        if !x.is_sentinel() {
            self.node_mut(x, Node::set_color(Color::Black));
        }
    }

    /// Binary tree left rotate.
    fn left_rotate(&mut self, x: NodeIndex<Ix>) {
        if self.right_ref(x, Node::is_sentinel) {
            return;
        }
        let y = self.node_ref(x, Node::right);
        self.node_mut(x, Node::set_right(self.node_ref(y, Node::left)));
        if !self.left_ref(y, Node::is_sentinel) {
            self.left_mut(y, Node::set_parent(x));
        }

        self.replace_parent(x, y);
        self.node_mut(y, Node::set_left(x));
    }

    /// Binary tree right rotate.
    fn right_rotate(&mut self, x: NodeIndex<Ix>) {
        if self.left_ref(x, Node::is_sentinel) {
            return;
        }
        let y = self.node_ref(x, Node::left);
        self.node_mut(x, Node::set_left(self.node_ref(y, Node::right)));
        if !self.right_ref(y, Node::is_sentinel) {
            self.right_mut(y, Node::set_parent(x));
        }

        self.replace_parent(x, y);
        self.node_mut(y, Node::set_right(x));
    }

    /// Replace parent during a rotation.
    fn replace_parent(&mut self, x: NodeIndex<Ix>, y: NodeIndex<Ix>) {
        self.node_mut(y, Node::set_parent(self.node_ref(x, Node::parent)));
        if self.parent_ref(x, Node::is_sentinel) {
            self.root = y;
        } else if self.is_left_child(x) {
            self.parent_mut(x, Node::set_left(y));
        } else {
            self.parent_mut(x, Node::set_right(y));
        }
        self.node_mut(x, Node::set_parent(y));
    }

    /// Replace one subtree as a child of its parent with another subtree.
    ///
    /// The sentinel's parent is never written.
    fn transplant(&mut self, u: NodeIndex<Ix>, v: NodeIndex<Ix>) {
        let u_parent = self.node_ref(u, Node::parent);
        if u_parent.is_sentinel() {
            self.root = v;
        } else if self.is_left_child(u) {
            self.node_mut(u_parent, Node::set_left(v));
        } else {
            self.node_mut(u_parent, Node::set_right(v));
        }
        if !v.is_sentinel() {
            self.node_mut(v, Node::set_parent(u_parent));
        }
    }
}

impl<K, Ix> RbTree<K, Ix>
where
    Ix: IndexType,
{
    /// Find the node with the minimum key.
    fn tree_minimum(&self, mut x: NodeIndex<Ix>) -> NodeIndex<Ix> {
        while !self.left_ref(x, Node::is_sentinel) {
            x = self.node_ref(x, Node::left);
        }
        x
    }

    /// Find the node with the maximum key.
    fn tree_maximum(&self, mut x: NodeIndex<Ix>) -> NodeIndex<Ix> {
        while !self.right_ref(x, Node::is_sentinel) {
            x = self.node_ref(x, Node::right);
        }
        x
    }

    /// Check if a node is a left child of its parent.
    fn is_left_child(&self, node: NodeIndex<Ix>) -> bool {
        self.parent_ref(node, Node::left) == node
    }

    /// Check if a node is a right child of its parent.
    fn is_right_child(&self, node: NodeIndex<Ix>) -> bool {
        self.parent_ref(node, Node::right) == node
    }

    /// Update nodes indices after remove
    ///
    /// The node stored at `old` (the former last slot) now lives at `new`.
    fn update_idx(&mut self, old: NodeIndex<Ix>, new: NodeIndex<Ix>) {
        if self.root == old {
            self.root = new;
        }
        if self.nodes.get(new.index()).is_some() {
            let parent = self.node_ref(new, Node::parent);
            if !parent.is_sentinel() {
                if self.node_ref(parent, Node::left) == old {
                    self.node_mut(parent, Node::set_left(new));
                } else {
                    self.node_mut(parent, Node::set_right(new));
                }
            }
            if !self.left_ref(new, Node::is_sentinel) {
                self.left_mut(new, Node::set_parent(new));
            }
            if !self.right_ref(new, Node::is_sentinel) {
                self.right_mut(new, Node::set_parent(new));
            }
        }
    }
}

// Convenient methods for reference or mutate current/parent/left/right node
impl<'a, K, Ix> RbTree<K, Ix>
where
    Ix: IndexType,
{
    pub(crate) fn node_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<K, Ix>) -> R,
    {
        op(&self.nodes[node.index()])
    }

    pub(crate) fn node_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<K, Ix>) -> R,
    {
        op(&mut self.nodes[node.index()])
    }

    pub(crate) fn left_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<K, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].left().index();
        op(&self.nodes[idx])
    }

    pub(crate) fn right_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<K, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].right().index();
        op(&self.nodes[idx])
    }

    fn parent_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<K, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].parent().index();
        op(&self.nodes[idx])
    }

    fn grand_parent_ref<F, R>(&'a self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a Node<K, Ix>) -> R,
    {
        let parent_idx = self.nodes[node.index()].parent().index();
        let grand_parent_idx = self.nodes[parent_idx].parent().index();
        op(&self.nodes[grand_parent_idx])
    }

    fn left_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<K, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].left().index();
        op(&mut self.nodes[idx])
    }

    fn right_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<K, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].right().index();
        op(&mut self.nodes[idx])
    }

    fn parent_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<K, Ix>) -> R,
    {
        let idx = self.nodes[node.index()].parent().index();
        op(&mut self.nodes[idx])
    }

    fn grand_parent_mut<F, R>(&'a mut self, node: NodeIndex<Ix>, op: F) -> R
    where
        R: 'a,
        F: FnOnce(&'a mut Node<K, Ix>) -> R,
    {
        let parent_idx = self.nodes[node.index()].parent().index();
        let grand_parent_idx = self.nodes[parent_idx].parent().index();
        op(&mut self.nodes[grand_parent_idx])
    }
}

impl<'a, K, Ix> IntoIterator for &'a RbTree<K, Ix>
where
    Ix: IndexType,
{
    type Item = &'a K;
    type IntoIter = Iter<'a, K, Ix>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<K, Ix> IntoIterator for RbTree<K, Ix>
where
    Ix: IndexType,
{
    type Item = K;
    type IntoIter = IntoIter<K, Ix>;

    /// Consume the tree, yielding its keys in ascending order.
    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self)
    }
}

impl<K> FromIterator<K> for RbTree<K>
where
    K: Ord,
{
    #[inline]
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        let mut tree = RbTree::new();
        tree.extend(iter);
        tree
    }
}

impl<K, Ix> Extend<K> for RbTree<K, Ix>
where
    K: Ord,
    Ix: IndexType,
{
    /// # Panics
    ///
    /// This method panics when a node cannot be allocated
    #[inline]
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            if let Err(err) = self.try_insert(key) {
                panic!("{err}");
            }
        }
    }
}

/// Prints every key in ascending order followed by its color tag,
/// e.g. `10B 15R 18B`, or `(empty)`.
impl<K, Ix> fmt::Display for RbTree<K, Ix>
where
    K: fmt::Display,
    Ix: IndexType,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("(empty)");
        }
        for (i, node) in self.nodes().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}{}", node.key(), node.color().tag())?;
        }
        Ok(())
    }
}
