use std::collections::{BTreeMap, HashSet};
use std::fmt::Debug;

use crate::index::NodeIndex;
use crate::node::{Color, Node};
use rand::{rngs::StdRng, Rng, SeedableRng};

use super::*;

struct KeyGenerator {
    rng: StdRng,
    unique: HashSet<i32>,
    limit: i32,
}

impl KeyGenerator {
    fn new(seed: [u8; 32]) -> Self {
        const LIMIT: i32 = 100_000;
        Self {
            rng: SeedableRng::from_seed(seed),
            unique: HashSet::new(),
            limit: LIMIT,
        }
    }

    fn next(&mut self) -> i32 {
        self.rng.gen_range(0..self.limit)
    }

    fn next_unique(&mut self) -> i32 {
        let mut key = self.next();
        while self.unique.contains(&key) {
            key = self.next();
        }
        self.unique.insert(key);
        key
    }

    fn next_in(&mut self, limit: i32) -> i32 {
        self.rng.gen_range(0..limit)
    }
}

impl<K, Ix> RbTree<K, Ix>
where
    K: Ord + Debug,
    Ix: IndexType,
{
    /// 1. Every node is either red or black.
    /// 2. The root is black.
    /// 3. Every leaf (NIL) is black.
    /// 4. If a node is red, then both its children are black.
    /// 5. For each node, all simple paths from the node to descendant leaves contain the
    /// same number of black nodes.
    fn check_rb_properties(&self) {
        assert!(self.node_ref(self.root, Node::is_black));
        self.check_children_color(self.root);
        self.check_black_height(self.root);
        self.check_order();
        self.check_links();
    }

    fn check_children_color(&self, x: NodeIndex<Ix>) {
        if self.node_ref(x, Node::is_sentinel) {
            return;
        }
        self.check_children_color(self.node_ref(x, Node::left));
        self.check_children_color(self.node_ref(x, Node::right));
        if self.node_ref(x, Node::is_red) {
            assert!(matches!(self.left_ref(x, Node::color), Color::Black));
            assert!(matches!(self.right_ref(x, Node::color), Color::Black));
        }
    }

    fn check_black_height(&self, x: NodeIndex<Ix>) -> usize {
        if self.node_ref(x, Node::is_sentinel) {
            return 0;
        }
        let lefth = self.check_black_height(self.node_ref(x, Node::left));
        let righth = self.check_black_height(self.node_ref(x, Node::right));
        assert_eq!(lefth, righth);
        if self.node_ref(x, Node::is_black) {
            return lefth + 1;
        }
        lefth
    }

    fn check_order(&self) {
        let keys: Vec<_> = self.iter().collect();
        assert_eq!(keys.len(), self.len());
        assert!(keys.windows(2).all(|w| w[0] <= w[1]), "{keys:?}");
    }

    /// Every arena slot but the sentinel is reachable from the root exactly once,
    /// parent links agree with child links, and the sentinel was never written.
    fn check_links(&self) {
        assert_eq!(self.nodes.len(), self.len() + 1);
        let sentinel = &self.nodes[0];
        assert!(sentinel.is_sentinel());
        assert!(sentinel.is_black());
        assert!(sentinel.left.is_none());
        assert!(sentinel.right.is_none());
        assert!(sentinel.parent.is_none());

        if !self.root.is_sentinel() {
            assert!(self.node_ref(self.root, Node::parent).is_sentinel());
        }
        let mut seen = HashSet::new();
        let mut stack = vec![self.root];
        while let Some(x) = stack.pop() {
            if x.is_sentinel() {
                continue;
            }
            assert!(seen.insert(x), "{x:?} reached twice");
            for child in [self.node_ref(x, Node::left), self.node_ref(x, Node::right)] {
                if !child.is_sentinel() {
                    assert_eq!(self.node_ref(child, Node::parent), x);
                }
                stack.push(child);
            }
        }
        assert_eq!(seen.len(), self.len());
    }

    fn keys(&self) -> Vec<&K> {
        self.iter().collect()
    }
}

fn with_tree_and_generator(test_fn: impl Fn(RbTree<i32>, KeyGenerator)) {
    let seeds = vec![[0; 32], [1; 32], [2; 32]];
    for seed in seeds {
        let gen = KeyGenerator::new(seed);
        let tree = RbTree::new();
        test_fn(tree, gen);
    }
}

fn height_bound(n: usize) -> f64 {
    2.0 * ((n + 1) as f64).log2()
}

#[test]
fn red_black_tree_properties_is_satisfied() {
    with_tree_and_generator(|mut tree, mut gen| {
        let keys: Vec<_> = std::iter::repeat_with(|| gen.next_unique())
            .take(1000)
            .collect();
        for k in keys.clone() {
            assert!(tree.insert(k));
        }
        tree.check_rb_properties();
        assert_eq!(tree.len(), 1000);
    });
}

#[test]
fn properties_hold_after_every_insert_and_remove() {
    with_tree_and_generator(|mut tree, mut gen| {
        let mut keys: Vec<_> = std::iter::repeat_with(|| gen.next_unique())
            .take(300)
            .collect();
        for k in keys.clone() {
            assert!(tree.insert(k));
            tree.check_rb_properties();
        }
        while !keys.is_empty() {
            let i = gen.next_in(keys.len() as i32) as usize;
            let k = keys.swap_remove(i);
            assert!(tree.remove(&k));
            tree.check_rb_properties();
        }
        assert!(tree.is_empty());
        assert!(tree.root().is_none());
    });
}

#[test]
fn mixed_operations_match_btree_map_model() {
    with_tree_and_generator(|mut tree, mut gen| {
        let mut model: BTreeMap<i32, usize> = BTreeMap::new();
        for _ in 0..3000 {
            let k = gen.next_in(200);
            if gen.next_in(3) == 0 {
                let present = model.get(&k).is_some();
                assert_eq!(tree.remove(&k), present);
                if let Some(count) = model.get_mut(&k) {
                    *count -= 1;
                    if *count == 0 {
                        let _ignore = model.remove(&k);
                    }
                }
            } else {
                assert!(tree.insert(k));
                *model.entry(k).or_insert(0) += 1;
            }
        }
        tree.check_rb_properties();
        let expect: Vec<_> = model
            .iter()
            .flat_map(|(k, count)| std::iter::repeat(*k).take(*count))
            .collect();
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), expect);
    });
}

#[test]
fn tree_len_will_update() {
    with_tree_and_generator(|mut tree, mut gen| {
        let keys: Vec<_> = std::iter::repeat_with(|| gen.next_unique())
            .take(100)
            .collect();
        for k in keys.clone() {
            let _ignore = tree.insert(k);
        }
        assert_eq!(tree.len(), 100);
        for k in keys {
            let _ignore = tree.remove(&k);
        }
        assert_eq!(tree.len(), 0);
    });
}

#[test]
fn inserted_keys_are_found_until_removed() {
    with_tree_and_generator(|mut tree, mut gen| {
        let keys: Vec<_> = std::iter::repeat_with(|| gen.next_unique())
            .take(500)
            .collect();
        for k in keys.clone() {
            let _ignore = tree.insert(k);
        }
        for k in &keys {
            assert_eq!(tree.get(k).map(|n| *n.key()), Some(*k));
        }
        let (removed, kept) = keys.split_at(250);
        for k in removed {
            assert!(tree.remove(k));
            assert!(!tree.contains(k));
        }
        for k in removed {
            assert!(tree.get(k).is_none());
        }
        for k in kept {
            assert!(tree.contains(k));
        }
    });
}

#[test]
fn remove_non_exist_key_will_do_nothing() {
    with_tree_and_generator(|mut tree, mut gen| {
        let keys: Vec<_> = std::iter::repeat_with(|| gen.next_unique())
            .take(1000)
            .collect();
        for k in keys {
            let _ignore = tree.insert(k);
        }
        let before: Vec<_> = tree.iter().copied().collect();
        let to_remove: Vec<_> = std::iter::repeat_with(|| gen.next_unique())
            .take(1000)
            .collect();
        for k in to_remove {
            assert!(!tree.remove(&k));
        }
        assert_eq!(tree.len(), 1000);
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), before);
        tree.check_rb_properties();
    });
}

#[test]
fn iterate_through_tree_is_sorted() {
    with_tree_and_generator(|mut tree, mut gen| {
        let mut keys: Vec<_> = std::iter::repeat_with(|| gen.next_unique())
            .take(1000)
            .collect();
        for k in keys.clone() {
            let _ignore = tree.insert(k);
        }
        keys.sort_unstable();

        assert_eq!(tree.iter().len(), keys.len());
        for (ek, k) in tree.iter().zip(keys.iter()) {
            assert_eq!(ek, k);
        }
        assert_eq!(tree.into_iter().collect::<Vec<_>>(), keys);
    });
}

#[test]
fn height_stays_logarithmic() {
    with_tree_and_generator(|mut tree, mut gen| {
        for n in 1..=2000 {
            let _ignore = tree.insert(gen.next_unique());
            assert!(tree.height() as f64 <= height_bound(n), "n = {n}");
        }
    });

    let ascending: RbTree<u32> = (0..4096).collect();
    assert!(ascending.height() as f64 <= height_bound(4096));
    let descending: RbTree<u32> = (0..4096).rev().collect();
    assert!(descending.height() as f64 <= height_bound(4096));
    descending.check_rb_properties();
}

#[test]
fn scenario_insert_fixed_keys() {
    let mut tree = RbTree::new();
    for k in [20, 15, 30, 10, 18, 25, 40, 22] {
        assert!(tree.insert(k));
    }
    assert_eq!(tree.keys(), vec![&10, &15, &18, &20, &22, &25, &30, &40]);
    assert_eq!(tree.root().map(|n| n.color()), Some(Color::Black));
    assert_eq!(tree.to_string(), "10R 15B 18R 20B 22R 25B 30R 40B");
    tree.check_rb_properties();
}

#[test]
fn scenario_remove_fixed_keys() {
    let mut tree: RbTree<i32> = [20, 15, 30, 10, 18, 25, 40, 22].into_iter().collect();
    let steps = [
        (10, vec![15, 18, 20, 22, 25, 30, 40], "15B 18R 20B 22R 25B 30R 40B"),
        (15, vec![18, 20, 22, 25, 30, 40], "18B 20B 22R 25B 30R 40B"),
        (20, vec![18, 22, 25, 30, 40], "18B 22B 25B 30R 40B"),
        (25, vec![18, 22, 30, 40], "18B 22B 30B 40R"),
    ];
    for (key, expect, printed) in steps {
        assert!(tree.remove(&key), "remove {key}");
        assert_eq!(tree.iter().copied().collect::<Vec<_>>(), expect);
        assert_eq!(tree.to_string(), printed);
        tree.check_rb_properties();
    }
    assert_eq!(tree.root().map(|n| *n.key()), Some(22));
}

#[test]
fn scenario_search_missing_key() {
    let tree: RbTree<i32> = [20, 15, 30, 10, 18, 25, 40, 22].into_iter().collect();
    assert!(tree.get(&99).is_none());
    assert!(!tree.contains(&99));
    let found = tree.get(&18).unwrap();
    assert_eq!(found.key(), &18);
    assert_eq!(found.color(), Color::Red);
    assert_eq!(found.parent().map(|n| *n.key()), Some(15));
}

#[test]
fn scenario_single_node_remove_and_reinsert() {
    let mut tree = RbTree::new();
    assert!(tree.insert(7));
    assert!(tree.remove(&7));
    assert!(tree.is_empty());
    assert!(tree.root().is_none());
    assert_eq!(tree.height(), 0);
    assert_eq!(tree.to_string(), "(empty)");
    assert_eq!(tree.nodes.len(), 1);
    tree.check_links();

    assert!(tree.insert(8));
    let root = tree.root().unwrap();
    assert_eq!(root.key(), &8);
    assert!(root.is_black());
    assert!(root.left().is_none() && root.right().is_none() && root.parent().is_none());
    tree.check_rb_properties();
}

#[test]
fn duplicate_keys_are_kept_as_multiset() {
    let mut tree = RbTree::new();
    for k in [5, 3, 5, 8, 5, 3] {
        assert!(tree.insert(k));
        tree.check_rb_properties();
    }
    assert_eq!(tree.len(), 6);
    assert_eq!(tree.keys(), vec![&3, &3, &5, &5, &5, &8]);

    assert!(tree.remove(&5));
    assert_eq!(tree.keys(), vec![&3, &3, &5, &5, &8]);
    assert!(tree.remove(&5));
    assert!(tree.remove(&5));
    assert!(!tree.remove(&5));
    assert!(!tree.contains(&5));
    assert_eq!(tree.keys(), vec![&3, &3, &8]);
    tree.check_rb_properties();
}

#[test]
fn first_and_last_track_extremes() {
    let mut tree = RbTree::new();
    assert_eq!(tree.first(), None);
    assert_eq!(tree.last(), None);
    for k in [50, 20, 80, 10, 90] {
        let _ignore = tree.insert(k);
    }
    assert_eq!(tree.first(), Some(&10));
    assert_eq!(tree.last(), Some(&90));
    let _ignore = tree.remove(&10);
    let _ignore = tree.remove(&90);
    assert_eq!(tree.first(), Some(&20));
    assert_eq!(tree.last(), Some(&80));
}

#[test]
fn node_handles_walk_the_tree() {
    let tree: RbTree<i32> = (1..=7).collect();
    let root = tree.root().unwrap();
    assert!(root.parent().is_none());
    for node in tree.nodes() {
        if let Some(left) = node.left() {
            assert!(left.key() < node.key());
            assert_eq!(left.parent().map(|p| p.index()), Some(node.index()));
        }
        if let Some(right) = node.right() {
            assert!(right.key() > node.key());
            assert_eq!(right.parent().map(|p| p.index()), Some(node.index()));
        }
        if node.is_red() {
            assert!(node.left().map_or(true, |n| n.is_black()));
            assert!(node.right().map_or(true, |n| n.is_black()));
        }
    }
    assert_eq!(tree.nodes().len(), 7);
}

#[test]
fn tree_clear_is_ok() {
    let mut tree = RbTree::new();
    let _ignore = tree.insert(1);
    let _ignore = tree.insert(2);
    let _ignore = tree.insert(6);
    assert_eq!(tree.len(), 3);
    tree.clear();
    assert_eq!(tree.len(), 0);
    assert!(tree.is_empty());
    assert_eq!(tree.nodes.len(), 1);
    assert!(tree.nodes[0].is_sentinel());
    tree.clear();
    assert!(tree.is_empty());
    let _ignore = tree.insert(4);
    assert_eq!(tree.keys(), vec![&4]);
    tree.check_rb_properties();
}

#[test]
fn into_iter_yields_owned_keys() {
    let tree: RbTree<String> = ["pear", "apple", "fig", "apple"]
        .into_iter()
        .map(String::from)
        .collect();
    let mut iter = tree.into_iter();
    assert_eq!(iter.len(), 4);
    assert_eq!(iter.next().as_deref(), Some("apple"));
    assert_eq!(iter.len(), 3);
    assert_eq!(iter.collect::<Vec<_>>(), vec!["apple", "fig", "pear"]);
}

unsafe impl IndexType for u8 {
    const ZERO: Self = 0;
    fn new(x: usize) -> Self {
        x as u8
    }
    fn index(&self) -> usize {
        *self as usize
    }
    fn max() -> Self {
        u8::MAX
    }
}

#[test]
fn insert_beyond_index_capacity_is_rejected() {
    let mut tree = RbTree::<u32, u8>::with_capacity(8);
    for k in 0..254 {
        assert_eq!(tree.try_insert(k), Ok(()));
    }
    let before: Vec<_> = tree.iter().copied().collect();
    assert_eq!(tree.try_insert(1000), Err(TreeError::CapacityExceeded));
    assert!(!tree.insert(1001));
    assert_eq!(tree.len(), 254);
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), before);
    tree.check_rb_properties();

    assert!(tree.remove(&0));
    assert_eq!(tree.try_insert(1000), Ok(()));
    assert_eq!(tree.last(), Some(&1000));
    tree.check_rb_properties();
}

#[test]
fn usize_index_tree_is_ok() {
    let mut tree = RbTree::<i64, usize>::with_capacity(16);
    for k in (0..64).rev() {
        assert!(tree.insert(k));
    }
    for k in (0..64).step_by(2) {
        assert!(tree.remove(&k));
    }
    tree.check_rb_properties();
    let expect: Vec<_> = (1..64).step_by(2).collect();
    assert_eq!(tree.iter().copied().collect::<Vec<_>>(), expect);
}

#[cfg(feature = "serde")]
#[test]
fn test_serde_rb_tree() {
    use serde_json::{json, Value};

    let mut tree = RbTree::<i32>::new();
    tree.insert(2);
    tree.insert(1);
    tree.insert(3);

    // Serialize the tree to JSON
    let serialized = serde_json::to_string(&tree).unwrap();
    let expected = json!({
        "nodes": [
            // sentinel node
            {
                "left": null,
                "right": null,
                "parent": null,
                "color": "Black",
                "key": null
            },
            {
                "left": 2,
                "right": 3,
                "parent": 0,
                "color": "Black",
                "key": 2
            },
            {
                "left": 0,
                "right": 0,
                "parent": 1,
                "color": "Red",
                "key": 1
            },
            {
                "left": 0,
                "right": 0,
                "parent": 1,
                "color": "Red",
                "key": 3
            }
        ],
        "root": 1,
        "len": 3
    });
    let actual: Value = serde_json::from_str(&serialized).unwrap();
    assert_eq!(expected, actual);

    // Deserialize the tree from JSON
    let mut deserialized: RbTree<i32> = serde_json::from_str(&serialized).unwrap();
    assert_eq!(deserialized.keys(), tree.keys());
    deserialized.check_rb_properties();
    assert!(deserialized.remove(&2));
    deserialized.check_rb_properties();
}
