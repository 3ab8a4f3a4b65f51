//! Feeds a fixed key list through the tree and logs its state after each step.
//!
//! Run with `RUST_LOG=info cargo run --example demo`, or `RUST_LOG=trace` to
//! also see every fixup case the tree goes through.

use log::info;
use rb_sentinel_tree::RbTree;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut tree = RbTree::new();

    info!("=== Inserting elements ===");
    for key in [20, 15, 30, 10, 18, 25, 40, 22] {
        info!("insert {key}");
        if !tree.insert(key) {
            info!("insert {key} failed");
        }
    }
    info!("tree after insertions: {tree}");

    info!("=== Searching ===");
    for key in [18, 99] {
        match tree.get(&key) {
            Some(node) => info!("found key {} (color: {:?})", node.key(), node.color()),
            None => info!("key {key} not found"),
        }
    }

    info!("=== Deleting elements ===");
    for key in [10, 15, 20, 25] {
        let removed = tree.remove(&key);
        info!("delete {key}: {removed}, tree: {tree}");
    }

    info!("final tree: {tree}, height {}", tree.height());
}
