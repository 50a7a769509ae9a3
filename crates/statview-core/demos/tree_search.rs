//! Console walk-through of the tree search demos.
//!
//! Run with `cargo run -p statview-core --example tree_search`.

use statview_core::search::{
    bfs, depth_limited_search, dfs, iterative_deepening_search, sample_tree,
};

fn join(vals: &[i32]) -> String {
    vals.iter().map(i32::to_string).collect::<Vec<_>>().join(" ")
}

fn main() {
    let root = sample_tree();

    println!("BFS traversal of the binary tree:");
    for step in bfs(&root) {
        println!(
            "Level: {} Visited: [ {} ] Queue: [ {} ]",
            step.level,
            join(&step.visited),
            join(&step.queue)
        );
    }

    println!("DFS traversal of the binary tree:");
    println!("visited: [ {} ]", join(&dfs(&root)));

    for (target, limit) in [(3, 1), (7, 1), (7, 2)] {
        println!(
            "depth-limited search for {target} (limit {limit}): {}",
            depth_limited_search(&root, target, limit)
        );
    }
    for target in [5, 8] {
        println!(
            "iterative deepening search for {target}: {}",
            iterative_deepening_search(&root, target)
        );
    }
}
