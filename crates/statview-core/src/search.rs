//! Binary-tree search demos (BFS, DFS, depth-limited, iterative deepening).
//!
//! Console teaching material only; nothing here is routed over HTTP.

use std::collections::VecDeque;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub val: i32,
    pub left: Option<Box<Node>>,
    pub right: Option<Box<Node>>,
}

impl Node {
    pub fn leaf(val: i32) -> Self {
        Self { val, left: None, right: None }
    }

    pub fn branch(val: i32, left: Node, right: Node) -> Self {
        Self { val, left: Some(Box::new(left)), right: Some(Box::new(right)) }
    }

    fn children(&self) -> impl Iterator<Item = &Node> {
        self.left.as_deref().into_iter().chain(self.right.as_deref())
    }

    /// Depth of the deepest node (root = 0).
    pub fn height(&self) -> usize {
        self.children().map(|c| c.height() + 1).max().unwrap_or(0)
    }
}

/// The fixed 7-node tree `1(2(4,5),3(6,7))`.
pub fn sample_tree() -> Node {
    Node::branch(
        1,
        Node::branch(2, Node::leaf(4), Node::leaf(5)),
        Node::branch(3, Node::leaf(6), Node::leaf(7)),
    )
}

/// Snapshot taken after each BFS dequeue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BfsStep {
    pub level: usize,
    pub visited: Vec<i32>,
    pub queue: Vec<i32>,
}

/// Breadth-first traversal, returning the visited/queue trace.
pub fn bfs(root: &Node) -> Vec<BfsStep> {
    let mut queue: VecDeque<(&Node, usize)> = VecDeque::from([(root, 0)]);
    let mut visited = Vec::new();
    let mut trace = Vec::new();

    while let Some((node, level)) = queue.pop_front() {
        visited.push(node.val);
        queue.extend(node.children().map(|c| (c, level + 1)));
        trace.push(BfsStep {
            level,
            visited: visited.clone(),
            queue: queue.iter().map(|(n, _)| n.val).collect(),
        });
    }
    trace
}

/// Pre-order depth-first traversal.
pub fn dfs(root: &Node) -> Vec<i32> {
    fn walk(node: &Node, out: &mut Vec<i32>) {
        out.push(node.val);
        for child in node.children() {
            walk(child, out);
        }
    }

    let mut out = Vec::new();
    walk(root, &mut out);
    out
}

/// Is `target` within `limit` edges of `root`?
pub fn depth_limited_search(root: &Node, target: i32, limit: usize) -> bool {
    if root.val == target {
        return true;
    }
    if limit == 0 {
        return false;
    }
    root.children().any(|c| depth_limited_search(c, target, limit - 1))
}

/// Depth-limited search with limits `0..=height`.
pub fn iterative_deepening_search(root: &Node, target: i32) -> bool {
    (0..=root.height()).any(|limit| depth_limited_search(root, target, limit))
}
