//! Graph traversal algorithms (BFS, recursive DFS, iterative DFS).

use std::collections::{HashSet, VecDeque};
use std::fmt;

use log::trace;
use serde::Serialize;

use crate::list::Iter;

use super::Graph;

/// Strategy for walking the graph from a start node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum TraversalOrder {
    /// Level by level, neighbors in adjacency order.
    BreadthFirst,
    /// Pre-order: a node, then each unvisited neighbor's subtree in adjacency order.
    DepthFirstRecursive,
    /// Explicit stack; neighbors pushed in adjacency order, popped in reverse.
    DepthFirstIterative,
}

impl TraversalOrder {
    /// Short name used on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Self::BreadthFirst => "bfs",
            Self::DepthFirstRecursive => "dfs",
            Self::DepthFirstIterative => "dfs-iter",
        }
    }

    /// Parse a traversal order from its short or long name.
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "bfs" | "breadth_first" | "breadth-first" => Some(Self::BreadthFirst),
            "dfs" | "depth_first" | "depth-first" | "dfs-recursive" => {
                Some(Self::DepthFirstRecursive)
            }
            "dfs-iter" | "dfs_iter" | "dfs-iterative" => Some(Self::DepthFirstIterative),
            _ => None,
        }
    }
}

impl fmt::Display for TraversalOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// BFS from `start`. Returns labels in first-visit order; empty if `start` is unknown.
pub fn breadth_first(graph: &Graph, start: &str) -> Vec<String> {
    let Some(start) = graph.key(start) else {
        return Vec::new();
    };

    let mut visited: HashSet<&str> = HashSet::new();
    let mut visited_order: Vec<&str> = Vec::new();
    let mut queue: VecDeque<&str> = VecDeque::new();

    visited.insert(start);
    visited_order.push(start);
    queue.push_back(start);

    while let Some(current) = queue.pop_front() {
        trace!("bfs visit {:?}", current);
        for next in neighbors_of(graph, current) {
            if visited.insert(next) {
                visited_order.push(next);
                queue.push_back(next);
            }
        }
    }

    into_owned(visited_order)
}

/// Pre-order DFS from `start`, matching a recursive walk exactly.
///
/// Each frame on the stack is the remaining neighbor iterator of a node
/// whose "recursive call" is still in progress.
pub fn depth_first_recursive(graph: &Graph, start: &str) -> Vec<String> {
    let Some(start) = graph.key(start) else {
        return Vec::new();
    };

    let mut visited: HashSet<&str> = HashSet::new();
    let mut visited_order: Vec<&str> = Vec::new();
    let mut frames: Vec<Iter<'_, String>> = Vec::new();

    visit(graph, start, &mut visited, &mut visited_order, &mut frames);

    while let Some(frame) = frames.last_mut() {
        match frame.next() {
            Some(next) => {
                if !visited.contains(next.as_str()) {
                    visit(graph, next, &mut visited, &mut visited_order, &mut frames);
                }
            }
            None => {
                frames.pop();
            }
        }
    }

    into_owned(visited_order)
}

/// Iterative DFS from `start` with an explicit stack.
///
/// Already-visited nodes are skipped on pop, so a node pushed twice is
/// emitted once.
pub fn depth_first_iterative(graph: &Graph, start: &str) -> Vec<String> {
    let Some(start) = graph.key(start) else {
        return Vec::new();
    };

    let mut visited: HashSet<&str> = HashSet::new();
    let mut visited_order: Vec<&str> = Vec::new();
    let mut stack: Vec<&str> = vec![start];

    while let Some(current) = stack.pop() {
        if !visited.insert(current) {
            continue;
        }
        trace!("dfs-iter visit {:?}", current);
        visited_order.push(current);

        for next in neighbors_of(graph, current) {
            if !visited.contains(next) {
                stack.push(next);
            }
        }
    }

    into_owned(visited_order)
}

fn visit<'g>(
    graph: &'g Graph,
    node: &'g str,
    visited: &mut HashSet<&'g str>,
    visited_order: &mut Vec<&'g str>,
    frames: &mut Vec<Iter<'g, String>>,
) {
    trace!("dfs visit {:?}", node);
    visited.insert(node);
    visited_order.push(node);
    if let Some(neighbors) = graph.neighbors(node) {
        frames.push(neighbors.iter());
    }
}

fn neighbors_of<'g>(graph: &'g Graph, label: &str) -> impl Iterator<Item = &'g str> {
    graph
        .neighbors(label)
        .into_iter()
        .flat_map(|neighbors| neighbors.iter())
        .map(String::as_str)
}

fn into_owned(order: Vec<&str>) -> Vec<String> {
    order.into_iter().map(str::to_owned).collect()
}
