//! Directed graph over string labels, with linked-list adjacency.

use std::collections::HashMap;
use std::fmt;

use log::{debug, warn};

use crate::list::LinkedList;
use crate::types::{LgResult, ListGraphError, REPORT_RULE_WIDTH};

use super::traversal::{self, TraversalOrder};

/// Directed graph keyed by node label.
///
/// A label is the node's identity: there is no separate node object.
/// Duplicate edges are kept, so an adjacency list may name a neighbor
/// more than once.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// Labels in insertion order.
    labels: Vec<String>,
    /// Adjacency: label -> labels it points to, in edge insertion order.
    adjacency: HashMap<String, LinkedList<String>>,
}

impl Graph {
    /// Create an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a node. Re-adding an existing label leaves it and its edges untouched.
    pub fn add_node(&mut self, label: &str) {
        if self.adjacency.contains_key(label) {
            debug!("Node {:?} already present", label);
            return;
        }
        self.labels.push(label.to_string());
        self.adjacency.insert(label.to_string(), LinkedList::new());
        debug!("Added node {:?}", label);
    }

    /// Add a directed edge `from -> to`. Both labels must exist.
    pub fn add_edge(&mut self, from: &str, to: &str) -> LgResult<()> {
        self.require(from)?;
        self.require(to)?;
        let neighbors = self
            .adjacency
            .get_mut(from)
            .ok_or_else(|| ListGraphError::UnknownKey(from.to_string()))?;
        neighbors.add_last(to.to_string());
        debug!("Added edge {:?} -> {:?}", from, to);
        Ok(())
    }

    /// Remove a node together with every edge pointing at it.
    pub fn remove_node(&mut self, label: &str) -> LgResult<()> {
        self.require(label)?;

        let key = label.to_string();
        let mut dropped = 0;
        for neighbors in self.adjacency.values_mut() {
            dropped += neighbors.remove_all(&key);
        }
        self.adjacency.remove(label);
        self.labels.retain(|l| l != label);

        debug!("Removed node {:?} and {} incoming edge(s)", label, dropped);
        Ok(())
    }

    /// Remove one `from -> to` edge.
    ///
    /// Unlike [`add_edge`](Self::add_edge), unknown labels are tolerated:
    /// the call does nothing. Returns whether an edge was removed.
    pub fn remove_edge(&mut self, from: &str, to: &str) -> bool {
        if !self.contains_node(from) || !self.contains_node(to) {
            warn!("Ignoring removal of edge {:?} -> {:?}: unknown label", from, to);
            return false;
        }
        let removed = self
            .adjacency
            .get_mut(from)
            .map_or(false, |neighbors| neighbors.remove(&to.to_string()));
        if removed {
            debug!("Removed edge {:?} -> {:?}", from, to);
        }
        removed
    }

    /// Whether `label` names a node.
    pub fn contains_node(&self, label: &str) -> bool {
        self.adjacency.contains_key(label)
    }

    /// Whether at least one `from -> to` edge exists.
    pub fn has_edge(&self, from: &str, to: &str) -> bool {
        self.neighbors(from)
            .map_or(false, |neighbors| neighbors.iter().any(|n| n == to))
    }

    /// Adjacency list of `label`, or `None` for an unknown label.
    pub fn neighbors(&self, label: &str) -> Option<&LinkedList<String>> {
        self.adjacency.get(label)
    }

    /// Labels in insertion order.
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Number of nodes.
    pub fn node_count(&self) -> usize {
        self.labels.len()
    }

    /// Number of edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(LinkedList::len).sum()
    }

    /// Text report: a rule line, then one line per node with its adjacency list.
    pub fn report(&self) -> String {
        self.to_string()
    }

    /// Write [`report`](Self::report) to stdout.
    pub fn print(&self) {
        print!("{}", self);
    }

    /// Breadth-first visitation order from `start`. Empty if `start` is unknown.
    pub fn traverse_breadth_first(&self, start: &str) -> Vec<String> {
        traversal::breadth_first(self, start)
    }

    /// Recursive pre-order depth-first visitation order from `start`.
    pub fn traverse_depth_first_recursive(&self, start: &str) -> Vec<String> {
        traversal::depth_first_recursive(self, start)
    }

    /// Stack-driven depth-first visitation order from `start`.
    ///
    /// Neighbors are pushed in adjacency order, so siblings come off the
    /// stack last-first and the order differs from the recursive walk.
    pub fn traverse_depth_first_iterative(&self, start: &str) -> Vec<String> {
        traversal::depth_first_iterative(self, start)
    }

    /// Visitation order from `start` using the given strategy.
    pub fn traverse(&self, start: &str, order: TraversalOrder) -> Vec<String> {
        match order {
            TraversalOrder::BreadthFirst => self.traverse_breadth_first(start),
            TraversalOrder::DepthFirstRecursive => self.traverse_depth_first_recursive(start),
            TraversalOrder::DepthFirstIterative => self.traverse_depth_first_iterative(start),
        }
    }

    /// The graph's own copy of `label`, so traversals can borrow from the graph.
    pub(crate) fn key(&self, label: &str) -> Option<&str> {
        self.adjacency
            .get_key_value(label)
            .map(|(key, _)| key.as_str())
    }

    fn require(&self, label: &str) -> LgResult<()> {
        if self.contains_node(label) {
            Ok(())
        } else {
            Err(ListGraphError::UnknownKey(label.to_string()))
        }
    }
}

impl fmt::Display for Graph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", "#".repeat(REPORT_RULE_WIDTH))?;
        for label in &self.labels {
            match self.adjacency.get(label) {
                Some(neighbors) => writeln!(f, "{} \tis connected with {}", label, neighbors)?,
                None => writeln!(f, "{} \tis connected with []", label)?,
            }
        }
        writeln!(f)?;
        writeln!(f)
    }
}
