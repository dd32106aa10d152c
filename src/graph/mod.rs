//! Labeled directed graph and its traversals.

pub mod builder;
pub mod directed_graph;
pub mod traversal;

pub use builder::GraphBuilder;
pub use directed_graph::Graph;
pub use traversal::{breadth_first, depth_first_iterative, depth_first_recursive, TraversalOrder};
