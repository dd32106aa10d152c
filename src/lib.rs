//! listgraph — a singly linked list and a labeled directed graph.
//!
//! The list stores its nodes in an index arena. The graph keys everything
//! by node label and keeps each adjacency list in a [`LinkedList`], with
//! breadth-first, recursive depth-first and iterative depth-first walks.

pub mod cli;
pub mod graph;
pub mod list;
pub mod types;

// Re-export commonly used types at the crate root
pub use graph::{Graph, GraphBuilder, TraversalOrder};
pub use list::LinkedList;
pub use types::{LgResult, ListGraphError};
