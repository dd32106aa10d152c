//! Fluent API for building Graph instances.

use crate::types::LgResult;

use super::Graph;

/// Fluent builder for constructing a Graph.
///
/// Nodes are added first, then edges in declaration order, so the
/// resulting adjacency lists follow the order edges were declared in.
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    nodes: Vec<String>,
    edges: Vec<(String, String)>,
}

impl GraphBuilder {
    /// Create an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare a node.
    pub fn node(mut self, label: impl Into<String>) -> Self {
        self.nodes.push(label.into());
        self
    }

    /// Declare several nodes.
    pub fn nodes<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nodes.extend(labels.into_iter().map(Into::into));
        self
    }

    /// Declare a directed edge.
    pub fn edge(mut self, from: impl Into<String>, to: impl Into<String>) -> Self {
        self.edges.push((from.into(), to.into()));
        self
    }

    /// Build the graph. Fails with `UnknownKey` if an edge names an undeclared node.
    pub fn build(self) -> LgResult<Graph> {
        let mut graph = Graph::new();
        for label in &self.nodes {
            graph.add_node(label);
        }
        for (from, to) in &self.edges {
            graph.add_edge(from, to)?;
        }
        Ok(graph)
    }
}
