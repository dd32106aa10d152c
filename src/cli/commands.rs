//! CLI command implementations.
//!
//! Each command builds its structure from the arguments, applies the
//! requested operations, and returns the text to print.

use crate::graph::{Graph, GraphBuilder, TraversalOrder};
use crate::list::LinkedList;
use crate::types::LgResult;

/// Operations applied by the `list` command, in field order.
#[derive(Debug, Clone, Default)]
pub struct ListOps {
    pub values: Vec<i32>,
    pub add_first: Vec<i32>,
    pub add_last: Vec<i32>,
    pub delete_first: bool,
    pub delete_last: bool,
    pub reverse: bool,
    pub kth: Option<usize>,
    pub find: Option<i32>,
}

/// Parse a `FROM:TO` edge argument.
pub fn parse_edge(spec: &str) -> Option<(String, String)> {
    let (from, to) = spec.split_once(':')?;
    let (from, to) = (from.trim(), to.trim());
    if from.is_empty() || to.is_empty() {
        return None;
    }
    Some((from.to_string(), to.to_string()))
}

/// Build a graph from node labels and edge pairs.
pub fn build_graph(nodes: &[String], edges: &[(String, String)]) -> LgResult<Graph> {
    edges
        .iter()
        .fold(GraphBuilder::new().nodes(nodes.iter().cloned()), |b, (from, to)| {
            b.edge(from.clone(), to.clone())
        })
        .build()
}

/// Build a list, apply the requested mutations, and report lookups.
pub fn cmd_list(ops: &ListOps, json: bool) -> LgResult<String> {
    let mut list: LinkedList = ops.values.iter().copied().collect();
    for &v in &ops.add_first {
        list.add_first(v);
    }
    for &v in &ops.add_last {
        list.add_last(v);
    }
    if ops.delete_first {
        list.delete_first()?;
    }
    if ops.delete_last {
        list.delete_last()?;
    }
    if ops.reverse {
        list.reverse();
    }

    let kth = match ops.kth {
        Some(k) => Some((k, *list.kth_from_end(k)?)),
        None => None,
    };
    let found = ops.find.map(|v| (v, list.index_of(&v)));

    if json {
        let values: Vec<i32> = list.iter().copied().collect();
        let mut info = serde_json::json!({
            "values": values,
            "len": list.len(),
        });
        if let Some((k, value)) = kth {
            info["kth_from_end"] = serde_json::json!({"k": k, "value": value});
        }
        if let Some((value, index)) = found {
            info["index_of"] = serde_json::json!({"value": value, "index": index});
        }
        return Ok(info.to_string());
    }

    let mut lines = vec![list.to_string()];
    if let Some((k, value)) = kth {
        lines.push(format!("{} from end: {}", k, value));
    }
    if let Some((value, index)) = found {
        match index {
            Some(i) => lines.push(format!("{} found at index {}", value, i)),
            None => lines.push(format!("{} not found", value)),
        }
    }
    Ok(lines.join("\n"))
}

/// Build a graph, apply removals, and render it.
pub fn cmd_graph(
    nodes: &[String],
    edges: &[(String, String)],
    remove_nodes: &[String],
    remove_edges: &[(String, String)],
    json: bool,
) -> LgResult<String> {
    let mut graph = build_graph(nodes, edges)?;
    for label in remove_nodes {
        graph.remove_node(label)?;
    }
    for (from, to) in remove_edges {
        graph.remove_edge(from, to);
    }

    if json {
        let adjacency: Vec<serde_json::Value> = graph
            .labels()
            .iter()
            .map(|label| {
                let neighbors: Vec<&String> =
                    graph.neighbors(label).map(|n| n.iter().collect()).unwrap_or_default();
                serde_json::json!({"label": label, "neighbors": neighbors})
            })
            .collect();
        let info = serde_json::json!({
            "nodes": graph.node_count(),
            "edges": graph.edge_count(),
            "adjacency": adjacency,
        });
        return Ok(serde_json::to_string_pretty(&info).unwrap_or_default());
    }

    Ok(graph.report())
}

/// Build a graph and report the visitation order from `start`.
pub fn cmd_traverse(
    nodes: &[String],
    edges: &[(String, String)],
    start: &str,
    order: TraversalOrder,
    json: bool,
) -> LgResult<String> {
    let graph = build_graph(nodes, edges)?;
    let visited = graph.traverse(start, order);

    if json {
        let info = serde_json::json!({
            "start": start,
            "order": order,
            "visited": visited,
        });
        return Ok(info.to_string());
    }

    Ok(visited.join("\n"))
}
