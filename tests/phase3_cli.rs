//! Phase 3 tests: CLI command layer.

use listgraph::cli::commands::{
    build_graph, cmd_graph, cmd_list, cmd_traverse, parse_edge, ListOps,
};
use listgraph::graph::TraversalOrder;
use listgraph::types::error::ListGraphError;

// ==================== Helper ====================

fn labels(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}

fn edges(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(f, t)| (f.to_string(), t.to_string()))
        .collect()
}

// ==================== Argument Parsing ====================

#[test]
fn test_parse_edge() {
    assert_eq!(
        parse_edge("A:B"),
        Some(("A".to_string(), "B".to_string()))
    );
    assert_eq!(
        parse_edge(" A : B "),
        Some(("A".to_string(), "B".to_string()))
    );
    assert_eq!(parse_edge("AB"), None);
    assert_eq!(parse_edge(":B"), None);
    assert_eq!(parse_edge("A:"), None);
}

#[test]
fn test_build_graph_rejects_unknown_endpoint() {
    let result = build_graph(&labels(&["A"]), &edges(&[("A", "Z")]));
    assert!(matches!(result, Err(ListGraphError::UnknownKey(_))));
}

// ==================== List Command ====================

#[test]
fn test_cmd_list_text() {
    let ops = ListOps {
        values: vec![10, 20, 30],
        reverse: true,
        kth: Some(1),
        find: Some(20),
        ..ListOps::default()
    };
    let out = cmd_list(&ops, false).unwrap();
    assert_eq!(out, "[30, 20, 10]\n1 from end: 10\n20 found at index 1");
}

#[test]
fn test_cmd_list_mutations() {
    let ops = ListOps {
        values: vec![2, 3],
        add_first: vec![1],
        add_last: vec![4, 5],
        delete_first: true,
        delete_last: true,
        find: Some(9),
        ..ListOps::default()
    };
    let out = cmd_list(&ops, false).unwrap();
    assert_eq!(out, "[2, 3, 4]\n9 not found");
}

#[test]
fn test_cmd_list_json() {
    let ops = ListOps {
        values: vec![1, 2, 3],
        kth: Some(3),
        find: Some(7),
        ..ListOps::default()
    };
    let out = cmd_list(&ops, true).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["values"], serde_json::json!([1, 2, 3]));
    assert_eq!(parsed["len"], 3);
    assert_eq!(parsed["kth_from_end"]["value"], 1);
    assert!(parsed["index_of"]["index"].is_null());
}

#[test]
fn test_cmd_list_errors_propagate() {
    let ops = ListOps {
        values: vec![1],
        delete_first: true,
        ..ListOps::default()
    };
    assert!(matches!(
        cmd_list(&ops, false),
        Err(ListGraphError::OutOfRange { .. })
    ));

    let ops = ListOps {
        values: vec![1, 2],
        kth: Some(5),
        ..ListOps::default()
    };
    assert_eq!(
        cmd_list(&ops, false),
        Err(ListGraphError::OutOfRange {
            requested: 5,
            len: 2
        })
    );
}

// ==================== Graph Command ====================

#[test]
fn test_cmd_graph_report_after_removals() {
    let out = cmd_graph(
        &labels(&["A", "B", "C"]),
        &edges(&[("A", "B"), ("A", "C"), ("B", "C")]),
        &labels(&["B"]),
        &edges(&[("A", "C"), ("X", "Y")]),
        false,
    )
    .unwrap();
    assert!(out.contains("A \tis connected with []"));
    assert!(out.contains("C \tis connected with []"));
    assert!(!out.contains("B \t"));
}

#[test]
fn test_cmd_graph_json() {
    let out = cmd_graph(
        &labels(&["A", "B"]),
        &edges(&[("A", "B"), ("A", "B")]),
        &[],
        &[],
        true,
    )
    .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["nodes"], 2);
    assert_eq!(parsed["edges"], 2);
    assert_eq!(parsed["adjacency"][0]["label"], "A");
    assert_eq!(parsed["adjacency"][0]["neighbors"], serde_json::json!(["B", "B"]));
}

#[test]
fn test_cmd_graph_remove_unknown_node_fails() {
    let result = cmd_graph(&labels(&["A"]), &[], &labels(&["Q"]), &[], false);
    assert_eq!(result, Err(ListGraphError::UnknownKey("Q".to_string())));
}

// ==================== Traverse Command ====================

#[test]
fn test_cmd_traverse_orders() {
    let nodes = labels(&["A", "B", "C", "D"]);
    let es = edges(&[("A", "B"), ("A", "C"), ("B", "D")]);

    let bfs = cmd_traverse(&nodes, &es, "A", TraversalOrder::BreadthFirst, false).unwrap();
    assert_eq!(bfs, "A\nB\nC\nD");

    let dfs = cmd_traverse(&nodes, &es, "A", TraversalOrder::DepthFirstRecursive, false).unwrap();
    assert_eq!(dfs, "A\nB\nD\nC");

    let iter = cmd_traverse(&nodes, &es, "A", TraversalOrder::DepthFirstIterative, false).unwrap();
    assert_eq!(iter, "A\nC\nB\nD");
}

#[test]
fn test_cmd_traverse_json() {
    let out = cmd_traverse(
        &labels(&["A", "B"]),
        &edges(&[("A", "B")]),
        "A",
        TraversalOrder::DepthFirstIterative,
        true,
    )
    .unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&out).unwrap();
    assert_eq!(parsed["order"], "depth-first-iterative");
    assert_eq!(parsed["visited"], serde_json::json!(["A", "B"]));
}

#[test]
fn test_cmd_traverse_unknown_start_is_empty() {
    let out = cmd_traverse(
        &labels(&["A"]),
        &[],
        "Z",
        TraversalOrder::BreadthFirst,
        false,
    )
    .unwrap();
    assert!(out.is_empty());
}
