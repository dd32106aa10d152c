//! CLI entry point for the `listgraph` command-line tool.

use std::process;

use clap::{Parser, Subcommand};

use listgraph::cli::commands::{self, ListOps};
use listgraph::graph::TraversalOrder;
use listgraph::ListGraphError;

#[derive(Parser)]
#[command(
    name = "listgraph",
    about = "Linked list and labeled directed graph playground"
)]
struct Cli {
    /// Output format: "text" (default) or "json"
    #[arg(long, default_value = "text")]
    format: String,

    /// Enable debug logging
    #[arg(long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a linked list and run operations on it
    List {
        /// Comma-separated initial values, appended in order
        #[arg(long, value_delimiter = ',', allow_hyphen_values = true)]
        values: Vec<i32>,
        /// Prepend a value (repeatable)
        #[arg(long, allow_hyphen_values = true)]
        add_first: Vec<i32>,
        /// Append a value (repeatable)
        #[arg(long, allow_hyphen_values = true)]
        add_last: Vec<i32>,
        /// Remove the head
        #[arg(long)]
        delete_first: bool,
        /// Remove the tail
        #[arg(long)]
        delete_last: bool,
        /// Reverse the list
        #[arg(long)]
        reverse: bool,
        /// Report the k-th value from the end (1 = tail)
        #[arg(long)]
        kth: Option<usize>,
        /// Report the index of a value
        #[arg(long, allow_hyphen_values = true)]
        find: Option<i32>,
    },
    /// Build a graph and print its adjacency report
    Graph {
        /// Comma-separated node labels
        #[arg(long, value_delimiter = ',')]
        nodes: Vec<String>,
        /// Directed edge FROM:TO (repeatable)
        #[arg(long = "edge")]
        edges: Vec<String>,
        /// Remove a node after building (repeatable)
        #[arg(long)]
        remove_node: Vec<String>,
        /// Remove an edge FROM:TO after building (repeatable)
        #[arg(long)]
        remove_edge: Vec<String>,
    },
    /// Build a graph and print a traversal order
    Traverse {
        /// Comma-separated node labels
        #[arg(long, value_delimiter = ',')]
        nodes: Vec<String>,
        /// Directed edge FROM:TO (repeatable)
        #[arg(long = "edge")]
        edges: Vec<String>,
        /// Starting node label
        #[arg(long)]
        start: String,
        /// Order: bfs, dfs, or dfs-iter
        #[arg(long, default_value = "bfs")]
        order: String,
    },
}

fn parse_edges(specs: &[String]) -> Vec<(String, String)> {
    specs
        .iter()
        .map(|spec| match commands::parse_edge(spec) {
            Some(edge) => edge,
            None => {
                eprintln!("Invalid edge (expected FROM:TO): {}", spec);
                process::exit(3);
            }
        })
        .collect()
}

fn main() {
    let cli = Cli::parse();
    let json = cli.format == "json";

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::init();
    }

    let result = match cli.command {
        Commands::List {
            values,
            add_first,
            add_last,
            delete_first,
            delete_last,
            reverse,
            kth,
            find,
        } => {
            let ops = ListOps {
                values,
                add_first,
                add_last,
                delete_first,
                delete_last,
                reverse,
                kth,
                find,
            };
            commands::cmd_list(&ops, json)
        }
        Commands::Graph {
            nodes,
            edges,
            remove_node,
            remove_edge,
        } => {
            let edges = parse_edges(&edges);
            let remove_edge = parse_edges(&remove_edge);
            commands::cmd_graph(&nodes, &edges, &remove_node, &remove_edge, json)
        }
        Commands::Traverse {
            nodes,
            edges,
            start,
            order,
        } => {
            let order = match TraversalOrder::from_name(&order) {
                Some(order) => order,
                None => {
                    eprintln!("Invalid traversal order: {}", order);
                    process::exit(3);
                }
            };
            let edges = parse_edges(&edges);
            commands::cmd_traverse(&nodes, &edges, &start, order, json)
        }
    };

    match result {
        Ok(output) => println!("{}", output.trim_end()),
        Err(e) => {
            eprintln!("Error: {}", e);
            let code = match &e {
                ListGraphError::UnknownKey(_) => 1,
                ListGraphError::EmptyCollection | ListGraphError::OutOfRange { .. } => 2,
            };
            process::exit(code);
        }
    }
}
