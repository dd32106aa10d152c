//! CLI command layer for the `listgraph` binary.

pub mod commands;
