//! CLI argument parsing.

use clap::{Parser, ValueEnum};

/// Find the minimum cut between two nodes in a Neo4j graph.
#[derive(Parser, Debug)]
#[command(name = "sever", author, version, about, long_about = None)]
pub struct CliArgs {
    /// Identifier of the start node (numeric or element id).
    #[arg(long)]
    pub start_node: String,

    /// Identifier of the end node (numeric or element id).
    #[arg(long)]
    pub end_node: String,

    /// Relationship types to traverse, comma-separated. Empty means any.
    #[arg(long, default_value = "")]
    pub relationship_types: String,

    /// Node labels to consider, comma-separated. Empty means any.
    #[arg(long, default_value = "")]
    pub node_labels: String,

    /// Maximum path length to consider.
    #[arg(long, default_value_t = 10)]
    pub max_path_length: i64,

    /// Neo4j connection URI.
    #[arg(long, env = "NEO4J_URI", default_value = "bolt://localhost:7687")]
    pub uri: String,

    /// Neo4j username.
    #[arg(long, env = "NEO4J_USER", default_value = "neo4j")]
    pub username: String,

    /// Neo4j password.
    #[arg(long, env = "NEO4J_PASSWORD", default_value = "")]
    pub password: String,

    /// Output format.
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Save output to a file (in addition to stdout).
    #[arg(long)]
    pub output: Option<String>,

    /// Enable verbose output.
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress non-essential output.
    #[arg(short, long)]
    pub quiet: bool,
}

/// How the cut edges are rendered.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable listing.
    Text,
    /// JSON array of edge records.
    Json,
    /// Markdown-style table.
    Table,
}

/// Split a comma-separated flag value into trimmed, non-empty items.
pub fn parse_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(String::from)
        .collect()
}
