//! `sever` — find the minimum cut between two nodes in a Neo4j graph.

mod cli;
mod output;

use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use sever_core::{ConnectConfig, MinCutRequest};

use crate::cli::{parse_list, CliArgs};
use crate::output::format_cut;

/// Initialise tracing-based logging.
///
/// Uses `RUST_LOG` env var if set, otherwise defaults based on verbosity flags.
fn init_logging(verbose: bool, quiet: bool) {
    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else if quiet {
        EnvFilter::new("warn")
    } else if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    // Ignore error if a subscriber is already set (e.g. in tests).
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

async fn run(args: CliArgs) -> anyhow::Result<()> {
    let config = ConnectConfig::new(
        args.uri.as_str(),
        args.username.as_str(),
        args.password.as_str(),
    );
    let request = MinCutRequest::new(args.start_node.as_str(), args.end_node.as_str())
        .with_relationship_types(parse_list(&args.relationship_types))
        .with_node_labels(parse_list(&args.node_labels))
        .with_max_path_length(args.max_path_length);

    tracing::debug!(
        start = %request.start,
        end = %request.end,
        max_path_length = request.max_path_length,
        uri = %config.uri,
        "finding min-cut"
    );

    let cut = sever_core::find_min_cut(&request, &config).await?;
    let rendered = format_cut(&cut, args.format)?;
    println!("{rendered}");

    if let Some(path) = &args.output {
        std::fs::write(path, &rendered)
            .with_context(|| format!("failed to save results to {path}"))?;
        tracing::info!(path = %path, "results saved");
    }

    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = CliArgs::parse();
    init_logging(args.verbose, args.quiet);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{e:#}");
            ExitCode::FAILURE
        }
    }
}
