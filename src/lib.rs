pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parser;
pub mod processor;
pub mod writer;

use anyhow::Context;
use clap::Parser;
use tracing::info;

use crate::config::ExtractConfig;
use crate::model::WorldGraph;

pub fn run() -> anyhow::Result<()> {
    let args = cli::Cli::parse();
    let config = ExtractConfig::from(args);
    let graph = extract(&config)?;

    if config.summary {
        println!("{}", writer::summary::render(&graph));
    }

    writer::json::emit(&graph, &config.output, config.pretty)
        .with_context(|| format!("Writing {}", config.output.display()))?;
    info!(output = %config.output.display(), "Room data exported");

    Ok(())
}

/// Parse and process everything under `config.root`, without writing.
pub fn extract(config: &ExtractConfig) -> anyhow::Result<WorldGraph> {
    // 1. ── Parse ──────────────────────────────────────────────────────
    let raw = parser::load_project(config)
        .with_context(|| format!("Loading project {}", config.root.display()))?;

    // 2. ── Process ────────────────────────────────────────────────────
    Ok(processor::run(raw))
}
