//! Command line driver for the `routetree` binary.
//!
//! The binary only parses arguments and prints; [render] does the work and
//! returns what would be written, so it can be checked without a process.

use crate::config::{DEFAULT_DELIMITER, EmptySegmentPolicy};
use crate::model::item::items_to_json_pretty;
use crate::model::{RouteTreeBuilder, routes_from_json};
use anyhow::{Context, Result};
use clap::Parser;
use std::fmt::Write;
use std::path::PathBuf;

/// Resolve a JSON list of routes into a navigation tree
#[derive(Parser, Debug, Clone)]
#[command(name = "routetree", version)]
pub struct Cli {
    /// JSON file holding an array of routes
    pub routes: PathBuf,

    /// Character separating segments of a group path
    #[arg(short, long, default_value_t = DEFAULT_DELIMITER)]
    pub delimiter: char,

    /// Reject group paths with empty segments instead of dropping them
    #[arg(long)]
    pub strict: bool,

    /// Print nested JSON instead of an outline
    #[arg(long)]
    pub json: bool,
}

/// Text produced by one CLI invocation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CliOutput {
    pub stdout: String,
    pub stderr: String,
    /// `false` if any group path was rejected
    pub success: bool,
}

/// Reads the routes file named by `cli` and renders it.
pub fn run(cli: &Cli) -> Result<CliOutput> {
    let content = std::fs::read_to_string(&cli.routes)
        .with_context(|| format!("Failed to read {}", cli.routes.display()))?;
    render(cli, &content)
}

/// Resolves `routes_json` with the options of `cli` and renders the tree.
///
/// A rejected group path is not an `Err`: its message goes to `stderr`,
/// the tree is still rendered and `success` is `false`.
pub fn render(cli: &Cli, routes_json: &str) -> Result<CliOutput> {
    let routes = routes_from_json(routes_json)
        .with_context(|| format!("Failed to parse routes in {}", cli.routes.display()))?;

    let policy = if cli.strict {
        EmptySegmentPolicy::Reject
    } else {
        EmptySegmentPolicy::Drop
    };
    let builder = RouteTreeBuilder::new()
        .with_delimiter(cli.delimiter)
        .with_empty_segment_policy(policy);

    let mut output = CliOutput {
        success: true,
        ..CliOutput::default()
    };
    let tree = match builder.resolve(&routes) {
        Ok(tree) => tree,
        Err(error) => {
            for group_error in error.errors() {
                let _ = writeln!(output.stderr, "{group_error}");
            }
            output.success = false;
            error.into_tree()
        }
    };

    output.stdout = if cli.json {
        let mut json = items_to_json_pretty(&tree.to_items())?;
        json.push('\n');
        json
    } else {
        tree.to_outline(&routes)
    };
    Ok(output)
}
