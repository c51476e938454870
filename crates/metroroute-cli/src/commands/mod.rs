// Module exports for CLI subcommands.
//
// Each module handles one subcommand; main.rs parses arguments and dispatches.

pub mod demo;
pub mod route;
pub mod stations;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use metroroute_lib::{load_network, resolve_network_path, sample_network, Network};

/// Load the configured network document, or the built-in sample network when
/// none is configured.
pub fn load_network_or_sample(explicit: Option<&Path>) -> Result<Network> {
    match resolve_network_path(explicit) {
        Some(path) => load_network(&path)
            .with_context(|| format!("failed to load network from {}", path.display())),
        None => {
            info!("no network document configured; using the sample network");
            Ok(sample_network())
        }
    }
}
