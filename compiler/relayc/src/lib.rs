//! Relay host driver.
//!
//! Loads script files, wires up the built-in host functions and reports
//! errors. The `relay` binary is a thin argument parser over
//! [`commands`].

pub mod commands;

use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Reads the filter from `RUST_LOG` (default `warn`) and renders spans as
/// an indented tree on stderr, so nested block frames line up under the
/// statement that opened them. Calling it twice is harmless.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let tree = tracing_tree::HierarchicalLayer::new(2)
        .with_writer(std::io::stderr)
        .with_targets(true)
        .with_bracketed_fields(true);

    // Fails only if a subscriber is already installed.
    let _ = tracing_subscriber::registry().with(filter).with(tree).try_init();
}
