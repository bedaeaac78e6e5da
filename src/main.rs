//! `block-puzzle`: serve the JSON command protocol on stdin/stdout.
//!
//! Logs go to stderr so they never interleave with responses. Set `RUST_LOG`
//! (for example `RUST_LOG=debug`) to see per-turn events.

use std::io::{self, BufWriter};

use anyhow::Result;
use tracing::info;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

use block_puzzle::adapter::{serve, AdapterConfig, Handler};

fn main() -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(filter)
        .init();

    let config = AdapterConfig::from_env();
    info!(
        refill = ?config.engine.refill,
        scoring = ?config.engine.scoring,
        default_seed = ?config.default_seed,
        "block puzzle engine ready"
    );

    let handler = Handler::new(&config);
    let stdin = io::stdin();
    let stdout = io::stdout();
    serve(&handler, stdin.lock(), BufWriter::new(stdout.lock()))?;
    Ok(())
}
