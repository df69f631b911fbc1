//! Shared plumbing for the helper binaries.
//!
//! Every binary takes `--data DIR`, logs to stderr through `tracing`, and
//! prints one JSON document on stdout.

use crate::catalog::ContentStore;
use crate::resolve_data_dir;
use anyhow::{Context, Result};
use clap::Args;
use serde::Serialize;
use std::io::{self, Write};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Args, Debug, Clone, Default)]
pub struct DataArgs {
    /// Content directory holding projects.json (defaults to <site root>/data)
    #[arg(long, value_name = "DIR", env = "PORTFOLIO_DATA_DIR")]
    pub data: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl DataArgs {
    pub fn load_store(&self) -> Result<ContentStore> {
        let dir = resolve_data_dir(self.data.as_deref())?;
        ContentStore::load_dir(&dir).with_context(|| format!("loading content from {}", dir.display()))
    }
}

/// Install the stderr subscriber; `RUST_LOG` overrides the `warn` default.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    // Keep an already-installed subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Write `value` as a single JSON document followed by a newline.
pub fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{rendered}").context("writing to stdout")?;
    Ok(())
}
