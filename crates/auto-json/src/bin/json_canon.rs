//! `json-canon` — print the canonical form of a JSON document (stdin → stdout).
//!
//! Keys are sorted, whitespace removed, and no trailing newline is written.
//! Set `RUST_LOG=debug` for diagnostics on stderr.

use auto_json::cli::{canonicalize, CliError};
use std::io::{self, Read, Write};
use tracing_subscriber::EnvFilter;

fn run() -> Result<(), CliError> {
    let mut buf = String::new();
    io::stdin().read_to_string(&mut buf)?;
    tracing::debug!(bytes = buf.len(), "read input");

    let out = canonicalize(&buf)?;
    let mut stdout = io::stdout().lock();
    stdout.write_all(out.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    if let Err(e) = run() {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
