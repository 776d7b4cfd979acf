//! Verdict command — the single-line stdin/stdout contract.
//!
//! Reads one line from stdin and prints exactly `Success` or the decimal
//! 1-based position of the first violation. Golden-file test harnesses
//! capture this output and compare it byte-for-byte after trimming
//! trailing newlines.

use anyhow::Context;
use clap::Args;
use tracing::{debug, instrument};

use nestcheck_core::validate;

/// Arguments for the `verdict` subcommand.
#[derive(Args, Debug, Default)]
pub struct VerdictArgs {
    // No subcommand-specific arguments; reads a single line from stdin
    // and honors the global --json flag.
}

/// Validate one line from stdin and print its verdict.
#[instrument(name = "cmd_verdict", skip_all)]
pub fn cmd_verdict(_args: VerdictArgs, global_json: bool) -> anyhow::Result<()> {
    let mut line = String::new();
    std::io::stdin()
        .read_line(&mut line)
        .context("failed to read line from stdin")?;

    // read_line keeps the terminator; the verdict is about the line itself.
    let line = line.strip_suffix('\n').unwrap_or(&line);
    let line = line.strip_suffix('\r').unwrap_or(line);

    let verdict = validate(line);
    debug!(%verdict, len = line.chars().count(), "line validated");

    if global_json {
        println!("{}", serde_json::to_string_pretty(&verdict)?);
    } else {
        println!("{verdict}");
    }

    Ok(())
}
