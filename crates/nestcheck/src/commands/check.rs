//! Check command — per-line bracket validation of a file.

use anyhow::bail;
use camino::Utf8PathBuf;
use clap::Args;
use owo_colors::OwoColorize;
use tracing::{debug, instrument};

use nestcheck_core::report::check_text;

use super::read_input;

/// Arguments for the `check` subcommand.
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// File to check (`-` for stdin).
    pub file: Utf8PathBuf,
}

/// Validate the bracket structure of every line in a file.
///
/// Each line is validated independently with positions restarting at 1.
/// Human output lists every failing line and exits non-zero; `--json`
/// prints the full report and leaves the exit code to the caller.
#[instrument(name = "cmd_check", skip_all, fields(file = %args.file))]
pub fn cmd_check(
    args: CheckArgs,
    global_json: bool,
    max_input_bytes: Option<usize>,
) -> anyhow::Result<()> {
    debug!(file = %args.file, "executing check command");

    let content = read_input(&args.file, max_input_bytes)?;
    let report = check_text(args.file.as_str(), &content);

    if global_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else if report.pass {
        println!(
            "{} {} ({} lines)",
            "PASS:".green(),
            report.file,
            report.lines
        );
    } else {
        for failure in &report.failures {
            eprintln!(
                "{}:{}: unbalanced at column {}",
                report.file, failure.line, failure.position
            );
        }
        bail!(
            "{} of {} lines unbalanced in {}",
            report.failures.len(),
            report.lines,
            report.file
        );
    }

    Ok(())
}
