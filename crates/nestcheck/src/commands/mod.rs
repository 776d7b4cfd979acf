//! Command implementations.

use std::io::Read;

use anyhow::Context;
use camino::Utf8Path;

pub mod check;
pub mod info;
pub mod verdict;

/// Read input from a file, or from stdin when the path is `-`.
///
/// Validates size against the configured limit. Files are preflighted via
/// metadata before reading into memory; stdin is checked after reading.
pub fn read_input(path: &Utf8Path, max_bytes: Option<usize>) -> anyhow::Result<String> {
    if path.as_str() == "-" {
        return read_stdin(max_bytes);
    }

    let metadata =
        std::fs::metadata(path.as_std_path()).with_context(|| format!("failed to read {path}"))?;
    if let Some(max) = max_bytes {
        let size = metadata.len() as usize;
        if size > max {
            anyhow::bail!("input too large: {path} is {size} bytes (limit: {max} bytes)");
        }
    }

    let content = std::fs::read_to_string(path.as_std_path())
        .with_context(|| format!("failed to read {path}"))?;
    Ok(content)
}

fn read_stdin(max_bytes: Option<usize>) -> anyhow::Result<String> {
    let mut content = String::new();
    std::io::stdin()
        .read_to_string(&mut content)
        .context("failed to read stdin")?;
    if let Some(max) = max_bytes
        && content.len() > max
    {
        anyhow::bail!(
            "input too large: stdin is {} bytes (limit: {max} bytes)",
            content.len()
        );
    }
    Ok(content)
}
