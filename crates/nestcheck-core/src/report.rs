//! Per-line check engine.
//!
//! [`validate`](crate::validate::validate) is scoped to a single line; this
//! module supplies the file-level wrapper the CLI consumes, running each
//! line independently and collecting failures into a [`CheckReport`].

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::validate::{Verdict, validate};

/// A line that failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct LineVerdict {
    /// 1-based line number in the input.
    pub line: usize,
    /// 1-based character position of the first violation in that line.
    pub position: usize,
}

/// Results of checking every line of an input.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct CheckReport {
    /// The input that was checked (file path, or `-` for stdin).
    pub file: String,
    /// Number of lines scanned.
    pub lines: usize,
    /// Lines that failed, in input order.
    pub failures: Vec<LineVerdict>,
    /// Overall pass/fail. `true` only if no line failed.
    pub pass: bool,
}

/// Check every line of `content` independently.
///
/// Lines are split on `\n` with a trailing `\r` stripped, so CRLF input
/// reports the same positions as LF input. Character positions restart at
/// 1 on every line; lines do not share validator state. The `file_path`
/// is used for reporting only.
#[tracing::instrument(skip_all, fields(file = file_path, content_len = content.len()))]
pub fn check_text(file_path: &str, content: &str) -> CheckReport {
    let mut lines = 0;
    let mut failures = Vec::new();

    for (index, line) in content.lines().enumerate() {
        lines += 1;
        if let Verdict::Failure { position } = validate(line) {
            failures.push(LineVerdict {
                line: index + 1,
                position,
            });
        }
    }

    let pass = failures.is_empty();
    tracing::debug!(lines, failures = failures.len(), "check complete");
    CheckReport {
        file: file_path.to_string(),
        lines,
        failures,
        pass,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_passes_with_zero_lines() {
        let report = check_text("empty.txt", "");
        assert_eq!(report.lines, 0);
        assert!(report.failures.is_empty());
        assert!(report.pass);
    }

    #[test]
    fn all_balanced_lines_pass() {
        let report = check_text("ok.txt", "{[()]}\nfn main() {}\nplain text\n");
        assert_eq!(report.lines, 3);
        assert!(report.pass);
    }

    #[test]
    fn failures_carry_line_and_position() {
        let report = check_text("bad.txt", "[]\n{[}\nfoo(bar[baz)\n");
        assert!(!report.pass);
        assert_eq!(
            report.failures,
            vec![
                LineVerdict {
                    line: 2,
                    position: 3
                },
                LineVerdict {
                    line: 3,
                    position: 12
                },
            ]
        );
    }

    #[test]
    fn lines_are_validated_independently() {
        // A `(` on one line is never closed by a `)` on the next.
        let report = check_text("split.txt", "(\n)\n");
        assert_eq!(
            report.failures,
            vec![
                LineVerdict {
                    line: 1,
                    position: 1
                },
                LineVerdict {
                    line: 2,
                    position: 1
                },
            ]
        );
    }

    #[test]
    fn crlf_matches_lf_positions() {
        let lf = check_text("a.txt", "ab(\ncd[ef\n");
        let crlf = check_text("b.txt", "ab(\r\ncd[ef\r\n");
        assert_eq!(lf.failures, crlf.failures);
    }

    #[test]
    fn missing_final_newline_still_counts_last_line() {
        let report = check_text("tail.txt", "[]\n(");
        assert_eq!(report.lines, 2);
        assert_eq!(
            report.failures,
            vec![LineVerdict {
                line: 2,
                position: 1
            }]
        );
    }
}
