//! The bracket-matching validator.
//!
//! A single left-to-right pass drives a stack of pending opening brackets.
//! The first structural violation in reading order decides the verdict: a
//! closer with no pending opener, or with a pending opener of another
//! family, fails at the closer's own position; openers still stranded at
//! end of input fail at the position of the earliest one.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::bracket::{BracketKind, Glyph};

/// An opening bracket awaiting its partner.
///
/// Pushed when an opening glyph is scanned, popped when its closer arrives.
/// `position` is the 1-based character offset in the line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct OpenBracket {
    kind: BracketKind,
    position: usize,
}

/// Outcome of validating one line.
///
/// `Failure` carries the 1-based position of the first character that
/// breaks well-formedness. Malformed input is a normal, successfully
/// computed result, never an `Err`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "verdict", rename_all = "lowercase")]
pub enum Verdict {
    /// Every bracket matched in correctly nested order.
    Success,
    /// The line is not well-formed.
    Failure {
        /// 1-based character position of the first violation.
        position: usize,
    },
}

impl Verdict {
    /// `true` for [`Verdict::Success`].
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success)
    }

    /// The failure position, if any.
    pub const fn failure_position(self) -> Option<usize> {
        match self {
            Self::Success => None,
            Self::Failure { position } => Some(position),
        }
    }
}

/// Renders the external textual contract: the literal `Success`, or the
/// bare decimal failure position with no decoration.
impl std::fmt::Display for Verdict {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => f.write_str("Success"),
            Self::Failure { position } => write!(f, "{position}"),
        }
    }
}

/// Validate the bracket structure of a single line.
///
/// Positions are 1-based and count Unicode scalar values left to right.
/// Non-bracket characters advance the position counter and nothing else.
/// The function is pure and total: every input, including the empty
/// string, yields a well-defined [`Verdict`].
pub fn validate(text: &str) -> Verdict {
    let mut pending: Vec<OpenBracket> = Vec::new();

    for (index, c) in text.chars().enumerate() {
        let position = index + 1;
        match Glyph::classify(c) {
            Some(Glyph::Open(kind)) => pending.push(OpenBracket { kind, position }),
            Some(Glyph::Close(kind)) => match pending.pop() {
                // An orphan closer, or a family mismatch, fails at the
                // closer itself rather than the stale opener.
                None => return Verdict::Failure { position },
                Some(open) if open.kind != kind => return Verdict::Failure { position },
                Some(_) => {}
            },
            None => {}
        }
    }

    // Stranded openers: report the earliest (bottom of the stack), not the
    // most recently opened.
    match pending.first() {
        Some(open) => Verdict::Failure {
            position: open.position,
        },
        None => Verdict::Success,
    }
}
