//! Bracket families and glyph classification.
//!
//! [`BracketKind`] owns the opener/closer glyph mapping for the three
//! bracket families. Scanning code classifies characters through
//! [`Glyph::classify`] and never compares bracket literals in control flow,
//! so extending to another family touches only this module.

/// A family of paired bracket glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BracketKind {
    /// `(` and `)`.
    Round,
    /// `[` and `]`.
    Square,
    /// `{` and `}`.
    Curly,
}

impl BracketKind {
    /// All bracket families, in glyph-table order.
    pub const ALL: [Self; 3] = [Self::Round, Self::Square, Self::Curly];

    /// The opening glyph of this family.
    pub const fn opener(self) -> char {
        match self {
            Self::Round => '(',
            Self::Square => '[',
            Self::Curly => '{',
        }
    }

    /// The closing glyph of this family.
    pub const fn closer(self) -> char {
        match self {
            Self::Round => ')',
            Self::Square => ']',
            Self::Curly => '}',
        }
    }

    /// The family that `c` opens, if any.
    pub const fn from_opener(c: char) -> Option<Self> {
        match c {
            '(' => Some(Self::Round),
            '[' => Some(Self::Square),
            '{' => Some(Self::Curly),
            _ => None,
        }
    }

    /// The family that `c` closes, if any.
    pub const fn from_closer(c: char) -> Option<Self> {
        match c {
            ')' => Some(Self::Round),
            ']' => Some(Self::Square),
            '}' => Some(Self::Curly),
            _ => None,
        }
    }
}

/// Classification of a scanned character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    /// An opening bracket of the given family.
    Open(BracketKind),
    /// A closing bracket of the given family.
    Close(BracketKind),
}

impl Glyph {
    /// Classify `c` as a bracket glyph, or `None` for any other character.
    pub const fn classify(c: char) -> Option<Self> {
        if let Some(kind) = BracketKind::from_opener(c) {
            return Some(Self::Open(kind));
        }
        if let Some(kind) = BracketKind::from_closer(c) {
            return Some(Self::Close(kind));
        }
        None
    }
}
