//! Numeric-range classification of TypeScript error codes.
//!
//! `tsc` assigns diagnostics to fixed, non-overlapping thousand-ranges:
//! 1000–1999 are syntax/grammar errors, 2000–2999 are type-checker errors.
//! The ranges are known at build time, so classification is an ordered
//! lookup over a static table rather than anything computed.

use std::fmt;
use std::ops::Range;

/// The category a diagnostic code falls in.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ErrorCategory {
    /// Syntax and grammar errors (TS1xxx).
    Syntax,
    /// Type-checker errors (TS2xxx).
    Type,
}

/// Ordered range table. Ranges are disjoint; first match wins.
const RANGES: &[(Range<u32>, ErrorCategory)] = &[
    (1000..2000, ErrorCategory::Syntax),
    (2000..3000, ErrorCategory::Type),
];

impl ErrorCategory {
    /// Classify a numeric code, or `None` for codes outside every range.
    pub fn of(code: u32) -> Option<Self> {
        RANGES
            .iter()
            .find(|(range, _)| range.contains(&code))
            .map(|&(_, category)| category)
    }

    /// Title used for fallback explanations in this category.
    pub fn fallback_title(self) -> &'static str {
        match self {
            ErrorCategory::Syntax => "Syntax error",
            ErrorCategory::Type => "Type error",
        }
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorCategory::Syntax => write!(f, "syntax"),
            ErrorCategory::Type => write!(f, "type"),
        }
    }
}

/// Parse an error code string like `"TS2304"`, `"ts2304"`, or `"2304"`.
///
/// Case-insensitive on the prefix. Returns `None` for anything that is not
/// a `TS`-prefixed or bare digit run.
pub fn parse_code(s: &str) -> Option<u32> {
    let digits = s
        .strip_prefix("TS")
        .or_else(|| s.strip_prefix("ts"))
        .or_else(|| s.strip_prefix("Ts"))
        .unwrap_or(s);
    digits.parse().ok()
}

#[cfg(test)]
mod tests;
