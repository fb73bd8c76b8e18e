//! Core value objects: the diagnostic we receive and the explanation we build.
//!
//! A [`TsDiagnostic`] is owned by the compiler/editor collaborator and only
//! read here. An [`Explanation`] is created fresh per request, carries no
//! identity, and is never mutated after it leaves the catalog.

use std::fmt;

use crate::ErrorCategory;

/// A TypeScript compiler diagnostic: a numeric code plus free-text message.
///
/// `tsc` renders these as `error TS2304: Cannot find name 'foo'.` — the
/// code is the part after `TS`, the message everything after the colon.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TsDiagnostic {
    /// Numeric error code (e.g. 2304).
    pub code: u32,
    /// The compiler's message text, verbatim.
    pub message: String,
}

impl TsDiagnostic {
    /// Create a diagnostic from a code and message.
    pub fn new(code: u32, message: impl Into<String>) -> Self {
        TsDiagnostic {
            code,
            message: message.into(),
        }
    }

    /// Classify this diagnostic's code into its numeric-range category.
    pub fn category(&self) -> Option<ErrorCategory> {
        ErrorCategory::of(self.code)
    }
}

impl fmt::Display for TsDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TS{}: {}", self.code, self.message)
    }
}

/// One suggested remediation: a short title and a literal example snippet.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct Solution {
    /// Human-readable title of the fix.
    pub title: String,
    /// Example code demonstrating the fix, shown preformatted.
    pub code: String,
}

impl Solution {
    /// Create a new solution.
    pub fn new(title: impl Into<String>, code: impl Into<String>) -> Self {
        Solution {
            title: title.into(),
            code: code.into(),
        }
    }
}

/// The structured, human-readable explanation produced for a diagnostic.
///
/// Invariant: title and description are non-empty. `solutions` is empty
/// only for the fallback produced when no generator matches the code.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
#[must_use = "explanations should be rendered, not silently dropped"]
pub struct Explanation {
    /// Short headline naming the problem.
    pub title: String,
    /// What went wrong, in a sentence or two.
    pub description: String,
    /// Suggested fixes, most likely first.
    pub solutions: Vec<Solution>,
}

impl Explanation {
    /// Create an explanation with the given title and an empty body.
    pub fn new(title: impl Into<String>) -> Self {
        Explanation {
            title: title.into(),
            description: String::new(),
            solutions: Vec::new(),
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Append a solution.
    pub fn with_solution(mut self, solution: Solution) -> Self {
        self.solutions.push(solution);
        self
    }

    /// Append a solution from its parts.
    pub fn with_fix(mut self, title: impl Into<String>, code: impl Into<String>) -> Self {
        self.solutions.push(Solution::new(title, code));
        self
    }

    /// Whether this explanation carries any suggested fixes.
    pub fn has_solutions(&self) -> bool {
        !self.solutions.is_empty()
    }
}

impl fmt::Display for Explanation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.title, self.description)?;
        for solution in &self.solutions {
            write!(f, "\n  = fix: {}", solution.title)?;
        }
        Ok(())
    }
}
