//! Diagnostic model for the tse explainer.
//!
//! Defines the read-only [`TsDiagnostic`] input record, the [`Explanation`]
//! and [`Solution`] value objects produced for it, the numeric-range
//! classification of TypeScript error codes, and best-effort extraction of
//! quoted tokens from free-text compiler messages.

mod diagnostic;
mod error_code;
pub mod fields;

pub use diagnostic::{Explanation, Solution, TsDiagnostic};
pub use error_code::{parse_code, ErrorCategory};
