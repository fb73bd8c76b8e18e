//! Static explanation catalog for TypeScript diagnostics.
//!
//! Each supported error code maps to exactly one pure generator function
//! that turns the raw compiler message into an [`Explanation`] — a title,
//! a description, and literal example-code solutions. Codes the catalog
//! does not know fall back to echoing the message verbatim.
//!
//! # Adding a new code
//!
//! 1. Write a generator in `syntax.rs` or `types.rs`
//! 2. Add a `(code, generator)` entry to that module's `GENERATORS` table
//! 3. `Catalog::new()` rejects duplicate codes, so a collision fails the
//!    construction test rather than silently shadowing an entry
//!
//! [`Explanation`]: tse_diagnostic::Explanation

mod registry;
mod syntax;
mod types;

pub use registry::{Catalog, CatalogError, Generator};
