//! Code-to-generator registry with range dispatch and a verbatim fallback.
//!
//! Classification is two-step: the code's thousand-range picks a category
//! table, then an exact-code lookup picks the generator. Anything that
//! falls through either step gets the fallback explanation, which echoes
//! the compiler's message and suggests nothing.

use rustc_hash::FxHashMap;

use tse_diagnostic::{ErrorCategory, Explanation, TsDiagnostic};

use crate::{syntax, types};

/// A per-code explanation generator: pure function from the raw compiler
/// message to an [`Explanation`]. All prose other than extracted fields is
/// literal.
pub type Generator = fn(&str) -> Explanation;

/// Errors detected while building the catalog from its static tables.
///
/// These indicate defects in the tables themselves, not bad user input,
/// so they surface at construction time and are covered by tests.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The same code appears in a table more than once.
    #[error("error code TS{0} is registered more than once")]
    DuplicateCode(u32),
    /// A table entry's code falls outside its category's numeric range.
    #[error("error code TS{code} does not belong to the {category} range")]
    OutOfRange {
        code: u32,
        category: ErrorCategory,
    },
}

/// The explanation catalog: immutable after construction, shareable
/// across invocations.
pub struct Catalog {
    /// One exact-code index per category, in range-dispatch order.
    tables: Vec<(ErrorCategory, FxHashMap<u32, Generator>)>,
}

impl Catalog {
    /// Build the catalog from the static generator tables.
    ///
    /// Rejects duplicate registrations and entries filed under the wrong
    /// range — exactly one generator per code, checked once here.
    pub fn new() -> Result<Self, CatalogError> {
        Self::from_tables(&[
            (ErrorCategory::Syntax, syntax::GENERATORS),
            (ErrorCategory::Type, types::GENERATORS),
        ])
    }

    /// Build a catalog from explicit per-category tables.
    fn from_tables(sources: &[(ErrorCategory, &[(u32, Generator)])]) -> Result<Self, CatalogError> {
        let mut tables = Vec::with_capacity(sources.len());
        for &(category, entries) in sources {
            let mut index = FxHashMap::default();
            for &(code, generator) in entries {
                if ErrorCategory::of(code) != Some(category) {
                    return Err(CatalogError::OutOfRange { code, category });
                }
                if index.insert(code, generator).is_some() {
                    return Err(CatalogError::DuplicateCode(code));
                }
            }
            tables.push((category, index));
        }

        Ok(Catalog { tables })
    }

    /// Produce the explanation for a diagnostic.
    ///
    /// Never fails: unknown categories and unregistered codes get the
    /// fallback, whose description is the input message verbatim and whose
    /// solution list is empty.
    pub fn explain(&self, diagnostic: &TsDiagnostic) -> Explanation {
        let generator = ErrorCategory::of(diagnostic.code)
            .and_then(|category| self.table(category))
            .and_then(|index| index.get(&diagnostic.code));

        match generator {
            Some(generator) => generator(&diagnostic.message),
            None => Self::fallback(diagnostic),
        }
    }

    /// Whether a generator is registered for the code.
    pub fn has_entry(&self, code: u32) -> bool {
        ErrorCategory::of(code)
            .and_then(|category| self.table(category))
            .is_some_and(|index| index.contains_key(&code))
    }

    /// All registered codes, ascending.
    pub fn supported_codes(&self) -> Vec<u32> {
        let mut codes: Vec<u32> = self
            .tables
            .iter()
            .flat_map(|(_, index)| index.keys().copied())
            .collect();
        codes.sort_unstable();
        codes
    }

    fn table(&self, category: ErrorCategory) -> Option<&FxHashMap<u32, Generator>> {
        self.tables
            .iter()
            .find(|&&(table_category, _)| table_category == category)
            .map(|(_, index)| index)
    }

    /// Generic passthrough for codes without a generator.
    fn fallback(diagnostic: &TsDiagnostic) -> Explanation {
        let title = diagnostic
            .category()
            .map_or("TypeScript error", ErrorCategory::fallback_title);
        let description = if diagnostic.message.is_empty() {
            // The compiler gave us nothing to echo.
            format!("TS{}: no message provided", diagnostic.code)
        } else {
            diagnostic.message.clone()
        };
        Explanation::new(title).with_description(description)
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
