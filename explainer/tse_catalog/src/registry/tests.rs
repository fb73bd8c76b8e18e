use pretty_assertions::assert_eq;

use tse_diagnostic::{ErrorCategory, Explanation, TsDiagnostic};

use super::{Catalog, CatalogError, Generator};

fn catalog() -> Catalog {
    Catalog::new().unwrap()
}

fn stub(_message: &str) -> Explanation {
    Explanation::new("stub").with_description("stub")
}

#[test]
fn construction_succeeds_on_the_static_tables() {
    // Also proves the tables hold no duplicates or misfiled codes.
    assert!(Catalog::new().is_ok());
}

#[test]
fn duplicate_registration_is_rejected() {
    let entries: &[(u32, Generator)] = &[(1005, stub), (1005, stub)];
    let result = Catalog::from_tables(&[(ErrorCategory::Syntax, entries)]);
    assert_eq!(result.err(), Some(CatalogError::DuplicateCode(1005)));
}

#[test]
fn misfiled_code_is_rejected() {
    // A type-range code registered in the syntax table.
    let entries: &[(u32, Generator)] = &[(2304, stub)];
    let result = Catalog::from_tables(&[(ErrorCategory::Syntax, entries)]);
    assert_eq!(
        result.err(),
        Some(CatalogError::OutOfRange {
            code: 2304,
            category: ErrorCategory::Syntax,
        })
    );
}

#[test]
fn known_code_gets_its_generator() {
    let diagnostic = TsDiagnostic::new(2304, "Cannot find name 'foo'.");
    let explanation = catalog().explain(&diagnostic);
    assert!(explanation.title.contains("foo"));
    assert!(explanation.has_solutions());
}

#[test]
fn unknown_code_falls_back_to_the_verbatim_message() {
    let diagnostic = TsDiagnostic::new(9999, "Something inscrutable happened.");
    let explanation = catalog().explain(&diagnostic);
    assert_eq!(explanation.title, "TypeScript error");
    assert_eq!(explanation.description, "Something inscrutable happened.");
    assert!(!explanation.has_solutions());
}

#[test]
fn unregistered_code_in_a_known_range_gets_the_range_title() {
    let diagnostic = TsDiagnostic::new(1999, "An unusual syntax problem.");
    let explanation = catalog().explain(&diagnostic);
    assert_eq!(explanation.title, "Syntax error");
    assert_eq!(explanation.description, "An unusual syntax problem.");

    let diagnostic = TsDiagnostic::new(2999, "An unusual type problem.");
    let explanation = catalog().explain(&diagnostic);
    assert_eq!(explanation.title, "Type error");
}

#[test]
fn fallback_with_empty_message_still_describes_something() {
    let diagnostic = TsDiagnostic::new(9999, "");
    let explanation = catalog().explain(&diagnostic);
    assert_eq!(explanation.description, "TS9999: no message provided");
}

#[test]
fn every_supported_code_explains_completely() {
    let catalog = catalog();
    for code in catalog.supported_codes() {
        let diagnostic = TsDiagnostic::new(code, "");
        let explanation = catalog.explain(&diagnostic);
        assert!(!explanation.title.is_empty(), "TS{code}: empty title");
        assert!(
            !explanation.description.is_empty(),
            "TS{code}: empty description"
        );
        assert!(explanation.has_solutions(), "TS{code}: no solutions");
    }
}

#[test]
fn has_entry_tracks_registration() {
    let catalog = catalog();
    assert!(catalog.has_entry(2304));
    assert!(catalog.has_entry(1005));
    assert!(!catalog.has_entry(9999));
    assert!(!catalog.has_entry(1999));
}

#[test]
fn supported_codes_are_sorted_and_unique() {
    let codes = catalog().supported_codes();
    assert!(codes.windows(2).all(|pair| pair[0] < pair[1]));
    assert!(codes.contains(&1005));
    assert!(codes.contains(&2741));
}
