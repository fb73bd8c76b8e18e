//! The `list` command: show every supported error code.

use tse_diagnostic::TsDiagnostic;

use super::catalog_or_exit;

/// Print all supported codes with their catalog titles, ascending.
pub fn list_codes() {
    let catalog = catalog_or_exit();
    for code in catalog.supported_codes() {
        let explanation = catalog.explain(&TsDiagnostic::new(code, String::new()));
        println!("TS{code:<6} {}", explanation.title);
    }
}
