//! The `explain` command: explain a TypeScript error code.

use tse_diagnostic::{parse_code, TsDiagnostic};

use super::{catalog_or_exit, render_document, render_options_or_exit, write_document};

/// Explain an error code, optionally against the compiler message that
/// carried it. Without a message the generators fall back to placeholders.
pub fn explain_code(code_str: &str, rest: &[String]) {
    let Some(code) = parse_code(code_str) else {
        eprintln!("Unknown error code: {code_str}");
        eprintln!();
        eprintln!("Codes are numeric with an optional TS prefix.");
        eprintln!("Examples: TS2304, 2304, TS1005");
        std::process::exit(1);
    };

    let (options, positional) = render_options_or_exit(rest);
    let message = positional.first().cloned().unwrap_or_default();

    let catalog = catalog_or_exit();
    let diagnostic = TsDiagnostic::new(code, message);
    tracing::debug!(
        code = diagnostic.code,
        registered = catalog.has_entry(diagnostic.code),
        "explaining diagnostic"
    );

    let explanation = catalog.explain(&diagnostic);
    let document = render_document(&options, &explanation);
    write_document(options.output.as_deref(), &document);
}
