//! The `at` command: explain the diagnostic at a position in a `tsc` log.

use crate::tsc_log;

use super::{catalog_or_exit, read_file, render_document, render_options_or_exit, write_document};

/// Explain the first diagnostic reported at `<line>:<col>` in a saved
/// `tsc` log. No diagnostic at that position is informational, not an
/// error: a notice is printed and the exit status stays 0.
pub fn explain_at(log_path: &str, position: &str, rest: &[String]) {
    let (line, col) = match tsc_log::parse_position(position) {
        Ok(position) => position,
        Err(e) => {
            eprintln!("{e}");
            eprintln!("Usage: tse at <log-file> <line>:<col>");
            std::process::exit(1);
        }
    };

    let content = read_file(log_path);
    let diagnostics = tsc_log::parse_log(&content);
    tracing::debug!(
        count = diagnostics.len(),
        line,
        col,
        "parsed tsc log, searching position"
    );

    let Some(found) = tsc_log::find_at(&diagnostics, line, col) else {
        println!("no TypeScript error at {line}:{col}");
        return;
    };

    let (options, _) = render_options_or_exit(rest);
    let catalog = catalog_or_exit();
    let explanation = catalog.explain(&found.diagnostic);
    let document = render_document(&options, &explanation);
    write_document(options.output.as_deref(), &document);
}
