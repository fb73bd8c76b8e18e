//! Command handlers for the `tse` CLI.
//!
//! Each submodule implements a specific CLI command (explain, at, list).
//! Shared utilities like `read_file` and the render-option parsing live
//! here in the module root.

use std::io::IsTerminal;
use std::path::{Path, PathBuf};

use tse_catalog::Catalog;
use tse_diagnostic::Explanation;
use tse_render::{ColorMode, ExplanationEmitter, HtmlEmitter, JsonEmitter, TerminalEmitter};

mod at;
mod explain;
mod list;

pub use at::explain_at;
pub use explain::explain_code;
pub use list::list_codes;

/// Output format for a rendered explanation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Text,
    Html,
    Json,
}

/// Rendering options shared by the document-producing commands.
#[derive(Debug, Default)]
pub(crate) struct RenderOptions {
    pub format: OutputFormat,
    pub color: ColorMode,
    pub output: Option<PathBuf>,
}

/// Parse render options out of trailing arguments, returning the options
/// and the remaining positional arguments in order.
///
/// Handles `-o` specially (needs lookahead).
pub(crate) fn parse_render_options(
    args: &[String],
) -> Result<(RenderOptions, Vec<String>), String> {
    let mut options = RenderOptions::default();
    let mut positional = Vec::new();

    let mut i = 0;
    while i < args.len() {
        let arg = &args[i];
        if let Some(format) = arg.strip_prefix("--format=") {
            options.format = match format {
                "text" => OutputFormat::Text,
                "html" => OutputFormat::Html,
                "json" => OutputFormat::Json,
                other => {
                    return Err(format!(
                        "unknown format '{other}' (valid formats: text, html, json)"
                    ));
                }
            };
        } else if let Some(mode) = arg.strip_prefix("--color=") {
            options.color = match mode {
                "auto" => ColorMode::Auto,
                "always" => ColorMode::Always,
                "never" => ColorMode::Never,
                other => {
                    return Err(format!(
                        "unknown color mode '{other}' (valid modes: auto, always, never)"
                    ));
                }
            };
        } else if arg == "-o" {
            let Some(path) = args.get(i + 1) else {
                return Err("'-o' requires a path".to_string());
            };
            options.output = Some(PathBuf::from(path));
            i += 2;
            continue;
        } else {
            positional.push(arg.clone());
        }
        i += 1;
    }

    Ok((options, positional))
}

/// [`parse_render_options`] with CLI-style error reporting.
pub(crate) fn render_options_or_exit(args: &[String]) -> (RenderOptions, Vec<String>) {
    match parse_render_options(args) {
        Ok(parsed) => parsed,
        Err(message) => {
            eprintln!("error: {message}");
            std::process::exit(1);
        }
    }
}

/// Render an explanation with the emitter the options select.
pub(crate) fn render_document(options: &RenderOptions, explanation: &Explanation) -> String {
    match options.format {
        OutputFormat::Text => {
            // Color auto-detection is against the real destination: a file
            // never gets ANSI codes under Auto.
            let is_tty = options.output.is_none() && std::io::stdout().is_terminal();
            TerminalEmitter::with_color_mode(options.color, is_tty).render(explanation)
        }
        OutputFormat::Html => HtmlEmitter::new().render(explanation),
        OutputFormat::Json => JsonEmitter::new().render(explanation),
    }
}

/// Write the document to the chosen destination.
pub(crate) fn write_document(output: Option<&Path>, document: &str) {
    match output {
        Some(path) => {
            if let Err(e) = std::fs::write(path, document) {
                eprintln!("error writing '{}': {e}", path.display());
                std::process::exit(1);
            }
        }
        None => print!("{document}"),
    }
}

/// Build the catalog, exiting on a table defect.
///
/// `Catalog::new` only fails when the static tables are inconsistent,
/// which construction tests catch before release.
pub(crate) fn catalog_or_exit() -> Catalog {
    match Catalog::new() {
        Ok(catalog) => catalog,
        Err(e) => {
            eprintln!("internal error: {e}");
            std::process::exit(1);
        }
    }
}

/// Read a file to string with friendly error messages.
pub(crate) fn read_file(path: &str) -> String {
    match std::fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) => {
            let msg = match e.kind() {
                std::io::ErrorKind::NotFound => format!("cannot find file '{path}'"),
                std::io::ErrorKind::PermissionDenied => {
                    format!("permission denied reading '{path}'")
                }
                std::io::ErrorKind::InvalidData => {
                    format!("'{path}' contains invalid UTF-8 data")
                }
                _ => format!("error reading '{path}': {e}"),
            };
            eprintln!("{msg}");
            std::process::exit(1);
        }
    }
}

#[cfg(test)]
#[expect(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]
mod tests;
