//! Parsing for saved `tsc` output logs.
//!
//! The compiler's default format puts one diagnostic per line:
//!
//! ```text
//! src/app.ts(12,5): error TS2304: Cannot find name 'foo'.
//! ```
//!
//! Logs routinely carry other text too (summaries, watch-mode banners), so
//! lines that do not match the shape are skipped rather than rejected.

use tse_diagnostic::TsDiagnostic;

/// A diagnostic together with the source position `tsc` reported for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiagnosticAt {
    pub diagnostic: TsDiagnostic,
    pub file: String,
    pub line: u32,
    pub col: u32,
}

/// Errors from user-supplied position arguments.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LogError {
    #[error("invalid position '{0}': expected <line>:<col>, e.g. 12:5")]
    InvalidPosition(String),
}

/// Parse one log line into a positioned diagnostic.
///
/// Returns `None` for anything that is not a `file(line,col): error TSnnnn:
/// message` line.
pub fn parse_line(line: &str) -> Option<DiagnosticAt> {
    let line = line.trim();
    let (file, rest) = line.split_once('(')?;
    let (position, rest) = rest.split_once(')')?;
    let rest = rest.strip_prefix(": ")?;

    let (line_no, col) = position.split_once(',')?;
    let line_no: u32 = line_no.trim().parse().ok()?;
    let col: u32 = col.trim().parse().ok()?;

    let rest = rest.strip_prefix("error TS")?;
    let (code, message) = rest.split_once(": ")?;
    let code: u32 = code.parse().ok()?;

    Some(DiagnosticAt {
        diagnostic: TsDiagnostic::new(code, message),
        file: file.to_string(),
        line: line_no,
        col,
    })
}

/// Parse a whole log, skipping lines that are not diagnostics.
pub fn parse_log(content: &str) -> Vec<DiagnosticAt> {
    content.lines().filter_map(parse_line).collect()
}

/// The first diagnostic reported at exactly the given position.
pub fn find_at(diagnostics: &[DiagnosticAt], line: u32, col: u32) -> Option<&DiagnosticAt> {
    diagnostics
        .iter()
        .find(|entry| entry.line == line && entry.col == col)
}

/// Parse a `<line>:<col>` argument.
pub fn parse_position(arg: &str) -> Result<(u32, u32), LogError> {
    let invalid = || LogError::InvalidPosition(arg.to_string());
    let (line, col) = arg.split_once(':').ok_or_else(invalid)?;
    let line: u32 = line.trim().parse().map_err(|_| invalid())?;
    let col: u32 = col.trim().parse().map_err(|_| invalid())?;
    Ok((line, col))
}
