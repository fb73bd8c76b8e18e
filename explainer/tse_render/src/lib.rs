//! Explanation Renderers
//!
//! Provides different output formats for explanations:
//! - HTML: Self-contained document with an inline stylesheet
//! - Terminal: Colored, human-readable output
//! - JSON: Machine-readable output for tooling
//!
//! Each renderer implements the [`ExplanationEmitter`] trait. Renderers are
//! stateless apart from their configuration; rendering never fails, and the
//! streaming path only surfaces the writer's own I/O errors.

mod html;
mod json;
mod terminal;

pub use html::HtmlEmitter;
pub use json::JsonEmitter;
pub use terminal::{ColorMode, TerminalEmitter};

use std::fmt::Write as _;
use std::io;

use tse_diagnostic::Explanation;

/// Trait for rendering explanations in various formats.
pub trait ExplanationEmitter {
    /// Render an explanation to a complete output document.
    fn render(&self, explanation: &Explanation) -> String;

    /// Stream the rendered document to a writer.
    fn emit(&self, writer: &mut dyn io::Write, explanation: &Explanation) -> io::Result<()> {
        writer.write_all(self.render(explanation).as_bytes())
    }
}

/// Returns a trailing comma for JSON list serialization.
///
/// Returns `","` when `index` is not the last element, `""` otherwise.
pub(crate) fn trailing_comma(index: usize, total: usize) -> &'static str {
    if index + 1 < total {
        ","
    } else {
        ""
    }
}

/// Escape a string for JSON output.
pub(crate) fn escape_json(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '"' => result.push_str("\\\""),
            '\\' => result.push_str("\\\\"),
            '\n' => result.push_str("\\n"),
            '\r' => result.push_str("\\r"),
            '\t' => result.push_str("\\t"),
            c if c.is_control() => {
                let _ = write!(result, "\\u{:04x}", c as u32);
            }
            c => result.push(c),
        }
    }
    result
}

/// Escape a string for interpolation into HTML text or attribute content.
///
/// Compiler messages and example snippets routinely contain `<`, `>`, and
/// quotes; none of it may ever become live markup.
pub(crate) fn escape_html(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            '"' => result.push_str("&quot;"),
            '\'' => result.push_str("&#39;"),
            c => result.push(c),
        }
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_json() {
        assert_eq!(escape_json("hello"), "hello");
        assert_eq!(escape_json("\"quoted\""), "\\\"quoted\\\"");
        assert_eq!(escape_json("line1\nline2"), "line1\\nline2");
        assert_eq!(escape_json("path\\file"), "path\\\\file");
        assert_eq!(escape_json("tab\there"), "tab\\there");
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("plain"), "plain");
        assert_eq!(escape_html("a < b && c > d"), "a &lt; b &amp;&amp; c &gt; d");
        assert_eq!(escape_html("'single' \"double\""), "&#39;single&#39; &quot;double&quot;");
    }

    #[test]
    fn test_trailing_comma() {
        assert_eq!(trailing_comma(0, 2), ",");
        assert_eq!(trailing_comma(1, 2), "");
        assert_eq!(trailing_comma(0, 1), "");
    }
}
