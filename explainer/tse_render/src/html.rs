//! HTML Emitter
//!
//! Renders an explanation as a self-contained HTML document with an inline
//! stylesheet: red-accent title, green-accent solution blocks, dark code
//! panes. Every interpolated string passes through [`escape_html`] first.

use std::fmt::Write;

use tse_diagnostic::Explanation;

use crate::{escape_html, ExplanationEmitter};

const STYLESHEET: &str = "\
body {
    padding: 15px;
    font-family: system-ui;
}
.error-title {
    color: #f44336;
    font-size: 1.2em;
    margin-bottom: 15px;
}
.solution {
    margin: 10px 0;
    padding: 10px;
    background: #f5f5f5;
    border-left: 4px solid #4caf50;
}
pre {
    background: #2d2d2d;
    color: #ccc;
    padding: 10px;
    border-radius: 4px;
}";

/// HTML document emitter.
#[derive(Clone, Copy, Debug, Default)]
pub struct HtmlEmitter;

impl HtmlEmitter {
    pub fn new() -> Self {
        HtmlEmitter
    }
}

impl ExplanationEmitter for HtmlEmitter {
    fn render(&self, explanation: &Explanation) -> String {
        let mut out = String::with_capacity(1024);
        out.push_str("<!DOCTYPE html>\n<html>\n<head>\n<style>\n");
        out.push_str(STYLESHEET);
        out.push_str("\n</style>\n</head>\n<body>\n");

        let _ = writeln!(
            out,
            "<div class=\"error-title\">{}</div>",
            escape_html(&explanation.title)
        );
        let _ = writeln!(
            out,
            "<div class=\"explanation\">{}</div>",
            escape_html(&explanation.description)
        );

        if explanation.has_solutions() {
            out.push_str("<h3>Solutions:</h3>\n");
            for solution in &explanation.solutions {
                out.push_str("<div class=\"solution\">\n");
                let _ = writeln!(out, "<h4>{}</h4>", escape_html(&solution.title));
                let _ = writeln!(out, "<pre><code>{}</code></pre>", escape_html(&solution.code));
                out.push_str("</div>\n");
            }
        }

        out.push_str("</body>\n</html>\n");
        out
    }
}

#[cfg(test)]
mod tests;
