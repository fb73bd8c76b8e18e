//! JSON Emitter
//!
//! Machine-readable explanation output. JSON is built manually with
//! [`escape_json`] to avoid a serde dependency.

use std::fmt::Write;

use tse_diagnostic::Explanation;

use crate::{escape_json, trailing_comma, ExplanationEmitter};

/// JSON emitter for machine-readable output.
#[derive(Clone, Copy, Debug, Default)]
pub struct JsonEmitter;

impl JsonEmitter {
    pub fn new() -> Self {
        JsonEmitter
    }
}

impl ExplanationEmitter for JsonEmitter {
    fn render(&self, explanation: &Explanation) -> String {
        let mut out = String::with_capacity(256);
        out.push_str("{\n");
        let _ = writeln!(out, "  \"title\": \"{}\",", escape_json(&explanation.title));
        let _ = writeln!(
            out,
            "  \"description\": \"{}\",",
            escape_json(&explanation.description)
        );
        out.push_str("  \"solutions\": [\n");
        for (i, solution) in explanation.solutions.iter().enumerate() {
            let comma = trailing_comma(i, explanation.solutions.len());
            out.push_str("    {\n");
            let _ = writeln!(out, "      \"title\": \"{}\",", escape_json(&solution.title));
            let _ = writeln!(out, "      \"code\": \"{}\"", escape_json(&solution.code));
            let _ = writeln!(out, "    }}{comma}");
        }
        out.push_str("  ]\n}\n");
        out
    }
}

#[cfg(test)]
mod tests;
