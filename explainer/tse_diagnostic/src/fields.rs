//! Best-effort extraction of quoted tokens from compiler messages.
//!
//! `tsc` quotes the identifiers and type names it talks about in single
//! quotes: `Cannot find name 'foo'.`, `Type 'string' is not assignable to
//! type 'number'.` These helpers pull those spans out by plain string
//! scanning. Messages are free text whose wording can change between
//! compiler releases, so a miss is a normal outcome, never an error:
//! every function here is total, and generators substitute a documented
//! placeholder when a field is absent.

/// The quoted span at the start of `s`, if `s` begins with `'…'`.
///
/// Empty quotes (`''`) do not count as a span.
fn leading_quoted(s: &str) -> Option<&str> {
    let rest = s.strip_prefix('\'')?;
    let end = rest.find('\'')?;
    if end == 0 {
        return None;
    }
    Some(&rest[..end])
}

/// The first non-empty `'…'` span anywhere in the message.
pub fn first_quoted(message: &str) -> Option<&str> {
    message
        .match_indices('\'')
        .find_map(|(i, _)| leading_quoted(&message[i..]))
}

/// The `'…'` span immediately following the first occurrence of `label`.
///
/// The label is the literal prose before the opening quote, including any
/// trailing space: `quoted_after(m, "Argument of type ")`.
pub fn quoted_after<'a>(message: &'a str, label: &str) -> Option<&'a str> {
    message
        .match_indices(label)
        .find_map(|(i, _)| leading_quoted(&message[i + label.len()..]))
}

/// The `'…'` span following the *last* occurrence of `label`.
///
/// Used where the interesting token is the final one of several with the
/// same label, e.g. the target type in
/// `Property 'x' is missing in type 'A' but required in type 'B'.`
pub fn quoted_after_last<'a>(message: &'a str, label: &str) -> Option<&'a str> {
    message
        .rmatch_indices(label)
        .find_map(|(i, _)| leading_quoted(&message[i + label.len()..]))
}

/// The digit run immediately following the first occurrence of `label`,
/// e.g. `number_after("Expected 2 arguments…", "Expected ")`.
pub fn number_after(message: &str, label: &str) -> Option<u32> {
    message.match_indices(label).find_map(|(i, _)| {
        let rest = &message[i + label.len()..];
        let end = rest
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(rest.len());
        rest[..end].parse().ok()
    })
}

/// [`first_quoted`] with a placeholder for the miss case.
pub fn first_quoted_or<'a>(message: &'a str, placeholder: &'a str) -> &'a str {
    first_quoted(message).unwrap_or(placeholder)
}

/// [`quoted_after`] with a placeholder for the miss case.
pub fn quoted_after_or<'a>(message: &'a str, label: &str, placeholder: &'a str) -> &'a str {
    quoted_after(message, label).unwrap_or(placeholder)
}

/// [`quoted_after_last`] with a placeholder for the miss case.
pub fn quoted_after_last_or<'a>(message: &'a str, label: &str, placeholder: &'a str) -> &'a str {
    quoted_after_last(message, label).unwrap_or(placeholder)
}

#[cfg(test)]
mod tests;
