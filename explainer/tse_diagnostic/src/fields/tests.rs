use super::*;

#[test]
fn test_first_quoted() {
    assert_eq!(first_quoted("Cannot find name 'foo'."), Some("foo"));
    assert_eq!(first_quoted("'a' and 'b'"), Some("a"));
    assert_eq!(first_quoted("no quotes here"), None);
}

#[test]
fn test_first_quoted_skips_empty_quotes() {
    // '' re-pairs with the next quote, the way the original pattern did.
    assert_eq!(first_quoted("empty '' then 'x'"), Some(" then "));
}

#[test]
fn test_quoted_after() {
    let msg = "Type 'string' is not assignable to type 'number'.";
    assert_eq!(quoted_after(msg, "Type "), Some("string"));
    assert_eq!(quoted_after(msg, "type "), Some("number"));
    assert_eq!(quoted_after(msg, "Argument of type "), None);
}

#[test]
fn test_quoted_after_requires_adjacent_quote() {
    // Label present but not followed directly by a quoted span.
    assert_eq!(quoted_after("Type mismatch in 'foo'", "Type "), None);
}

#[test]
fn test_quoted_after_last() {
    let msg = "Property 'name' is missing in type 'A' but required in type 'B'.";
    assert_eq!(quoted_after_last(msg, "type "), Some("B"));
    assert_eq!(quoted_after(msg, "type "), Some("A"));
}

#[test]
fn test_number_after() {
    assert_eq!(
        number_after("Expected 2 arguments, but got 0.", "Expected "),
        Some(2)
    );
    assert_eq!(
        number_after("Tuple type has no element at index 4.", "index "),
        Some(4)
    );
    assert_eq!(number_after("Expected arguments", "Expected "), None);
}

#[test]
fn test_placeholder_fallbacks() {
    assert_eq!(first_quoted_or("nothing here", "unknown"), "unknown");
    assert_eq!(
        quoted_after_or("no label", "Type ", "placeholder"),
        "placeholder"
    );
    assert_eq!(
        quoted_after_last_or("no label", "type ", "Target"),
        "Target"
    );
}

#[test]
fn test_total_on_degenerate_input() {
    // Extraction never panics, whatever the message looks like.
    for msg in ["", "'", "''", "'''", "Type '", "'unclosed", "\u{1F980} 'crab'"] {
        let _ = first_quoted(msg);
        let _ = quoted_after(msg, "Type ");
        let _ = quoted_after_last(msg, "type ");
        let _ = number_after(msg, "Expected ");
    }
    assert_eq!(first_quoted("\u{1F980} 'crab'"), Some("crab"));
}
