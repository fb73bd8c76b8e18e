use super::*;

#[test]
fn test_syntax_range() {
    assert_eq!(ErrorCategory::of(1000), Some(ErrorCategory::Syntax));
    assert_eq!(ErrorCategory::of(1005), Some(ErrorCategory::Syntax));
    assert_eq!(ErrorCategory::of(1999), Some(ErrorCategory::Syntax));
}

#[test]
fn test_type_range() {
    assert_eq!(ErrorCategory::of(2000), Some(ErrorCategory::Type));
    assert_eq!(ErrorCategory::of(2304), Some(ErrorCategory::Type));
    assert_eq!(ErrorCategory::of(2999), Some(ErrorCategory::Type));
}

#[test]
fn test_unmapped_ranges() {
    assert_eq!(ErrorCategory::of(0), None);
    assert_eq!(ErrorCategory::of(999), None);
    assert_eq!(ErrorCategory::of(3000), None);
    assert_eq!(ErrorCategory::of(9999), None);
}

#[test]
fn test_ranges_are_disjoint() {
    // Every code maps to at most one category.
    for code in [1000, 1999, 2000, 2999] {
        let matches = RANGES
            .iter()
            .filter(|(range, _)| range.contains(&code))
            .count();
        assert_eq!(matches, 1, "code {code} matched {matches} ranges");
    }
}

#[test]
fn test_category_display() {
    assert_eq!(ErrorCategory::Syntax.to_string(), "syntax");
    assert_eq!(ErrorCategory::Type.to_string(), "type");
}

#[test]
fn test_parse_code() {
    assert_eq!(parse_code("TS2304"), Some(2304));
    assert_eq!(parse_code("ts2304"), Some(2304));
    assert_eq!(parse_code("2304"), Some(2304));
    assert_eq!(parse_code("E2304"), None);
    assert_eq!(parse_code("TS"), None);
    assert_eq!(parse_code(""), None);
}
