use pretty_assertions::assert_eq;

use tse_diagnostic::Explanation;

use super::JsonEmitter;
use crate::ExplanationEmitter;

#[test]
fn renders_the_full_object() {
    let explanation = Explanation::new("title here")
        .with_description("description here")
        .with_fix("fix one", "let x = 1;")
        .with_fix("fix two", "let y = 2;");
    let rendered = JsonEmitter::new().render(&explanation);

    assert_eq!(
        rendered,
        "{\n  \"title\": \"title here\",\n  \"description\": \"description here\",\n  \"solutions\": [\n    {\n      \"title\": \"fix one\",\n      \"code\": \"let x = 1;\"\n    },\n    {\n      \"title\": \"fix two\",\n      \"code\": \"let y = 2;\"\n    }\n  ]\n}\n"
    );
}

#[test]
fn empty_solution_list_stays_valid() {
    let explanation = Explanation::new("t").with_description("d");
    let rendered = JsonEmitter::new().render(&explanation);
    assert!(rendered.contains("\"solutions\": [\n  ]"));
}

#[test]
fn quotes_and_newlines_are_escaped() {
    let explanation = Explanation::new("say \"hi\"")
        .with_description("two\nlines")
        .with_fix("f", "const s = \"text\";");
    let rendered = JsonEmitter::new().render(&explanation);

    assert!(rendered.contains("\"title\": \"say \\\"hi\\\"\""));
    assert!(rendered.contains("\"description\": \"two\\nlines\""));
    assert!(rendered.contains("\"code\": \"const s = \\\"text\\\";\""));
}
