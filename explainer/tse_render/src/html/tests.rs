use pretty_assertions::assert_eq;

use tse_diagnostic::Explanation;

use super::HtmlEmitter;
use crate::ExplanationEmitter;

#[test]
fn renders_a_complete_document() {
    let explanation = Explanation::new("cannot find name 'foo'")
        .with_description("no variable named 'foo' is in scope")
        .with_fix("declare it", "let foo: number = 0;");
    let document = HtmlEmitter::new().render(&explanation);

    assert!(document.starts_with("<!DOCTYPE html>"));
    assert!(document.contains("cannot find name &#39;foo&#39;"));
    assert!(document.contains("<h3>Solutions:</h3>"));
    assert!(document.contains("<pre><code>let foo: number = 0;</code></pre>"));
    assert!(document.ends_with("</html>\n"));
}

#[test]
fn markup_in_messages_never_goes_live() {
    let explanation = Explanation::new("bad <script>alert(1)</script>")
        .with_description("a message containing <script> markup");
    let document = HtmlEmitter::new().render(&explanation);

    assert!(!document.contains("<script>"));
    assert!(document.contains("&lt;script&gt;"));
}

#[test]
fn snippets_with_generics_are_escaped() {
    let explanation = Explanation::new("generic type needs arguments")
        .with_description("supply them")
        .with_fix("annotate", "const box: Container<string> = { value: \"x\" };");
    let document = HtmlEmitter::new().render(&explanation);

    assert!(document.contains("Container&lt;string&gt;"));
    assert!(document.contains("{ value: &quot;x&quot; };"));
}

#[test]
fn no_solutions_section_when_empty() {
    let explanation = Explanation::new("TypeScript error").with_description("verbatim message");
    let document = HtmlEmitter::new().render(&explanation);

    assert!(!document.contains("<h3>"));
    assert!(!document.contains("class=\"solution\""));
}

#[test]
fn description_block_carries_the_class() {
    let explanation = Explanation::new("t").with_description("d");
    let document = HtmlEmitter::new().render(&explanation);
    assert_eq!(
        document.matches("<div class=\"explanation\">d</div>").count(),
        1
    );
}
