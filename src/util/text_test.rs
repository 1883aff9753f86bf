use super::*;

#[test]
fn plain_text_passes_through_unchanged() {
    assert_eq!(escape_html("ещё один пост"), "ещё один пост");
    assert_eq!(escape_html(""), "");
}

#[test]
fn escapes_the_minimal_entity_set() {
    assert_eq!(escape_html("&"), "&amp;");
    assert_eq!(escape_html("<"), "&lt;");
    assert_eq!(escape_html(">"), "&gt;");
    assert_eq!(escape_html("\""), "&quot;");
    assert_eq!(escape_html("'"), "&#39;");
}

#[test]
fn neutralizes_a_script_tag() {
    assert_eq!(
        escape_html("<script>alert(1)</script>"),
        "&lt;script&gt;alert(1)&lt;/script&gt;"
    );
}

#[test]
fn escapes_ampersand_before_it_can_recombine() {
    // A pre-encoded entity must come out double-escaped, not preserved.
    assert_eq!(escape_html("&lt;"), "&amp;lt;");
}

#[test]
fn escapes_attribute_breakers_inside_text() {
    assert_eq!(
        escape_html(r#"x" onmouseover="steal()"#),
        "x&quot; onmouseover=&quot;steal()"
    );
}
