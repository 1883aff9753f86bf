//! Minimal HTML escaping for user-supplied text.
//!
//! Card markup is assembled as strings before insertion, so every piece of
//! user text goes through here first. The entity set is the minimal one
//! that keeps text inert in both element and attribute position.

#[cfg(test)]
#[path = "text_test.rs"]
mod text_test;

/// Escape `&`, `<`, `>`, `"`, and `'` for safe insertion into markup.
pub fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
