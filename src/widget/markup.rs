//! Markup escaping helpers.

/// Escape text content for placement between tags.
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Escape a value for a single- or double-quoted attribute.
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
    out
}

/// A JavaScript string literal for `value`.
///
/// JSON string syntax is a subset of JS string syntax, so serde_json does
/// the quoting.
pub fn js_string(value: &str) -> String {
    serde_json::Value::from(value).to_string()
}

/// Escape a value for a single-quoted attribute. Double quotes stay literal.
fn escape_single_quoted(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// Build an `onclick` attribute invoking the bridge for `callback`.
///
/// The name is quoted as a JS string before attribute escaping, so whatever
/// the browser decodes is a valid literal. Empty names produce no attribute.
pub fn onclick_attr(callback: Option<&str>) -> String {
    match callback {
        Some(name) if !name.is_empty() => format!(
            " onclick='handleClick({})'",
            escape_single_quoted(&js_string(name))
        ),
        _ => String::new(),
    }
}
