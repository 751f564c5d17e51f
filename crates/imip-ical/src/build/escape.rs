//! Text escaping for iCalendar serialization (RFC 5545 §3.3.11).

/// Escapes a TEXT value: backslash, semicolon, comma, and newline.
#[must_use]
pub fn escape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ';' => out.push_str("\\;"),
            ',' => out.push_str("\\,"),
            '\n' => out.push_str("\\n"),
            '\r' => {}
            _ => out.push(c),
        }
    }
    out
}

/// Escapes a parameter value, quoting it when it contains characters
/// that would otherwise terminate the parameter (RFC 5545 §3.2).
#[must_use]
pub fn escape_param_value(value: &str) -> String {
    if value.contains([':', ';', ',']) {
        // Double quotes cannot be represented inside quoted values; drop them
        let cleaned: String = value.chars().filter(|c| *c != '"').collect();
        format!("\"{cleaned}\"")
    } else {
        value.to_string()
    }
}
