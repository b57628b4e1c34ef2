//! SQL identifier rendering.
//!
//! Bare identifiers (matching `[A-Za-z_][A-Za-z0-9_$]*`) are emitted as-is;
//! anything else is double-quoted with `"` escaped as `""`.

use std::borrow::Cow;

/// Check whether a name can be emitted without quoting.
pub fn is_bare_ident(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c == '$' || c.is_ascii_alphanumeric())
}

/// Render a single identifier, quoting only when required.
pub fn quote_ident(name: &str) -> Cow<'_, str> {
    if is_bare_ident(name) {
        return Cow::Borrowed(name);
    }
    let mut out = String::with_capacity(name.len() + 2);
    out.push('"');
    for ch in name.chars() {
        if ch == '"' {
            out.push('"');
        }
        out.push(ch);
    }
    out.push('"');
    Cow::Owned(out)
}

/// Render `schema.name` with per-part quoting.
pub fn qualify(schema: &str, name: &str) -> String {
    format!("{}.{}", quote_ident(schema), quote_ident(name))
}
