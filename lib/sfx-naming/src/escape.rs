/*
 * SPDX-License-Identifier: Apache-2.0
 */

use std::borrow::Cow;
use std::fmt::Write;

fn needs_escape(c: char) -> bool {
    matches!(c, '"' | '\\') || c < '\u{20}'
}

/// Escape a string for safe embedding in a JSON document.
///
/// Double quotes, backslashes and C0 control characters are escaped,
/// everything else passes through unchanged. Returns the input borrowed
/// if no escaping is needed.
pub fn escape_json(s: &str) -> Cow<'_, str> {
    let Some(offset) = s.find(needs_escape) else {
        return Cow::Borrowed(s);
    };

    let mut escaped = String::with_capacity(s.len() + 8);
    escaped.push_str(&s[..offset]);
    for c in s[offset..].chars() {
        match c {
            '"' => escaped.push_str("\\\""),
            '\\' => escaped.push_str("\\\\"),
            '\u{08}' => escaped.push_str("\\b"),
            '\t' => escaped.push_str("\\t"),
            '\n' => escaped.push_str("\\n"),
            '\u{0C}' => escaped.push_str("\\f"),
            '\r' => escaped.push_str("\\r"),
            c if c < '\u{20}' => {
                let _ = write!(escaped, "\\u{:04x}", c as u32);
            }
            c => escaped.push(c),
        }
    }
    Cow::Owned(escaped)
}
