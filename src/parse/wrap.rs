use memchr::memchr_iter;

use crate::text::{is_identifier_byte, is_json_whitespace};
use crate::types::Span;

/// A `name( ... );` payload split into wrapper and inner text.
pub(crate) struct CallbackParts<'a> {
    /// Everything up to and including the opening parenthesis.
    pub prefix: &'a str,
    pub inner: &'a str,
    /// The closing parenthesis and whatever `;`/whitespace follows it.
    pub suffix: &'a str,
    pub inner_span: Span,
}

/// Strip a single callback wrapper: the shortest prefix ending in a word
/// character, optional whitespace, and `(`, plus a `)` suffix followed only
/// by semicolons and whitespace. Purely textual; the inner substring goes
/// through the same reader as a plain buffer.
pub(crate) fn split_callback(raw: &str) -> Option<CallbackParts<'_>> {
    let bytes = raw.as_bytes();
    let mut end = bytes.len();
    while end > 0 && (bytes[end - 1] == b';' || is_json_whitespace(bytes[end - 1])) {
        end -= 1;
    }
    if end == 0 || bytes[end - 1] != b')' {
        return None;
    }
    let inner_end = end - 1;

    for pos in memchr_iter(b'(', &bytes[..inner_end]) {
        let mut back = pos;
        while back > 0 && is_json_whitespace(bytes[back - 1]) {
            back -= 1;
        }
        if back == 0 || !is_identifier_byte(bytes[back - 1]) {
            continue;
        }
        let inner_start = pos + 1;
        if inner_start >= inner_end {
            continue;
        }
        return Some(CallbackParts {
            prefix: &raw[..inner_start],
            inner: &raw[inner_start..inner_end],
            suffix: &raw[inner_end..],
            inner_span: Span {
                start: inner_start,
                end: inner_end,
            },
        });
    }
    None
}
