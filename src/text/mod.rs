/// True iff `value` is a CSS hex color: `#` followed by 3, 4, 6, or 8 hex
/// digits, case-insensitive.
pub fn is_color_literal(value: &str) -> bool {
    let Some(hex) = value.strip_prefix('#') else {
        return false;
    };
    matches!(hex.len(), 3 | 4 | 6 | 8) && hex.bytes().all(|byte| byte.is_ascii_hexdigit())
}

/// The four whitespace bytes the reader skips between tokens.
#[inline]
pub fn is_json_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

/// Word characters for the callback-wrapper prefix scan.
#[inline]
pub fn is_identifier_byte(byte: u8) -> bool {
    byte.is_ascii_alphanumeric() || byte == b'_'
}
