use crate::types::Value;

/// Literal keywords in the order the value dispatcher tries them.
pub(crate) const LITERALS: [(&str, Value); 3] = [
    ("true", Value::Bool(true)),
    ("false", Value::Bool(false)),
    ("null", Value::Null),
];

pub(crate) const WHITESPACE: [u8; 4] = [b'\t', b'\n', b'\r', b' '];

#[inline]
pub(crate) fn is_whitespace(byte: u8) -> bool {
    WHITESPACE.contains(&byte)
}

/// Bytes copied verbatim into string content: everything from U+0020 up,
/// except the quote and backslash. UTF-8 continuation and lead bytes are all
/// at or above 0x80, so multi-byte characters pass through whole.
#[inline]
pub(crate) fn is_plain_string_byte(byte: u8) -> bool {
    byte >= 0x20 && byte != b'"' && byte != b'\\'
}
