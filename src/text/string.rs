use crate::constants::is_plain_string_byte;
use crate::decode::cursor::Cursor;
use crate::{Error, Result};

use super::utf16::{combine_surrogates, is_high_surrogate, is_low_surrogate};

/// Parses string content after the opening quote, through the closing quote.
pub(crate) fn parse_string(cursor: &mut Cursor<'_>) -> Result<String> {
    let mut out = String::new();
    parse_characters(cursor, &mut out)?;
    cursor.expect(b'"')?;
    Ok(out)
}

/// Accumulates characters until one is neither plain text nor an escape.
///
/// Stopping is not an error by itself; the caller's closing-quote check
/// decides. An unescaped control character or the end of input therefore
/// surfaces as a missing quote at that position.
fn parse_characters(cursor: &mut Cursor<'_>, out: &mut String) -> Result<()> {
    loop {
        out.push_str(cursor.eat_while(is_plain_string_byte));
        if !cursor.eat(b'\\') {
            return Ok(());
        }
        parse_escape(cursor, out)?;
    }
}

fn parse_escape(cursor: &mut Cursor<'_>, out: &mut String) -> Result<()> {
    let prefix_at = cursor.position();
    let decoded = match cursor.peek() {
        Some(b'"') => '"',
        Some(b'\\') => '\\',
        Some(b'/') => '/',
        Some(b'b') => '\u{0008}',
        Some(b'f') => '\u{000c}',
        Some(b'n') => '\n',
        Some(b'r') => '\r',
        Some(b't') => '\t',
        Some(b'u') => {
            cursor.bump();
            return parse_unicode_escape(cursor, out);
        }
        _ => return Err(Error::unexpected(prefix_at)),
    };
    cursor.bump();
    out.push(decoded);
    Ok(())
}

/// Decodes `XXXX` after `\u`, pairing a high surrogate with an immediately
/// following `\uXXXX` low surrogate. Unpaired surrogates become U+FFFD.
fn parse_unicode_escape(cursor: &mut Cursor<'_>, out: &mut String) -> Result<()> {
    let mut unit = parse_hex4(cursor)?;
    loop {
        if !is_high_surrogate(unit) {
            out.push(char::from_u32(u32::from(unit)).unwrap_or(char::REPLACEMENT_CHARACTER));
            return Ok(());
        }
        if !cursor.eat_literal("\\u") {
            out.push(char::REPLACEMENT_CHARACTER);
            return Ok(());
        }
        let next = parse_hex4(cursor)?;
        if is_low_surrogate(next) {
            out.push(combine_surrogates(unit, next));
            return Ok(());
        }
        out.push(char::REPLACEMENT_CHARACTER);
        unit = next;
    }
}

fn parse_hex4(cursor: &mut Cursor<'_>) -> Result<u16> {
    let mut unit: u16 = 0;
    for _ in 0..4 {
        let digit = cursor
            .peek()
            .and_then(hex_value)
            .ok_or_else(|| cursor.unexpected())?;
        cursor.bump();
        unit = (unit << 4) | u16::from(digit);
    }
    Ok(unit)
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
