use crate::decode::cursor::Cursor;
use crate::Result;

/// Parses `Int Frac? Exp?` at the cursor.
///
/// The grammar is checked here; the value comes from handing the matched text
/// to the standard float parser, which rounds long digit runs correctly.
pub(crate) fn parse_number(cursor: &mut Cursor<'_>) -> Result<f64> {
    let start = cursor.position();
    parse_int(cursor)?;
    parse_frac(cursor)?;
    parse_exp(cursor)?;
    let text = cursor.slice_from(start);
    text.parse::<f64>().map_err(|_| crate::Error::unexpected(start))
}

fn parse_int(cursor: &mut Cursor<'_>) -> Result<()> {
    cursor.eat(b'-');
    if cursor.eat(b'0') {
        return Ok(());
    }
    if cursor.eat_if(is_one_nine).is_none() {
        return Err(cursor.unexpected());
    }
    cursor.eat_while(|byte| byte.is_ascii_digit());
    Ok(())
}

fn parse_frac(cursor: &mut Cursor<'_>) -> Result<()> {
    if !cursor.eat(b'.') {
        return Ok(());
    }
    parse_digits(cursor)
}

fn parse_exp(cursor: &mut Cursor<'_>) -> Result<()> {
    if !cursor.eat(b'e') && !cursor.eat(b'E') {
        return Ok(());
    }
    if !cursor.eat(b'-') {
        cursor.eat(b'+');
    }
    parse_digits(cursor)
}

/// One or more digits.
fn parse_digits(cursor: &mut Cursor<'_>) -> Result<()> {
    if cursor.eat_while(|byte| byte.is_ascii_digit()).is_empty() {
        return Err(cursor.unexpected());
    }
    Ok(())
}

fn is_one_nine(byte: u8) -> bool {
    matches!(byte, b'1'..=b'9')
}
