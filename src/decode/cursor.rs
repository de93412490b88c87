use crate::constants::is_whitespace;
use crate::Error;

/// Read position over the input text.
///
/// Every `eat*` method is a try-match: it advances only on success and reports
/// a miss through its return value, so repetition loops can stop without
/// going through the error path.
pub(crate) struct Cursor<'a> {
    input: &'a str,
    position: usize,
}

impl<'a> Cursor<'a> {
    pub(crate) fn new(input: &'a str) -> Self {
        Self { input, position: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.input.len()
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.input.as_bytes().get(self.position).copied()
    }

    /// Advances past one byte. Callers only bump after peeking an ASCII byte.
    pub(crate) fn bump(&mut self) {
        if !self.is_at_end() {
            self.position += 1;
        }
    }

    pub(crate) fn eat(&mut self, byte: u8) -> bool {
        if self.peek() == Some(byte) {
            self.position += 1;
            true
        } else {
            false
        }
    }

    pub(crate) fn eat_literal(&mut self, literal: &str) -> bool {
        if self.input.as_bytes()[self.position..].starts_with(literal.as_bytes()) {
            self.position += literal.len();
            true
        } else {
            false
        }
    }

    pub(crate) fn eat_if(&mut self, accept: impl Fn(u8) -> bool) -> Option<u8> {
        let byte = self.peek().filter(|&byte| accept(byte))?;
        self.position += 1;
        Some(byte)
    }

    /// Consumes the longest run of accepted bytes and returns it.
    ///
    /// `accept` must reject every ASCII byte the run may not contain and accept
    /// either all or none of the bytes at or above 0x80, so the run always ends
    /// on a character boundary.
    pub(crate) fn eat_while(&mut self, accept: impl Fn(u8) -> bool) -> &'a str {
        let start = self.position;
        let bytes = self.input.as_bytes();
        let mut end = start;
        while end < bytes.len() && accept(bytes[end]) {
            end += 1;
        }
        self.position = end;
        &self.input[start..end]
    }

    pub(crate) fn skip_whitespace(&mut self) {
        self.eat_while(is_whitespace);
    }

    pub(crate) fn expect(&mut self, byte: u8) -> Result<(), Error> {
        if self.eat(byte) {
            Ok(())
        } else {
            Err(self.unexpected())
        }
    }

    pub(crate) fn slice_from(&self, start: usize) -> &'a str {
        &self.input[start..self.position]
    }

    pub(crate) fn unexpected(&self) -> Error {
        Error::unexpected(self.position)
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_eat_advances_only_on_match() {
        let mut cursor = Cursor::new("ab");
        assert!(!cursor.eat(b'b'));
        assert_eq!(cursor.position(), 0);
        assert!(cursor.eat(b'a'));
        assert!(cursor.eat(b'b'));
        assert!(cursor.is_at_end());
        assert!(!cursor.eat(b'b'));
        assert_eq!(cursor.position(), 2);
    }

    #[rstest]
    fn test_eat_literal_needs_whole_literal() {
        let mut cursor = Cursor::new("tru");
        assert!(!cursor.eat_literal("true"));
        assert_eq!(cursor.position(), 0);

        let mut cursor = Cursor::new("nullx");
        assert!(cursor.eat_literal("null"));
        assert_eq!(cursor.position(), 4);
    }

    #[rstest]
    fn test_eat_while_stops_on_char_boundary() {
        let mut cursor = Cursor::new("h\u{00e9}llo\"rest");
        let run = cursor.eat_while(|byte| byte != b'"');
        assert_eq!(run, "h\u{00e9}llo");
        assert_eq!(cursor.peek(), Some(b'"'));
    }

    #[rstest]
    fn test_skip_whitespace_only_skips_json_whitespace() {
        let mut cursor = Cursor::new(" \t\r\n\u{000c}x");
        cursor.skip_whitespace();
        assert_eq!(cursor.position(), 4);
    }

    #[rstest]
    fn test_expect_reports_current_position() {
        let mut cursor = Cursor::new("[1");
        cursor.bump();
        cursor.bump();
        assert_eq!(cursor.expect(b']'), Err(Error::unexpected(2)));
    }

    #[rstest]
    fn test_bump_never_passes_end() {
        let mut cursor = Cursor::new("");
        cursor.bump();
        assert_eq!(cursor.position(), 0);
        assert_eq!(cursor.slice_from(0), "");
    }
}
