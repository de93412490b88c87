use memchr::memchr_iter;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("unexpected char (pos:{position})")]
    UnexpectedCharacter { position: usize },
    #[error("nesting depth exceeds {limit} (pos:{position})")]
    DepthLimitExceeded { position: usize, limit: usize },
    #[error("invalid utf-8 (pos:{position})")]
    InvalidUtf8 { position: usize },
    #[error("read failed: {0}")]
    Io(String),
    #[error("deserialize failed: {0}")]
    Deserialize(String),
}

impl Error {
    pub(crate) fn unexpected(position: usize) -> Self {
        Error::UnexpectedCharacter { position }
    }

    /// Byte offset into the input at which parsing stopped, if the error has one.
    pub fn position(&self) -> Option<usize> {
        match self {
            Error::UnexpectedCharacter { position }
            | Error::DepthLimitExceeded { position, .. }
            | Error::InvalidUtf8 { position } => Some(*position),
            Error::Io(_) | Error::Deserialize(_) => None,
        }
    }

    /// Resolves the error position against the text that produced it.
    pub fn location(&self, input: &str) -> Option<Location> {
        self.position().map(|offset| Location::locate(input, offset))
    }
}

/// A byte offset together with its 1-based line and column.
///
/// Columns count characters, not bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Location {
    pub offset: usize,
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn locate(input: &str, offset: usize) -> Self {
        let mut offset = offset.min(input.len());
        while !input.is_char_boundary(offset) {
            offset -= 1;
        }
        let head = &input.as_bytes()[..offset];
        let mut line = 1;
        let mut line_start = 0;
        for idx in memchr_iter(b'\n', head) {
            line += 1;
            line_start = idx + 1;
        }
        let column = input[line_start..offset].chars().count() + 1;
        Self {
            offset,
            line,
            column,
        }
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    fn test_unexpected_display_matches_position() {
        let err = Error::unexpected(7);
        assert_eq!(err.to_string(), "unexpected char (pos:7)");
        assert_eq!(err.position(), Some(7));
    }

    #[rstest]
    #[case("abc", 0, 1, 1)]
    #[case("abc", 2, 1, 3)]
    #[case("a\nbc", 2, 2, 1)]
    #[case("a\nbc", 4, 2, 3)]
    #[case("\n\n\"x", 3, 3, 2)]
    #[case("ab", 99, 1, 3)]
    fn test_locate(
        #[case] input: &str,
        #[case] offset: usize,
        #[case] line: usize,
        #[case] column: usize,
    ) {
        let location = Location::locate(input, offset);
        assert_eq!((location.line, location.column), (line, column));
    }

    #[rstest]
    fn test_locate_counts_chars_not_bytes() {
        let input = "\"\u{00e9}\u{00e9}x";
        let location = Location::locate(input, input.len() - 1);
        assert_eq!(location.column, 4);
    }

    #[rstest]
    fn test_io_error_has_no_location() {
        let err = Error::Io("broken pipe".to_string());
        assert_eq!(err.location("{}"), None);
    }
}
