pub const DEFAULT_MAX_DEPTH: usize = 512;

/// What to do with non-whitespace text left after the top-level value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrailingContent {
    #[default]
    Reject,
    Ignore,
}

#[derive(Debug, Clone)]
pub struct ParseOptions {
    pub max_depth: Option<usize>,
    pub trailing: TrailingContent,
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` removes the nesting limit; deep enough input then exhausts the stack.
    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn with_trailing(mut self, trailing: TrailingContent) -> Self {
        self.trailing = trailing;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            max_depth: Some(DEFAULT_MAX_DEPTH),
            trailing: TrailingContent::default(),
        }
    }
}
