//! Parser configuration. Each switch is independent of the others
use std::fmt::{Display, Formatter};

/// The set of options controlling how lenient the parser is. The default is strict RFC 8259,
/// with the additional requirement that the top level value be an object or an array
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
pub struct ParserOptions {
    /// Elide `null` values from arrays and objects. A bare top level `null` is still returned
    pub omit_nulls: bool,
    /// Permit a top level scalar (string, number, boolean or null)
    pub allow_fragments: bool,
    /// Permit `//` line comments and `/* */` block comments between tokens
    pub allow_comments: bool,
}

impl ParserOptions {
    pub fn with_omit_nulls(mut self, value: bool) -> Self {
        self.omit_nulls = value;
        self
    }

    pub fn with_fragments(mut self, value: bool) -> Self {
        self.allow_fragments = value;
        self
    }

    pub fn with_comments(mut self, value: bool) -> Self {
        self.allow_comments = value;
        self
    }

    /// Everything switched on
    pub fn lenient() -> Self {
        ParserOptions {
            omit_nulls: true,
            allow_fragments: true,
            allow_comments: true,
        }
    }
}

impl Display for ParserOptions {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "omit_nulls: {}, allow_fragments: {}, allow_comments: {}",
            self.omit_nulls, self.allow_fragments, self.allow_comments
        )
    }
}
