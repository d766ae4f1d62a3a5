use std::fmt::{Display, Formatter};

use super::{single_rune_index, Index, Match, MatchLength};

/// Matches one character that is (or, when negated, is not) in a set.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct List {
    chars: String,
    not: bool,
}

impl List {
    /// Creates a matcher for `[chars]`, or `[!chars]` if `not` is set.
    pub fn new(chars: impl Into<String>, not: bool) -> Self {
        Self {
            chars: chars.into(),
            not,
        }
    }

    /// The characters of the set.
    pub fn chars(&self) -> &str {
        &self.chars
    }

    /// Whether the set is negated.
    pub fn is_negated(&self) -> bool {
        self.not
    }

    fn accepts(&self, c: char) -> bool {
        self.chars.contains(c) != self.not
    }
}

impl Match for List {
    fn matches(&self, text: &str) -> bool {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => self.accepts(c),
            _ => false,
        }
    }

    fn index(&self, text: &str) -> Option<Index> {
        text.char_indices()
            .find(|&(_, c)| self.accepts(c))
            .map(|(offset, c)| single_rune_index(offset, c))
    }

    fn length(&self) -> MatchLength {
        MatchLength::Fixed(1)
    }
}

impl Display for List {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let not = if self.not { "!" } else { "" };
        write!(f, "<list:{not}[{}]>", self.chars)
    }
}
