use std::fmt::{Display, Formatter};

use super::{single_rune_index, Index, Match, MatchLength};
use crate::Separators;

/// Matches exactly one character that is not a separator (`?`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Single {
    separators: Separators,
}

impl Single {
    /// Creates a matcher for one character outside of `separators`.
    pub fn new(separators: Separators) -> Self {
        Self { separators }
    }

    /// The characters this matcher refuses.
    pub fn separators(&self) -> &Separators {
        &self.separators
    }
}

impl Match for Single {
    fn matches(&self, text: &str) -> bool {
        let mut chars = text.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => !self.separators.contains(c),
            _ => false,
        }
    }

    fn index(&self, text: &str) -> Option<Index> {
        text.char_indices()
            .find(|&(_, c)| !self.separators.contains(c))
            .map(|(offset, c)| single_rune_index(offset, c))
    }

    fn length(&self) -> MatchLength {
        MatchLength::Fixed(1)
    }
}

impl Display for Single {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.separators.is_empty() {
            f.write_str("<single>")
        } else {
            write!(f, "<single:![{}]>", self.separators)
        }
    }
}
