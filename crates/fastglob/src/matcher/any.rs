use std::fmt::{Display, Formatter};

use super::{boundaries, Index, Match, MatchLength};
use crate::Separators;

/// Matches any run of characters that contains no separator (`*`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Any {
    separators: Separators,
}

impl Any {
    /// Creates a matcher for any run of characters outside of `separators`.
    pub fn new(separators: Separators) -> Self {
        Self { separators }
    }

    /// The characters this matcher refuses.
    pub fn separators(&self) -> &Separators {
        &self.separators
    }
}

impl Match for Any {
    fn matches(&self, text: &str) -> bool {
        !text.chars().any(|c| self.separators.contains(c))
    }

    fn index(&self, text: &str) -> Option<Index> {
        let end = text
            .find(|c: char| self.separators.contains(c))
            .unwrap_or(text.len());
        Some((0, boundaries(&text[..end])))
    }

    fn length(&self) -> MatchLength {
        MatchLength::Unbounded
    }
}

impl Display for Any {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        if self.separators.is_empty() {
            f.write_str("<any>")
        } else {
            write!(f, "<any:![{}]>", self.separators)
        }
    }
}
