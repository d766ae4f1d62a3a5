use std::fmt::{Display, Formatter};

use super::{boundaries, Index, Match, MatchLength};

/// Matches text that ends with a literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Suffix {
    suffix: String,
}

impl Suffix {
    /// Creates a matcher for text ending with `suffix`.
    pub fn new(suffix: impl Into<String>) -> Self {
        Self {
            suffix: suffix.into(),
        }
    }

    /// The required suffix.
    pub fn as_str(&self) -> &str {
        &self.suffix
    }
}

impl Match for Suffix {
    fn matches(&self, text: &str) -> bool {
        text.ends_with(self.suffix.as_str())
    }

    fn index(&self, text: &str) -> Option<Index> {
        let ends: Vec<usize> = boundaries(text)
            .into_iter()
            .filter(|&end| text[..end].ends_with(self.suffix.as_str()))
            .collect();
        (!ends.is_empty()).then_some((0, ends))
    }

    fn length(&self) -> MatchLength {
        MatchLength::Unbounded
    }
}

impl Display for Suffix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<suffix:{}>", self.suffix)
    }
}
