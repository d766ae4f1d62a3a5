use std::fmt::{Display, Formatter};

use super::{Index, Match, MatchLength};

/// Matches a literal string.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Text {
    text: String,
    runes: usize,
}

impl Text {
    /// Creates a matcher for the literal `text`.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let runes = text.chars().count();
        Self { text, runes }
    }

    /// The literal this matcher looks for.
    pub fn as_str(&self) -> &str {
        &self.text
    }
}

impl Match for Text {
    fn matches(&self, text: &str) -> bool {
        self.text == text
    }

    fn index(&self, text: &str) -> Option<Index> {
        let start = text.find(self.text.as_str())?;
        Some((start, vec![start + self.text.len()]))
    }

    fn length(&self) -> MatchLength {
        MatchLength::Fixed(self.runes)
    }
}

impl Display for Text {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<text:{}>", self.text)
    }
}
