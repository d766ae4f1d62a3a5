use std::fmt::{Display, Formatter};

use super::{single_rune_index, Index, Match, MatchLength};

/// Matches one character inside (or, when negated, outside of) `lo..=hi`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Range {
    lo: char,
    hi: char,
    not: bool,
}

impl Range {
    /// Creates a matcher for `[lo-hi]`, or `[!lo-hi]` if `not` is set.
    pub fn new(lo: char, hi: char, not: bool) -> Self {
        Self { lo, hi, not }
    }

    /// The inclusive bounds of the range.
    pub fn bounds(&self) -> (char, char) {
        (self.lo, self.hi)
    }

    /// Whether the range is negated.
    pub fn is_negated(&self) -> bool {
        self.not
    }

    fn accepts(&self, c: char) -> bool {
        (self.lo..=self.hi).contains(&c) != self.not
    }
}

impl Match for Range {
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

impl Display for Range {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let not = if self.not { "!" } else { "" };
        write!(f, "<range:{not}[{}-{}]>", self.lo, self.hi)
    }
}
