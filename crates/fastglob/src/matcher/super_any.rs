use std::fmt::{Display, Formatter};

use super::{boundaries, Index, Match, MatchLength};

/// Matches any run of characters, including separators (`**`).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct Super;

impl Match for Super {
    fn matches(&self, _text: &str) -> bool {
        true
    }

    fn index(&self, text: &str) -> Option<Index> {
        Some((0, boundaries(text)))
    }

    fn length(&self) -> MatchLength {
        MatchLength::Unbounded
    }
}

impl Display for Super {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("<super>")
    }
}
