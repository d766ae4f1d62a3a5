use std::fmt::{Display, Formatter};

use super::{boundaries, Index, Match, MatchLength};

/// Matches any text of at most `limit` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Max {
    limit: usize,
}

impl Max {
    /// Creates a matcher for at most `limit` characters.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// The maximum number of characters.
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Match for Max {
    fn matches(&self, text: &str) -> bool {
        text.chars().nth(self.limit).is_none()
    }

    fn index(&self, text: &str) -> Option<Index> {
        let mut ends = boundaries(text);
        ends.truncate(self.limit + 1);
        Some((0, ends))
    }

    fn length(&self) -> MatchLength {
        MatchLength::Unbounded
    }
}

impl Display for Max {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<max:{}>", self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max() {
        let max = Max::new(2);
        assert!(max.matches(""));
        assert!(max.matches("ñb"));
        assert!(!max.matches("abc"));
        // Longer inputs still have a prefix that fits.
        assert_eq!(max.index("añbc"), Some((0, vec![0, 1, 3])));
        assert_eq!(max.index(""), Some((0, vec![0])));
    }
}
