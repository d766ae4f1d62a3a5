use std::fmt::{Display, Formatter};

use super::{boundaries, Index, Match, MatchLength};

/// Matches any text of at least `limit` characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Min {
    limit: usize,
}

impl Min {
    /// Creates a matcher for at least `limit` characters.
    pub fn new(limit: usize) -> Self {
        Self { limit }
    }

    /// The minimum number of characters.
    pub fn limit(&self) -> usize {
        self.limit
    }
}

impl Match for Min {
    fn matches(&self, text: &str) -> bool {
        self.limit == 0 || text.chars().nth(self.limit - 1).is_some()
    }

    fn index(&self, text: &str) -> Option<Index> {
        let bounds = boundaries(text);
        if bounds.len() <= self.limit {
            return None;
        }
        Some((0, bounds[self.limit..].to_vec()))
    }

    fn length(&self) -> MatchLength {
        MatchLength::at_least(self.limit)
    }
}

impl Display for Min {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<min:{}>", self.limit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min() {
        let min = Min::new(2);
        assert!(!min.matches(""));
        assert!(!min.matches("ñ"));
        assert!(min.matches("ñb"));
        assert!(min.matches("abc"));
        assert_eq!(min.index("añbc"), Some((0, vec![3, 4, 5])));
        assert_eq!(min.index("a"), None);
        assert!(Min::new(0).matches(""));
        assert_eq!(min.length(), MatchLength::Bounded(2));
    }
}
