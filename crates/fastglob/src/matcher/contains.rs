use std::fmt::{Display, Formatter};

use super::{boundaries, Index, Match, MatchLength};

/// Matches text that contains `needle` anywhere, or with `not` set, text that does not.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Contains {
    needle: String,
    not: bool,
}

impl Contains {
    /// Creates a substring matcher.
    pub fn new(needle: impl Into<String>, not: bool) -> Self {
        Self {
            needle: needle.into(),
            not,
        }
    }

    /// The substring to look for.
    pub fn needle(&self) -> &str {
        &self.needle
    }

    /// Whether the matcher requires the needle to be absent.
    pub fn is_negated(&self) -> bool {
        self.not
    }
}

impl Match for Contains {
    fn matches(&self, text: &str) -> bool {
        text.contains(self.needle.as_str()) != self.not
    }

    fn index(&self, text: &str) -> Option<Index> {
        // A prefix of `text` contains the needle iff it extends past the end of the first
        // occurrence.
        let first_end = text
            .find(self.needle.as_str())
            .map(|start| start + self.needle.len());
        let ends: Vec<usize> = boundaries(text)
            .into_iter()
            .filter(|&end| match first_end {
                Some(first_end) => (end >= first_end) != self.not,
                None => self.not,
            })
            .collect();
        (!ends.is_empty()).then_some((0, ends))
    }

    fn length(&self) -> MatchLength {
        MatchLength::Unbounded
    }
}

impl Display for Contains {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let not = if self.not { "!" } else { "" };
        write!(f, "<contains:{not}[{}]>", self.needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let contains = Contains::new("ab", false);
        assert!(contains.matches("xaby"));
        assert!(!contains.matches("xa"));
        assert_eq!(contains.index("xabyz"), Some((0, vec![3, 4, 5])));
        assert_eq!(contains.index("xa"), None);
    }

    #[test]
    fn test_not_contains() {
        let not = Contains::new(".", true);
        assert!(not.matches("abc"));
        assert!(not.matches(""));
        assert!(!not.matches("a.c"));
        assert_eq!(not.index("ab.c"), Some((0, vec![0, 1, 2])));
        assert_eq!(not.index("ab"), Some((0, vec![0, 1, 2])));
    }

    #[test]
    fn test_empty_needle() {
        assert!(Contains::new("", false).matches(""));
        assert!(!Contains::new("", true).matches("a"));
        assert_eq!(Contains::new("", true).index("a"), None);
    }
}
