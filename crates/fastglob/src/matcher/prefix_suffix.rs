use std::fmt::{Display, Formatter};

use super::{boundaries, Index, Match, MatchLength};

/// Matches text that starts with one literal and ends with another, without the two
/// overlapping.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PrefixSuffix {
    prefix: String,
    suffix: String,
}

impl PrefixSuffix {
    /// Creates a matcher for text starting with `prefix` and ending with `suffix`.
    pub fn new(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// The required prefix.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The required suffix.
    pub fn suffix(&self) -> &str {
        &self.suffix
    }
}

impl Match for PrefixSuffix {
    fn matches(&self, text: &str) -> bool {
        text.len() >= self.prefix.len() + self.suffix.len()
            && text.starts_with(self.prefix.as_str())
            && text.ends_with(self.suffix.as_str())
    }

    fn index(&self, text: &str) -> Option<Index> {
        let start = text.find(self.prefix.as_str())?;
        let min_end = start + self.prefix.len() + self.suffix.len();
        let ends: Vec<usize> = boundaries(text)
            .into_iter()
            .filter(|&end| end >= min_end && text[..end].ends_with(self.suffix.as_str()))
            .collect();
        (!ends.is_empty()).then_some((start, ends))
    }

    fn length(&self) -> MatchLength {
        MatchLength::Unbounded
    }
}

impl Display for PrefixSuffix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<prefix_suffix:[{},{}]>", self.prefix, self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix_suffix() {
        let m = PrefixSuffix::new("ab", "ba");
        assert!(m.matches("abba"));
        assert!(m.matches("abxba"));
        assert!(!m.matches("aba"));
        assert!(!m.matches("abb"));
        assert_eq!(m.index("xabbaba"), Some((1, vec![5, 7])));
        assert_eq!(m.index("xaba"), None);
    }
}
