use std::fmt::{Display, Formatter};

use super::{boundaries, Index, Match, MatchLength};

/// Matches text that starts with a literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Prefix {
    prefix: String,
}

impl Prefix {
    /// Creates a matcher for text starting with `prefix`.
    pub fn new(prefix: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
        }
    }

    /// The required prefix.
    pub fn as_str(&self) -> &str {
        &self.prefix
    }
}

impl Match for Prefix {
    fn matches(&self, text: &str) -> bool {
        text.starts_with(self.prefix.as_str())
    }

    fn index(&self, text: &str) -> Option<Index> {
        let start = text.find(self.prefix.as_str())?;
        let min_end = start + self.prefix.len();
        let ends = boundaries(text)
            .into_iter()
            .filter(|&end| end >= min_end)
            .collect();
        Some((start, ends))
    }

    fn length(&self) -> MatchLength {
        MatchLength::Unbounded
    }
}

impl Display for Prefix {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<prefix:{}>", self.prefix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prefix() {
        let prefix = Prefix::new("ab");
        assert!(prefix.matches("ab"));
        assert!(prefix.matches("abc"));
        assert!(!prefix.matches("cab"));
        assert_eq!(prefix.index("cabñ"), Some((1, vec![3, 5])));
        assert_eq!(prefix.index("ba"), None);
    }
}
