use std::fmt::{Display, Formatter};

use itertools::Itertools;

use super::{index_by_matching, write_list, Index, Match, MatchLength, Matcher};

/// Matches when every one of its matchers matches the whole text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EveryOf {
    matchers: Vec<Matcher>,
}

impl EveryOf {
    /// Creates a conjunction of matchers.
    pub fn new(matchers: impl IntoIterator<Item = Matcher>) -> Self {
        Self {
            matchers: matchers.into_iter().collect(),
        }
    }

    /// The matchers that must all match.
    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }
}

impl Match for EveryOf {
    fn matches(&self, text: &str) -> bool {
        self.matchers.iter().all(|m| m.matches(text))
    }

    fn index(&self, text: &str) -> Option<Index> {
        index_by_matching(self, text)
    }

    fn length(&self) -> MatchLength {
        let lengths: Vec<MatchLength> = self.matchers.iter().map(Match::length).collect();
        match lengths.iter().copied().all_equal_value() {
            Ok(MatchLength::Fixed(n)) => MatchLength::Fixed(n),
            _ => MatchLength::at_least(
                lengths
                    .iter()
                    .map(|l| l.min_runes())
                    .max()
                    .unwrap_or_default(),
            ),
        }
    }
}

impl Display for EveryOf {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("<every_of:[")?;
        write_list(f, &self.matchers)?;
        f.write_str("]>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{Contains, Max, Min};

    #[test]
    fn test_every_of() {
        let every = EveryOf::new([
            Min::new(1).into(),
            Max::new(3).into(),
            Contains::new(".", true).into(),
        ]);
        assert!(every.matches("a"));
        assert!(every.matches("abc"));
        assert!(!every.matches(""));
        assert!(!every.matches("abcd"));
        assert!(!every.matches("a.c"));
        assert_eq!(every.length(), MatchLength::Bounded(1));
        assert_eq!(every.index(".ab.c"), Some((1, vec![2, 3])));
    }
}
