use std::fmt::{Display, Formatter};

use itertools::Itertools;

use super::{write_list, Index, Match, MatchLength, Matcher};

/// Matches when at least one of its matchers matches. Alternatives are tried in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnyOf {
    matchers: Vec<Matcher>,
}

impl AnyOf {
    /// Creates a disjunction of matchers.
    pub fn new(matchers: impl IntoIterator<Item = Matcher>) -> Self {
        Self {
            matchers: matchers.into_iter().collect(),
        }
    }

    /// The alternatives.
    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }
}

impl Match for AnyOf {
    fn matches(&self, text: &str) -> bool {
        self.matchers.iter().any(|m| m.matches(text))
    }

    fn index(&self, text: &str) -> Option<Index> {
        let found: Vec<Index> = self.matchers.iter().filter_map(|m| m.index(text)).collect();
        let start = found.iter().map(|(start, _)| *start).min()?;
        let ends = found
            .into_iter()
            .filter(|(s, _)| *s == start)
            .map(|(_, ends)| ends)
            .kmerge()
            .dedup()
            .collect();
        Some((start, ends))
    }

    fn length(&self) -> MatchLength {
        let lengths: Vec<MatchLength> = self.matchers.iter().map(Match::length).collect();
        match lengths.iter().copied().all_equal_value() {
            Ok(MatchLength::Fixed(n)) => MatchLength::Fixed(n),
            _ => MatchLength::at_least(
                lengths
                    .iter()
                    .map(|l| l.min_runes())
                    .min()
                    .unwrap_or_default(),
            ),
        }
    }
}

impl Display for AnyOf {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("<any_of:[")?;
        write_list(f, &self.matchers)?;
        f.write_str("]>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{Super, Text};

    #[test]
    fn test_any_of() {
        let any_of = AnyOf::new([Text::new("abc").into(), Text::new("def").into()]);
        assert!(any_of.matches("abc"));
        assert!(any_of.matches("def"));
        assert!(!any_of.matches("abcdef"));
        assert_eq!(any_of.length(), MatchLength::Fixed(3));
    }

    #[test]
    fn test_any_of_merges_ends_at_earliest_start() {
        let any_of = AnyOf::new([
            Text::new("ab").into(),
            Text::new("a").into(),
            Text::new("x").into(),
        ]);
        assert_eq!(any_of.index("xab"), Some((0, vec![1])));
        assert_eq!(any_of.index("cab"), Some((1, vec![2, 3])));
        assert_eq!(any_of.length(), MatchLength::Bounded(1));

        let with_super = AnyOf::new([Text::new("b").into(), Super.into()]);
        assert_eq!(with_super.index("ab"), Some((0, vec![0, 1, 2])));
        assert_eq!(with_super.length(), MatchLength::Unbounded);
    }
}
