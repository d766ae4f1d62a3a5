use std::fmt::{Display, Formatter};

use super::{boundaries, rune_offset, write_list, Index, Match, MatchLength, Matcher};

/// A concatenation of fixed-width matchers.
///
/// Matching checks the total number of characters once and then hands each matcher its
/// slice of the input, which avoids any searching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    matchers: Vec<Matcher>,
    runes: usize,
}

impl Row {
    /// Creates a row from matchers that all have a [`MatchLength::Fixed`] length. Nested
    /// rows are flattened.
    pub fn new(matchers: impl IntoIterator<Item = Matcher>) -> Self {
        let mut flattened = Vec::new();
        for matcher in matchers {
            match matcher {
                Matcher::Row(row) => flattened.extend(row.matchers),
                matcher => flattened.push(matcher),
            }
        }
        debug_assert!(
            flattened.iter().all(|m| m.length().fixed().is_some()),
            "a row can only hold fixed-width matchers"
        );
        let runes = flattened.iter().map(|m| m.length().min_runes()).sum();
        Self {
            matchers: flattened,
            runes,
        }
    }

    /// The matchers in this row.
    pub fn matchers(&self) -> &[Matcher] {
        &self.matchers
    }

    /// Matches `text` assuming it is known to have the right number of characters.
    fn matches_exact(&self, text: &str) -> bool {
        let mut rest = text;
        for matcher in &self.matchers {
            let runes = matcher.length().min_runes();
            let Some(split) = rune_offset(rest, runes) else {
                return false;
            };
            let (head, tail) = rest.split_at(split);
            if !matcher.matches(head) {
                return false;
            }
            rest = tail;
        }
        rest.is_empty()
    }
}

impl Match for Row {
    fn matches(&self, text: &str) -> bool {
        text.chars().count() == self.runes && self.matches_exact(text)
    }

    fn index(&self, text: &str) -> Option<Index> {
        let bounds = boundaries(text);
        bounds
            .iter()
            .zip(bounds.iter().skip(self.runes))
            .find(|&(&start, &end)| self.matches_exact(&text[start..end]))
            .map(|(&start, &end)| (start, vec![end]))
    }

    fn length(&self) -> MatchLength {
        MatchLength::Fixed(self.runes)
    }
}

impl Display for Row {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<row_{}:[", self.runes)?;
        write_list(f, &self.matchers)?;
        f.write_str("]>")
    }
}
