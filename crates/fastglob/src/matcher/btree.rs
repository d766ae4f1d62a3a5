use std::fmt::{Display, Formatter};

use super::{
    index_by_matching, rune_offset, rune_offset_back, Index, Match, MatchLength, Matcher,
};

/// Splits the input around an occurrence of a pivot matcher.
///
/// The text before the occurrence has to match `left` and the text after it has to match
/// `right`. A missing side only matches the empty string. Every occurrence of the pivot is
/// tried, and for every occurrence every possible end, so the split point does not have to
/// be unique.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BTree {
    value: Box<Matcher>,
    left: Option<Box<Matcher>>,
    right: Option<Box<Matcher>>,
    left_runes: Option<usize>,
    right_runes: Option<usize>,
    length: MatchLength,
}

impl BTree {
    /// Creates a new tree node around the pivot `value`.
    pub fn new(value: Matcher, left: Option<Matcher>, right: Option<Matcher>) -> Self {
        let side_length =
            |side: &Option<Matcher>| side.as_ref().map_or(MatchLength::Fixed(0), Match::length);
        let left_length = side_length(&left);
        let right_length = side_length(&right);
        let length = left_length.then(value.length()).then(right_length);
        Self {
            value: Box::new(value),
            left: left.map(Box::new),
            right: right.map(Box::new),
            left_runes: left_length.fixed(),
            right_runes: right_length.fixed(),
            length,
        }
    }

    /// The pivot.
    pub fn value(&self) -> &Matcher {
        &self.value
    }

    /// The matcher for the text before the pivot.
    pub fn left(&self) -> Option<&Matcher> {
        self.left.as_deref()
    }

    /// The matcher for the text after the pivot.
    pub fn right(&self) -> Option<&Matcher> {
        self.right.as_deref()
    }

    fn side_matches(side: Option<&Matcher>, text: &str) -> bool {
        match side {
            Some(matcher) => matcher.matches(text),
            None => text.is_empty(),
        }
    }
}

impl Match for BTree {
    fn matches(&self, text: &str) -> bool {
        if let MatchLength::Fixed(runes) = self.length {
            if text.chars().count() != runes {
                return false;
            }
        }

        // Fixed-width sides tell us exactly how much of the input the pivot cannot use.
        let Some(mut offset) = rune_offset(text, self.left_runes.unwrap_or(0)) else {
            return false;
        };
        let Some(limit) = rune_offset_back(text, self.right_runes.unwrap_or(0)) else {
            return false;
        };

        while offset <= limit {
            let window = &text[offset..limit];
            let Some((start, ends)) = self.value.index(window) else {
                return false;
            };

            let start = offset + start;
            if Self::side_matches(self.left(), &text[..start]) {
                if ends
                    .iter()
                    .any(|&end| Self::side_matches(self.right(), &text[offset + end..]))
                {
                    return true;
                }
            } else if self.left.is_none() {
                // Later occurrences only leave a longer prefix behind.
                return false;
            }

            match text[start..limit].chars().next() {
                Some(c) => offset = start + c.len_utf8(),
                None => break,
            }
        }

        false
    }

    fn index(&self, text: &str) -> Option<Index> {
        index_by_matching(self, text)
    }

    fn length(&self) -> MatchLength {
        self.length
    }
}

impl Display for BTree {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("<btree:[")?;
        match self.left() {
            Some(left) => write!(f, "{left}")?,
            None => f.write_str("nil")?,
        }
        write!(f, "<-{}->", self.value)?;
        match self.right() {
            Some(right) => write!(f, "{right}")?,
            None => f.write_str("nil")?,
        }
        f.write_str("]>")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::tests::assert_index_agrees;
    use crate::matcher::{Any, AnyOf, Contains, Single, Super, Text};
    use crate::Separators;

    #[test]
    fn test_btree_tries_every_occurrence() {
        // `*a?` without separators: the pivot `a` occurs several times and only the last
        // one leaves exactly one character behind.
        let tree = BTree::new(
            Text::new("a").into(),
            Some(Super.into()),
            Some(Single::new(Separators::none()).into()),
        );
        assert!(tree.matches("aaab"));
        assert!(tree.matches("ab"));
        assert!(!tree.matches("a"));
        assert!(!tree.matches("aab."));
        assert_eq!(tree.length(), MatchLength::Bounded(2));
    }

    #[test]
    fn test_btree_missing_side_must_be_empty() {
        let tree = BTree::new(Text::new("ghi").into(), Some(Super.into()), None);
        assert!(tree.matches("defghi"));
        assert!(!tree.matches("defghij"));

        let tree = BTree::new(Text::new("abc").into(), None, Some(Super.into()));
        assert!(tree.matches("abcd"));
        assert!(!tree.matches("xabcd"));
    }

    #[test]
    fn test_btree_tries_every_end() {
        // The pivot `*` (with `.` as separator) can end at several places; only one of them
        // leaves something the right side accepts.
        let tree = BTree::new(
            Any::new(Separators::from(".")).into(),
            None,
            Some(Text::new(".c").into()),
        );
        assert!(tree.matches("ab.c"));
        assert!(tree.matches(".c"));
        assert!(!tree.matches("a.b.c"));

        let tree = BTree::new(
            Any::new(Separators::from(".")).into(),
            None,
            Some(Contains::new("b", false).into()),
        );
        assert!(tree.matches("aab.c"));
        assert!(!tree.matches("a.c"));
    }

    #[test]
    fn test_btree_fixed_sides_trim_the_search() {
        let tree = BTree::new(
            AnyOf::new([Text::new("x").into(), Text::new("y").into()]).into(),
            Some(Text::new("ab").into()),
            Some(Text::new("c").into()),
        );
        assert_eq!(tree.length(), MatchLength::Fixed(4));
        assert!(tree.matches("abxc"));
        assert!(tree.matches("abyc"));
        assert!(!tree.matches("abzc"));
        assert!(!tree.matches("ab"));
        assert!(!tree.matches("abxcc"));
    }

    #[test]
    fn test_btree_index() {
        let tree = BTree::new(Text::new("b").into(), Some(Text::new("a").into()), None);
        assert_eq!(tree.index("xxabab"), Some((2, vec![4])));
        for text in ["ab", "", "b", "xab", "abab"] {
            assert_index_agrees(&tree.clone().into(), text);
        }
    }

    #[test]
    fn test_fixed_btree_index_only_tries_one_end() {
        // `x{a,b}y` has a fixed width, so every start has exactly one candidate end.
        let tree = BTree::new(
            AnyOf::new([Text::new("a").into(), Text::new("b").into()]).into(),
            Some(Text::new("x").into()),
            Some(Text::new("y").into()),
        );
        assert_eq!(tree.index("zzxbyxay"), Some((2, vec![5])));
        assert_eq!(tree.index("xay"), Some((0, vec![3])));
        assert_eq!(tree.index("xa"), None);

        // As an alternative inside a pivot it is indexed at every start of a long input.
        let pivot: Matcher = AnyOf::new([tree.into(), Text::new("zzz").into()]).into();
        let outer = BTree::new(pivot, Some(Super.into()), Some(Text::new("q").into()));
        let text = "a".repeat(20_000);
        assert!(!outer.matches(&text));
        assert!(outer.matches(&format!("{text}xbyq")));
    }

    #[test]
    fn test_btree_display() {
        let tree = BTree::new(Text::new("c").into(), Some(Super.into()), None);
        assert_eq!(tree.to_string(), "<btree:[<super><-<text:c>->nil]>");
    }
}
