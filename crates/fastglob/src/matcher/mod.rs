//! The executable representation of a compiled glob.
//!
//! A compiled pattern is a tree of [`Matcher`]s. The leaves are primitives that each
//! correspond to a piece of glob syntax (a literal, `?`, `*`, `**`, a character class) or
//! to a cheaper equivalent produced by the compiler (a length bound, a substring check, a
//! prefix or suffix check). The inner nodes combine other matchers: [`Row`] concatenates
//! fixed-width matchers, [`EveryOf`] and [`AnyOf`] are conjunction and disjunction, and
//! [`BTree`] splits the input around an occurrence of a pivot matcher.
//!
//! All matchers implement [`Match`]. The central invariant is that
//! `m.matches(text)` holds exactly when `m.index(text)` reports an occurrence starting at
//! offset `0` with `text.len()` among its end offsets.

use std::fmt::{Display, Formatter};

mod any;
mod any_of;
mod btree;
mod contains;
mod every_of;
mod list;
mod max;
mod min;
mod prefix;
mod prefix_suffix;
mod range;
mod row;
mod single;
mod suffix;
mod super_any;
mod text;

pub use any::Any;
pub use any_of::AnyOf;
pub use btree::BTree;
pub use contains::Contains;
pub use every_of::EveryOf;
pub use list::List;
pub use max::Max;
pub use min::Min;
pub use prefix::Prefix;
pub use prefix_suffix::PrefixSuffix;
pub use range::Range;
pub use row::Row;
pub use single::Single;
pub use suffix::Suffix;
pub use super_any::Super;
pub use text::Text;

/// An occurrence of a matcher inside a string: the byte offset where the occurrence starts
/// and every byte offset where it may end, in ascending order.
pub type Index = (usize, Vec<usize>);

/// Describes how many characters a matcher consumes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MatchLength {
    /// Exactly this many characters.
    Fixed(usize),
    /// At least this many characters.
    Bounded(usize),
    /// Any number of characters, possibly none.
    Unbounded,
}

impl MatchLength {
    /// Returns a lower bound of `n` characters, collapsing to [`MatchLength::Unbounded`]
    /// when `n` is zero.
    pub fn at_least(n: usize) -> Self {
        if n == 0 {
            MatchLength::Unbounded
        } else {
            MatchLength::Bounded(n)
        }
    }

    /// The exact number of characters, if the length is fixed.
    pub fn fixed(self) -> Option<usize> {
        match self {
            MatchLength::Fixed(n) => Some(n),
            _ => None,
        }
    }

    /// The minimum number of characters that will be consumed.
    pub fn min_runes(self) -> usize {
        match self {
            MatchLength::Fixed(n) | MatchLength::Bounded(n) => n,
            MatchLength::Unbounded => 0,
        }
    }

    /// The length of the concatenation of two matchers.
    pub fn then(self, other: MatchLength) -> MatchLength {
        match (self, other) {
            (MatchLength::Fixed(a), MatchLength::Fixed(b)) => MatchLength::Fixed(a + b),
            (a, b) => MatchLength::at_least(a.min_runes() + b.min_runes()),
        }
    }
}

/// The capabilities every matcher provides.
pub trait Match {
    /// Returns true if the matcher consumes the entire `text`.
    fn matches(&self, text: &str) -> bool;

    /// Finds the earliest offset at which the matcher can start inside `text` together
    /// with every offset where such an occurrence can end. Returns `None` if there is no
    /// occurrence at all.
    fn index(&self, text: &str) -> Option<Index>;

    /// Describes how many characters the matcher consumes.
    fn length(&self) -> MatchLength;
}

/// A compiled glob matcher.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Matcher {
    /// A literal string.
    Text(Text),
    /// Exactly one non-separator character (`?`).
    Single(Single),
    /// Any run of non-separator characters (`*`).
    Any(Any),
    /// Any run of characters (`**`).
    Super(Super),
    /// One character inside or outside of a range (`[a-z]`, `[!a-z]`).
    Range(Range),
    /// One character inside or outside of a set (`[abc]`, `[!abc]`).
    List(List),
    /// At least n characters.
    Min(Min),
    /// At most n characters.
    Max(Max),
    /// Contains, or does not contain, a substring.
    Contains(Contains),
    /// Starts with a literal.
    Prefix(Prefix),
    /// Ends with a literal.
    Suffix(Suffix),
    /// Starts with one literal and ends with another.
    PrefixSuffix(PrefixSuffix),
    /// A concatenation of fixed-width matchers.
    Row(Row),
    /// All of the matchers match.
    EveryOf(EveryOf),
    /// At least one of the matchers matches.
    AnyOf(AnyOf),
    /// A pivot with independent matchers for the text before and after it.
    BTree(BTree),
}

macro_rules! dispatch {
    ($matcher:expr, $inner:ident => $body:expr) => {
        match $matcher {
            Matcher::Text($inner) => $body,
            Matcher::Single($inner) => $body,
            Matcher::Any($inner) => $body,
            Matcher::Super($inner) => $body,
            Matcher::Range($inner) => $body,
            Matcher::List($inner) => $body,
            Matcher::Min($inner) => $body,
            Matcher::Max($inner) => $body,
            Matcher::Contains($inner) => $body,
            Matcher::Prefix($inner) => $body,
            Matcher::Suffix($inner) => $body,
            Matcher::PrefixSuffix($inner) => $body,
            Matcher::Row($inner) => $body,
            Matcher::EveryOf($inner) => $body,
            Matcher::AnyOf($inner) => $body,
            Matcher::BTree($inner) => $body,
        }
    };
}

impl Match for Matcher {
    fn matches(&self, text: &str) -> bool {
        dispatch!(self, m => m.matches(text))
    }

    fn index(&self, text: &str) -> Option<Index> {
        dispatch!(self, m => m.index(text))
    }

    fn length(&self) -> MatchLength {
        dispatch!(self, m => m.length())
    }
}

impl Display for Matcher {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        dispatch!(self, m => Display::fmt(m, f))
    }
}

macro_rules! impl_from {
    ($($variant:ident),* $(,)?) => {
        $(
            impl From<$variant> for Matcher {
                fn from(value: $variant) -> Self {
                    Matcher::$variant(value)
                }
            }
        )*
    };
}

impl_from!(
    Text,
    Single,
    Any,
    Super,
    Range,
    List,
    Min,
    Max,
    Contains,
    Prefix,
    Suffix,
    PrefixSuffix,
    Row,
    EveryOf,
    AnyOf,
    BTree,
);

/// Writes a comma separated list of matchers.
fn write_list(f: &mut Formatter<'_>, matchers: &[Matcher]) -> std::fmt::Result {
    for (i, matcher) in matchers.iter().enumerate() {
        if i > 0 {
            f.write_str(",")?;
        }
        write!(f, "{matcher}")?;
    }
    Ok(())
}

/// Returns every character boundary of `text`, including `0` and `text.len()`.
pub(crate) fn boundaries(text: &str) -> Vec<usize> {
    text.char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .collect()
}

/// Returns the byte offset just after the first `n` characters of `text`.
pub(crate) fn rune_offset(text: &str, n: usize) -> Option<usize> {
    text.char_indices()
        .map(|(offset, _)| offset)
        .chain(std::iter::once(text.len()))
        .nth(n)
}

/// Returns the byte offset just before the last `n` characters of `text`.
pub(crate) fn rune_offset_back(text: &str, n: usize) -> Option<usize> {
    if n == 0 {
        return Some(text.len());
    }
    text.char_indices().rev().nth(n - 1).map(|(offset, _)| offset)
}

/// Returns an [`Index`] for a single character occurrence found at `offset`.
fn single_rune_index(offset: usize, c: char) -> Index {
    (offset, vec![offset + c.len_utf8()])
}

/// Computes an [`Index`] by trying every slice of `text`.
///
/// Used by the combinators whose occurrences cannot be derived from their children
/// directly. A fixed-width matcher only has one candidate end per start, anything else is
/// quadratic in the number of characters.
pub(crate) fn index_by_matching(matcher: &impl Match, text: &str) -> Option<Index> {
    let bounds = boundaries(text);
    let length = matcher.length();
    bounds.iter().enumerate().find_map(|(i, &start)| {
        let ends: Vec<usize> = match length {
            MatchLength::Fixed(runes) => bounds
                .get(i + runes)
                .copied()
                .filter(|&end| matcher.matches(&text[start..end]))
                .into_iter()
                .collect(),
            _ => bounds
                .iter()
                .skip(i + length.min_runes())
                .copied()
                .filter(|&end| matcher.matches(&text[start..end]))
                .collect(),
        };
        (!ends.is_empty()).then_some((start, ends))
    })
}
