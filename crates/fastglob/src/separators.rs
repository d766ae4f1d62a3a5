use std::fmt::{Display, Formatter};

use smallvec::SmallVec;

/// The set of characters that `*` and `?` are not allowed to consume.
///
/// A `**` wildcard ignores separators entirely. When the set is empty `*`,
/// `?` and `**` all behave the same way.
///
/// The characters are stored sorted and de-duplicated so two sets built from
/// the same characters in a different order compare equal.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Separators(SmallVec<[char; 2]>);

impl Separators {
    /// Creates a new set from the given characters.
    pub fn new(chars: impl IntoIterator<Item = char>) -> Self {
        let mut chars: SmallVec<[char; 2]> = chars.into_iter().collect();
        chars.sort_unstable();
        chars.dedup();
        Self(chars)
    }

    /// An empty set, wildcards may consume any character.
    pub fn none() -> Self {
        Self::default()
    }

    /// Returns true if there are no separators.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the number of distinct separator characters.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if `c` is one of the separators.
    pub fn contains(&self, c: char) -> bool {
        self.0.binary_search(&c).is_ok()
    }

    /// Iterates over the separators in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }

    /// Returns true if this set contains exactly the characters `lo..=hi`.
    pub(crate) fn is_span(&self, lo: char, hi: char) -> bool {
        let (Some(&first), Some(&last)) = (self.0.first(), self.0.last()) else {
            return false;
        };
        if first != lo || last != hi {
            return false;
        }
        // Sorted and unique, so the set is contiguous iff the count matches.
        (lo..=hi).count() == self.0.len()
    }
}

impl FromIterator<char> for Separators {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl From<&str> for Separators {
    fn from(value: &str) -> Self {
        Self::new(value.chars())
    }
}

impl From<char> for Separators {
    fn from(value: char) -> Self {
        Self::new([value])
    }
}

impl<const N: usize> From<[char; N]> for Separators {
    fn from(value: [char; N]) -> Self {
        Self::new(value)
    }
}

impl Display for Separators {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for c in self.iter() {
            write!(f, "{c}")?;
        }
        Ok(())
    }
}
