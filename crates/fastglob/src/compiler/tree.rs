use crate::matcher::{BTree, Contains, Match, Matcher, Prefix, PrefixSuffix, Suffix};

use super::CompileError;

/// Builds a single matcher from a glued and minimized sequence.
///
/// Short sequences made of literals and `**` map onto dedicated matchers. Everything
/// else becomes a [`BTree`] around the widest fixed-length matcher, with both sides
/// compiled recursively.
pub fn compile_matchers(mut matchers: Vec<Matcher>) -> Result<Matcher, CompileError> {
    if matchers.len() <= 1 {
        return matchers.pop().ok_or(CompileError::MalformedMatcherSequence);
    }

    if let Some(specialized) = specialize(&matchers) {
        return Ok(specialized);
    }

    let pivot = select_pivot(&matchers).unwrap_or(0);
    let right = matchers.split_off(pivot + 1);
    let value = matchers
        .pop()
        .ok_or(CompileError::MalformedMatcherSequence)?;
    let left = matchers;

    let left = if left.is_empty() {
        None
    } else {
        Some(compile_matchers(left)?)
    };
    let right = if right.is_empty() {
        None
    } else {
        Some(compile_matchers(right)?)
    };

    Ok(BTree::new(value, left, right).into())
}

/// Picks the matcher with the largest fixed length. On ties the later one wins, a later
/// candidate of equal length replaces the current pick (`>=`).
fn select_pivot(matchers: &[Matcher]) -> Option<usize> {
    matchers
        .iter()
        .enumerate()
        .filter_map(|(idx, matcher)| matcher.length().fixed().map(|runes| (idx, runes)))
        .max_by_key(|&(_, runes)| runes)
        .map(|(idx, _)| idx)
}

/// Recognizes the shapes that have a dedicated matcher.
fn specialize(matchers: &[Matcher]) -> Option<Matcher> {
    match matchers {
        [Matcher::Text(prefix), Matcher::Super(_)] => Some(Prefix::new(prefix.as_str()).into()),
        [Matcher::Super(_), Matcher::Text(suffix)] => Some(Suffix::new(suffix.as_str()).into()),
        [Matcher::Text(prefix), Matcher::Super(_), Matcher::Text(suffix)] => {
            Some(PrefixSuffix::new(prefix.as_str(), suffix.as_str()).into())
        }
        _ => contains(matchers),
    }
}

/// Recognizes a single literal surrounded by nothing but `**`.
fn contains(matchers: &[Matcher]) -> Option<Matcher> {
    let mut others = matchers
        .iter()
        .enumerate()
        .filter(|(_, matcher)| !matches!(matcher, Matcher::Super(_)));
    match (others.next(), others.next()) {
        (Some((idx, Matcher::Text(needle))), None) if idx > 0 && idx + 1 < matchers.len() => {
            Some(Contains::new(needle.as_str(), false).into())
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matcher::{Any, List, Min, Range, Row, Single, Super, Text};
    use crate::Separators;
    use assert_matches::assert_matches;

    fn separators() -> Separators {
        Separators::from(".")
    }

    #[test]
    fn test_empty_sequence_is_rejected() {
        assert_matches!(
            compile_matchers(vec![]),
            Err(CompileError::MalformedMatcherSequence)
        );
    }

    #[test]
    fn test_single_matcher_is_returned() {
        assert_eq!(
            compile_matchers(vec![Min::new(3).into()]).unwrap(),
            Min::new(3).into()
        );
    }

    #[test]
    fn test_pivot_prefers_later_on_ties() {
        assert_eq!(
            compile_matchers(vec![
                Super.into(),
                Single::new(separators()).into(),
                Text::new("c").into(),
            ])
            .unwrap(),
            BTree::new(
                Text::new("c").into(),
                Some(
                    BTree::new(
                        Single::new(separators()).into(),
                        Some(Super.into()),
                        None
                    )
                    .into()
                ),
                None,
            )
            .into()
        );
    }

    #[test]
    fn test_pivot_with_wildcards_on_both_sides() {
        assert_eq!(
            compile_matchers(vec![
                Any::new(separators()).into(),
                Text::new("c").into(),
                Any::new(separators()).into(),
            ])
            .unwrap(),
            BTree::new(
                Text::new("c").into(),
                Some(Any::new(separators()).into()),
                Some(Any::new(separators()).into()),
            )
            .into()
        );
    }

    #[test]
    fn test_row_is_returned_directly() {
        let row: Matcher = Row::new([
            Range::new('a', 'c', true).into(),
            List::new("zte", false).into(),
            Text::new("c").into(),
            Single::new(Separators::none()).into(),
        ])
        .into();
        assert_eq!(compile_matchers(vec![row.clone()]).unwrap(), row);
    }

    #[test]
    fn test_without_fixed_matchers_the_first_is_the_pivot() {
        assert_eq!(
            compile_matchers(vec![Any::new(separators()).into(), Min::new(1).into()]).unwrap(),
            BTree::new(
                Any::new(separators()).into(),
                None,
                Some(Min::new(1).into())
            )
            .into()
        );
    }

    #[test]
    fn test_specialized_shapes() {
        let text = |s: &str| -> Matcher { Text::new(s).into() };
        let sup = || -> Matcher { Super.into() };
        assert_eq!(
            compile_matchers(vec![text("abc"), sup()]).unwrap(),
            Prefix::new("abc").into()
        );
        assert_eq!(
            compile_matchers(vec![sup(), text("abc")]).unwrap(),
            Suffix::new("abc").into()
        );
        assert_eq!(
            compile_matchers(vec![text("abc"), sup(), text("def")]).unwrap(),
            PrefixSuffix::new("abc", "def").into()
        );
        assert_eq!(
            compile_matchers(vec![sup(), sup(), text("abc"), sup()]).unwrap(),
            Contains::new("abc", false).into()
        );
    }

    #[test]
    fn test_prefix_needs_super() {
        // `*` with separators must not be turned into a prefix check.
        assert_eq!(
            compile_matchers(vec![Text::new("a.").into(), Any::new(separators()).into()])
                .unwrap(),
            BTree::new(
                Text::new("a.").into(),
                None,
                Some(Any::new(separators()).into())
            )
            .into()
        );
    }
}
