use itertools::Itertools;

use crate::matcher::{Match, Matcher, Row};

/// Runs the collapse pass: every run of two or more adjacent fixed-width primitives is
/// replaced by a single [`Row`].
pub fn minimize(matchers: Vec<Matcher>) -> Vec<Matcher> {
    let mut minimized = Vec::with_capacity(matchers.len());
    for (fixed, chunk) in &matchers.into_iter().chunk_by(is_row_member) {
        let mut chunk: Vec<Matcher> = chunk.collect();
        if fixed && chunk.len() > 1 {
            let row = Row::new(chunk);
            tracing::trace!("collapsed fixed-width run into {row}");
            minimized.push(row.into());
        } else {
            minimized.append(&mut chunk);
        }
    }
    minimized
}

/// Combinators are kept out of rows even when their length happens to be fixed.
fn is_row_member(matcher: &Matcher) -> bool {
    !matches!(
        matcher,
        Matcher::EveryOf(_) | Matcher::AnyOf(_) | Matcher::BTree(_)
    ) && matcher.length().fixed().is_some()
}
