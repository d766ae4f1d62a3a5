//! Fuses runs of adjacent wildcards into cheaper equivalent matchers.
//!
//! A run is a maximal sequence of `*`, `**`, `?` and negated single-character classes
//! that all refuse the same set of characters. Such a run only constrains the number of
//! characters and which characters may appear, so it can be replaced by a length bound
//! combined with an exclusion.

use crate::{
    matcher::{Any, Contains, EveryOf, Matcher, Max, Min, Super},
    Separators,
};

/// The characters a wildcard-like matcher refuses to consume.
#[derive(Debug, Clone, Copy)]
enum Refused<'a> {
    Nothing,
    Set(&'a Separators),
    Chars(&'a str),
    Span(char, char),
}

impl Refused<'_> {
    /// Returns true if both describe exactly the same characters.
    fn same_as(&self, other: &Refused<'_>) -> bool {
        match (*self, *other) {
            (Refused::Nothing, Refused::Nothing) => true,
            (Refused::Nothing, Refused::Set(set)) | (Refused::Set(set), Refused::Nothing) => {
                set.is_empty()
            }
            (Refused::Set(a), Refused::Set(b)) => a == b,
            (Refused::Chars(chars), other) | (other, Refused::Chars(chars)) => {
                Refused::Set(&Separators::from(chars)).same_as(&other)
            }
            (Refused::Set(set), Refused::Span(lo, hi)) | (Refused::Span(lo, hi), Refused::Set(set)) => {
                set.is_span(lo, hi)
            }
            (Refused::Span(a_lo, a_hi), Refused::Span(b_lo, b_hi)) => a_lo == b_lo && a_hi == b_hi,
            (Refused::Nothing, Refused::Span(..)) | (Refused::Span(..), Refused::Nothing) => false,
        }
    }

    /// The refused characters as a set. Spans are never materialized.
    fn to_separators(self) -> Option<Separators> {
        match self {
            Refused::Nothing => Some(Separators::none()),
            Refused::Set(set) => Some(set.clone()),
            Refused::Chars(chars) => Some(Separators::from(chars)),
            Refused::Span(..) => None,
        }
    }
}

/// How a matcher takes part in a run of wildcards.
#[derive(Debug, Clone, Copy)]
enum Wildcard<'a> {
    /// Any number of characters.
    Many(Refused<'a>),
    /// Exactly one character.
    One(Refused<'a>),
}

impl<'a> Wildcard<'a> {
    fn of(matcher: &'a Matcher) -> Option<Self> {
        match matcher {
            Matcher::Super(_) => Some(Wildcard::Many(Refused::Nothing)),
            Matcher::Any(any) => Some(Wildcard::Many(Refused::Set(any.separators()))),
            Matcher::Single(single) => Some(Wildcard::One(Refused::Set(single.separators()))),
            Matcher::List(list) if list.is_negated() => {
                Some(Wildcard::One(Refused::Chars(list.chars())))
            }
            Matcher::Range(range) if range.is_negated() => {
                let (lo, hi) = range.bounds();
                Some(Wildcard::One(Refused::Span(lo, hi)))
            }
            _ => None,
        }
    }

    fn refused(self) -> Refused<'a> {
        match self {
            Wildcard::Many(refused) | Wildcard::One(refused) => refused,
        }
    }
}

/// Runs the fusion pass over a sequence of matchers.
///
/// Matchers that are not part of a run of two or more compatible wildcards are passed
/// through unchanged. Applying the pass to its own output changes nothing.
pub fn glue(matchers: Vec<Matcher>) -> Vec<Matcher> {
    let mut glued = Vec::with_capacity(matchers.len());
    let mut run: Vec<Matcher> = Vec::new();

    for matcher in matchers {
        let fits = match (run.first().and_then(Wildcard::of), Wildcard::of(&matcher)) {
            (_, None) => false,
            (None, Some(_)) => true,
            (Some(first), Some(current)) => first.refused().same_as(&current.refused()),
        };

        if fits {
            run.push(matcher);
            continue;
        }

        flush(&mut run, &mut glued);
        if Wildcard::of(&matcher).is_some() {
            run.push(matcher);
        } else {
            glued.push(matcher);
        }
    }
    flush(&mut run, &mut glued);

    glued
}

fn flush(run: &mut Vec<Matcher>, glued: &mut Vec<Matcher>) {
    if run.len() > 1 {
        if let Some(fused) = fuse(run) {
            tracing::trace!("fused {} wildcards into {fused}", run.len());
            glued.push(fused);
            run.clear();
            return;
        }
    }
    glued.append(run);
}

/// Builds the single matcher equivalent to a run of compatible wildcards.
fn fuse(run: &[Matcher]) -> Option<Matcher> {
    let wildcards: Vec<Wildcard<'_>> = run.iter().filter_map(Wildcard::of).collect();
    let singles = wildcards
        .iter()
        .filter(|w| matches!(w, Wildcard::One(_)))
        .count();
    let unbounded = singles < wildcards.len();

    // A run of only negated ranges has no set to express the exclusion with.
    let separators = wildcards
        .iter()
        .find_map(|w| w.refused().to_separators())?;

    if singles == 0 {
        return Some(if separators.is_empty() {
            Super.into()
        } else {
            Any::new(separators).into()
        });
    }

    if unbounded && separators.is_empty() {
        return Some(Min::new(singles).into());
    }

    let mut every: Vec<Matcher> = vec![Min::new(singles).into()];
    if !unbounded {
        every.push(Max::new(singles).into());
    }
    if let Some(exclusion) = exclusion(separators) {
        every.push(exclusion);
    }
    Some(EveryOf::new(every).into())
}

/// A matcher that accepts exactly the texts without any of the separators.
fn exclusion(separators: Separators) -> Option<Matcher> {
    match separators.len() {
        0 => None,
        1 => separators
            .iter()
            .next()
            .map(|separator| Contains::new(separator, true).into()),
        _ => Some(Any::new(separators).into()),
    }
}
