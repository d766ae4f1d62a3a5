//! Turns a parsed [`Node`] tree into an executable [`Matcher`].
//!
//! Every pattern node is compiled in three passes over the matchers of its children:
//!
//! 1. [`glue`] fuses runs of adjacent wildcards into length bounds,
//! 2. [`minimize`] collapses runs of fixed-width matchers into a [`Row`](crate::matcher::Row),
//! 3. [`compile_matchers`] reduces the remaining sequence to a single matcher, either a
//!    specialized one (prefix, suffix, substring) or a [`BTree`](crate::matcher::BTree).

mod glue;
mod minimize;
mod tree;

pub use glue::glue;
pub use minimize::minimize;
pub use tree::compile_matchers;

use thiserror::Error;

use crate::{
    ast::Node,
    matcher::{Any, AnyOf, List, Matcher, Range, Single, Super, Text},
    Separators,
};

/// An error that can occur while compiling a syntax tree.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum CompileError {
    /// A sequence of matchers could not be reduced to a single matcher, for instance
    /// because it was empty.
    #[error("could not compile an empty or malformed sequence of matchers")]
    MalformedMatcherSequence,
}

/// Compiles a syntax tree, `*` and `?` will not consume any of the `separators`.
pub fn compile(node: &Node, separators: &Separators) -> Result<Matcher, CompileError> {
    let matcher = match node {
        Node::Text(text) => Text::new(text.as_str()).into(),
        Node::Any if separators.is_empty() => Super.into(),
        Node::Any => Any::new(separators.clone()).into(),
        Node::Super => Super.into(),
        Node::Single => Single::new(separators.clone()).into(),
        Node::Range { lo, hi, not } => Range::new(*lo, *hi, *not).into(),
        Node::List { chars, not } => List::new(chars.as_str(), *not).into(),
        Node::Pattern(children) if children.is_empty() => Text::new("").into(),
        Node::Pattern(children) => {
            let matchers = compile_children(children, separators)?;
            compile_matchers(minimize(glue(matchers)))?
        }
        Node::AnyOf(alternatives) if alternatives.is_empty() => {
            return Err(CompileError::MalformedMatcherSequence)
        }
        Node::AnyOf(alternatives) => AnyOf::new(compile_children(alternatives, separators)?).into(),
    };

    if matches!(node, Node::Pattern(_)) {
        tracing::trace!("compiled pattern node into {matcher}");
    }
    Ok(matcher)
}

fn compile_children(
    children: &[Node],
    separators: &Separators,
) -> Result<Vec<Matcher>, CompileError> {
    children
        .iter()
        .map(|child| compile(child, separators))
        .collect()
}
