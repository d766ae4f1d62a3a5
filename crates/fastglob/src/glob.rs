use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

use thiserror::Error;

use crate::{
    compiler::{self, CompileError},
    matcher::{Match, Matcher},
    parser::{self, ParseError},
    Separators,
};

/// An error that can occur when compiling a glob pattern.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum GlobError {
    /// The pattern is not syntactically valid.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The parsed pattern could not be turned into a matcher.
    #[error(transparent)]
    Compile(#[from] CompileError),
}

/// A compiled glob pattern.
///
/// ```rust
/// use fastglob::Glob;
///
/// let glob = Glob::new("api.*.com", '.').unwrap();
/// assert!(glob.matches("api.github.com"));
/// assert!(!glob.matches("api.github.co.uk.com"));
/// ```
#[derive(Debug, Clone)]
pub struct Glob {
    pattern: String,
    separators: Separators,
    matcher: Matcher,
}

impl Glob {
    /// Parses and compiles `pattern`. The `*` and `?` wildcards will not match any of the
    /// `separators`.
    pub fn new(pattern: &str, separators: impl Into<Separators>) -> Result<Self, GlobError> {
        let separators = separators.into();
        let root = parser::parse(pattern)?;
        let matcher = compiler::compile(&root, &separators)?;
        tracing::debug!(
            "compiled glob '{pattern}' with separators '{separators}' into {matcher}"
        );
        Ok(Self {
            pattern: pattern.to_owned(),
            separators,
            matcher,
        })
    }

    /// Returns true if the whole of `text` matches the pattern.
    pub fn matches(&self, text: &str) -> bool {
        self.matcher.matches(text)
    }

    /// The compiled matcher tree.
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// The pattern this glob was compiled from.
    pub fn as_str(&self) -> &str {
        &self.pattern
    }

    /// The separators the pattern was compiled with.
    pub fn separators(&self) -> &Separators {
        &self.separators
    }
}

impl Display for Glob {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.pattern)
    }
}

impl FromStr for Glob {
    type Err = GlobError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Glob::new(s, Separators::none())
    }
}

/// Compiles `pattern` into a [`Glob`], see [`Glob::new`].
pub fn compile(pattern: &str, separators: impl Into<Separators>) -> Result<Glob, GlobError> {
    Glob::new(pattern, separators)
}
