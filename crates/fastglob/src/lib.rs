#![deny(missing_docs)]
//! Fast glob matching by compiling patterns into a tree of specialized matchers.
//!
//! A pattern is parsed once into a syntax tree and then compiled into a
//! [`Matcher`]. The compiler fuses adjacent wildcards into length bounds, collapses runs
//! of fixed-width pieces into a single row and picks a cheap pivot to split the input
//! around, so matching a string rarely needs to backtrack.
//!
//! # Syntax
//!
//! - `*` matches any run of characters that does not contain a separator,
//! - `**` matches any run of characters,
//! - `?` matches exactly one character that is not a separator,
//! - `[abc]`, `[a-z]` match one character of a set or range, `[!abc]` and `[!a-z]` one
//!   character outside of it,
//! - `{a,b,c}` matches any of the comma separated alternatives, which may be nested,
//! - `\` escapes the next character.
//!
//! Separators are given at compile time, usually `/` for paths or `.` for host names. A
//! match always has to consume the entire input.
//!
//! ```rust
//! use fastglob::{compile, Separators};
//!
//! let glob = compile("*.{github,gitlab}.com", '.').unwrap();
//! assert!(glob.matches("api.github.com"));
//! assert!(!glob.matches("api.v2.github.com"));
//!
//! let glob = compile("**.github.com", Separators::from('.')).unwrap();
//! assert!(glob.matches("api.v2.github.com"));
//! ```

pub mod ast;
pub mod compiler;
mod glob;
pub mod lexer;
pub mod matcher;
pub mod parser;
mod separators;

pub use ast::Node;
pub use compiler::CompileError;
pub use glob::{compile, Glob, GlobError};
pub use matcher::{Match, MatchLength, Matcher};
pub use parser::ParseError;
pub use separators::Separators;
