//! The syntax tree produced by the [parser](crate::parser).

/// A node of a parsed glob pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Node {
    /// A literal piece of text.
    Text(String),
    /// `*`, any run of characters without separators.
    Any,
    /// `**`, any run of characters.
    Super,
    /// `?`, exactly one non-separator character.
    Single,
    /// `[a-z]` or `[!a-z]`.
    Range {
        /// Lower bound, inclusive.
        lo: char,
        /// Upper bound, inclusive.
        hi: char,
        /// Whether the class is negated.
        not: bool,
    },
    /// `[abc]` or `[!abc]`.
    List {
        /// The characters of the class.
        chars: String,
        /// Whether the class is negated.
        not: bool,
    },
    /// A sequence of nodes that have to match one after the other.
    Pattern(Vec<Node>),
    /// `{a,b}`, a set of alternative patterns.
    AnyOf(Vec<Node>),
}

impl Node {
    /// Convenience constructor for a [`Node::Text`].
    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    /// Convenience constructor for a [`Node::List`].
    pub fn list(chars: impl Into<String>, not: bool) -> Self {
        Node::List {
            chars: chars.into(),
            not,
        }
    }
}
