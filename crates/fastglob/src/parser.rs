//! A recursive descent parser that turns the tokens of a pattern into a [`Node`] tree.

use std::iter::Peekable;

use thiserror::Error;

use crate::{
    ast::Node,
    lexer::{Lexer, Token},
};

/// An error that occurred while parsing a glob pattern.
#[derive(Debug, Clone, Error, Eq, PartialEq)]
pub enum ParseError {
    /// A `[` without a matching `]`.
    #[error("unclosed character class starting at offset {0}")]
    UnclosedClass(usize),

    /// A character class without any members.
    #[error("empty character class at offset {0}")]
    EmptyClass(usize),

    /// A character range whose lower bound is larger than its upper bound.
    #[error("invalid character range '{lo}-{hi}'")]
    InvalidRange {
        /// The lower bound
        lo: char,
        /// The upper bound
        hi: char,
    },

    /// A `{` without a matching `}`.
    #[error("unclosed alternatives, expected '}}'")]
    UnclosedTerms,

    /// A `}` without a preceding `{`.
    #[error("unexpected '}}' at offset {0}")]
    UnexpectedTermsClose(usize),

    /// The pattern ends with an unescaped `\`.
    #[error("the pattern ends with an escape character")]
    TrailingEscape,

    /// A token that is not allowed at its position.
    #[error("unexpected {0}")]
    UnexpectedToken(Token),

    /// The token stream ended early.
    #[error("unexpected end of pattern")]
    UnexpectedEof,
}

/// Parses a glob pattern. The root of the returned tree is always a [`Node::Pattern`].
pub fn parse(pattern: &str) -> Result<Node, ParseError> {
    let tokens = Lexer::new(pattern).tokenize()?;
    let mut parser = Parser {
        tokens: tokens.into_iter().peekable(),
    };
    let root = parser.parse_pattern()?;
    parser.expect(Token::Eof)?;
    Ok(root)
}

struct Parser {
    tokens: Peekable<std::vec::IntoIter<Token>>,
}

impl Parser {
    fn next(&mut self) -> Result<Token, ParseError> {
        self.tokens.next().ok_or(ParseError::UnexpectedEof)
    }

    fn expect(&mut self, expected: Token) -> Result<(), ParseError> {
        match self.next()? {
            token if token == expected => Ok(()),
            token => Err(ParseError::UnexpectedToken(token)),
        }
    }

    /// Parses a sequence of nodes up to the end of the pattern or of the current
    /// alternative.
    fn parse_pattern(&mut self) -> Result<Node, ParseError> {
        let mut nodes = Vec::new();
        loop {
            match self.tokens.peek() {
                None | Some(Token::Eof | Token::Separator | Token::TermsClose) => break,
                Some(_) => {}
            }

            let node = match self.next()? {
                Token::Text(text) => Node::Text(text),
                Token::Any => Node::Any,
                Token::Super => Node::Super,
                Token::Single => Node::Single,
                Token::RangeOpen => self.parse_class()?,
                Token::TermsOpen => self.parse_terms()?,
                token => return Err(ParseError::UnexpectedToken(token)),
            };
            nodes.push(node);
        }
        Ok(Node::Pattern(nodes))
    }

    /// Parses the remainder of a character class after its `[`.
    fn parse_class(&mut self) -> Result<Node, ParseError> {
        let not = self.tokens.next_if_eq(&Token::Not).is_some();
        let node = match self.next()? {
            Token::RangeLo(lo) => {
                self.expect(Token::RangeBetween)?;
                match self.next()? {
                    Token::RangeHi(hi) => Node::Range { lo, hi, not },
                    token => return Err(ParseError::UnexpectedToken(token)),
                }
            }
            Token::Chars(chars) => Node::List { chars, not },
            token => return Err(ParseError::UnexpectedToken(token)),
        };
        self.expect(Token::RangeClose)?;
        Ok(node)
    }

    /// Parses the alternatives after a `{`.
    fn parse_terms(&mut self) -> Result<Node, ParseError> {
        let mut alternatives = Vec::new();
        loop {
            alternatives.push(self.parse_pattern()?);
            match self.next()? {
                Token::Separator => continue,
                Token::TermsClose => break,
                Token::Eof => return Err(ParseError::UnclosedTerms),
                token => return Err(ParseError::UnexpectedToken(token)),
            }
        }
        Ok(Node::AnyOf(alternatives))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use rstest::rstest;

    fn pattern(nodes: impl IntoIterator<Item = Node>) -> Node {
        Node::Pattern(nodes.into_iter().collect())
    }

    fn any_of(nodes: impl IntoIterator<Item = Node>) -> Node {
        Node::AnyOf(nodes.into_iter().collect())
    }

    #[test]
    fn test_parse_sequence() {
        assert_eq!(
            parse("abc*?[!a-z][xy]**").unwrap(),
            pattern([
                Node::text("abc"),
                Node::Any,
                Node::Single,
                Node::Range {
                    lo: 'a',
                    hi: 'z',
                    not: true
                },
                Node::list("xy", false),
                Node::Super,
            ])
        );
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(parse("").unwrap(), pattern([]));
    }

    #[test]
    fn test_parse_alternatives() {
        assert_eq!(
            parse("{abc,def}ghi").unwrap(),
            pattern([
                any_of([pattern([Node::text("abc")]), pattern([Node::text("def")])]),
                Node::text("ghi"),
            ])
        );
    }

    #[test]
    fn test_parse_nested_and_empty_alternatives() {
        assert_eq!(
            parse("{a,{b,*},}").unwrap(),
            pattern([any_of([
                pattern([Node::text("a")]),
                pattern([any_of([
                    pattern([Node::text("b")]),
                    pattern([Node::Any]),
                ])]),
                pattern([]),
            ])])
        );
    }

    #[rstest]
    #[case("[abc", ParseError::UnclosedClass(0))]
    #[case("{abc", ParseError::UnclosedTerms)]
    #[case("{a,{b}", ParseError::UnclosedTerms)]
    #[case("abc}", ParseError::UnexpectedTermsClose(3))]
    #[case("[b-a]", ParseError::InvalidRange { lo: 'b', hi: 'a' })]
    #[case("a\\", ParseError::TrailingEscape)]
    fn test_parse_errors(#[case] input: &str, #[case] expected: ParseError) {
        assert_eq!(parse(input).unwrap_err(), expected);
    }

    #[test]
    fn test_error_messages() {
        assert_matches!(parse("[]"), Err(ParseError::EmptyClass(0)));
        assert_eq!(
            parse("[]").unwrap_err().to_string(),
            "empty character class at offset 0"
        );
        assert_eq!(
            parse("{a").unwrap_err().to_string(),
            "unclosed alternatives, expected '}'"
        );
    }
}
