//! Splits a glob pattern into [`Token`]s.

use std::{
    fmt::{Display, Formatter},
    iter::Peekable,
    str::CharIndices,
};

use crate::parser::ParseError;

/// A lexical element of a glob pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Token {
    /// Literal text, with escapes already resolved.
    Text(String),
    /// `*`
    Any,
    /// `**`
    Super,
    /// `?`
    Single,
    /// `[`
    RangeOpen,
    /// `!` directly after `[`
    Not,
    /// The lower bound of a character range.
    RangeLo(char),
    /// The `-` between the bounds of a character range.
    RangeBetween,
    /// The upper bound of a character range.
    RangeHi(char),
    /// The members of a character list.
    Chars(String),
    /// `]`
    RangeClose,
    /// `{`
    TermsOpen,
    /// `,` inside of braces.
    Separator,
    /// `}`
    TermsClose,
    /// The end of the pattern.
    Eof,
}

impl Display for Token {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Token::Text(text) => write!(f, "text '{text}'"),
            Token::Any => f.write_str("'*'"),
            Token::Super => f.write_str("'**'"),
            Token::Single => f.write_str("'?'"),
            Token::RangeOpen => f.write_str("'['"),
            Token::Not => f.write_str("'!'"),
            Token::RangeLo(c) | Token::RangeHi(c) => write!(f, "range bound '{c}'"),
            Token::RangeBetween => f.write_str("'-'"),
            Token::Chars(chars) => write!(f, "characters '{chars}'"),
            Token::RangeClose => f.write_str("']'"),
            Token::TermsOpen => f.write_str("'{'"),
            Token::Separator => f.write_str("','"),
            Token::TermsClose => f.write_str("'}'"),
            Token::Eof => f.write_str("end of pattern"),
        }
    }
}

/// Turns a pattern string into a list of tokens.
pub struct Lexer<'a> {
    chars: Peekable<CharIndices<'a>>,
    terms_depth: usize,
    tokens: Vec<Token>,
}

impl<'a> Lexer<'a> {
    /// Creates a lexer for `pattern`.
    pub fn new(pattern: &'a str) -> Self {
        Self {
            chars: pattern.char_indices().peekable(),
            terms_depth: 0,
            tokens: Vec::new(),
        }
    }

    /// Consumes the whole pattern. The returned tokens always end with [`Token::Eof`].
    pub fn tokenize(mut self) -> Result<Vec<Token>, ParseError> {
        while let Some((offset, c)) = self.chars.next() {
            match c {
                '*' => {
                    let token = if self.chars.next_if(|&(_, c)| c == '*').is_some() {
                        Token::Super
                    } else {
                        Token::Any
                    };
                    self.tokens.push(token);
                }
                '?' => self.tokens.push(Token::Single),
                '[' => self.lex_class(offset)?,
                '{' => {
                    self.terms_depth += 1;
                    self.tokens.push(Token::TermsOpen);
                }
                '}' if self.terms_depth > 0 => {
                    self.terms_depth -= 1;
                    self.tokens.push(Token::TermsClose);
                }
                '}' => return Err(ParseError::UnexpectedTermsClose(offset)),
                ',' if self.terms_depth > 0 => self.tokens.push(Token::Separator),
                '\\' => {
                    let (_, escaped) = self.chars.next().ok_or(ParseError::TrailingEscape)?;
                    self.push_text(escaped);
                }
                c => self.push_text(c),
            }
        }

        if self.terms_depth > 0 {
            return Err(ParseError::UnclosedTerms);
        }
        self.tokens.push(Token::Eof);
        Ok(self.tokens)
    }

    fn push_text(&mut self, c: char) {
        match self.tokens.last_mut() {
            Some(Token::Text(text)) => text.push(c),
            _ => self.tokens.push(Token::Text(c.to_string())),
        }
    }

    /// Lexes a character class, the opening `[` at `open` has already been consumed.
    fn lex_class(&mut self, open: usize) -> Result<(), ParseError> {
        self.tokens.push(Token::RangeOpen);
        if self.chars.next_if(|&(_, c)| c == '!').is_some() {
            self.tokens.push(Token::Not);
        }

        // Each member remembers whether it was escaped, an escaped `-` is never a range.
        let mut body: Vec<(char, bool)> = Vec::new();
        loop {
            match self.chars.next() {
                None => return Err(ParseError::UnclosedClass(open)),
                Some((_, ']')) => break,
                Some((_, '\\')) => {
                    let (_, c) = self.chars.next().ok_or(ParseError::UnclosedClass(open))?;
                    body.push((c, true));
                }
                Some((_, c)) => body.push((c, false)),
            }
        }

        match body.as_slice() {
            [] => return Err(ParseError::EmptyClass(open)),
            &[(lo, _), ('-', false), (hi, _)] => {
                if lo > hi {
                    return Err(ParseError::InvalidRange { lo, hi });
                }
                self.tokens.extend([
                    Token::RangeLo(lo),
                    Token::RangeBetween,
                    Token::RangeHi(hi),
                ]);
            }
            members => self
                .tokens
                .push(Token::Chars(members.iter().map(|&(c, _)| c).collect())),
        }
        self.tokens.push(Token::RangeClose);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    fn tokenize(pattern: &str) -> Result<Vec<Token>, ParseError> {
        Lexer::new(pattern).tokenize()
    }

    #[test]
    fn test_wildcards() {
        assert_eq!(
            tokenize("a*b**?").unwrap(),
            vec![
                Token::Text("a".into()),
                Token::Any,
                Token::Text("b".into()),
                Token::Super,
                Token::Single,
                Token::Eof,
            ]
        );
        assert_eq!(
            tokenize("***").unwrap(),
            vec![Token::Super, Token::Any, Token::Eof]
        );
    }

    #[test]
    fn test_escapes_join_text() {
        assert_eq!(
            tokenize(r"a\*b\\c").unwrap(),
            vec![Token::Text(r"a*b\c".into()), Token::Eof]
        );
        assert_matches!(tokenize(r"abc\"), Err(ParseError::TrailingEscape));
    }

    #[test]
    fn test_classes() {
        assert_eq!(
            tokenize("[!a-z]").unwrap(),
            vec![
                Token::RangeOpen,
                Token::Not,
                Token::RangeLo('a'),
                Token::RangeBetween,
                Token::RangeHi('z'),
                Token::RangeClose,
                Token::Eof,
            ]
        );
        assert_eq!(
            tokenize(r"[a\-z]").unwrap(),
            vec![
                Token::RangeOpen,
                Token::Chars("a-z".into()),
                Token::RangeClose,
                Token::Eof,
            ]
        );
        assert_eq!(
            tokenize("[*?{]").unwrap(),
            vec![
                Token::RangeOpen,
                Token::Chars("*?{".into()),
                Token::RangeClose,
                Token::Eof,
            ]
        );
    }

    #[test]
    fn test_class_errors() {
        assert_matches!(tokenize("ab[cd"), Err(ParseError::UnclosedClass(2)));
        assert_matches!(tokenize("[]"), Err(ParseError::EmptyClass(0)));
        assert_matches!(tokenize("[!]"), Err(ParseError::EmptyClass(0)));
        assert_matches!(
            tokenize("[z-a]"),
            Err(ParseError::InvalidRange { lo: 'z', hi: 'a' })
        );
    }

    #[test]
    fn test_terms() {
        assert_eq!(
            tokenize("a,{b,c}").unwrap(),
            vec![
                Token::Text("a,".into()),
                Token::TermsOpen,
                Token::Text("b".into()),
                Token::Separator,
                Token::Text("c".into()),
                Token::TermsClose,
                Token::Eof,
            ]
        );
        assert_matches!(tokenize("{a,b"), Err(ParseError::UnclosedTerms));
        assert_matches!(tokenize("ab}"), Err(ParseError::UnexpectedTermsClose(2)));
    }
}
