use crate::token::{Span, Token, TokenKind};

/// Single characters recognized as operator/punctuation tokens.
const OPERATORS: &str = "-+*/=(),";

/// Lexical rules in priority order. The first rule that matches at
/// the cursor wins, so an alphanumeric run starting with a letter is
/// one identifier, never an identifier followed by a number.
const RULES: [(TokenKind, fn(&str) -> Option<usize>); 5] = [
    (TokenKind::Identifier, match_identifier),
    (TokenKind::Number, match_number),
    (TokenKind::Operator, match_operator),
    (TokenKind::String, match_string),
    (TokenKind::Comment, match_comment),
];

/// Tokenize source text into a sequence of tokens.
///
/// Never fails: a character no rule matches becomes a one-character
/// [`TokenKind::Invalid`] token and the cursor moves past it, so the
/// lexer always makes progress and terminates on arbitrary input.
/// Comments are consumed but produce no token, and whitespace only
/// separates tokens.
#[must_use]
pub fn tokenize(input: &str) -> Vec<Token> {
    Lexer::new(input).tokenize()
}

struct Lexer<'a> {
    input: &'a str,
    pos: usize,
    line: usize,
    col: usize,
}

impl<'a> Lexer<'a> {
    const fn new(input: &'a str) -> Self {
        Self {
            input,
            pos: 0,
            line: 1,
            col: 1,
        }
    }

    fn tokenize(mut self) -> Vec<Token> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace();
            let rest = &self.input[self.pos..];
            let Some(ch) = rest.chars().next() else {
                break;
            };

            let span = self.span();
            if let Some((kind, len)) = match_rule(rest) {
                if kind != TokenKind::Comment {
                    tokens.push(Token {
                        kind,
                        text: rest[..len].to_string(),
                        span,
                    });
                }
                self.advance_over(len);
            } else {
                // catch-all for characters outside every rule
                tokens.push(Token {
                    kind: TokenKind::Invalid,
                    text: ch.to_string(),
                    span,
                });
                self.advance_over(ch.len_utf8());
            }
        }

        tokens
    }

    const fn span(&self) -> Span {
        Span {
            offset: self.pos,
            line: self.line,
            column: self.col,
        }
    }

    fn skip_whitespace(&mut self) {
        while let Some(ch) = self.input[self.pos..].chars().next() {
            if matches!(ch, ' ' | '\t' | '\r' | '\n') {
                self.advance_over(ch.len_utf8());
            } else {
                break;
            }
        }
    }

    /// Move the cursor past `len` bytes, keeping line/column in sync.
    fn advance_over(&mut self, len: usize) {
        for ch in self.input[self.pos..self.pos + len].chars() {
            if ch == '\n' {
                self.line += 1;
                self.col = 1;
            } else {
                self.col += 1;
            }
        }
        self.pos += len;
    }
}

fn match_rule(rest: &str) -> Option<(TokenKind, usize)> {
    RULES
        .iter()
        .find_map(|&(kind, matcher)| matcher(rest).map(|len| (kind, len)))
}

/// `[A-Za-z_][A-Za-z0-9_]*`
fn match_identifier(rest: &str) -> Option<usize> {
    let first = rest.chars().next()?;
    if !first.is_ascii_alphabetic() && first != '_' {
        return None;
    }
    let len = rest
        .find(|c: char| !c.is_ascii_alphanumeric() && c != '_')
        .unwrap_or(rest.len());
    Some(len)
}

/// `[0-9]+`
fn match_number(rest: &str) -> Option<usize> {
    if !rest.starts_with(|c: char| c.is_ascii_digit()) {
        return None;
    }
    let len = rest
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(rest.len());
    Some(len)
}

/// One character from `- + * / = ( ) ,`.
fn match_operator(rest: &str) -> Option<usize> {
    let first = rest.chars().next()?;
    OPERATORS.contains(first).then_some(1)
}

/// `"` + zero or more non-`"` characters + closing `"`.
///
/// An unterminated string matches nothing, so its opening quote falls
/// through to the invalid-character catch-all.
fn match_string(rest: &str) -> Option<usize> {
    let body = rest.strip_prefix('"')?;
    body.find('"').map(|close| close + 2)
}

/// `#` up to, but not including, the next newline.
fn match_comment(rest: &str) -> Option<usize> {
    if !rest.starts_with('#') {
        return None;
    }
    Some(rest.find('\n').unwrap_or(rest.len()))
}
