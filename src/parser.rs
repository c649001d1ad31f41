use std::fmt;

use crate::ast::{BinOp, Expr};
use crate::token::{Span, Token, TokenKind};

/// Classifies a parser error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A required token kind was missing or mismatched.
    ExpectedToken {
        expected: TokenKind,
        found: Option<String>,
    },
    /// Expected `)` closing a parenthesized expression.
    ExpectedCloseParen { found: Option<String> },
    /// A token that cannot start a factor, or end of input where a
    /// factor was required.
    UnexpectedToken { found: Option<String> },
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExpectedToken {
                expected,
                found: None,
            } => {
                write!(f, "expected {expected}, got end of input")
            }
            Self::ExpectedToken {
                expected,
                found: Some(t),
            } => {
                write!(f, "expected {expected}, got '{t}'")
            }
            Self::ExpectedCloseParen { found: None } => {
                write!(f, "expected ')', got end of input")
            }
            Self::ExpectedCloseParen { found: Some(t) } => {
                write!(f, "expected ')', got '{t}'")
            }
            Self::UnexpectedToken { found: None } => {
                write!(f, "unexpected end of input")
            }
            Self::UnexpectedToken { found: Some(t) } => {
                write!(f, "unexpected token '{t}'")
            }
        }
    }
}

/// Error produced during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind} at line {}, column {}", span.line, span.column)]
pub struct ParseError {
    pub kind: ParseErrorKind,
    pub span: Span,
}

/// Parse one expression from a token slice.
///
/// Multiplication and division bind tighter than addition and
/// subtraction; same-level operators fold left to right. Trailing
/// tokens after the first full expression are left unconsumed.
///
/// # Errors
///
/// Returns `ParseError` on the first token that breaks the grammar;
/// there is no recovery and no partial result.
pub fn parse(tokens: &[Token]) -> Result<Expr, ParseError> {
    Parser::new(tokens).expr()
}

struct Parser<'a> {
    tokens: &'a [Token],
    pos: usize,
}

impl<'a> Parser<'a> {
    const fn new(tokens: &'a [Token]) -> Self {
        Self { tokens, pos: 0 }
    }

    fn current(&self) -> Option<&Token> {
        self.tokens.get(self.pos)
    }

    /// `expr := term (('+' | '-') term)*`
    fn expr(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.term()?;
        while let Some(op) = self.peek_operator(&[("+", BinOp::Add), ("-", BinOp::Sub)]) {
            self.pos += 1;
            let right = self.term()?;
            node = Expr::binary(op, node, right);
        }
        Ok(node)
    }

    /// `term := factor (('*' | '/') factor)*`
    fn term(&mut self) -> Result<Expr, ParseError> {
        let mut node = self.factor()?;
        while let Some(op) = self.peek_operator(&[("*", BinOp::Mul), ("/", BinOp::Div)]) {
            self.pos += 1;
            let right = self.factor()?;
            node = Expr::binary(op, node, right);
        }
        Ok(node)
    }

    /// `factor := NUMBER | IDENTIFIER | STRING | '(' expr ')'`
    fn factor(&mut self) -> Result<Expr, ParseError> {
        let Some(token) = self.current().cloned() else {
            return Err(ParseError {
                kind: ParseErrorKind::UnexpectedToken { found: None },
                span: self.eof_span(),
            });
        };

        if token.kind == TokenKind::Operator && token.text == "(" {
            self.pos += 1;
            let inner = self.expr()?;
            self.expect_close_paren()?;
            return Ok(inner);
        }

        match token.kind {
            TokenKind::Number => {
                self.eat(TokenKind::Number)?;
                Ok(Expr::Number(token.text))
            }
            TokenKind::Identifier => {
                self.eat(TokenKind::Identifier)?;
                Ok(Expr::Identifier(token.text))
            }
            TokenKind::String => {
                self.eat(TokenKind::String)?;
                Ok(Expr::String(token.text))
            }
            _ => Err(ParseError {
                kind: ParseErrorKind::UnexpectedToken {
                    found: Some(token.text),
                },
                span: token.span,
            }),
        }
    }

    /// If the current token is an operator listed in `table`, return
    /// the mapped binary operator without consuming it.
    fn peek_operator(&self, table: &[(&str, BinOp)]) -> Option<BinOp> {
        let token = self.current()?;
        if token.kind != TokenKind::Operator {
            return None;
        }
        table
            .iter()
            .find(|&&(text, _)| text == token.text)
            .map(|&(_, op)| op)
    }

    fn eat(&mut self, expected: TokenKind) -> Result<(), ParseError> {
        match self.current() {
            Some(token) if token.kind == expected => {
                self.pos += 1;
                Ok(())
            }
            Some(token) => Err(ParseError {
                kind: ParseErrorKind::ExpectedToken {
                    expected,
                    found: Some(token.text.clone()),
                },
                span: token.span,
            }),
            None => Err(ParseError {
                kind: ParseErrorKind::ExpectedToken {
                    expected,
                    found: None,
                },
                span: self.eof_span(),
            }),
        }
    }

    fn expect_close_paren(&mut self) -> Result<(), ParseError> {
        match self.current() {
            Some(token) if token.kind == TokenKind::Operator && token.text == ")" => {
                self.pos += 1;
                Ok(())
            }
            Some(token) => Err(ParseError {
                kind: ParseErrorKind::ExpectedCloseParen {
                    found: Some(token.text.clone()),
                },
                span: token.span,
            }),
            None => Err(ParseError {
                kind: ParseErrorKind::ExpectedCloseParen { found: None },
                span: self.eof_span(),
            }),
        }
    }

    fn eof_span(&self) -> Span {
        self.tokens.last().map_or(
            Span {
                offset: 0,
                line: 1,
                column: 1,
            },
            |last| last.span,
        )
    }
}
