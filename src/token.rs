use std::fmt;

/// Source location for error reporting and coverage checks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    /// Byte offset into the source text.
    pub offset: usize,
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number.
    pub column: usize,
}

/// Token kinds produced by the lexer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// Identifier (`[A-Za-z_][A-Za-z0-9_]*`).
    Identifier,
    /// Unsigned integer literal (`[0-9]+`).
    Number,
    /// Single-character operator or punctuation (`- + * / = ( ) ,`).
    Operator,
    /// Double-quoted string literal, quotes included in the text.
    String,
    /// Comment (`# ...` to end of line). Recognized by the lexer
    /// but never present in its output.
    Comment,
    /// A character no rule matched. Always exactly one character.
    Invalid,
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Identifier => "identifier",
            Self::Number => "number",
            Self::Operator => "operator",
            Self::String => "string",
            Self::Comment => "comment",
            Self::Invalid => "invalid character",
        };
        f.write_str(name)
    }
}

/// A single token with its kind, exact source text, and location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    pub text: String,
    pub span: Span,
}
