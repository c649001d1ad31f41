//! Lexer, recursive-descent parser, and symbol tables for a minimal
//! arithmetic expression language.
//!
//! Source text goes through two stages: [`tokenize`] turns it into a
//! flat token sequence, and [`parse`] turns that sequence into a typed
//! expression tree with the usual precedence (`*`/`/` bind tighter
//! than `+`/`-`, all left-associative). Four interchangeable
//! symbol-table implementations round out the crate; they share one
//! trait but are populated by the caller, not by the parser.
//!
//! # Quick start
//!
//! ## Tokenize and parse an expression
//!
//! ```
//! use arithlang::{parse_str, tokenize, TokenKind};
//!
//! let tokens = tokenize("x = 1 # trailing comment");
//! assert_eq!(tokens.len(), 3);
//! assert_eq!(tokens[0].kind, TokenKind::Identifier);
//!
//! let expr = parse_str("2 + 3 * 4").unwrap();
//! assert_eq!(expr.to_string(), "(+ 2 (* 3 4))");
//! ```
//!
//! ## Use a symbol table
//!
//! ```
//! use arithlang::{OrderedSymbolTable, SymbolTable};
//!
//! let mut table = OrderedSymbolTable::new();
//! table.insert("x", 1);
//! table.insert("x", 2);
//! // the ordered variant keeps returning the first write
//! assert_eq!(table.lookup("x"), Some(&1));
//! ```

// Allow noisy pedantic lints that don't add value for
// a library crate.
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::module_name_repetitions
)]

pub mod ast;
pub mod lexer;
pub mod parser;
pub mod symtab;
pub mod token;

pub use ast::{BinOp, Expr};
pub use lexer::tokenize;
pub use parser::{ParseError, ParseErrorKind, parse};
pub use symtab::{
    HashedSymbolTable, LineDirection, Metadata, OrderedSymbolTable, SymbolTable, TreeSymbolTable,
    UnorderedSymbolTable,
};
pub use token::{Span, Token, TokenKind};

/// Tokenize and parse one expression in a single step.
///
/// # Errors
///
/// Returns `ParseError` if the token sequence breaks the expression
/// grammar. Tokenizing itself never fails.
pub fn parse_str(input: &str) -> Result<Expr, ParseError> {
    parse(&tokenize(input))
}
