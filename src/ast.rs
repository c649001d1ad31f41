use std::fmt;

/// Binary operator in an expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
}

impl BinOp {
    /// The operator's source symbol.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
        }
    }
}

/// Expression AST node.
///
/// Leaves carry the exact token text they were built from (string
/// literals keep their quotes). Trees are built once by the parser
/// and never mutated; each binary node exclusively owns its children.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// Integer literal.
    Number(String),
    /// Identifier reference.
    Identifier(String),
    /// String literal, quotes included.
    String(String),
    /// Binary operation.
    Binary {
        op: BinOp,
        left: Box<Expr>,
        right: Box<Expr>,
    },
}

impl Expr {
    /// Build a binary node, boxing both children.
    #[must_use]
    pub fn binary(op: BinOp, left: Self, right: Self) -> Self {
        Self::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }
}

/// Renders the tree as an s-expression, e.g. `(+ 2 (* 3 4))`.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(text) | Self::Identifier(text) | Self::String(text) => {
                f.write_str(text)
            }
            Self::Binary { op, left, right } => {
                write!(f, "({} {left} {right})", op.symbol())
            }
        }
    }
}
