/// An abstract syntax tree (AST) node representing an arithmetic expression.
///
/// `Expr` has exactly two shapes: an integer literal leaf and a binary
/// operation with two owned children. A node is immutable once constructed,
/// and the tree built by one parse call is owned exclusively by that call;
/// dropping the root tears down the whole tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// An integer literal.
    Number {
        /// The literal value.
        value: i64,
        /// Column in the input line.
        col:   usize,
    },
    /// A binary operation (addition, subtraction, multiplication, division).
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
        /// Column of the operator in the input line.
        col:   usize,
    },
}

impl Expr {
    /// Gets the source column from `self`.
    /// ## Example
    /// ```
    /// use linecalc::ast::Expr;
    ///
    /// let expr = Expr::Number { value: 7, col: 3 };
    ///
    /// assert_eq!(expr.column(), 3);
    /// ```
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::Number { col, .. } | Self::BinaryOp { col, .. } => *col,
        }
    }
}

/// Represents a binary operator.
///
/// Only the four integer arithmetic operators exist in this language.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}
