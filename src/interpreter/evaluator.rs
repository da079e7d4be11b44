use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Evaluates an expression tree to a single integer.
///
/// The evaluator is a pure recursive fold with no shared state: a `Number`
/// leaf yields its value, and a `BinaryOp` node evaluates its left child,
/// then its right child, then applies the operator. Recursion depth equals
/// tree depth, which the parser bounds.
///
/// # Parameters
/// - `expr`: Root of the tree to evaluate.
///
/// # Returns
/// The computed value.
///
/// # Errors
/// - `DivisionByZero` if a division has a zero right operand.
///
/// # Example
/// ```
/// use linecalc::interpreter::{evaluator::evaluate, lexer::tokenize, parser::parse};
///
/// let tokens = tokenize("7/2").unwrap();
/// let expr = parse(&tokens).unwrap();
///
/// assert_eq!(evaluate(&expr).unwrap(), 3);
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<i64> {
    match expr {
        Expr::Number { value, .. } => Ok(*value),
        Expr::BinaryOp { op, left, right, col } => {
            let left = evaluate(left)?;
            let right = evaluate(right)?;

            eval_binary_op(*op, left, right, *col)
        },
    }
}

/// Applies a binary operator to two evaluated operands.
///
/// Addition, subtraction and multiplication use wrapping 64-bit signed
/// arithmetic. Division truncates toward zero; a zero divisor is checked
/// explicitly before dividing, and `i64::MIN / -1` wraps instead of
/// overflowing.
///
/// # Parameters
/// - `op`: The arithmetic operator.
/// - `left`: Left operand.
/// - `right`: Right operand.
/// - `col`: Column of the operator, for error reporting.
///
/// # Returns
/// An `EvalResult<i64>` containing the computed value.
fn eval_binary_op(op: BinaryOperator, left: i64, right: i64, col: usize) -> EvalResult<i64> {
    use BinaryOperator::{Add, Div, Mul, Sub};

    match op {
        Add => Ok(left.wrapping_add(right)),
        Sub => Ok(left.wrapping_sub(right)),
        Mul => Ok(left.wrapping_mul(right)),
        Div => {
            if right == 0 {
                Err(RuntimeError::DivisionByZero { col })
            } else {
                Ok(left.wrapping_div(right))
            }
        },
    }
}
