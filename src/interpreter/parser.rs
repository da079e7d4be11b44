use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr},
    error::ParseError,
    interpreter::lexer::Token,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Maximum parenthesis nesting depth accepted by the parser.
///
/// Input lines are externally bounded, so this limit is unreachable through
/// the session; it keeps recursion bounded for direct library callers.
pub const MAX_NESTING_DEPTH: usize = 32;

/// Parses a complete token stream into an expression tree.
///
/// This is the entry point for parsing. It parses one full expression
/// starting at the lowest-precedence level and then requires the stream to
/// be exhausted; trailing tokens reject the line. On failure no tree is
/// returned.
///
/// # Parameters
/// - `tokens`: The `(token, column)` stream produced by the lexer.
///
/// # Returns
/// The root of the parsed expression tree.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the stream is empty or ends mid-expression.
/// - `UnexpectedTrailingTokens` if tokens remain after the expression.
/// - Propagates any error from the grammar rules below.
///
/// # Example
/// ```
/// use linecalc::interpreter::{lexer::tokenize, parser::parse};
///
/// let tokens = tokenize("1+2").unwrap();
/// assert!(parse(&tokens).is_ok());
///
/// let tokens = tokenize("1+").unwrap();
/// assert!(parse(&tokens).is_err());
/// ```
pub fn parse(tokens: &[(Token, usize)]) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();

    let expr = parse_expression(&mut iter, 0)?;

    if let Some((token, col)) = iter.next() {
        return Err(ParseError::UnexpectedTrailingTokens { token: format!("{token:?}"),
                                                          col:   *col, });
    }

    Ok(expr)
}

/// Parses addition and subtraction expressions.
///
/// Handles the left-associative binary operators `+` and `-`: each
/// repetition folds the previously built subtree as the new left child, so
/// `10-2-3` parses as `(10-2)-3`.
///
/// The rule is: `expression := term (("+" | "-") term)*`
///
/// # Parameters
/// - `tokens`: Token stream with column information.
/// - `depth`: Current parenthesis nesting depth.
///
/// # Returns
/// An `Expr::BinaryOp` tree combining term-level nodes.
pub(crate) fn parse_expression<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_term(tokens, depth)?;
    loop {
        if let Some((token, col)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Add | BinaryOperator::Sub)
        {
            let col = *col;
            tokens.next();

            let right = parse_term(tokens, depth)?;

            left = Expr::BinaryOp { op,
                                    left: Box::new(left),
                                    right: Box::new(right),
                                    col };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses multiplication and division expressions.
///
/// Handles the left-associative binary operators `*` and `/`. A term is
/// parsed fully before it is combined at the additive layer, which is what
/// makes `*` and `/` bind tighter than `+` and `-`.
///
/// The rule is: `term := factor (("*" | "/") factor)*`
///
/// # Parameters
/// - `tokens`: Token stream with column information.
/// - `depth`: Current parenthesis nesting depth.
///
/// # Returns
/// An `Expr::BinaryOp` tree combining factor-level nodes.
pub(crate) fn parse_term<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let mut left = parse_factor(tokens, depth)?;
    loop {
        if let Some((token, col)) = tokens.peek()
           && let Some(op) = token_to_binary_operator(token)
           && matches!(op, BinaryOperator::Mul | BinaryOperator::Div)
        {
            let col = *col;
            tokens.next();

            let right = parse_factor(tokens, depth)?;

            left = Expr::BinaryOp { op,
                                    left: Box::new(left),
                                    right: Box::new(right),
                                    col };
            continue;
        }
        break;
    }
    Ok(left)
}

/// Parses a factor, the atomic level of the grammar.
///
/// A factor is either an integer literal or a parenthesized expression.
/// This function dispatches on the peeked token; any other token, or the end
/// of the stream, is a syntax error.
///
/// The rule is: `factor := number | "(" expression ")"`
///
/// # Parameters
/// - `tokens`: Token stream positioned at the start of a factor.
/// - `depth`: Current parenthesis nesting depth.
///
/// # Returns
/// The parsed factor node.
///
/// # Errors
/// - `UnexpectedEndOfInput` if the stream ends where a factor is expected.
/// - `UnexpectedToken` if the next token cannot begin a factor.
/// - Propagates grouping errors from [`parse_grouping`].
pub(crate) fn parse_factor<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let peeked = tokens.peek().ok_or(ParseError::UnexpectedEndOfInput)?;

    match peeked {
        (Token::Integer(value), col) => {
            let expr = Expr::Number { value: *value,
                                      col:   *col, };
            tokens.next();
            Ok(expr)
        },
        (Token::LParen, _) => parse_grouping(tokens, depth),
        (token, col) => Err(ParseError::UnexpectedToken { token: format!("{token:?}"),
                                                          col:   *col, }),
    }
}

/// Parses a parenthesized expression.
///
/// Consumes the `(`, recursively parses a full expression, and requires the
/// matching `)`. A missing closing parenthesis is a hard error; the parser
/// never silently continues past it.
///
/// # Parameters
/// - `tokens`: Token stream positioned at `(`.
/// - `depth`: Nesting depth before entering this group.
///
/// # Returns
/// The inner expression; the parentheses leave no node of their own.
///
/// # Errors
/// - `NestingTooDeep` if the depth limit is exceeded.
/// - `ExpectedClosingParen` if the group is not closed.
fn parse_grouping<'a, I>(tokens: &mut Peekable<I>, depth: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a (Token, usize)>
{
    let col = match tokens.next() {
        Some((Token::LParen, col)) => *col,
        _ => unreachable!("caller peeked LParen"),
    };

    if depth >= MAX_NESTING_DEPTH {
        return Err(ParseError::NestingTooDeep { col });
    }

    let expr = parse_expression(tokens, depth + 1)?;

    match tokens.next() {
        Some((Token::RParen, _)) => Ok(expr),
        _ => Err(ParseError::ExpectedClosingParen { col }),
    }
}

/// Maps a token to its corresponding binary operator.
///
/// Returns `Some(BinaryOperator)` when the token represents one of the four
/// arithmetic operators, and `None` for all other tokens.
///
/// # Parameters
/// - `token`: Token to convert.
///
/// # Returns
/// `Some(BinaryOperator)` if the token corresponds to a binary operator,
/// otherwise `None`.
///
/// # Example
/// ```
/// use linecalc::{
///     ast::BinaryOperator,
///     interpreter::{lexer::Token, parser::token_to_binary_operator},
/// };
///
/// assert_eq!(token_to_binary_operator(&Token::Plus),
///            Some(BinaryOperator::Add));
/// assert_eq!(token_to_binary_operator(&Token::LParen), None);
/// ```
#[must_use]
pub const fn token_to_binary_operator(token: &Token) -> Option<BinaryOperator> {
    match token {
        Token::Plus => Some(BinaryOperator::Add),
        Token::Minus => Some(BinaryOperator::Sub),
        Token::Star => Some(BinaryOperator::Mul),
        Token::Slash => Some(BinaryOperator::Div),
        _ => None,
    }
}
