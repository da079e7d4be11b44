//! # linecalc
//!
//! linecalc is an interactive line calculator written in Rust.
//! It tokenizes, parses, and evaluates integer arithmetic expressions with
//! the four basic operators and parentheses, one self-contained line at a
//! time.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{evaluator::evaluate, lexer::tokenize, parser::parse},
};

/// Defines the structure of parsed expressions.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of an arithmetic expression as a tree. The AST is
/// built by the parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines the number and binary-operation node shapes.
/// - Attaches source columns to AST nodes for error reporting.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised while lexing, parsing,
/// or evaluating a line. It standardizes error reporting and carries the
/// column where each failure was detected.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches columns and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the expression pipeline.
///
/// This module ties together lexing, parsing, and evaluation to provide the
/// complete tokenize → parse → evaluate pipeline for a single line.
///
/// # Responsibilities
/// - Coordinates the core components: lexer, parser, and evaluator.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// Runs the interactive calculator loop.
///
/// This module implements the line-oriented session: it reads one line at a
/// time from a reader, feeds it through the pipeline, and writes the result
/// or a diagnostic to a writer. The session owns line truncation and the
/// `exit` command; the pipeline itself never sees either.
///
/// # Responsibilities
/// - Reads, bounds, and dispatches input lines.
/// - Renders results and diagnostics in the transcript format.
/// - Terminates on `exit` or end of input.
pub mod session;

/// Evaluates a single expression line and returns its integer value.
///
/// This is the main library entry point. The line is tokenized, parsed into
/// an expression tree, and folded to a value; the tree is dropped before the
/// function returns, so no allocation outlives the call.
///
/// # Errors
/// Returns an [`Error`] if the line contains a character outside the accepted
/// set, does not match the expression grammar, or divides by zero.
///
/// # Examples
/// ```
/// use linecalc::eval_line;
///
/// assert_eq!(eval_line("2+3*4").unwrap(), 14);
/// assert_eq!(eval_line("(2+3)*4").unwrap(), 20);
///
/// // Anything outside digits, operators and parentheses is rejected.
/// assert!(eval_line("2+x").is_err());
/// ```
pub fn eval_line(line: &str) -> Result<i64, Error> {
    let tokens = tokenize(line)?;
    let expr = parse(&tokens)?;
    let value = evaluate(&expr)?;

    Ok(value)
}
