/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST as a pure recursive fold, performing
/// integer arithmetic and producing a single value. It is the final stage of
/// the pipeline.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Reports runtime errors such as division by zero.
pub mod evaluator;
/// The lexer module tokenizes an input line for further parsing.
///
/// The lexer (tokenizer) reads the raw line and produces a stream of tokens
/// for digits, operators, and parentheses. Spaces and `=` signs are elided;
/// any other character rejects the whole line. This is the first stage of
/// the pipeline.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source columns.
/// - Aggregates digit runs into integer literals.
/// - Reports lexical errors for characters outside the accepted set.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that encodes operator precedence and parenthesization
/// structurally, by recursive descent.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the expression grammar, reporting errors with column info.
/// - Rejects trailing tokens and unbalanced parentheses.
pub mod parser;
