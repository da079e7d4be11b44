use logos::Logos;

use crate::error::ParseError;

/// Represents a lexical token in the input line.
/// A token is a minimal but meaningful unit of text produced by the lexer.
/// This enum defines all recognized tokens in the calculator's grammar.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
pub enum Token {
    /// Integer literal tokens, such as `42`. A literal is the maximal run of
    /// consecutive digits.
    #[regex(r"[0-9]+", parse_integer)]
    Integer(i64),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,

    /// Spaces, tabs, carriage returns and `=` signs carry no meaning and are
    /// skipped.
    #[regex(r"[ \t\r=]+", logos::skip)]
    Ignored,
}

/// Converts an input line into a stream of `(token, column)` pairs.
///
/// The filter is all-or-nothing: a single character outside the accepted set
/// rejects the entire line, and no partial stream is returned. The column is
/// the byte offset of the token in the line and is carried through the
/// parser into error reports.
///
/// # Parameters
/// - `line`: The raw input line.
///
/// # Returns
/// The token stream in input order.
///
/// # Errors
/// - `InvalidCharacter` if a character is outside the accepted symbol set.
/// - `LiteralTooLarge` if a digit run does not fit in an `i64`.
///
/// # Example
/// ```
/// use linecalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("1 + 2 =").unwrap();
/// assert_eq!(tokens,
///            vec![(Token::Integer(1), 0), (Token::Plus, 2), (Token::Integer(2), 4)]);
/// ```
pub fn tokenize(line: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(line);

    while let Some(token) = lexer.next() {
        if let Ok(tok) = token {
            tokens.push((tok, lexer.span().start));
        } else {
            let slice = lexer.slice();
            let col = lexer.span().start;

            // A matched digit run only errors when its value overflows.
            return Err(if slice.starts_with(|c: char| c.is_ascii_digit()) {
                           ParseError::LiteralTooLarge { col }
                       } else {
                           ParseError::InvalidCharacter { found: slice.to_string(),
                                                          col }
                       });
        }
    }

    Ok(tokens)
}

/// Parses an integer literal from the current token slice.
///
/// # Parameters
/// - `lex`: Reference to the Logos lexer at the current token.
///
/// # Returns
/// - `Some(i64)`: The parsed integer value if it fits.
/// - `None`: If the digit run overflows an `i64`.
fn parse_integer(lex: &logos::Lexer<Token>) -> Option<i64> {
    lex.slice().parse().ok()
}
