#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during lexing or parsing.
pub enum ParseError {
    /// Found a character outside the accepted symbol set.
    InvalidCharacter {
        /// The rejected text.
        found: String,
        /// The column where the error occurred.
        col:   usize,
    },
    /// A numeric literal was too large to be represented safely.
    LiteralTooLarge {
        /// The column where the error occurred.
        col: usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The column where the error occurred.
        col:   usize,
    },
    /// Reached the end of input where a number or `(` was expected.
    UnexpectedEndOfInput,
    /// A closing parenthesis `)` was expected but not found.
    ExpectedClosingParen {
        /// The column of the unmatched `(`.
        col: usize,
    },
    /// Found extra tokens after parsing should have completed.
    UnexpectedTrailingTokens {
        /// The extra/unexpected token.
        token: String,
        /// The column where the error occurred.
        col:   usize,
    },
    /// Parentheses were nested deeper than the parser allows.
    NestingTooDeep {
        /// The column of the `(` that exceeded the limit.
        col: usize,
    },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCharacter { found, col } => {
                write!(f, "Error at column {col}: Invalid character: {found}.")
            },

            Self::LiteralTooLarge { col } => {
                write!(f, "Error at column {col}: Literal is too large.")
            },

            Self::UnexpectedToken { token, col } => {
                write!(f, "Error at column {col}: Unexpected token: {token}.")
            },

            Self::UnexpectedEndOfInput => write!(f, "Error: Unexpected end of input."),

            Self::ExpectedClosingParen { col } => write!(f,
                                                         "Error at column {col}: Expected closing parenthesis ')' but none found."),

            Self::UnexpectedTrailingTokens { token, col } => write!(f,
                                                                    "Error at column {col}: Extra tokens after expression. Check your input: {token}"),

            Self::NestingTooDeep { col } => {
                write!(f, "Error at column {col}: Parentheses nested too deeply.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
