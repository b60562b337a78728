use thiserror::Error;

/// Represents all errors that can occur during lexing or parsing of a line.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Found an unexpected token while parsing.
    #[error("Error on line {line}: Unexpected token: {token}.")]
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Reached the end of the expression unexpectedly.
    #[error("Error on line {line}: Unexpected end of expression.")]
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing parenthesis `)` was expected but not found.
    #[error("Error on line {line}: Expected closing parenthesis ')' but none found.")]
    ExpectedClosingParen {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The lexer met a character sequence it does not understand.
    #[error("Error on line {line}: Invalid token: {text}")]
    InvalidToken {
        /// The offending slice of source text.
        text: String,
        /// The source line where the error occurred.
        line: usize,
    },
}
