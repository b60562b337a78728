/// Entry points of the expression parser.
///
/// Contains the parse result type and the functions that parse a complete
/// numeric expression or a single function call from a token slice.
pub mod core;

/// Unary and primary expression parsing.
///
/// Handles negation, literals, variables, function calls and parenthesized
/// groups.
pub mod unary;

/// Binary operator parsing.
///
/// Implements the additive and multiplicative precedence levels and maps
/// tokens to arithmetic and comparison operators.
pub mod binary;

/// Block collection.
///
/// Gathers the lines of a brace-delimited body by tracking nesting depth
/// across lines.
pub mod block;

/// Statement recognition.
///
/// Classifies a cleaned line into one of the statement forms.
pub mod statement;

/// Utility functions for the parser.
///
/// Provides parenthesis matching and top-level splitting of token slices.
pub mod utils;
