use std::iter::Peekable;

use crate::{
    ast::Expr,
    error::ParseError,
    interpreter::{
        lexer::Spanned,
        parser::binary::parse_additive,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Parses a numeric expression.
///
/// This is the entry point for expression parsing. It begins at the
/// lowest-precedence level, addition, and recursively descends through the
/// precedence hierarchy.
///
/// Grammar: `expression := additive`
///
/// # Parameters
/// - `tokens`: Token iterator providing `(Token, span)` pairs.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    parse_additive(tokens, line)
}

/// Parses a token slice that must contain exactly one expression.
///
/// # Errors
/// Returns a `ParseError` if the expression is malformed or if tokens remain
/// after it.
///
/// # Example
/// ```
/// use catlang::{
///     ast::{BinaryOperator, Expr},
///     interpreter::{lexer::tokenize, parser::core::parse_complete},
/// };
///
/// let tokens = tokenize("2 + 3 * 4", 1).unwrap();
/// let expr = parse_complete(&tokens, 1).unwrap();
///
/// assert!(matches!(expr, Expr::BinaryOp { op: BinaryOperator::Add, .. }));
/// assert!(parse_complete(&tokenize("2 +", 1).unwrap(), 1).is_err());
/// assert!(parse_complete(&tokenize("2 3", 1).unwrap(), 1).is_err());
/// ```
pub fn parse_complete(tokens: &[Spanned], line: usize) -> ParseResult<Expr> {
    let mut iter = tokens.iter().peekable();
    let expr = parse_expression(&mut iter, line)?;

    match iter.next() {
        Some((token, _)) => {
            Err(ParseError::UnexpectedToken { token: format!("'{token}' after end of expression"),
                                              line })
        },
        None => Ok(expr),
    }
}

/// Parses a token slice that must contain exactly one function call.
///
/// # Returns
/// The called name and its argument expressions.
///
/// # Errors
/// Returns a `ParseError` if the slice is not a single well-formed call.
pub fn parse_call(tokens: &[Spanned], line: usize) -> ParseResult<(String, Vec<Expr>)> {
    match parse_complete(tokens, line)? {
        Expr::FunctionCall { name, arguments } => Ok((name, arguments)),
        _ => Err(ParseError::UnexpectedToken { token: "expected a function call".to_string(),
                                               line }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ast::{BinaryOperator, UnaryOperator},
        interpreter::lexer::tokenize,
    };

    fn parse(text: &str) -> ParseResult<Expr> {
        parse_complete(&tokenize(text, 1).unwrap(), 1)
    }

    fn num(n: f64) -> Box<Expr> {
        Box::new(Expr::Number(n))
    }

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(parse("2 + 3 * 4").unwrap(),
                   Expr::BinaryOp { left:  num(2.0),
                                    op:    BinaryOperator::Add,
                                    right: Box::new(Expr::BinaryOp { left:  num(3.0),
                                                                     op:    BinaryOperator::Mul,
                                                                     right: num(4.0), }), });
    }

    #[test]
    fn subtraction_is_left_associative() {
        assert_eq!(parse("8 - 4 - 2").unwrap(),
                   Expr::BinaryOp { left:  Box::new(Expr::BinaryOp { left:  num(8.0),
                                                                     op:    BinaryOperator::Sub,
                                                                     right: num(4.0), }),
                                    op:    BinaryOperator::Sub,
                                    right: num(2.0), });
    }

    #[test]
    fn nested_calls_parse_as_arguments() {
        assert_eq!(parse("add(add(1, 2), -x)").unwrap(),
                   Expr::FunctionCall { name:      "add".to_string(),
                                        arguments:
                                            vec![Expr::FunctionCall { name:      "add".to_string(),
                                                                      arguments: vec![Expr::Number(1.0),
                                                                                      Expr::Number(2.0)], },
                                                 Expr::UnaryOp { op:   UnaryOperator::Negate,
                                                                 expr: Box::new(Expr::Variable("x".to_string())), }], });
    }

    #[test]
    fn empty_argument_list() {
        assert_eq!(parse("ping()").unwrap(),
                   Expr::FunctionCall { name:      "ping".to_string(),
                                        arguments: Vec::new(), });
    }

    #[test]
    fn unbalanced_parentheses_are_errors() {
        assert_eq!(parse("(1 + 2"), Err(ParseError::ExpectedClosingParen { line: 1 }));
        assert!(parse("1 + 2)").is_err());
        assert!(parse("f(1, 2").is_err());
    }

    #[test]
    fn call_parser_rejects_other_expressions() {
        assert!(parse_call(&tokenize("f(1) + 1", 1).unwrap(), 1).is_err());
        assert_eq!(parse_call(&tokenize("f(\"a\")", 1).unwrap(), 1).unwrap(),
                   ("f".to_string(), vec![Expr::Text("a".to_string())]));
    }
}
