use std::iter::Peekable;

use crate::{
    ast::{Expr, UnaryOperator},
    error::ParseError,
    interpreter::{
        lexer::{Spanned, Token},
        parser::{
            core::{ParseResult, parse_expression},
            utils::parse_comma_separated,
        },
    },
};

/// Parses a unary expression.
///
/// Supports the prefix operator `-` (numeric negation). Unary operators are
/// right-associative, so `--x` is parsed as `-(-x)`.
///
/// Grammar:
/// ```text
///     unary := "-" unary
///            | primary
/// ```
pub(crate) fn parse_unary<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    if let Some((Token::Minus, _)) = tokens.peek() {
        tokens.next();
        let expr = parse_unary(tokens, line)?;
        Ok(Expr::UnaryOp { op:   UnaryOperator::Negate,
                           expr: Box::new(expr), })
    } else {
        parse_primary(tokens, line)
    }
}

/// Parses a primary (atomic) expression.
///
/// Grammar:
/// ```text
///     primary := number
///              | text
///              | identifier
///              | identifier "(" (expression ("," expression)*)? ")"
///              | "(" expression ")"
/// ```
/// # Parameters
/// - `tokens`: Token iterator positioned at the start of a primary expression.
/// - `line`: Line number for error reporting.
///
/// # Returns
/// The parsed primary [`Expr`] or a `ParseError` on failure.
pub(crate) fn parse_primary<'a, I>(tokens: &mut Peekable<I>, line: usize) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    match tokens.next() {
        Some((Token::Number(n), _)) => Ok(Expr::Number(*n)),
        Some((Token::Text(t), _)) => Ok(Expr::Text(t.clone())),
        Some((Token::Identifier(name), _)) => {
            if let Some((Token::LParen, _)) = tokens.peek() {
                tokens.next();
                let arguments =
                    parse_comma_separated(tokens, |t| parse_expression(t, line), &Token::RParen, line)?;
                Ok(Expr::FunctionCall { name: name.clone(),
                                        arguments })
            } else {
                Ok(Expr::Variable(name.clone()))
            }
        },
        Some((Token::LParen, _)) => {
            let expr = parse_expression(tokens, line)?;
            match tokens.next() {
                Some((Token::RParen, _)) => Ok(expr),
                _ => Err(ParseError::ExpectedClosingParen { line }),
            }
        },
        Some((tok, _)) => Err(ParseError::UnexpectedToken { token: format!("'{tok}'"),
                                                            line }),
        None => Err(ParseError::UnexpectedEndOfInput { line }),
    }
}
