use std::iter::Peekable;

use crate::{
    error::ParseError,
    interpreter::{lexer::{Spanned, Token}, parser::core::ParseResult},
};

/// Finds the parenthesis closing the one at `open`.
///
/// # Parameters
/// - `tokens`: Token slice.
/// - `open`: Index of a `(` token.
///
/// # Returns
/// The index of the matching `)`, or `None` if it is never closed.
#[must_use]
pub fn matching_paren(tokens: &[Spanned], open: usize) -> Option<usize> {
    let mut depth = 0usize;
    for (index, (token, _)) in tokens.iter().enumerate().skip(open) {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => {
                depth = depth.checked_sub(1)?;
                if depth == 0 {
                    return Some(index);
                }
            },
            _ => {},
        }
    }
    None
}

/// Returns the index of the first token outside any parentheses for which
/// `predicate` holds.
pub fn find_top_level(tokens: &[Spanned], predicate: impl Fn(&Token) -> bool) -> Option<usize> {
    let mut depth = 0usize;
    for (index, (token, _)) in tokens.iter().enumerate() {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => depth = depth.saturating_sub(1),
            tok if depth == 0 && predicate(tok) => return Some(index),
            _ => {},
        }
    }
    None
}

/// Splits a token slice on every `separator` outside parentheses.
///
/// Quoted text is a single token, so separators inside literals never split.
/// An empty slice yields one empty piece.
///
/// # Example
/// ```
/// use catlang::interpreter::{
///     lexer::{Token, tokenize},
///     parser::utils::split_top_level,
/// };
///
/// let tokens = tokenize("\"a + b\" + f(1 + 2) + c", 1).unwrap();
/// let pieces = split_top_level(&tokens, &Token::Plus);
///
/// assert_eq!(pieces.len(), 3);
/// assert_eq!(pieces[1].len(), 6);
/// ```
#[must_use]
pub fn split_top_level<'t>(tokens: &'t [Spanned], separator: &Token) -> Vec<&'t [Spanned]> {
    let mut pieces = Vec::new();
    let mut depth = 0usize;
    let mut start = 0;

    for (index, (token, _)) in tokens.iter().enumerate() {
        match token {
            Token::LParen => depth += 1,
            Token::RParen => depth = depth.saturating_sub(1),
            tok if depth == 0 && tok == separator => {
                pieces.push(&tokens[start..index]);
                start = index + 1;
            },
            _ => {},
        }
    }
    pieces.push(&tokens[start..]);
    pieces
}

/// Returns `true` when the slice is exactly `name(...)` with the closing
/// parenthesis as its last token.
#[must_use]
pub fn is_single_call(tokens: &[Spanned]) -> bool {
    matches!(tokens,
             [(Token::Identifier(_), _), (Token::LParen, _), ..]
             if matching_paren(tokens, 1) == Some(tokens.len() - 1))
}

/// Parses a comma-separated list of items until a closing token.
///
/// An immediately encountered closing token produces an empty list.
///
/// Grammar (simplified): `list := item ("," item)*`
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first item or closing token.
/// - `parse_item`: Function used to parse each list element.
/// - `closing`: The token that terminates the list.
/// - `line`: Line number for error reporting.
///
/// # Errors
/// Returns a `ParseError` if an item fails to parse, an unexpected token is
/// encountered, or the stream ends before the closing token.
pub(in crate::interpreter::parser) fn parse_comma_separated<'a, I, T>(
    tokens: &mut Peekable<I>,
    parse_item: impl Fn(&mut Peekable<I>) -> ParseResult<T>,
    closing: &Token,
    line: usize)
    -> ParseResult<Vec<T>>
    where I: Iterator<Item = &'a Spanned> + Clone
{
    let mut items = Vec::new();
    if let Some((tok, _)) = tokens.peek()
       && tok == closing
    {
        tokens.next();

        return Ok(items);
    }
    loop {
        items.push(parse_item(tokens)?);
        match tokens.peek() {
            Some((Token::Comma, _)) => {
                tokens.next();
            },
            Some((tok, _)) if tok == closing => {
                tokens.next();
                break;
            },
            Some((tok, _)) => {
                return Err(ParseError::UnexpectedToken { token: format!("expected ',' or '{closing}', found '{tok}'"),
                                                         line });
            },
            None => return Err(ParseError::ExpectedClosingParen { line }),
        }
    }
    Ok(items)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    #[test]
    fn matching_paren_skips_nested_groups() {
        let tokens = tokenize("f(g(1), (2)) + 3", 1).unwrap();

        assert_eq!(matching_paren(&tokens, 1), Some(10));
        assert_eq!(matching_paren(&tokenize("f(1", 1).unwrap(), 1), None);
    }

    #[test]
    fn top_level_search_ignores_nested_operators() {
        let tokens = tokenize("f(a < b) < 3", 1).unwrap();

        assert_eq!(find_top_level(&tokens, Token::is_comparison), Some(6));
    }

    #[test]
    fn single_call_must_span_the_whole_slice() {
        assert!(is_single_call(&tokenize("add(1, 2)", 1).unwrap()));
        assert!(!is_single_call(&tokenize("add(1, 2) + 1", 1).unwrap()));
        assert!(!is_single_call(&tokenize("(1)", 1).unwrap()));
    }
}
