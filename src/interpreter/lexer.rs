use std::ops::Range;

use logos::Logos;

use crate::error::ParseError;

/// Byte range of a token within its line.
pub type Span = Range<usize>;

/// A token paired with its span.
pub type Spanned = (Token, Span);

/// Represents a lexical token in a CatLang line.
///
/// Keywords only become tokens when they stand alone; `strength` is an
/// identifier, not `str` followed by `ength`. The words `true`, `false` and
/// `endl` are identifiers and get their meaning from context.
#[derive(Logos, Debug, PartialEq, Clone)]
pub enum Token {
    /// Numeric literal tokens, such as `3`, `3.14`, `.5` or `2.1e-10`.
    #[regex(r"[0-9]+(\.[0-9]+)?([eE][+-]?[0-9]+)?", parse_number)]
    #[regex(r"\.[0-9]+([eE][+-]?[0-9]+)?", parse_number)]
    Number(f64),
    /// Quoted text literal tokens; the payload excludes the quotes.
    #[regex(r#""[^"]*""#, parse_text)]
    Text(String),
    /// `str`
    #[token("str")]
    Str,
    /// `num`
    #[token("num")]
    Num,
    /// `bool`
    #[token("bool")]
    Bool,
    /// `void`
    #[token("void")]
    Void,
    /// `purr`
    #[token("purr")]
    Purr,
    /// `if`
    #[token("if")]
    If,
    /// `else`
    #[token("else")]
    Else,
    /// `return`
    #[token("return")]
    Return,
    /// Identifier tokens; variable or function names such as `x` or `add`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `~>`
    #[token("~>")]
    Arrow,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `,`
    #[token(",")]
    Comma,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `{`
    #[token("{")]
    LBrace,
    /// `}`
    #[token("}")]
    RBrace,
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
    /// `==`
    #[token("==")]
    EqualEqual,
    /// `!=`
    #[token("!=")]
    BangEqual,
    /// `<=`
    #[token("<=")]
    LessEqual,
    /// `>=`
    #[token(">=")]
    GreaterEqual,
    /// `<`
    #[token("<")]
    Less,
    /// `>`
    #[token(">")]
    Greater,
    /// Spaces, tabs and feeds.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl Token {
    /// Returns `true` for the comparison operators `==`, `!=`, `<`, `>`, `<=`
    /// and `>=`.
    #[must_use]
    pub const fn is_comparison(&self) -> bool {
        matches!(self,
                 Self::EqualEqual
                 | Self::BangEqual
                 | Self::Less
                 | Self::Greater
                 | Self::LessEqual
                 | Self::GreaterEqual)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Self::Number(n) => return write!(f, "{n}"),
            Self::Text(t) => return write!(f, "\"{t}\""),
            Self::Identifier(name) => return f.write_str(name),
            Self::Str => "str",
            Self::Num => "num",
            Self::Bool => "bool",
            Self::Void => "void",
            Self::Purr => "purr",
            Self::If => "if",
            Self::Else => "else",
            Self::Return => "return",
            Self::Arrow => "~>",
            Self::Semicolon => ";",
            Self::Comma => ",",
            Self::LParen => "(",
            Self::RParen => ")",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::Plus => "+",
            Self::Minus => "-",
            Self::Star => "*",
            Self::Slash => "/",
            Self::EqualEqual => "==",
            Self::BangEqual => "!=",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::Ignored => "",
        };
        f.write_str(text)
    }
}

/// Tokenizes one cleaned line.
///
/// # Parameters
/// - `text`: The line to tokenize.
/// - `line`: Line number used for error reporting.
///
/// # Returns
/// Every token of the line with its byte span.
///
/// # Errors
/// Returns [`ParseError::InvalidToken`] for the first character sequence that
/// matches no token, such as `@` or an unterminated quote.
///
/// # Example
/// ```
/// use catlang::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("num x ~> 2;", 1).unwrap();
/// let kinds: Vec<_> = tokens.into_iter().map(|(token, _)| token).collect();
///
/// assert_eq!(kinds,
///            vec![Token::Num,
///                 Token::Identifier("x".to_string()),
///                 Token::Arrow,
///                 Token::Number(2.0),
///                 Token::Semicolon]);
/// assert!(tokenize("purr ~> \"open;", 1).is_err());
/// ```
pub fn tokenize(text: &str, line: usize) -> Result<Vec<Spanned>, ParseError> {
    let mut tokens = Vec::new();
    let mut lexer = Token::lexer(text);

    while let Some(token) = lexer.next() {
        match token {
            Ok(tok) => tokens.push((tok, lexer.span())),
            Err(()) => {
                return Err(ParseError::InvalidToken { text: lexer.slice().to_string(),
                                                      line });
            },
        }
    }

    Ok(tokens)
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed floating-point value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// Strips the surrounding quotes from a text literal.
fn parse_text(lex: &logos::Lexer<Token>) -> String {
    let slice = lex.slice();
    slice[1..slice.len() - 1].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(text: &str) -> Vec<Token> {
        tokenize(text, 1).unwrap().into_iter().map(|(token, _)| token).collect()
    }

    #[test]
    fn keywords_need_word_boundaries() {
        assert_eq!(kinds("strength"), vec![Token::Identifier("strength".to_string())]);
        assert_eq!(kinds("str s"),
                   vec![Token::Str, Token::Identifier("s".to_string())]);
    }

    #[test]
    fn text_literals_keep_inner_spaces_and_operators() {
        assert_eq!(kinds("\"a + b, c\""), vec![Token::Text("a + b, c".to_string())]);
    }

    #[test]
    fn spans_point_into_the_line() {
        let tokens = tokenize("purr ~> name;", 1).unwrap();

        assert_eq!(tokens[2].1, 8..12);
    }

    #[test]
    fn comparison_operators_prefer_longest_match() {
        assert_eq!(kinds("a <= 3"),
                   vec![Token::Identifier("a".to_string()),
                        Token::LessEqual,
                        Token::Number(3.0)]);
    }

    #[test]
    fn unknown_characters_are_errors() {
        assert_eq!(tokenize("num x ~> 2 @ 3;", 4),
                   Err(ParseError::InvalidToken { text: "@".to_string(),
                                                  line: 4, }));
    }
}
