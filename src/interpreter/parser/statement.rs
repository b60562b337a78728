use crate::{
    ast::{Expression, FunctionHeader, Param, Statement},
    interpreter::{
        lexer::{Spanned, Token, tokenize},
        parser::{
            core::ParseResult,
            utils::{is_single_call, matching_paren, split_top_level},
        },
        source::SourceLine,
        value::kind::{Kind, ReturnKind},
    },
};

/// Recognizes the statement form of a single cleaned line.
///
/// Forms are tried in a fixed priority order:
/// 1. a function definition header,
/// 2. a typed declaration initialized by exactly one function call,
/// 3. a `purr` statement,
/// 4. any other typed declaration,
/// 5. a bare function call,
/// 6. an `if` header (and `else` header),
/// 7. a `return` statement.
///
/// A line matching none of them is [`Statement::Unknown`].
///
/// # Errors
/// Returns a `ParseError` only when the line cannot be tokenized.
///
/// # Example
/// ```
/// use catlang::{
///     ast::Statement,
///     interpreter::{parser::statement::parse_statement, source::SourceLine},
/// };
///
/// let line = SourceLine::new(1, "purr ~> \"Hello\" + endl;");
/// assert!(matches!(parse_statement(&line), Ok(Statement::Print(_))));
///
/// let line = SourceLine::new(2, "meow meow");
/// assert!(matches!(parse_statement(&line), Ok(Statement::Unknown)));
/// ```
pub fn parse_statement(line: &SourceLine) -> ParseResult<Statement> {
    let tokens = tokenize(&line.text, line.number)?;
    let text = line.text.as_str();
    let number = line.number;

    if let Some(statement) = parse_function_header(&tokens, text) {
        return Ok(statement);
    }
    if let Some(statement) = parse_declaration(&tokens, text, number, true) {
        return Ok(statement);
    }
    if let Some(statement) = parse_print(&tokens, text, number) {
        return Ok(statement);
    }
    if let Some(statement) = parse_declaration(&tokens, text, number, false) {
        return Ok(statement);
    }
    if let Some(statement) = parse_call_statement(&tokens, text, number) {
        return Ok(statement);
    }
    if let Some(statement) = parse_conditional_header(&tokens, text, number) {
        return Ok(statement);
    }
    if let Some(statement) = parse_return(&tokens, text, number) {
        return Ok(statement);
    }

    Ok(Statement::Unknown)
}

/// Returns `true` if an expression slice holds a `;`, i.e. the line carries
/// more than one statement.
fn has_separator(tokens: &[Spanned]) -> bool {
    tokens.iter().any(|(token, _)| *token == Token::Semicolon)
}

/// Parses a function header: `kind name(kind param, ...) {`.
///
/// Parameter entries that are not a type keyword followed by a name are
/// skipped.
fn parse_function_header(tokens: &[Spanned], text: &str) -> Option<Statement> {
    let [(kind, _), (Token::Identifier(name), _), (Token::LParen, _), ..] = tokens else {
        return None;
    };
    let return_kind = ReturnKind::from_token(kind)?;
    let close = matching_paren(tokens, 2)?;
    let (Token::LBrace, brace) = tokens.get(close + 1)? else {
        return None;
    };

    let params = split_top_level(&tokens[3..close], &Token::Comma).into_iter()
                                                                   .filter_map(parse_param)
                                                                   .collect();

    Some(Statement::FunctionDefinition { header:     FunctionHeader { name: name.clone(),
                                                                      return_kind,
                                                                      params },
                                         body_start: text[brace.end..].to_string(), })
}

/// Parses one `kind name` parameter entry.
fn parse_param(tokens: &[Spanned]) -> Option<Param> {
    match tokens {
        [(kind, _), (Token::Identifier(name), _)] => Some(Param { kind: Kind::from_token(kind)?,
                                                                  name: name.clone(), }),
        _ => None,
    }
}

/// Parses a typed declaration: `kind name ~> value;`.
///
/// With `call_only` set, only declarations whose entire right-hand side is a
/// single function call match, producing [`Statement::CallDeclaration`].
/// Otherwise any right-hand side matches.
fn parse_declaration(tokens: &[Spanned],
                     text: &str,
                     line: usize,
                     call_only: bool)
                     -> Option<Statement> {
    let [(kind, _), (Token::Identifier(name), _), (Token::Arrow, _), value @ .., (Token::Semicolon, _)] =
        tokens
    else {
        return None;
    };
    let kind = Kind::from_token(kind)?;
    if has_separator(value) {
        return None;
    }
    let value = Expression::from_tokens(text, value, line);

    if is_single_call(&value.tokens) {
        Some(Statement::CallDeclaration { kind,
                                          name: name.clone(),
                                          call: value })
    } else if call_only {
        None
    } else {
        Some(Statement::Declaration { kind,
                                      name: name.clone(),
                                      value })
    }
}

/// Parses a print statement: `purr ~> expr;`.
fn parse_print(tokens: &[Spanned], text: &str, line: usize) -> Option<Statement> {
    match tokens {
        [(Token::Purr, _), (Token::Arrow, _), expr @ .., (Token::Semicolon, _)] if !has_separator(expr) => {
            Some(Statement::Print(Expression::from_tokens(text, expr, line)))
        },
        _ => None,
    }
}

/// Parses a bare call statement: `name(args);`.
fn parse_call_statement(tokens: &[Spanned], text: &str, line: usize) -> Option<Statement> {
    match tokens {
        [call @ .., (Token::Semicolon, _)] if is_single_call(call) => {
            Some(Statement::Call(Expression::from_tokens(text, call, line)))
        },
        _ => None,
    }
}

/// Parses an `if (cond) {` or `else {` header.
fn parse_conditional_header(tokens: &[Spanned], text: &str, line: usize) -> Option<Statement> {
    match tokens {
        [(Token::If, _), (Token::LParen, _), ..] => {
            let close = matching_paren(tokens, 1)?;
            let (Token::LBrace, brace) = tokens.get(close + 1)? else {
                return None;
            };
            Some(Statement::If { condition:  Expression::from_tokens(text, &tokens[2..close], line),
                                 body_start: text[brace.end..].to_string(), })
        },
        [(Token::Else, _), (Token::LBrace, brace), ..] => {
            Some(Statement::Else { body_start: text[brace.end..].to_string() })
        },
        _ => None,
    }
}

/// Parses `return expr;`, `return expr` or `return;`.
fn parse_return(tokens: &[Spanned], text: &str, line: usize) -> Option<Statement> {
    let [(Token::Return, _), rest @ ..] = tokens else {
        return None;
    };
    let rest = match rest {
        [value @ .., (Token::Semicolon, _)] => value,
        value => value,
    };
    if has_separator(rest) {
        return None;
    }

    let expression = (!rest.is_empty()).then(|| Expression::from_tokens(text, rest, line));
    Some(Statement::Return(expression))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Statement {
        parse_statement(&SourceLine::new(1, text)).unwrap()
    }

    #[test]
    fn function_header_with_params() {
        let Statement::FunctionDefinition { header, body_start } =
            parse("num add(num a, num b) { return a + b; }")
        else {
            panic!("not a function header");
        };

        assert_eq!(header.name, "add");
        assert_eq!(header.return_kind, ReturnKind::Value(Kind::Number));
        assert_eq!(header.params,
                   vec![Param { kind: Kind::Number,
                                name: "a".to_string(), },
                        Param { kind: Kind::Number,
                                name: "b".to_string(), }]);
        assert_eq!(body_start, " return a + b; }");
    }

    #[test]
    fn void_function_without_params() {
        let Statement::FunctionDefinition { header, body_start } = parse("void greet() {") else {
            panic!("not a function header");
        };

        assert_eq!(header.return_kind, ReturnKind::Void);
        assert!(header.params.is_empty());
        assert!(body_start.is_empty());
    }

    #[test]
    fn declaration_forms() {
        assert!(matches!(parse("num total ~> add(1, 2);"),
                         Statement::CallDeclaration { kind: Kind::Number, .. }));
        assert!(matches!(parse("num total ~> add(1, 2) * 2;"),
                         Statement::Declaration { kind: Kind::Number, .. }));

        let Statement::Declaration { kind, name, value } = parse("str name ~> \"Cat\" + \"!\";") else {
            panic!("not a declaration");
        };
        assert_eq!(kind, Kind::Text);
        assert_eq!(name, "name");
        assert_eq!(value.source, "\"Cat\" + \"!\"");
        assert_eq!(value.tokens.len(), 3);
    }

    #[test]
    fn missing_semicolon_is_unknown() {
        assert_eq!(parse("num x ~> 1"), Statement::Unknown);
        assert_eq!(parse("purr ~> x"), Statement::Unknown);
        assert_eq!(parse("ping()"), Statement::Unknown);
    }

    #[test]
    fn call_and_conditionals() {
        assert!(matches!(parse("greet(\"Tom\");"), Statement::Call(_)));

        let Statement::If { condition, .. } = parse("if (x >= 3) {") else {
            panic!("not an if header");
        };
        assert_eq!(condition.source, "x >= 3");

        assert!(matches!(parse("else {"), Statement::Else { .. }));
        assert_eq!(parse("if (x) purr ~> x;"), Statement::Unknown);
    }

    #[test]
    fn one_statement_per_line() {
        assert_eq!(parse("purr ~> \"a\"; purr ~> \"b\";"), Statement::Unknown);
        assert_eq!(parse("num x ~> 1; num y ~> 2;"), Statement::Unknown);
        assert_eq!(parse("return 1; purr ~> x;"), Statement::Unknown);
        assert!(matches!(parse("purr ~> \"a;b\";"), Statement::Print(_)));
    }

    #[test]
    fn return_forms() {
        assert_eq!(parse("return;"), Statement::Return(None));

        let Statement::Return(Some(value)) = parse("return a + b;") else {
            panic!("not a return");
        };
        assert_eq!(value.source, "a + b");
    }

    #[test]
    fn invalid_characters_fail_to_tokenize() {
        assert!(parse_statement(&SourceLine::new(1, "num x ~> 1 # 2;")).is_err());
    }
}
