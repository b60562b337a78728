use crate::{
    ast::Expression,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, ExecResult},
        lexer::{Spanned, Token},
        parser::utils::{is_single_call, split_top_level},
        value::core::parse_bool,
    },
};

/// The operand that stands for a line break in text expressions.
pub const LINE_BREAK: &str = "endl";

impl Context<'_> {
    /// Evaluates an expression in text-interpolation mode.
    ///
    /// The expression is split on every `+` outside parentheses and quoted
    /// text. Each piece contributes, left to right:
    /// - a quoted literal: its content;
    /// - `endl`: a line break;
    /// - a variable (text, then number, then boolean): its rendered value;
    /// - `true`/`false`: itself;
    /// - a single call `name(args)`: the rendered result;
    /// - anything else: its source text with every identifier replaced by
    ///   the variable's value.
    ///
    /// Undefined variables and functions are reported and contribute nothing.
    pub(crate) fn eval_text(&mut self, expression: &Expression, env: &Environment) -> ExecResult<String> {
        let mut output = String::new();

        for piece in split_top_level(&expression.tokens, &Token::Plus) {
            match piece {
                [] => {},
                [(Token::Text(text), _)] => output.push_str(text),
                [(Token::Identifier(name), _)] => {
                    if let Some(text) = self.resolve_text(name, env, expression.line) {
                        output.push_str(&text);
                    }
                },
                call if is_single_call(call) => {
                    if let Some(value) = self.eval_call_tokens(call, env, expression.line)? {
                        output.push_str(&value.to_string());
                    }
                },
                _ => self.substitute_piece(piece, expression, env, &mut output),
            }
        }

        Ok(output)
    }

    /// Renders a bare identifier piece.
    fn resolve_text(&mut self, name: &str, env: &Environment, line: usize) -> Option<String> {
        if name == LINE_BREAK {
            return Some("\n".to_string());
        }
        if let Some(value) = env.lookup(name) {
            return Some(value.to_string());
        }
        if let Some(b) = parse_bool(name) {
            return Some(b.to_string());
        }

        self.report(RuntimeError::UnknownVariable { name: name.to_string(),
                                                    line });
        None
    }

    /// Copies a piece's source text, substituting variables.
    ///
    /// Undefined names are reported and replaced by the empty string; the
    /// rest of the piece is still emitted.
    fn substitute_piece(&mut self,
                        piece: &[Spanned],
                        expression: &Expression,
                        env: &Environment,
                        output: &mut String) {
        let source = expression.source.as_str();
        let mut cursor = piece.first().map_or(0, |(_, span)| span.start);

        for (token, span) in piece {
            output.push_str(&source[cursor..span.start]);
            match token {
                Token::Identifier(name) if name == LINE_BREAK => output.push('\n'),
                Token::Identifier(name) => {
                    if let Some(value) = env.lookup(name) {
                        output.push_str(&value.to_string());
                    } else {
                        self.report(RuntimeError::UnknownVariable { name: name.clone(),
                                                                    line: expression.line, });
                    }
                },
                Token::Text(text) => output.push_str(text),
                _ => output.push_str(&source[span.clone()]),
            }
            cursor = span.end;
        }
    }
}
