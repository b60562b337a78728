use crate::{
    ast::{ComparisonOperator, Expression},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, ExecResult},
        lexer::{Spanned, Token},
        parser::{
            binary::token_to_comparison_operator,
            core::parse_complete,
            utils::find_top_level,
        },
        value::core::parse_bool,
    },
};

impl Context<'_> {
    /// Evaluates a condition.
    ///
    /// Three forms are recognized, tried in order:
    /// 1. text equality: `"a" == "b"` (or `!=`), where each side is a quoted
    ///    literal or a text-only variable;
    /// 2. a comparison (`==`, `!=`, `<`, `>`, `<=`, `>=`) between two numeric
    ///    expressions;
    /// 3. a bare boolean variable, or a `true`/`false` literal.
    ///
    /// Anything else is reported as an invalid condition and is `false`.
    pub(crate) fn eval_condition(&mut self, condition: &Expression, env: &Environment) -> ExecResult<bool> {
        let line = condition.line;
        let tokens = condition.tokens.as_slice();

        if let Some(index) = find_top_level(tokens, Token::is_comparison)
           && let Some(op) = token_to_comparison_operator(&tokens[index].0)
        {
            let (left, right) = (&tokens[..index], &tokens[index + 1..]);

            if matches!(op, ComparisonOperator::Equal | ComparisonOperator::NotEqual)
               && let (Some(l), Some(r)) = (text_operand(left, env), text_operand(right, env))
            {
                return Ok(op.compare(l, r));
            }

            if let (Ok(l), Ok(r)) = (parse_complete(left, line), parse_complete(right, line)) {
                let l = self.eval_number(&l, env, line)?;
                let r = self.eval_number(&r, env, line)?;
                return Ok(op.compare(&l, &r));
            }
        } else if let [(Token::Identifier(name), _)] = tokens {
            if let Some(b) = env.boolean.get(name) {
                return Ok(*b);
            }
            if let Some(b) = parse_bool(name) {
                return Ok(b);
            }
        }

        self.report(RuntimeError::InvalidCondition { condition: condition.source.clone(),
                                                     line });
        Ok(false)
    }

    /// Evaluates the right-hand side of a `bool` declaration or return.
    ///
    /// Accepts `true`/`false` in any letter case, a boolean variable, or any
    /// expression containing a comparison operator (evaluated as a
    /// condition).
    ///
    /// # Returns
    /// `None` when the expression is none of these.
    pub(crate) fn eval_boolean(&mut self, value: &Expression, env: &Environment) -> ExecResult<Option<bool>> {
        if let [(Token::Identifier(name), _)] = value.tokens.as_slice() {
            return Ok(parse_bool(name).or_else(|| env.boolean.get(name).copied()));
        }
        if find_top_level(&value.tokens, Token::is_comparison).is_some() {
            return self.eval_condition(value, env).map(Some);
        }
        Ok(None)
    }
}

/// Returns the text of a condition operand if it is textual.
///
/// An operand is textual when it is a single quoted literal, or a single
/// name bound as a text variable and not as a number variable.
fn text_operand<'t>(tokens: &'t [Spanned], env: &'t Environment) -> Option<&'t str> {
    match tokens {
        [(Token::Text(text), _)] => Some(text.as_str()),
        [(Token::Identifier(name), _)] if !env.number.contains_key(name) => {
            env.text.get(name).map(String::as_str)
        },
        _ => None,
    }
}
