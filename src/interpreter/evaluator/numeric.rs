use crate::{
    ast::{BinaryOperator, Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, ExecResult},
        value::core::parse_bool,
    },
    util::num::parse_number,
};

impl Context<'_> {
    /// Evaluates a numeric expression tree.
    ///
    /// - Variables resolve through the number map, then the boolean map
    ///   (`1`/`0`), then the text map (parsed, else `0`). The literals
    ///   `true`/`false` are `1`/`0`. Undefined names are reported and evaluate
    ///   to `0`.
    /// - Calls are executed and their result converted to a number; an
    ///   undefined function is reported and evaluates to `0`.
    /// - Text literals are parsed as numbers, falling back to `0`.
    /// - Division by zero follows IEEE-754 (`inf`, `-inf` or `nan`).
    pub(crate) fn eval_number(&mut self, expr: &Expr, env: &Environment, line: usize) -> ExecResult<f64> {
        match expr {
            Expr::Number(n) => Ok(*n),
            Expr::Text(text) => Ok(parse_number(text).unwrap_or(0.0)),
            Expr::Variable(name) => Ok(self.resolve_number(name, env, line)),
            Expr::UnaryOp { op: UnaryOperator::Negate,
                            expr, } => Ok(-self.eval_number(expr, env, line)?),
            Expr::BinaryOp { left, op, right } => {
                let left = self.eval_number(left, env, line)?;
                let right = self.eval_number(right, env, line)?;
                Ok(eval_binary(*op, left, right))
            },
            Expr::FunctionCall { name, arguments } => {
                let value = self.call_function(name, arguments, env, line)?;
                Ok(value.map_or(0.0, |v| v.to_number()))
            },
        }
    }

    /// Resolves a variable for numeric evaluation.
    fn resolve_number(&mut self, name: &str, env: &Environment, line: usize) -> f64 {
        if let Some(n) = env.number.get(name) {
            return *n;
        }
        if let Some(b) = env.boolean.get(name) {
            return f64::from(u8::from(*b));
        }
        if let Some(text) = env.text.get(name) {
            return parse_number(text).unwrap_or(0.0);
        }
        if let Some(b) = parse_bool(name) {
            return f64::from(u8::from(b));
        }

        self.report(RuntimeError::UnknownVariable { name: name.to_string(),
                                                    line });
        0.0
    }
}

/// Applies an arithmetic operator.
///
/// # Example
/// ```
/// use catlang::{ast::BinaryOperator, interpreter::evaluator::numeric::eval_binary};
///
/// assert_eq!(eval_binary(BinaryOperator::Sub, 7.0, 2.0), 5.0);
/// assert!(eval_binary(BinaryOperator::Div, 1.0, 0.0).is_infinite());
/// ```
#[must_use]
pub fn eval_binary(op: BinaryOperator, left: f64, right: f64) -> f64 {
    match op {
        BinaryOperator::Add => left + right,
        BinaryOperator::Sub => left - right,
        BinaryOperator::Mul => left * right,
        BinaryOperator::Div => left / right,
    }
}
