use crate::{
    ast::{Expr, Expression, Statement},
    error::RuntimeError,
    interpreter::{
        environment::{Environment, Function},
        evaluator::core::{Context, ExecResult, Flow},
        parser::{block::collect_block, core::parse_complete, statement::parse_statement},
        source::{LineCursor, SourceLine},
        value::{core::Value, kind::Kind},
    },
    util::num::parse_number,
};

impl Context<'_> {
    /// Executes `purr ~> expr;`.
    ///
    /// The expression is evaluated in text-interpolation mode and written
    /// as-is; a line break is only produced by an explicit `endl`.
    pub(crate) fn print(&mut self, expression: &Expression, env: &Environment) -> ExecResult<()> {
        let text = self.eval_text(expression, env)?;
        self.write_output(&text)
    }

    /// Executes `kind name ~> value;`.
    ///
    /// - `str` initializers use text-interpolation mode.
    /// - `num` initializers use numeric mode; a malformed expression leaves
    ///   the variable unbound, as does a lone quoted literal that is not a
    ///   number.
    /// - `bool` initializers accept a literal, a boolean variable or a
    ///   comparison.
    pub(crate) fn declare(&mut self,
                          kind: Kind,
                          name: &str,
                          value: &Expression,
                          env: &mut Environment)
                          -> ExecResult<()> {
        let line = value.line;
        let value = match kind {
            Kind::Text => Some(Value::Text(self.eval_text(value, env)?)),
            Kind::Number => match parse_complete(&value.tokens, line) {
                Ok(Expr::Text(text)) if parse_number(&text).is_none() => {
                    self.report(RuntimeError::InvalidNumber { name: name.to_string(),
                                                              line });
                    None
                },
                Ok(expr) => Some(Value::Number(self.eval_number(&expr, env, line)?)),
                Err(e) => {
                    tracing::debug!(%e, "malformed numeric initializer");
                    self.report(RuntimeError::InvalidNumber { name: name.to_string(),
                                                              line });
                    None
                },
            },
            Kind::Boolean => match self.eval_boolean(value, env)? {
                Some(b) => Some(Value::Boolean(b)),
                None => {
                    self.report(RuntimeError::InvalidBoolean { name: name.to_string(),
                                                               line });
                    None
                },
            },
        };

        if let Some(value) = value {
            env.bind(name, value);
        }
        Ok(())
    }

    /// Executes `kind name ~> callee(args);`.
    ///
    /// The result must have the declared kind; otherwise a type mismatch is
    /// reported and the variable stays unbound.
    pub(crate) fn declare_from_call(&mut self,
                                    kind: Kind,
                                    name: &str,
                                    call: &Expression,
                                    env: &mut Environment)
                                    -> ExecResult<()> {
        let Some(value) = self.eval_call(call, env)? else {
            return Ok(());
        };

        if value.kind() == Some(kind) {
            env.bind(name, value);
        } else {
            self.report(RuntimeError::TypeMismatch { name:     name.to_string(),
                                                     expected: kind.keyword(),
                                                     found:    value.kind_name(),
                                                     line:     call.line, });
        }
        Ok(())
    }

    /// Executes `name(args);` for its side effects, discarding the result.
    pub(crate) fn call_statement(&mut self, call: &Expression, env: &Environment) -> ExecResult<()> {
        self.eval_call(call, env)?;
        Ok(())
    }

    /// Executes an `if` statement with its optional `else` block.
    ///
    /// The condition is evaluated first, then the true block is collected.
    /// If the next line is an `else` header, the false block is collected as
    /// well. Exactly one block runs, in the current environment: branches
    /// share scope with the code around them.
    pub(crate) fn execute_if(&mut self,
                             line: &SourceLine,
                             condition: &Expression,
                             body_start: &str,
                             cursor: &mut LineCursor,
                             env: &mut Environment,
                             frame: Option<&Function>)
                             -> ExecResult<Flow> {
        let holds = self.eval_condition(condition, env)?;
        let then_block = collect_block(line, body_start, "if", cursor)?;

        let next = cursor.peek_line().map(parse_statement);
        let else_block = match next {
            Some(Ok(Statement::Else { body_start })) => {
                let Some(else_line) = cursor.next_line() else {
                    return Ok(Flow::Continue);
                };
                Some(collect_block(&else_line, &body_start, "else", cursor)?)
            },
            _ => None,
        };

        tracing::trace!(line = line.number, holds, has_else = else_block.is_some(), "if");

        let block = if holds { Some(then_block) } else { else_block };
        match block {
            Some(block) => self.execute_lines(&mut LineCursor::new(&block), env, frame),
            None => Ok(Flow::Continue),
        }
    }
}
